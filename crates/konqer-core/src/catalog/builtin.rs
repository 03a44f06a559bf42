//! Builtin production catalog definition

use super::{ServiceDescriptor, ServiceKind};

fn descriptor(slug: &str, name: &str, kind: ServiceKind) -> ServiceDescriptor {
    ServiceDescriptor {
        slug: slug.to_string(),
        name: name.to_string(),
        kind,
    }
}

/// The static Konqer service line-up, in launch order
pub(super) fn descriptors() -> Vec<ServiceDescriptor> {
    vec![
        descriptor(
            "cold-dm-personalizer",
            "Cold DM Personalizer",
            ServiceKind::Outbound,
        ),
        descriptor(
            "outbound-battlecards-ai",
            "Outbound Battlecards AI",
            ServiceKind::Enablement,
        ),
        descriptor(
            "sales-objection-crusher",
            "Sales Objection Crusher",
            ServiceKind::Enablement,
        ),
        descriptor(
            "community-finder-pro",
            "Community Finder Pro",
            ServiceKind::Outbound,
        ),
        descriptor(
            "linkedin-carousel-forge",
            "LinkedIn Carousel Forge",
            ServiceKind::Content,
        ),
        descriptor(
            "ai-cold-email-writer",
            "AI Cold Email Writer",
            ServiceKind::Outbound,
        ),
        descriptor(
            "startup-pitch-deck-builder",
            "Startup Pitch Deck Builder",
            ServiceKind::Enablement,
        ),
        descriptor(
            "ai-whitepaper-generator",
            "AI Whitepaper Generator",
            ServiceKind::Content,
        ),
        descriptor("vc-deck-heatmap", "VC Deck Heatmap", ServiceKind::Enablement),
        descriptor(
            "webinar-demand-scanner",
            "Webinar Demand Scanner",
            ServiceKind::Outbound,
        ),
        descriptor("email-warmranker", "Email WarmRanker", ServiceKind::Outbound),
        descriptor(
            "calendar-no-show-shield",
            "Calendar No-Show Shield",
            ServiceKind::Enablement,
        ),
    ]
}
