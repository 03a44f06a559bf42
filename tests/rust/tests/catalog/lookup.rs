//! Catalog construction and lookup behavior

use konqer_core::{CatalogError, ServiceCatalog, ServiceKind};
use pretty_assertions::assert_eq;
use tests::fixtures;

#[test]
fn builtin_catalog_has_twelve_unique_services() {
    let catalog = ServiceCatalog::builtin();
    assert_eq!(catalog.len(), 12);

    let mut slugs: Vec<_> = catalog.list_all().iter().map(|s| s.slug.clone()).collect();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), 12, "slugs must be pairwise unique");
}

#[test]
fn builtin_catalog_starts_with_cold_dm_personalizer() {
    let catalog = ServiceCatalog::builtin();
    let first = &catalog.list_all()[0];
    assert_eq!(first.slug, "cold-dm-personalizer");
    assert_eq!(first.name, "Cold DM Personalizer");
    assert_eq!(first.kind, ServiceKind::Outbound);
}

#[test]
fn repeated_listing_yields_identical_results() {
    let catalog = fixtures::test_catalog();
    let first: Vec<_> = catalog.list_all().to_vec();
    let second: Vec<_> = catalog.list_all().to_vec();
    assert_eq!(first, second);
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let catalog = fixtures::test_catalog();
    assert!(catalog.find_by_slug("alpha-outreach").is_some());
    assert!(catalog.find_by_slug("Alpha-Outreach").is_none());
    assert!(catalog.find_by_slug("alpha").is_none());
}

#[test]
fn duplicate_slugs_are_rejected_at_construction() {
    let result = ServiceCatalog::new(vec![
        fixtures::descriptor("dup", "First", ServiceKind::Outbound),
        fixtures::descriptor("dup", "Second", ServiceKind::Content),
    ]);
    assert!(matches!(result, Err(CatalogError::DuplicateSlug(s)) if s == "dup"));
}

#[test]
fn descriptor_wire_shape_uses_type_field() {
    let catalog = ServiceCatalog::builtin();
    let descriptor = catalog.find_by_slug("cold-dm-personalizer").unwrap();
    let json = serde_json::to_value(descriptor).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "slug": "cold-dm-personalizer",
            "name": "Cold DM Personalizer",
            "type": "outbound"
        })
    );
}

#[test]
fn descriptor_round_trips_through_json() {
    let descriptor = fixtures::descriptor("beta-briefs", "Beta Briefs", ServiceKind::Enablement);
    let json = serde_json::to_string(&descriptor).unwrap();
    let back: konqer_core::ServiceDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, descriptor);
}
