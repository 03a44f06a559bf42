//! Per-user service entitlements
//!
//! Owned by the external entitlement gateway (`GET /user/services`, bearer
//! auth) and consumed by the dashboard. The catalog API never stores or
//! validates entitlements; the type lives here so the dashboard contract is
//! pinned down in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unlocked service for one user
///
/// `service` is a slug reference into the catalog. The gateway returns an
/// ordered sequence of these, oldest unlock first. Callers treat any non-2xx
/// response as a single generic failure today; distinguishing 401
/// (re-authenticate) from 5xx (retry) is an open question at that boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserServiceEntitlement {
    pub service: String,
    pub unlocked_at: DateTime<Utc>,
}
