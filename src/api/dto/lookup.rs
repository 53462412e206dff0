//! Result type for analytics lookups.

use serde::Serialize;

use crate::domain::entities::LinkAnalytics;

/// One decoded analytics row, tied to the link it was looked up for.
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    /// The resolved short link the counters belong to.
    pub link: String,

    #[serde(flatten)]
    pub analytics: LinkAnalytics,
}
