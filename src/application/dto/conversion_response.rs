use crate::conversion::domain::DependencyRecord;

/// ConversionResponse - the enriched table produced by the conversion use case
#[derive(Debug, Clone)]
pub struct ConversionResponse {
    /// One record per top-level lockfile package, in lockfile order
    pub records: Vec<DependencyRecord>,
    /// Number of registry lookups that succeeded
    pub lookups_succeeded: usize,
    /// Number of registry lookups that failed
    pub lookups_failed: usize,
}

impl ConversionResponse {
    pub fn new(records: Vec<DependencyRecord>, lookups_succeeded: usize, lookups_failed: usize) -> Self {
        Self {
            records,
            lookups_succeeded,
            lookups_failed,
        }
    }
}
