use serde::{Deserialize, Serialize};
use trellis_common::{HostResult, UrlBuilder};

/// A group entity as handed over by the host: identity plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub label: String,
}

impl Group {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Canonical URL of the group page, through the host router.
    pub fn canonical_url(&self, urls: &dyn UrlBuilder) -> HostResult<String> {
        urls.url("group.canonical", &[("group", &self.id.to_string())], &[])
    }
}
