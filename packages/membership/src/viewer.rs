use serde::{Deserialize, Serialize};

/// The identity a render call is made for. Resolved by the host and passed
/// in explicitly; this crate never consults ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viewer {
    Anonymous,
    Authenticated { id: u64, display_name: String },
}

impl Viewer {
    pub fn authenticated(id: u64, display_name: impl Into<String>) -> Self {
        Viewer::Authenticated {
            id,
            display_name: display_name.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::Authenticated { .. })
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            Viewer::Authenticated { display_name, .. } => Some(display_name),
            Viewer::Anonymous => None,
        }
    }
}
