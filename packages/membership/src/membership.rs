use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// State carried on a membership record, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipState {
    Pending,
    Active,
    Blocked,
    /// Any state token this crate does not recognize. Kept verbatim so the
    /// host can still get at it.
    Other(String),
}

/// A record linking a viewer to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub state: MembershipState,
}

impl Membership {
    pub fn new(state: MembershipState) -> Self {
        Self { state }
    }
}

/// Machine-readable status attached to the rendered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    NotMember,
    Pending,
    AlreadyInGroup,
    Blocked,
    Unknown,
}

impl MembershipStatus {
    /// Map a record state to its status. Total: the default arm catches
    /// every state this crate does not recognize.
    pub fn from_state(state: &MembershipState) -> Self {
        match state {
            MembershipState::Pending => MembershipStatus::Pending,
            MembershipState::Active => MembershipStatus::AlreadyInGroup,
            MembershipState::Blocked => MembershipStatus::Blocked,
            _ => MembershipStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::NotMember => "not_member",
            MembershipStatus::Pending => "pending",
            MembershipStatus::AlreadyInGroup => "already_in_group",
            MembershipStatus::Blocked => "blocked",
            MembershipStatus::Unknown => "unknown",
        }
    }
}

/// Membership lookup abstraction; the host membership service provides the
/// real one. A read must not mutate records.
pub trait MembershipLookup {
    /// The viewer's membership record for the group, any state. `None`
    /// means the viewer never subscribed.
    fn membership(&self, group_id: u64, viewer_id: u64) -> Option<Membership>;
}

/// In-memory lookup for testing.
pub struct InMemoryMemberships {
    records: HashMap<(u64, u64), Membership>,
}

impl InMemoryMemberships {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn add(&mut self, group_id: u64, viewer_id: u64, membership: Membership) {
        self.records.insert((group_id, viewer_id), membership);
    }
}

impl Default for InMemoryMemberships {
    fn default() -> Self {
        Self::new()
    }
}

impl MembershipLookup for InMemoryMemberships {
    fn membership(&self, group_id: u64, viewer_id: u64) -> Option<Membership> {
        self.records.get(&(group_id, viewer_id)).cloned()
    }
}
