pub mod group;
pub mod membership;
pub mod view;
pub mod viewer;


pub use group::Group;
pub use membership::{
    InMemoryMemberships, Membership, MembershipLookup, MembershipState, MembershipStatus,
};
pub use view::{GroupViewBuilder, ViewOutcome};
pub use viewer::Viewer;
