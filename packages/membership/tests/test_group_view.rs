//! End-to-end scenarios: build the group view and render the full page,
//! asserting on page text and markup the way a site test would.

use trellis_common::{PassthroughTranslator, PathUrlBuilder};
use trellis_fragment::Fragment;
use trellis_membership::{
    Group, GroupViewBuilder, InMemoryMemberships, Membership, MembershipState, Viewer,
};
use trellis_renderer_html::{render_page, RenderOptions};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn render_group_page(
    memberships: &InMemoryMemberships,
    group: &Group,
    viewer: &Viewer,
) -> anyhow::Result<(String, String)> {
    let urls = PathUrlBuilder;
    let translator = PassthroughTranslator;
    let builder = GroupViewBuilder::new(memberships, &urls, &translator);

    let mut build: Vec<Fragment> = Vec::new();
    builder.build_full(&mut build, group, viewer)?;

    let page_text: String = build.iter().map(|f| f.text_content()).collect();
    let options = RenderOptions {
        title: Some(group.label.clone()),
        ..Default::default()
    };
    let html = render_page(&build, options)?;
    Ok((page_text, html))
}

#[test]
fn test_anonymous_sees_login_prompt() -> anyhow::Result<()> {
    init_tracing();
    let memberships = InMemoryMemberships::new();
    let group = Group::new(1, "Test Group");

    let (page_text, html) = render_group_page(&memberships, &group, &Viewer::Anonymous)?;

    assert!(page_text.contains("Please log in to subscribe to this group."));
    assert!(!html.contains("data-og-membership-status"));
    assert!(html.contains("<h1>Test Group</h1>"));
    assert!(html.contains("href=\"/user/login?destination=/group/canonical/1\""));
    Ok(())
}

#[test]
fn test_authenticated_non_member_sees_subscribe_invitation() -> anyhow::Result<()> {
    init_tracing();
    let memberships = InMemoryMemberships::new();
    let group = Group::new(1, "Test Group");
    let viewer = Viewer::authenticated(42, "Jane");

    let (page_text, html) = render_group_page(&memberships, &group, &viewer)?;

    assert!(page_text.contains("if you would like to subscribe to this group called"));
    assert!(html.contains("data-og-membership-status=\"not_member\""));
    assert!(html.contains("href=\"/group/subscribe/1/default\""));
    Ok(())
}

#[test]
fn test_authenticated_pending_member() -> anyhow::Result<()> {
    init_tracing();
    let mut memberships = InMemoryMemberships::new();
    memberships.add(1, 42, Membership::new(MembershipState::Pending));
    let group = Group::new(1, "Pending Group");
    let viewer = Viewer::authenticated(42, "Jane");

    let (page_text, html) = render_group_page(&memberships, &group, &viewer)?;

    assert!(page_text.contains("Your subscription request is pending approval."));
    assert!(html.contains("data-og-membership-status=\"pending\""));
    Ok(())
}

#[test]
fn test_authenticated_active_member() -> anyhow::Result<()> {
    init_tracing();
    let mut memberships = InMemoryMemberships::new();
    memberships.add(1, 42, Membership::new(MembershipState::Active));
    let group = Group::new(1, "Active Group");
    let viewer = Viewer::authenticated(42, "Jane");

    let (page_text, html) = render_group_page(&memberships, &group, &viewer)?;

    assert!(page_text.contains("You are already a member of this group."));
    assert!(html.contains("data-og-membership-status=\"already_in_group\""));
    Ok(())
}

#[test]
fn test_authenticated_blocked_member() -> anyhow::Result<()> {
    init_tracing();
    let mut memberships = InMemoryMemberships::new();
    memberships.add(1, 42, Membership::new(MembershipState::Blocked));
    let group = Group::new(1, "Blocked Group");
    let viewer = Viewer::authenticated(42, "Jane");

    let (page_text, html) = render_group_page(&memberships, &group, &viewer)?;

    assert!(page_text.contains("You cannot subscribe to this group."));
    assert!(html.contains("data-og-membership-status=\"blocked\""));
    Ok(())
}

#[test]
fn test_unrecognized_membership_state() -> anyhow::Result<()> {
    init_tracing();
    let mut memberships = InMemoryMemberships::new();
    memberships.add(
        1,
        42,
        Membership::new(MembershipState::Other("archived".to_string())),
    );
    let group = Group::new(1, "Odd Group");
    let viewer = Viewer::authenticated(42, "Jane");

    let (page_text, html) = render_group_page(&memberships, &group, &viewer)?;

    assert!(page_text.contains("Your membership status for this group is: unknown"));
    assert!(html.contains("data-og-membership-status=\"unknown\""));
    Ok(())
}

#[test]
fn test_view_appends_to_existing_build() -> anyhow::Result<()> {
    init_tracing();
    let memberships = InMemoryMemberships::new();
    let urls = PathUrlBuilder;
    let translator = PassthroughTranslator;
    let builder = GroupViewBuilder::new(&memberships, &urls, &translator);
    let group = Group::new(1, "Test Group");

    // The caller's fragments stay in place, the view lands after them.
    let mut build = vec![
        Fragment::element("article").with_child(Fragment::text("Group body copy.")),
    ];
    builder.build_full(&mut build, &group, &Viewer::Anonymous)?;

    let html = render_page(&build, RenderOptions::default())?;
    let body_pos = html.find("Group body copy.").expect("body missing");
    let prompt_pos = html.find("log in").expect("prompt missing");
    assert!(body_pos < prompt_pos);
    Ok(())
}
