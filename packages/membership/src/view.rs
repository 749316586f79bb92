//! The group membership view: one render call, one outcome, one container
//! fragment appended to the caller-owned build.

use crate::group::Group;
use crate::membership::{MembershipLookup, MembershipStatus};
use crate::viewer::Viewer;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trellis_common::{HostResult, Translator, UrlBuilder};
use trellis_fragment::Fragment;

/// The selected branch of the membership view for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewOutcome {
    AnonymousPromptLogin,
    SubscribeInvitation,
    PendingApproval,
    AlreadyMember,
    Blocked,
    UnknownStatus,
}

/// Builds the full view of a group for one viewer. Host capabilities are
/// injected explicitly; the builder holds no state of its own and every
/// call recomputes the outcome.
pub struct GroupViewBuilder<'a> {
    memberships: &'a dyn MembershipLookup,
    urls: &'a dyn UrlBuilder,
    translator: &'a dyn Translator,
}

impl<'a> GroupViewBuilder<'a> {
    pub fn new(
        memberships: &'a dyn MembershipLookup,
        urls: &'a dyn UrlBuilder,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            memberships,
            urls,
            translator,
        }
    }

    /// Select the outcome for one (viewer, group) pair. Pure: no record is
    /// touched and nothing is rendered.
    pub fn select_outcome(&self, group: &Group, viewer: &Viewer) -> ViewOutcome {
        match viewer {
            Viewer::Anonymous => ViewOutcome::AnonymousPromptLogin,
            Viewer::Authenticated { id, .. } => {
                outcome_for(self.membership_status(group, *id))
            }
        }
    }

    /// Build the full view, appending exactly one container fragment to the
    /// existing build. URL generation failures propagate unchanged.
    pub fn build_full(
        &self,
        build: &mut Vec<Fragment>,
        group: &Group,
        viewer: &Viewer,
    ) -> HostResult<ViewOutcome> {
        let (outcome, container) = match viewer {
            Viewer::Anonymous => (
                ViewOutcome::AnonymousPromptLogin,
                self.build_login_prompt(group)?,
            ),
            Viewer::Authenticated { id, display_name } => {
                let status = self.membership_status(group, *id);
                let container = match status {
                    MembershipStatus::NotMember => {
                        self.build_subscribe_invitation(group, display_name)?
                    }
                    status => self.build_status_notice(status),
                };
                (outcome_for(status), container)
            }
        };

        debug!(group_id = group.id, outcome = ?outcome, "built group membership view");

        build.push(container);
        Ok(outcome)
    }

    fn membership_status(&self, group: &Group, viewer_id: u64) -> MembershipStatus {
        match self.memberships.membership(group.id, viewer_id) {
            None => MembershipStatus::NotMember,
            Some(membership) => MembershipStatus::from_state(&membership.state),
        }
    }

    /// Anonymous branch: group title plus a login invitation whose link
    /// returns the viewer here after authenticating. Carries no status
    /// attribute. Marked per-view like the other branches: the login link
    /// embeds a return URL, so the container is not shareable either.
    fn build_login_prompt(&self, group: &Group) -> HostResult<Fragment> {
        let destination = group.canonical_url(self.urls)?;
        let login_url = self
            .urls
            .url("user.login", &[], &[("destination", &destination)])?;

        let login_link = Fragment::element("a")
            .with_attr("href", login_url)
            .with_child(Fragment::text(self.translator.translate("log in", &[])));

        let message = self.link_sentence(
            "Please {login_link} to subscribe to this group.",
            &[],
            "login_link",
            login_link,
        );

        Ok(Fragment::element("div")
            .with_attr("class", "group-membership-view")
            .uncacheable()
            .with_child(
                Fragment::element("h1").with_child(Fragment::text(&group.label)),
            )
            .with_child(message))
    }

    /// Not-a-member branch: personal subscribe invitation with a link to
    /// the subscribe route for this group and the stock membership type.
    fn build_subscribe_invitation(
        &self,
        group: &Group,
        display_name: &str,
    ) -> HostResult<Fragment> {
        let subscribe_url = self.urls.url(
            "group.subscribe",
            &[
                ("group", &group.id.to_string()),
                ("membership_type", "default"),
            ],
            &[],
        )?;

        let subscribe_link = Fragment::element("a")
            .with_attr("href", subscribe_url)
            .with_child(Fragment::text(self.translator.translate("click here", &[])));

        let message = self.link_sentence(
            "Hi {name}, {subscribe_link} if you would like to subscribe to this group called {label}.",
            &[("name", display_name), ("label", &group.label)],
            "subscribe_link",
            subscribe_link,
        );

        Ok(self.status_container(MembershipStatus::NotMember, message))
    }

    /// Existing-membership branch: one fixed message per recognized state,
    /// and an interpolated fallback for everything else. The default arm
    /// keeps the mapping total; an unrecognized state is not an error.
    fn build_status_notice(&self, status: MembershipStatus) -> Fragment {
        let message = match status {
            MembershipStatus::Pending => self
                .translator
                .translate("Your subscription request is pending approval.", &[]),
            MembershipStatus::AlreadyInGroup => self
                .translator
                .translate("You are already a member of this group.", &[]),
            MembershipStatus::Blocked => self
                .translator
                .translate("You cannot subscribe to this group.", &[]),
            _ => self.translator.translate(
                "Your membership status for this group is: {status}",
                &[("status", status.as_str())],
            ),
        };

        self.status_container(
            status,
            Fragment::element("p").with_child(Fragment::text(message)),
        )
    }

    fn status_container(&self, status: MembershipStatus, message: Fragment) -> Fragment {
        Fragment::element("div")
            .with_attr("class", "group-membership-view")
            .with_attr("data-og-membership-status", status.as_str())
            .uncacheable()
            .with_child(message)
    }

    /// Translate a whole sentence, then splice a link fragment in at its
    /// placeholder. Keeps sentences intact for localization while links
    /// stay structural instead of string-spliced markup.
    fn link_sentence(
        &self,
        template: &str,
        args: &[(&str, &str)],
        link_placeholder: &str,
        link: Fragment,
    ) -> Fragment {
        let text = self.translator.translate(template, args);
        let marker = format!("{{{}}}", link_placeholder);

        let paragraph = Fragment::element("p");
        match text.split_once(&marker) {
            Some((before, after)) => paragraph
                .with_child(Fragment::text(before))
                .with_child(link)
                .with_child(Fragment::text(after)),
            None => paragraph.with_child(Fragment::text(text)),
        }
    }
}

fn outcome_for(status: MembershipStatus) -> ViewOutcome {
    match status {
        MembershipStatus::NotMember => ViewOutcome::SubscribeInvitation,
        MembershipStatus::Pending => ViewOutcome::PendingApproval,
        MembershipStatus::AlreadyInGroup => ViewOutcome::AlreadyMember,
        MembershipStatus::Blocked => ViewOutcome::Blocked,
        MembershipStatus::Unknown => ViewOutcome::UnknownStatus,
    }
}
