//! Pure view derivation for the tier panel.
//!
//! `render` maps panel state to a framework-neutral view tree. Interactive
//! elements carry the `Event` the embedding UI should dispatch when they are
//! activated; nothing here performs I/O.

use crate::panel::{Event, Remote, TierPanel};
use crate::types::Tier;

/// Panel heading.
pub const PANEL_TITLE: &str = "Tier Details";

/// Label of the header action that opens the create dialog.
pub const ADD_TIER_LABEL: &str = "Add Tier";

/// Heading shown above a tier's repository entries.
pub const REPO_SECTION_HEADING: &str = "List of Repos and details:";

/// Root of the rendered panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: &'static str,
    /// Header action: opens the create dialog.
    pub add_tier: HeaderAction,
    pub body: PanelBody,
    /// Always present; visually open only while `is_open`.
    pub dialog: DialogView,
}

/// The persistent header action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAction {
    pub label: &'static str,
    pub on_activate: Event,
}

/// Main content area of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Initial load in flight.
    Loading,
    /// Initial load failed.
    Failed { message: String },
    /// One card per tier, in server order.
    Tiers(Vec<TierCard>),
}

/// A single tier card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCard {
    pub id: String,
    /// `"{minAmount}$ a month"`.
    pub amount_label: String,
    pub title: String,
    pub description: String,
    /// Dispatched when the delete control is activated.
    pub on_delete: Event,
    /// Present only when the tier has at least one repository.
    pub repositories: Option<RepoSection>,
}

/// Repository listing under a tier card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSection {
    pub heading: &'static str,
    pub entries: Vec<CollapsibleEntry>,
}

/// A collapsible entry: title always visible, content shown when expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsibleEntry {
    pub title: String,
    pub content: String,
}

/// Create-dialog state handed to the dialog component.
///
/// Submitting the dialog form dispatches `Event::CreateSubmitted` with the
/// entered payload; closing it dispatches `on_close`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub is_open: bool,
    pub is_submitting: bool,
    pub on_close: Event,
}

/// Derive the view tree for the current panel state.
#[must_use]
pub fn render(panel: &TierPanel) -> PanelView {
    let body = match panel.tiers() {
        Remote::Idle | Remote::Pending => PanelBody::Loading,
        Remote::Failed(message) => PanelBody::Failed {
            message: message.clone(),
        },
        Remote::Ready(tiers) => PanelBody::Tiers(tiers.iter().map(tier_card).collect()),
    };

    PanelView {
        title: PANEL_TITLE,
        add_tier: HeaderAction {
            label: ADD_TIER_LABEL,
            on_activate: Event::DialogOpened,
        },
        body,
        dialog: DialogView {
            is_open: panel.dialog_open(),
            is_submitting: panel.creating(),
            on_close: Event::DialogClosed,
        },
    }
}

fn tier_card(tier: &Tier) -> TierCard {
    let repositories = if tier.repositories.is_empty() {
        None
    } else {
        Some(RepoSection {
            heading: REPO_SECTION_HEADING,
            entries: tier
                .repositories
                .iter()
                .map(|repo| CollapsibleEntry {
                    title: repo.full_name(),
                    content: repo.description.clone(),
                })
                .collect(),
        })
    };

    TierCard {
        id: tier.id.clone(),
        amount_label: format!("{}$ a month", tier.min_amount),
        title: tier.title.clone(),
        description: tier.description.clone(),
        on_delete: Event::DeleteRequested(tier.id.clone()),
        repositories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Repository;

    fn tier(id: &str, repos: Vec<Repository>) -> Tier {
        Tier {
            id: id.to_string(),
            title: format!("Tier {id}"),
            min_amount: 10,
            description: format!("Description {id}"),
            repositories: repos,
        }
    }

    fn repo(id: &str) -> Repository {
        Repository {
            id: id.to_string(),
            owner_or_org: "acme".to_string(),
            name: format!("repo-{id}"),
            description: format!("About {id}"),
        }
    }

    #[test]
    fn test_loading_renders_loading_body_only() {
        let mut panel = TierPanel::new();
        panel.update(Event::Started);

        let view = render(&panel);

        assert_eq!(view.body, PanelBody::Loading);
        assert_eq!(view.title, PANEL_TITLE);
        assert!(!view.dialog.is_open);
    }

    #[test]
    fn test_idle_renders_loading_body() {
        let view = render(&TierPanel::new());

        assert_eq!(view.body, PanelBody::Loading);
    }

    #[test]
    fn test_failed_load_renders_error_body() {
        let mut panel = TierPanel::new();
        panel.update(Event::Started);
        panel.update(Event::LoadFailed("HTTP 503".to_string()));

        let view = render(&panel);

        assert_eq!(
            view.body,
            PanelBody::Failed {
                message: "HTTP 503".to_string()
            }
        );
    }

    #[test]
    fn test_renders_one_card_per_tier_in_order() {
        let mut panel = TierPanel::new();
        panel.update(Event::Started);
        panel.update(Event::TiersLoaded(vec![
            tier("a", vec![]),
            tier("b", vec![]),
            tier("c", vec![]),
        ]));

        let view = render(&panel);
        let PanelBody::Tiers(cards) = view.body else {
            panic!("expected tier cards");
        };

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].id, "a");
        assert_eq!(cards[1].id, "b");
        assert_eq!(cards[2].id, "c");
        assert_eq!(cards[0].amount_label, "10$ a month");
        assert_eq!(cards[0].title, "Tier a");
        assert_eq!(cards[0].description, "Description a");
        assert_eq!(cards[0].on_delete, Event::DeleteRequested("a".to_string()));
    }

    #[test]
    fn test_empty_repositories_render_no_section() {
        let mut panel = TierPanel::new();
        panel.update(Event::Started);
        panel.update(Event::TiersLoaded(vec![tier("a", vec![])]));

        let PanelBody::Tiers(cards) = render(&panel).body else {
            panic!("expected tier cards");
        };

        assert!(cards[0].repositories.is_none());
    }

    #[test]
    fn test_repositories_render_one_entry_each() {
        let mut panel = TierPanel::new();
        panel.update(Event::Started);
        panel.update(Event::TiersLoaded(vec![tier(
            "a",
            vec![repo("1"), repo("2")],
        )]));

        let PanelBody::Tiers(cards) = render(&panel).body else {
            panic!("expected tier cards");
        };
        let section = cards[0].repositories.as_ref().expect("repo section");

        assert_eq!(section.heading, REPO_SECTION_HEADING);
        assert_eq!(section.entries.len(), 2);
        assert_eq!(section.entries[0].title, "acme/repo-1");
        assert_eq!(section.entries[0].content, "About 1");
        assert_eq!(section.entries[1].title, "acme/repo-2");
    }

    #[test]
    fn test_dialog_reflects_panel_state() {
        let mut panel = TierPanel::new();
        panel.update(Event::DialogOpened);

        let view = render(&panel);
        assert!(view.dialog.is_open);
        assert!(!view.dialog.is_submitting);
        assert_eq!(view.dialog.on_close, Event::DialogClosed);

        panel.update(Event::CreateSubmitted(crate::types::NewTier {
            title: "Silver".to_string(),
            min_amount: 10,
            description: "Updates".to_string(),
            repositories: vec![],
        }));

        let view = render(&panel);
        assert!(view.dialog.is_submitting);
    }

    #[test]
    fn test_header_action_opens_dialog() {
        let view = render(&TierPanel::new());

        assert_eq!(view.add_tier.label, ADD_TIER_LABEL);
        assert_eq!(view.add_tier.on_activate, Event::DialogOpened);
    }
}
