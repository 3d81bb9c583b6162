//! Tier panel state machine.
//!
//! The panel is modeled as a pure state machine: UI interactions and request
//! completions arrive as `Event`s, `update` mutates the state and returns the
//! `Effect`s to execute. Everything asynchronous happens outside, in the
//! runtime, which keeps the panel testable without a UI or a network.

pub mod view;

use crate::notify::Notice;
use crate::types::{NewTier, Tier};

/// Notice raised when a create mutation fails.
pub const CREATE_FAILED_NOTICE: &str = "Could not create the tier, please try again!";

/// Notice raised when a delete mutation fails.
pub const DELETE_FAILED_NOTICE: &str = "Could not delete the tier, please try again!";

/// State of an asynchronous query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    /// Nothing requested yet.
    Idle,
    /// Request in flight, no data yet.
    Pending,
    /// Data available.
    Ready(T),
    /// Request failed.
    Failed(String),
}

/// Inputs to the panel: user interactions and request completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The panel was mounted.
    Started,
    /// The tier collection arrived.
    TiersLoaded(Vec<Tier>),
    /// The tier collection could not be loaded.
    LoadFailed(String),
    /// The user opened the create dialog.
    DialogOpened,
    /// The user closed the create dialog without submitting.
    DialogClosed,
    /// The user submitted the create dialog.
    CreateSubmitted(NewTier),
    /// The create mutation succeeded.
    CreateSucceeded(Tier),
    /// The create mutation failed.
    CreateFailed(String),
    /// The user activated a tier's delete control.
    DeleteRequested(String),
    /// The delete mutation succeeded.
    DeleteSucceeded(String),
    /// The delete mutation failed.
    DeleteFailed(String),
}

/// Side effects the runtime must execute after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the tier collection (cache may satisfy this).
    LoadTiers,
    /// Invalidate the cached collection and re-fetch it.
    RefreshTiers,
    /// Send a create mutation.
    CreateTier(NewTier),
    /// Send a delete mutation for the given tier id.
    DeleteTier(String),
    /// Surface a transient notice to the user.
    Notify(Notice),
}

/// The tier panel: tier collection plus create-dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPanel {
    tiers: Remote<Vec<Tier>>,
    dialog_open: bool,
    creating: bool,
}

impl TierPanel {
    /// Create a panel in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiers: Remote::Idle,
            dialog_open: false,
            creating: false,
        }
    }

    /// Current state of the tier collection.
    #[must_use]
    pub fn tiers(&self) -> &Remote<Vec<Tier>> {
        &self.tiers
    }

    /// Whether the create dialog is open.
    #[must_use]
    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Whether a create mutation is in flight.
    #[must_use]
    pub fn creating(&self) -> bool {
        self.creating
    }

    /// Apply an event and return the effects to execute.
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Started => {
                self.tiers = Remote::Pending;
                vec![Effect::LoadTiers]
            }
            Event::TiersLoaded(tiers) => {
                self.tiers = Remote::Ready(tiers);
                vec![]
            }
            Event::LoadFailed(message) => {
                // A failed refresh keeps the last good snapshot on screen.
                if !matches!(self.tiers, Remote::Ready(_)) {
                    self.tiers = Remote::Failed(message);
                }
                vec![]
            }
            Event::DialogOpened => {
                self.dialog_open = true;
                vec![]
            }
            Event::DialogClosed => {
                self.dialog_open = false;
                vec![]
            }
            Event::CreateSubmitted(payload) => {
                // At most one create mutation in flight.
                if self.creating {
                    return vec![];
                }
                self.creating = true;
                vec![Effect::CreateTier(payload)]
            }
            Event::CreateSucceeded(_) => {
                self.creating = false;
                self.dialog_open = false;
                vec![Effect::RefreshTiers]
            }
            Event::CreateFailed(_) => {
                // Dialog stays open so the user can retry the same payload.
                self.creating = false;
                vec![Effect::Notify(Notice::error(CREATE_FAILED_NOTICE))]
            }
            Event::DeleteRequested(id) => vec![Effect::DeleteTier(id)],
            Event::DeleteSucceeded(_) => vec![Effect::RefreshTiers],
            Event::DeleteFailed(_) => {
                vec![Effect::Notify(Notice::error(DELETE_FAILED_NOTICE))]
            }
        }
    }
}

impl Default for TierPanel {
    fn default() -> Self {
        Self::new()
    }
}
