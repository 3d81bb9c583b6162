//! Panel runtime.
//!
//! Drives the `TierPanel` state machine: each dispatched event is applied,
//! the resulting effects are executed against the injected `TierApi` and the
//! query cache, and completion events are fed back until the queue drains.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::api::TierApi;
use crate::cache::QueryCache;
use crate::notify::NotificationSink;
use crate::panel::view::{render, PanelView};
use crate::panel::{Effect, Event, TierPanel};
use crate::types::Tier;

/// Cache key for the tier collection.
pub const TIERS_KEY: &str = "tiers";

/// Event-loop driver for a tier panel.
pub struct PanelRuntime<A, N> {
    panel: TierPanel,
    api: A,
    cache: QueryCache<Vec<Tier>>,
    notifier: N,
}

impl<A: TierApi, N: NotificationSink> PanelRuntime<A, N> {
    /// Create a runtime around an API and a notification sink.
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            panel: TierPanel::new(),
            api,
            cache: QueryCache::new(),
            notifier,
        }
    }

    /// Mount the panel: kicks off the initial tier fetch.
    pub async fn start(&mut self) {
        self.dispatch(Event::Started).await;
    }

    /// Apply an event and run all effects it triggers, including follow-up
    /// events from completed requests, until the panel settles.
    pub async fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            debug!(?event, "applying event");
            for effect in self.panel.update(event) {
                if let Some(follow_up) = self.run_effect(effect).await {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    async fn run_effect(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::LoadTiers => Some(self.load_tiers().await),
            Effect::RefreshTiers => {
                self.cache.invalidate(TIERS_KEY);
                Some(self.load_tiers().await)
            }
            Effect::CreateTier(payload) => match self.api.create_tier(&payload).await {
                Ok(tier) => Some(Event::CreateSucceeded(tier)),
                Err(err) => {
                    warn!(%err, "create tier failed");
                    Some(Event::CreateFailed(err.to_string()))
                }
            },
            Effect::DeleteTier(id) => match self.api.delete_tier(&id).await {
                Ok(()) => Some(Event::DeleteSucceeded(id)),
                Err(err) => {
                    warn!(%err, tier_id = %id, "delete tier failed");
                    Some(Event::DeleteFailed(err.to_string()))
                }
            },
            Effect::Notify(notice) => {
                self.notifier.notify(notice);
                None
            }
        }
    }

    async fn load_tiers(&mut self) -> Event {
        if let Some(tiers) = self.cache.get(TIERS_KEY) {
            debug!("serving tier collection from cache");
            return Event::TiersLoaded(tiers.clone());
        }

        match self.api.list_tiers().await {
            Ok(tiers) => {
                self.cache.put(TIERS_KEY, tiers.clone());
                Event::TiersLoaded(tiers)
            }
            Err(err) => {
                warn!(%err, "tier fetch failed");
                Event::LoadFailed(err.to_string())
            }
        }
    }

    /// Current panel state.
    #[must_use]
    pub fn panel(&self) -> &TierPanel {
        &self.panel
    }

    /// Render the current view tree.
    #[must_use]
    pub fn view(&self) -> PanelView {
        render(&self.panel)
    }

    /// The query cache (read access for embedders and tests).
    #[must_use]
    pub fn cache(&self) -> &QueryCache<Vec<Tier>> {
        &self.cache
    }

    /// The injected API.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}
