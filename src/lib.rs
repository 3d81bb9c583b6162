//! TierBoard client library.
//!
//! Client-side plumbing for a project-sponsorship tiers panel: a typed HTTP
//! client for the tier API, a query cache with explicit invalidation, a pure
//! state machine for the panel, and a view derivation the embedding UI can
//! render with any toolkit.
//!
//! # Quick Start
//!
//! ```rust
//! use tierboard::{render, Event, PanelBody, TierPanel};
//!
//! let mut panel = TierPanel::new();
//! panel.update(Event::Started);
//! panel.update(Event::TiersLoaded(vec![]));
//!
//! let view = render(&panel);
//! assert!(matches!(view.body, PanelBody::Tiers(_)));
//! ```
//!
//! Against a live backend, wrap a [`TierBoardClient`]'s tiers client in a
//! [`PanelRuntime`] and dispatch the events your UI produces.

pub mod api;
pub mod cache;
pub mod client;
pub mod clients;
pub mod error;
pub mod notify;
pub mod panel;
pub mod runtime;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use api::TierApi;
pub use cache::QueryCache;
pub use client::TierBoardClient;
pub use clients::TiersClient;
pub use error::{ApiError, Error};
pub use notify::{Notice, NoticeKind, NotificationSink};
pub use panel::view::{
    render, CollapsibleEntry, DialogView, HeaderAction, PanelBody, PanelView, RepoSection,
    TierCard,
};
pub use panel::{Effect, Event, Remote, TierPanel};
pub use runtime::PanelRuntime;
pub use transport::HttpTransport;
pub use types::{NewRepository, NewTier, Repository, Tier};
