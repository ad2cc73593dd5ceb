//! Hotelier Console Controllers
//!
//! The state-synchronization layer of the tenant-administration console.
//! Controllers own view state, derive the correct gateway calls, reconcile
//! responses, and re-trigger loads after mutating actions. Presentation
//! (the CLI, or any other shell) subscribes to their notices and renders
//! their state; it never mutates the snapshot directly.
//!
//! ```text
//! interaction -> controller intent -> gateway call -> reconcile -> render
//!        ^                                                         |
//!        └─────────────────────────────────────────────────────────┘
//! ```

#![allow(dead_code)]

pub mod create;
pub mod detail;
pub mod draft;
pub mod edit;
pub mod events;
pub mod list;

#[cfg(test)]
pub(crate) mod testutil;

pub use create::CreateController;
pub use detail::{DetailController, DetailState};
pub use draft::TenantDraft;
pub use edit::EditController;
pub use events::ConsoleEvent;
pub use list::{ListController, ListRequest, LoadPhase, LoadTicket};
