//! `omnisuite-dashboard` — in-memory state core of the OmniSuite dashboard.
//!
//! Owns the inventory and customer collections, the single modal slot, and
//! derived statistics. No rendering and no persistence: a UI layer drives a
//! [`DashboardSession`] through its handlers and reads state back out, and
//! dropping the session drops the data.

pub mod modal;
pub mod session;
pub mod telemetry;

pub use modal::{ActiveModal, DeleteTarget, ModalSlot, RecordKind};
pub use session::{DashboardSession, SessionError, SessionResult};
