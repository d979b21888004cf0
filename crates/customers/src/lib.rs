//! Customer domain module.
//!
//! Same contract shape as the inventory store, without stock semantics.

pub mod customer;
pub mod store;

pub use customer::{Customer, CustomerDraft};
pub use store::CustomerStore;
