//! Dashboard session: the single owner of all UI state.
//!
//! State is threaded through [`DashboardSession`] explicitly; nothing global.
//! Every handler runs synchronously in response to one discrete user action,
//! so there is never a concurrent writer.

use thiserror::Error;
use tracing::info;

use omnisuite_core::{DomainError, DomainResult, RecordId};
use omnisuite_customers::{CustomerDraft, CustomerStore};
use omnisuite_inventory::{
    AdjustmentError, InventoryStats, ItemDraft, ItemStore, StatsCache, validate_adjustment,
};

use crate::modal::{ActiveModal, DeleteTarget, ModalSlot, RecordKind};

/// Error surface of session handlers.
///
/// Adjustment errors are kept distinct so callers can render the two failure
/// kinds inline next to the input field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Adjustment(#[from] AdjustmentError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// One user's dashboard state: both collections, the modal slot, and the
/// memoized statistics.
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    items: ItemStore,
    customers: CustomerStore,
    modal: ModalSlot,
    stats: StatsCache,
}

impl DashboardSession {
    /// Empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-populated with the sample data shown on first load.
    pub fn seeded() -> Self {
        Self {
            items: ItemStore::seeded(),
            customers: CustomerStore::seeded(),
            modal: ModalSlot::new(),
            stats: StatsCache::new(),
        }
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn customers(&self) -> &CustomerStore {
        &self.customers
    }

    pub fn modal(&self) -> Option<&ActiveModal> {
        self.modal.active()
    }

    /// Inventory statistics, recomputed only when the collection changed.
    pub fn stats(&mut self) -> InventoryStats {
        self.stats.get(&self.items)
    }

    // ----- open/cancel -----

    pub fn open_add_item(&mut self) {
        self.modal.open(ActiveModal::AddItem);
    }

    pub fn open_edit_item(&mut self, id: RecordId) -> DomainResult<()> {
        let item = self.items.get(id).ok_or(DomainError::NotFound)?.clone();
        self.modal.open(ActiveModal::EditItem(item));
        Ok(())
    }

    pub fn open_adjust_stock(&mut self, id: RecordId) -> DomainResult<()> {
        let item = self.items.get(id).ok_or(DomainError::NotFound)?.clone();
        self.modal.open(ActiveModal::AdjustStock(item));
        Ok(())
    }

    pub fn open_delete_item(&mut self, id: RecordId) -> DomainResult<()> {
        let item = self.items.get(id).ok_or(DomainError::NotFound)?;
        self.modal.open(ActiveModal::ConfirmDelete(DeleteTarget {
            kind: RecordKind::Item,
            id: item.id,
            name: item.name.clone(),
        }));
        Ok(())
    }

    pub fn open_add_customer(&mut self) {
        self.modal.open(ActiveModal::AddCustomer);
    }

    pub fn open_edit_customer(&mut self, id: RecordId) -> DomainResult<()> {
        let customer = self.customers.get(id).ok_or(DomainError::NotFound)?.clone();
        self.modal.open(ActiveModal::EditCustomer(customer));
        Ok(())
    }

    pub fn open_delete_customer(&mut self, id: RecordId) -> DomainResult<()> {
        let customer = self.customers.get(id).ok_or(DomainError::NotFound)?;
        self.modal.open(ActiveModal::ConfirmDelete(DeleteTarget {
            kind: RecordKind::Customer,
            id: customer.id,
            name: customer.name.clone(),
        }));
        Ok(())
    }

    /// Dismisses whatever dialog is active; collections untouched.
    pub fn cancel(&mut self) {
        self.modal.close();
    }

    // ----- submit/confirm -----

    /// Validates and saves an item draft, then closes the form.
    ///
    /// Validation failure leaves the form open for correction.
    pub fn submit_item(&mut self, draft: ItemDraft) -> SessionResult<RecordId> {
        draft.validate()?;
        let id = self.items.save(draft);
        self.modal.close();
        info!(%id, "item saved");
        Ok(id)
    }

    /// Validates and saves a customer draft, then closes the form.
    pub fn submit_customer(&mut self, draft: CustomerDraft) -> SessionResult<RecordId> {
        draft.validate()?;
        let id = self.customers.save(draft);
        self.modal.close();
        info!(%id, "customer saved");
        Ok(id)
    }

    /// Validates a user-entered adjustment against the open adjust-stock
    /// dialog and applies it.
    ///
    /// Failures leave the dialog open; both failure kinds are meant for
    /// inline display next to the input.
    pub fn submit_adjustment(&mut self, input: &str) -> SessionResult<i64> {
        let item = match self.modal.active() {
            Some(ActiveModal::AdjustStock(item)) => item.clone(),
            _ => {
                return Err(DomainError::validation("no stock adjustment in progress").into());
            }
        };
        let delta = validate_adjustment(item.quantity, input)?;
        if !self.items.adjust(item.id, delta) {
            return Err(DomainError::NotFound.into());
        }
        self.modal.close();
        info!(id = %item.id, delta, "stock adjustment applied");
        Ok(delta)
    }

    /// Applies the pending delete confirmation. No-op without one.
    pub fn confirm_delete(&mut self) {
        let Some(ActiveModal::ConfirmDelete(target)) = self.modal.active().cloned() else {
            return;
        };
        match target.kind {
            RecordKind::Item => self.items.remove(target.id),
            RecordKind::Customer => self.customers.remove(target.id),
        };
        self.modal.close();
        info!(id = %target.id, kind = ?target.kind, name = %target.name, "record deleted");
    }
}
