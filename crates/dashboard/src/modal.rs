//! Single-slot modal coordination.

use tracing::debug;

use omnisuite_core::RecordId;
use omnisuite_customers::Customer;
use omnisuite_inventory::InventoryItem;

/// Which collection a delete confirmation targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Item,
    Customer,
}

/// Target of a pending delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: RecordKind,
    pub id: RecordId,
    /// Display name for the confirmation copy.
    pub name: String,
}

/// The currently-displayed dialog and the record it operates on.
///
/// Edit/adjust variants carry the record as it was when the dialog opened;
/// in a single synchronous session that is also its live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveModal {
    AddItem,
    EditItem(InventoryItem),
    AddCustomer,
    EditCustomer(Customer),
    AdjustStock(InventoryItem),
    ConfirmDelete(DeleteTarget),
}

impl ActiveModal {
    /// Short label used in transition logs.
    fn label(&self) -> &'static str {
        match self {
            ActiveModal::AddItem => "add-item",
            ActiveModal::EditItem(_) => "edit-item",
            ActiveModal::AddCustomer => "add-customer",
            ActiveModal::EditCustomer(_) => "edit-customer",
            ActiveModal::AdjustStock(_) => "adjust-stock",
            ActiveModal::ConfirmDelete(_) => "confirm-delete",
        }
    }
}

/// Single modal slot: at most one dialog at a time, no stacking.
///
/// Every transition is synchronous and immediate; `open` discards whatever
/// was active, and cancel/save/confirm all land in [`ModalSlot::close`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSlot {
    active: Option<ActiveModal>,
}

impl ModalSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a dialog, discarding whatever was active.
    pub fn open(&mut self, modal: ActiveModal) {
        debug!(modal = modal.label(), "modal opened");
        self.active = Some(modal);
    }

    /// Clears the slot, returning what was active.
    pub fn close(&mut self) -> Option<ActiveModal> {
        let previous = self.active.take();
        if let Some(modal) = &previous {
            debug!(modal = modal.label(), "modal closed");
        }
        previous
    }

    pub fn active(&self) -> Option<&ActiveModal> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
