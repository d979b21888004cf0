use serde::{Deserialize, Serialize};

use omnisuite_core::{DomainError, DomainResult, Entity, RecordId};

/// Inventory record.
///
/// `unit_price` is in the smallest currency unit (cents). `quantity` is `i64`
/// so adjustment arithmetic stays in one signed domain; non-negativity is an
/// invariant maintained by the adjustment validator, not by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: u64,
}

impl InventoryItem {
    /// Value of this line: quantity × unit price, in cents.
    pub fn line_value(&self) -> u64 {
        if self.quantity > 0 {
            (self.quantity as u64).saturating_mul(self.unit_price)
        } else {
            0
        }
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Form payload for creating or editing an item.
///
/// `id: None` creates a new record; `Some(id)` replaces the fields of the
/// matching record. Validation mirrors the form's required-field rules; the
/// store itself never validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub id: Option<RecordId>,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: u64,
}

impl ItemDraft {
    /// Required-field rules: name/SKU/category non-blank, quantity ≥ 0.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(())
    }

    /// Materialize the draft under the given identifier.
    pub fn into_item(self, id: RecordId) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// Prefill an edit form from an existing record.
impl From<&InventoryItem> for ItemDraft {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            sku: item.sku.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft {
            id: None,
            name: "Wireless Mouse".to_string(),
            sku: "WM-1001".to_string(),
            category: "Electronics".to_string(),
            quantity: 150,
            unit_price: 2599,
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        for field in ["name", "sku", "category"] {
            let mut d = draft();
            match field {
                "name" => d.name = "   ".to_string(),
                "sku" => d.sku = String::new(),
                _ => d.category = " ".to_string(),
            }
            let err = d.validate().unwrap_err();
            match err {
                DomainError::Validation(msg) => assert!(msg.contains(field)),
                other => panic!("expected Validation, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_rejects_negative_quantity() {
        let mut d = draft();
        d.quantity = -1;
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn edit_prefill_keeps_identifier_and_fields() {
        let item = draft().into_item(RecordId::new(7));
        let prefill = ItemDraft::from(&item);
        assert_eq!(prefill.id, Some(RecordId::new(7)));
        assert_eq!(prefill.into_item(RecordId::new(7)), item);
    }

    #[test]
    fn line_value_is_quantity_times_price() {
        let item = draft().into_item(RecordId::new(1));
        assert_eq!(item.line_value(), 150 * 2599);
    }

    #[test]
    fn record_shape_is_stable() {
        let item = draft().into_item(RecordId::new(1));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Wireless Mouse",
                "sku": "WM-1001",
                "category": "Electronics",
                "quantity": 150,
                "unit_price": 2599,
            })
        );
    }
}
