//! In-memory customer collection.

use tracing::debug;

use omnisuite_core::{RecordId, Revision, next_id};

use crate::customer::{Customer, CustomerDraft};

/// Owned, in-memory customer collection.
///
/// Same contract as the inventory store: unconditional mutations, validation
/// in the form layer, revision bumped per mutation, seed data restored on
/// restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerStore {
    customers: Vec<Customer>,
    revision: Revision,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the sample records shown on first load.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for draft in seed_customers() {
            store.save(draft);
        }
        store
    }

    /// Upsert. A draft carrying the identifier of an existing record replaces
    /// that record's fields (identifier preserved); any other draft is
    /// appended under a freshly assigned identifier.
    pub fn save(&mut self, draft: CustomerDraft) -> RecordId {
        let existing = draft
            .id
            .and_then(|id| self.customers.iter().position(|c| c.id == id));
        let id = match existing {
            Some(pos) => {
                let id = self.customers[pos].id;
                self.customers[pos] = draft.into_customer(id);
                debug!(%id, "customer replaced");
                id
            }
            None => {
                let id = next_id(&self.customers);
                self.customers.push(draft.into_customer(id));
                debug!(%id, "customer added");
                id
            }
        };
        self.revision.bump();
        id
    }

    /// Removes the record with the matching identifier. No-op when absent.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        let removed = self.customers.len() != before;
        if removed {
            self.revision.bump();
            debug!(%id, "customer removed");
        }
        removed
    }

    pub fn get(&self, id: RecordId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }
}

/// Sample records shown on first load.
fn seed_customers() -> Vec<CustomerDraft> {
    [
        ("John Doe", "john.doe@example.com", "555-1234", "Innovate Inc."),
        ("Jane Smith", "jane.smith@example.com", "555-5678", "Solutions Co."),
        ("Peter Jones", "peter.jones@example.com", "555-8765", "Tech Forward"),
    ]
    .into_iter()
    .map(|(name, email, phone, company)| CustomerDraft {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        company: Some(company.to_string()),
    })
    .collect()
}
