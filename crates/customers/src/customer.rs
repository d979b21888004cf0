use serde::{Deserialize, Serialize};

use omnisuite_core::{DomainError, DomainResult, Entity, RecordId};

/// Customer record. Only name and email are mandatory; phone and company are
/// free-text extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl Entity for Customer {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Form payload for creating or editing a customer.
///
/// `id: None` creates a new record; `Some(id)` replaces the fields of the
/// matching record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl CustomerDraft {
    /// Required-field rules: name non-blank, email non-blank and plausible.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if !email.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        Ok(())
    }

    /// Materialize the draft under the given identifier.
    pub fn into_customer(self, id: RecordId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
        }
    }
}

/// Prefill an edit form from an existing record.
impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            company: customer.company.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CustomerDraft {
        CustomerDraft {
            id: None,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: Some("555-1234".to_string()),
            company: Some("Innovate Inc.".to_string()),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn validate_accepts_missing_optional_fields() {
        let mut d = draft();
        d.phone = None;
        d.company = None;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name_and_email() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));

        let mut d = draft();
        d.email = String::new();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_implausible_email() {
        let mut d = draft();
        d.email = "not-an-email".to_string();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn edit_prefill_keeps_identifier_and_fields() {
        let customer = draft().into_customer(RecordId::new(3));
        let prefill = CustomerDraft::from(&customer);
        assert_eq!(prefill.id, Some(RecordId::new(3)));
        assert_eq!(prefill.into_customer(RecordId::new(3)), customer);
    }

    #[test]
    fn record_shape_is_stable() {
        let customer = draft().into_customer(RecordId::new(1));
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "John Doe",
                "email": "john.doe@example.com",
                "phone": "555-1234",
                "company": "Innovate Inc.",
            })
        );
    }
}
