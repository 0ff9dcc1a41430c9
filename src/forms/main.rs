use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientType, EmailAddress, LegalName, Relationship};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data submitted from the create-client side panel.
pub struct AddClientForm {
    #[validate(length(min = 1, max = 128))]
    pub legal_first_name: String,
    #[validate(length(min = 1, max = 128))]
    pub legal_last_name: String,
    #[validate(length(min = 1))]
    pub client_type: String,
    #[validate(length(min = 1))]
    pub relationship: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_type: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone_type: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AddClientForm {
    /// Validates the form and converts it into the payload for the remote API.
    pub fn to_new_client(&self) -> Result<NewClient, FormError> {
        self.validate()?;

        let mut new_client = NewClient::new(
            LegalName::new(self.legal_first_name.as_str())?,
            LegalName::new(self.legal_last_name.as_str())?,
            ClientType::new(self.client_type.as_str())?,
            Relationship::new(self.relationship.as_str())?,
        );

        if let Some(email) = non_blank(&self.email) {
            let kind = non_blank(&self.email_type).unwrap_or("Primary");
            new_client = new_client.with_email(EmailAddress::new(email)?, kind);
        }
        if let Some(phone) = non_blank(&self.phone) {
            let kind = non_blank(&self.phone_type).unwrap_or("Mobile");
            new_client = new_client.with_phone(phone, kind);
        }

        Ok(new_client)
    }
}
