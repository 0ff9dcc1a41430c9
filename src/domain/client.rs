use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientType, ClientUuid, EmailAddress, LegalName, Relationship};

/// Client record as owned by the remote API. Read-only on this side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub uuid: ClientUuid,
    pub client_type: String,
    pub contact: Contact,
}

impl Client {
    /// Display name built from the legal first and last names.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.contact.legal_first_name, self.contact.legal_last_name
        )
        .trim()
        .to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    pub legal_first_name: String,
    pub legal_last_name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(rename = "contactemail_set", default)]
    pub emails: Vec<ContactEmail>,
    #[serde(rename = "contactphone_set", default)]
    pub phones: Vec<ContactPhone>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactEmail {
    pub email: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPhone {
    pub phone_number: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Payload sent to the remote API when creating a client.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewClient {
    pub client_type: ClientType,
    pub contact: NewContact,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewContact {
    pub legal_first_name: LegalName,
    pub legal_last_name: LegalName,
    pub relationship: Relationship,
    #[serde(rename = "contactemail_set")]
    pub emails: Vec<NewContactEmail>,
    #[serde(rename = "contactphone_set")]
    pub phones: Vec<ContactPhone>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewContactEmail {
    pub email: EmailAddress,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: LegalName,
        last_name: LegalName,
        client_type: ClientType,
        relationship: Relationship,
    ) -> Self {
        Self {
            client_type,
            contact: NewContact {
                legal_first_name: first_name,
                legal_last_name: last_name,
                relationship,
                emails: Vec::new(),
                phones: Vec::new(),
            },
        }
    }

    /// Adds an email entry with its type label.
    #[must_use]
    pub fn with_email(mut self, email: EmailAddress, kind: impl Into<String>) -> Self {
        self.contact.emails.push(NewContactEmail {
            email,
            kind: kind.into(),
        });
        self
    }

    /// Adds a phone entry with its type label. Blank numbers are ignored.
    #[must_use]
    pub fn with_phone(mut self, phone_number: impl Into<String>, kind: impl Into<String>) -> Self {
        let phone_number = phone_number.into().trim().to_string();
        if !phone_number.is_empty() {
            self.contact.phones.push(ContactPhone {
                phone_number,
                kind: kind.into(),
            });
        }
        self
    }
}
