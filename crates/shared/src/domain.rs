use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CustomerId);

impl CustomerId {
    /// Wire value for a record the backend has not assigned an id to yet.
    pub const UNSAVED: CustomerId = CustomerId(0);

    pub fn is_unsaved(self) -> bool {
        self == Self::UNSAVED
    }
}

/// A customer record exactly as the backend serves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "string_or_null")]
    pub birthday: String,
    #[serde(deserialize_with = "string_or_null")]
    pub phone: String,
    #[serde(deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(deserialize_with = "string_or_null")]
    pub address: String,
}

impl Customer {
    pub fn from_draft(id: CustomerId, draft: &CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            birthday: draft.birthday.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
        }
    }

    /// Parses the leading `YYYY-MM-DD` of the birthday; backends that send a
    /// full timestamp still yield the date.
    pub fn birthday_date(&self) -> Option<NaiveDate> {
        parse_date_prefix(&self.birthday)
    }
}

fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    Birthday,
    Phone,
    Email,
    Address,
}

impl CustomerField {
    pub const ALL: [CustomerField; 5] = [
        CustomerField::Name,
        CustomerField::Birthday,
        CustomerField::Phone,
        CustomerField::Email,
        CustomerField::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CustomerField::Name => "Name",
            CustomerField::Birthday => "Birthday",
            CustomerField::Phone => "Phone",
            CustomerField::Email => "Email",
            CustomerField::Address => "Address",
        }
    }
}

/// Editable fields of a customer, without the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub birthday: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl CustomerDraft {
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Birthday => &self.birthday,
            CustomerField::Phone => &self.phone,
            CustomerField::Email => &self.email,
            CustomerField::Address => &self.address,
        }
    }

    pub fn field_mut(&mut self, field: CustomerField) -> &mut String {
        match field {
            CustomerField::Name => &mut self.name,
            CustomerField::Birthday => &mut self.birthday,
            CustomerField::Phone => &mut self.phone,
            CustomerField::Email => &mut self.email,
            CustomerField::Address => &mut self.address,
        }
    }

    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        // Date inputs only hold the date part.
        let birthday = match customer.birthday_date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => customer.birthday.clone(),
        };
        Self {
            name: customer.name.clone(),
            birthday,
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            address: customer.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_missing_and_null_fields_as_empty() {
        let customer: Customer =
            serde_json::from_str(r#"{"name":"Ann","phone":null}"#).expect("decode");
        assert_eq!(customer.id, CustomerId::UNSAVED);
        assert_eq!(customer.name, "Ann");
        assert_eq!(customer.phone, "");
        assert_eq!(customer.address, "");
    }

    #[test]
    fn serializes_flat_wire_shape() {
        let customer = Customer {
            id: CustomerId(3),
            name: "Ann".into(),
            birthday: "1990-04-01".into(),
            phone: "555".into(),
            email: "ann@example.com".into(),
            address: "Main St".into(),
        };
        let value = serde_json::to_value(&customer).expect("encode");
        assert_eq!(value["id"], 3);
        assert_eq!(value["birthday"], "1990-04-01");
        assert_eq!(value["email"], "ann@example.com");
    }

    #[test]
    fn birthday_date_accepts_timestamp_suffix() {
        let customer = Customer {
            birthday: "1990-04-01T00:00:00".into(),
            ..Customer::default()
        };
        assert_eq!(
            customer.birthday_date(),
            NaiveDate::from_ymd_opt(1990, 4, 1)
        );

        let draft = CustomerDraft::from(&customer);
        assert_eq!(draft.birthday, "1990-04-01");
    }

    #[test]
    fn unparseable_birthday_is_kept_verbatim_in_draft() {
        let customer = Customer {
            birthday: "someday".into(),
            ..Customer::default()
        };
        assert_eq!(customer.birthday_date(), None);
        assert_eq!(CustomerDraft::from(&customer).birthday, "someday");
    }

    #[test]
    fn draft_fields_round_trip_through_accessors() {
        let mut draft = CustomerDraft::default();
        for field in CustomerField::ALL {
            draft.set(field, field.label().to_lowercase());
        }
        assert_eq!(draft.get(CustomerField::Email), "email");
        assert_eq!(draft.address, "address");
    }
}
