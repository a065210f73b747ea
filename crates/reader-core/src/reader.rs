//! # Reader Types
//!
//! Request payloads sent to the provider and the records it returns.
//!
//! Provider records are opaque: the gateway never interprets their fields,
//! it only relays them. Every record converts to a plain JSON object through
//! `ProviderRecord::into_record`, which is the single serialization path used
//! by the HTTP layer.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Description attached to every reader checkout
pub const CHECKOUT_DESCRIPTION: &str = "Card reader checkout";

/// Plain mapping of field name to value
pub type Record = Map<String, Value>;

/// Conversion from a provider record to a plain mapping
pub trait ProviderRecord {
    fn into_record(self) -> Record;
}

/// Body for pairing a new reader with a merchant account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReaderBody {
    /// Code shown on the reader's screen during pairing
    pub pairing_code: String,
    /// Human readable name for the reader
    pub name: String,
}

impl CreateReaderBody {
    pub fn new(pairing_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pairing_code: pairing_code.into(),
            name: name.into(),
        }
    }
}

/// Body for starting a checkout on a paired reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCheckoutBody {
    /// Amount to charge
    pub total_amount: Money,
    /// Description shown in the merchant's transaction history
    pub description: String,
}

impl CreateCheckoutBody {
    /// Create a checkout body with the standard description
    pub fn new(total_amount: Money) -> Self {
        Self {
            total_amount,
            description: CHECKOUT_DESCRIPTION.to_string(),
        }
    }
}

macro_rules! provider_record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Record);

        impl $name {
            pub fn from_record(record: Record) -> Self {
                Self(record)
            }

            /// Look up a top-level field
            pub fn get(&self, field: &str) -> Option<&Value> {
                self.0.get(field)
            }
        }

        impl ProviderRecord for $name {
            fn into_record(self) -> Record {
                self.0
            }
        }

        impl From<Record> for $name {
            fn from(record: Record) -> Self {
                Self(record)
            }
        }
    };
}

provider_record!(
    /// A paired card reader
    Reader
);

provider_record!(
    /// Collection of readers for a merchant
    ReaderList
);

provider_record!(
    /// Result of starting a checkout on a reader
    ReaderCheckout
);

impl Reader {
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }
}

impl ReaderList {
    /// Number of readers in the `items` array, if the provider sent one
    pub fn item_count(&self) -> Option<usize> {
        self.get("items").and_then(Value::as_array).map(Vec::len)
    }
}

impl ReaderCheckout {
    pub fn client_transaction_id(&self) -> Option<&str> {
        self.get("data")
            .and_then(|d| d.get("client_transaction_id"))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_checkout_body_shape() {
        let body = CreateCheckoutBody::new(Money::eur(1000));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "total_amount": { "currency": "EUR", "minor_unit": 2, "value": 1000 },
                "description": "Card reader checkout"
            })
        );
    }

    #[test]
    fn test_reader_body_shape() {
        let body = CreateReaderBody::new("ABC-123", "Lane 1");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "pairing_code": "ABC-123", "name": "Lane 1" })
        );
    }

    #[test]
    fn test_record_roundtrip_is_verbatim() {
        let raw = json!({
            "id": "rdr_3MSAFM23CK82VSTT4BN6RWSQ65",
            "name": "Lane 1",
            "status": "processing",
            "device": { "identifier": "U1DT3NA00-CN", "model": "solo" }
        });

        let reader: Reader = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(reader.id(), Some("rdr_3MSAFM23CK82VSTT4BN6RWSQ65"));
        assert_eq!(Value::Object(reader.into_record()), raw);
    }

    #[test]
    fn test_reader_list_count() {
        let list = ReaderList::from_record(record(json!({ "items": [] })));
        assert_eq!(list.item_count(), Some(0));

        let list = ReaderList::from_record(record(json!({ "items": [{ "id": "a" }, { "id": "b" }] })));
        assert_eq!(list.item_count(), Some(2));

        assert_eq!(ReaderList::default().item_count(), None);
    }

    #[test]
    fn test_checkout_transaction_id() {
        let checkout = ReaderCheckout::from(record(json!({
            "data": { "client_transaction_id": "6b425463-3e1b-431d-83fa-1e51c2925e99" }
        })));
        assert_eq!(
            checkout.client_transaction_id(),
            Some("6b425463-3e1b-431d-83fa-1e51c2925e99")
        );
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<ReaderList>(json!([1, 2])).is_err());
    }
}
