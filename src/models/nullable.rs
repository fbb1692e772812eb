use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that may be omitted, sent as JSON `null`, or carry a value.
///
/// This replaces the `*Rm` ("removable") variants of the 3GPP schemas. Use it
/// with `#[serde(default, skip_serializing_if = "Nullable::is_absent")]` so an
/// absent field stays absent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Present(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Present(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Present(v) => v.serialize(serializer),
            Nullable::Absent | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Reached only when the key is on the wire; a missing key falls back
        // to `Default` (Absent).
        Option::<T>::deserialize(deserializer).map(|v| match v {
            Some(v) => Nullable::Present(v),
            None => Nullable::Null,
        })
    }
}

impl<T: Validate> Validate for Nullable<T> {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        if let Nullable::Present(v) = self {
            v.validate_into(ctx);
        }
    }
}

impl ValidationContext {
    /// A required removable field: Null is accepted, Absent is not.
    pub fn required_nullable<T: Validate>(&mut self, name: &'static str, value: &Nullable<T>) {
        if value.is_absent() {
            self.at(name, |ctx| ctx.report("is required (null is allowed)"));
        } else {
            self.field(name, value);
        }
    }

    pub fn optional_nullable<T: Validate>(&mut self, name: &'static str, value: &Nullable<T>) {
        self.field(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        value: Nullable<u32>,
    }

    #[test]
    fn test_absent_null_present_decode() {
        let absent: Holder = serde_json::from_str("{}").unwrap();
        assert!(absent.value.is_absent());

        let null: Holder = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(null.value.is_null());

        let present: Holder = serde_json::from_str(r#"{"value":7}"#).unwrap();
        assert_eq!(present.value, Nullable::Present(7));
    }

    #[test]
    fn test_encode_keeps_the_distinction() {
        let absent = Holder {
            value: Nullable::Absent,
        };
        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");

        let null = Holder {
            value: Nullable::Null,
        };
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"value":null}"#);
    }
}
