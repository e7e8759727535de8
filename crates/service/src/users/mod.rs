//! User records and the operations over the local collection.

pub mod local;
pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

pub use local::LocalUserStore;
pub use store::UserStore;

pub const ID_REQUIRED: &str = "The id field is required.";
pub const USER_NOT_FOUND: &str = "User not found.";

/// One entry of the collection: an opaque JSON object.
///
/// Only `id` is ever looked at; every other field is carried through as-is,
/// in the order it was received.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    /// Accept a request body as a new record. The body must be an object with a truthy `id`.
    pub fn from_body(body: Value) -> Result<Self, ServiceError> {
        match body {
            Value::Object(fields) if fields.get("id").is_some_and(is_truthy) => Ok(Self(fields)),
            _ => Err(ServiceError::Validation(ID_REQUIRED.into())),
        }
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Numeric equality between the stored `id` and the requested one.
    /// String ids never match, and neither does an unparseable request id.
    pub fn matches(&self, id: UserId) -> bool {
        match (self.id().and_then(Value::as_f64), id.0) {
            (Some(stored), Some(wanted)) => stored == wanted,
            _ => false,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Id taken from a request path.
///
/// Parsing is lenient: leading whitespace and a sign are skipped, then the
/// longest run of digits is read (`"12abc"` is 12, `"0x1f"` is 31). Input
/// without leading digits yields an id that matches nothing. Ids beyond
/// 2^53 are approximate; see [`UserId::parse`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserId(Option<f64>);

impl UserId {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, digits) = match s.get(..2) {
            Some("0x") | Some("0X") => (16, &s[2..]),
            _ => (10, s),
        };
        let end = digits
            .char_indices()
            .find(|(_, c)| !c.is_digit(radix))
            .map_or(digits.len(), |(i, _)| i);
        let digits = &digits[..end];
        if digits.is_empty() {
            return Self(None);
        }

        // Accumulated as f64 so any digit run has a value. Above 2^53 each
        // step rounds, so huge ids can land on a neighbouring float rather
        // than the single correctly rounded one.
        let magnitude = digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0f64, |acc, d| acc * f64::from(radix) + f64::from(d));
        Self(Some(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Truthiness as loosely-typed JSON clients understand it.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
