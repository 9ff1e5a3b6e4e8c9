//! The identity claim decoded from a verified bearer token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims extracted from a verified token.
///
/// Every registered field is optional because the issuer decides what to
/// embed. A token without `role` still verifies; it simply never passes a
/// role check. Timestamps are JSON NumericDates, so fractional seconds are
/// accepted. Anything not modelled below is kept in [`Claims::extra`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Role label used by role checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
    /// Issued-at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<f64>,
    /// Not-before timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// True when the claim carries a role contained in `allowed`.
    pub fn has_any_role<'a, I>(&self, allowed: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.role() {
            Some(role) => allowed.into_iter().any(|r| r == role),
            None => false,
        }
    }
}
