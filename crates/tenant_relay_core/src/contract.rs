use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier stamped on every invocation span, overriding the collector default.
pub const APPLICATION_ID: &str = "costlenz-example";
pub const TENANT_ID_ATTRIBUTE: &str = "tenant_id";
pub const APPLICATION_ID_ATTRIBUTE: &str = "application_id";
pub const TENANT_QUERY_PARAMETER: &str = "tenant";
pub const DERIVED_TENANT_MODULUS: i64 = 10;

/// Tenant a request is attributed to.
///
/// Serialized untagged: a named tenant is a JSON string, a derived tenant is a
/// JSON number, so the queue body carries whichever shape was resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TenantId {
    Derived(u8),
    Named(String),
}

impl TenantId {
    pub fn named(value: impl Into<String>) -> Self {
        Self::Named(value.into())
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived(_))
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derived(slot) => write!(f, "{slot}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub payload_for_tenant: TenantId,
}

impl OutboundMessage {
    pub fn new(tenant: TenantId) -> Self {
        Self {
            payload_for_tenant: tenant,
        }
    }

    /// JSON text used verbatim as both the queue body and the HTTP response body.
    /// Compact serde_json output, no whitespace: `{"payload_for_tenant":"acme"}`.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
