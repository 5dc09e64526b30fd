use serde_json::Value;

use crate::contract::{TenantId, DERIVED_TENANT_MODULUS, TENANT_QUERY_PARAMETER};

/// Resolves the tenant for an API Gateway proxy event.
///
/// A string `queryStringParameters.tenant` wins, including the empty string.
/// Anything else (no parameter map, a `null` map, a missing key, a non-string
/// value) falls back to [`derived_tenant`].
pub fn resolve_tenant(event: &Value, now_ms: i64) -> TenantId {
    query_tenant(event)
        .map(TenantId::named)
        .unwrap_or_else(|| derived_tenant(now_ms))
}

pub fn query_tenant(event: &Value) -> Option<&str> {
    event
        .get("queryStringParameters")?
        .get(TENANT_QUERY_PARAMETER)?
        .as_str()
}

/// Placeholder tenant in `[0, 9]` taken from the wall clock; varies between
/// calls, not uniformly distributed.
pub fn derived_tenant(now_ms: i64) -> TenantId {
    // rem_euclid keeps the slot in [0, MODULUS) even for pre-epoch clocks.
    let slot = now_ms.rem_euclid(DERIVED_TENANT_MODULUS);
    TenantId::Derived(slot as u8)
}
