use tenant_relay_core::contract::TenantId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&TenantId> for AttributeValue {
    fn from(value: &TenantId) -> Self {
        match value {
            TenantId::Derived(slot) => Self::Int(i64::from(*slot)),
            TenantId::Named(name) => Self::Str(name.clone()),
        }
    }
}

/// Tracing context the handler annotates. Setting an attribute cannot fail;
/// an unavailable backend simply drops it.
pub trait TraceContext {
    fn set_attribute(&self, key: &'static str, value: AttributeValue);
}

/// Records onto fields declared when the span was opened. Disabled spans and
/// undeclared fields are ignored by `tracing`.
impl TraceContext for tracing::Span {
    fn set_attribute(&self, key: &'static str, value: AttributeValue) {
        match value {
            AttributeValue::Str(text) => {
                self.record(key, text.as_str());
            }
            AttributeValue::Int(number) => {
                self.record(key, number);
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTraceContext;

impl TraceContext for NoopTraceContext {
    fn set_attribute(&self, _key: &'static str, _value: AttributeValue) {}
}
