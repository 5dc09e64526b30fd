pub use tenant_relay_core::{contract, tenant};
