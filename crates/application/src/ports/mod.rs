//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod confirm;
mod form_client;
mod reporter;

pub use clock::Clock;
pub use confirm::Confirm;
pub use form_client::{FormClient, FormClientError, FormRequest};
pub use reporter::Reporter;
