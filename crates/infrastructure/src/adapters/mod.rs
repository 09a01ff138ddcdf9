//! Infrastructure adapters

mod clock;
mod confirm;
mod reqwest_client;

pub use clock::SystemClock;
pub use confirm::{AssumeYes, StdinConfirm, confirm_with};
pub use reqwest_client::ReqwestFormClient;
