//! Formprobe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod http;
pub mod reporting;

pub use adapters::{AssumeYes, ReqwestFormClient, StdinConfirm, SystemClock};
pub use reporting::ConsoleReporter;
