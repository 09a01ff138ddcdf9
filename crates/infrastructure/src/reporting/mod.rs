//! Report output

mod console;

pub use console::ConsoleReporter;
