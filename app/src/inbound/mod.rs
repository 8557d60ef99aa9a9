//! Inbound adapters that drive the domain use-cases.

pub mod console;
