//! Application services

pub mod registry;

pub use registry::ResponderRegistry;
