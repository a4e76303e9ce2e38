//! JSON file persistence for the event log.

pub mod model;
mod store;

pub use store::JsonStore;
