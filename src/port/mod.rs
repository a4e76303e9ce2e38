//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the pure core and the outside world. The
//! core never calls them; the CLI wires adapters to them.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         Domain          │
//!     ┌──────────────┤ pairing · outcome ·     ├──────────────┐
//!     │              │ standings · event log   │              │
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────┐                                         ┌────────────┐
//! │  Store   │                                         │  Scorer    │
//! │ Adapter  │                                         │  Adapter   │
//! └──────────┘                                         └────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Store`] - Persistence for the event log
//! - [`Scorer`] - Source of match results while recording an event

mod scorer;
mod store;

pub use scorer::Scorer;
pub use store::Store;
