//! Application services: use cases that tie the domain to the ports.

mod record;

pub use record::{check_participants, record_event};
