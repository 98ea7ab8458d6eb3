//! Inbound ports - Interfaces that the application exposes to the outside world

mod adventure_port;

pub use adventure_port::AdventurePort;
