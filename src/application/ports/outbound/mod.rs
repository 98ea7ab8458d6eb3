//! Outbound ports - Interfaces that the application requires from external systems

mod blueprint_port;

pub use blueprint_port::BlueprintSource;
