//! Ports - Trait boundaries between the application and its adapters

pub mod inbound;
pub mod outbound;
