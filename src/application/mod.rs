//! Application layer - Use cases, ports and DTOs
//!
//! Orchestrates the domain on behalf of the presentation adapters without
//! knowing how input arrives or how output is drawn.

pub mod dto;
pub mod ports;
pub mod services;
