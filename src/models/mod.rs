//! Domain models for IPv4 range conversion.
//!
//! - [`Ipv4`] - CIDR block with address helpers
//! - [`Range`] - inclusive address range

mod ipv4;
mod range;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, lo_mask, parse_addr, Ipv4, MAX_LENGTH,
};
pub use range::Range;
