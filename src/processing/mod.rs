//! Range processing logic.
//!
//! - [`range_to_cidr`] - minimal CIDR cover of an address range
//! - [`verify_cover`] - checks a block list against its range

mod range_to_cidr;
mod verify;

// Re-export public functions
pub use range_to_cidr::{range_to_cidr, CidrBlocks};
pub use verify::verify_cover;
