//! Convert IPv4 address ranges into the minimal ordered list of CIDR blocks.
//!
//! The core is [`processing::range_to_cidr`]; the rest of the crate parses
//! command line input, formats output and sets up logging.

pub mod cli;
pub mod config;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use cli::{run, Cli};
pub use error::RangeError;
pub use models::{Ipv4, Range};
pub use processing::{range_to_cidr, verify_cover};
