//! Range to CIDR conversion.
//!
//! Splits an inclusive address range into the minimal ordered list of
//! aligned CIDR blocks, always taking the largest block that starts at the
//! current address and still ends inside the range.

use crate::models::{lo_mask, Ipv4, MAX_LENGTH};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Lazy iterator over the CIDR blocks covering `[start, end]`.
///
/// Position and end are held as u64 so stepping past 255.255.255.255, or
/// emitting 0.0.0.0/0, never wraps.
#[derive(Debug, Clone)]
pub struct CidrBlocks {
    cur: u64,
    end: u64,
}

impl CidrBlocks {
    /// Iterate the cover of `[start, end]`. Empty when `start > end`.
    pub fn new(start: u32, end: u32) -> CidrBlocks {
        CidrBlocks {
            cur: u64::from(start),
            end: u64::from(end),
        }
    }
}

impl Iterator for CidrBlocks {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.cur > self.end {
            return None;
        }
        let addr = Ipv4Addr::from(u32::try_from(self.cur).ok()?);

        // Largest aligned block first, shrink until it fits below end.
        let mut mask = lo_mask(addr);
        while self.cur + (1u64 << (MAX_LENGTH - mask)) - 1 > self.end {
            mask += 1;
        }
        self.cur += 1u64 << (MAX_LENGTH - mask);

        let block = Ipv4 { addr, mask };
        log::trace!("emit {}", block.to_string().cyan());
        Some(block)
    }
}

impl std::iter::FusedIterator for CidrBlocks {}

/// Minimal ordered CIDR cover of the inclusive range `[start, end]`.
///
/// Returns an empty list when `start > end`.
///
/// # Examples
/// ```
/// use ip_range_cidr::processing::range_to_cidr;
/// let blocks: Vec<String> = range_to_cidr(0x0A000001, 0x0A000003)
///     .iter()
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(blocks, ["10.0.0.1/32", "10.0.0.2/31"]);
/// ```
pub fn range_to_cidr(start: u32, end: u32) -> Vec<Ipv4> {
    if start > end {
        log::debug!(
            "empty range {} > {}",
            Ipv4Addr::from(start),
            Ipv4Addr::from(end)
        );
        return Vec::new();
    }
    let blocks: Vec<Ipv4> = CidrBlocks::new(start, end).collect();
    log::debug!(
        "range {}-{} -> {} block(s)",
        Ipv4Addr::from(start),
        Ipv4Addr::from(end),
        blocks.len()
    );
    blocks
}
