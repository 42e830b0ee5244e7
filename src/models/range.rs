//! Inclusive IPv4 address range.

use super::Ipv4;
use crate::processing::range_to_cidr;
use std::net::Ipv4Addr;

/// An inclusive address range with `start <= end`.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// Build a range, or None when `start > end` (empty range).
    pub fn new(start: u32, end: u32) -> Option<Range> {
        (start <= end).then_some(Range { start, end })
    }

    /// Build a range from command line endpoints.
    ///
    /// With `exclusive` the end address itself is left out. An exclusive
    /// end of 0.0.0.0 has nothing below it and gives None.
    pub fn from_endpoints(start: u32, end: u32, exclusive: bool) -> Option<Range> {
        let end = if exclusive { end.checked_sub(1)? } else { end };
        Range::new(start, end)
    }

    /// Number of addresses in the range (up to 2^32).
    pub fn len(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// Minimal ordered CIDR cover of the range.
    pub fn cidrs(&self) -> Vec<Ipv4> {
        range_to_cidr(self.start, self.end)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            Ipv4Addr::from(self.start),
            Ipv4Addr::from(self.end)
        )
    }
}
