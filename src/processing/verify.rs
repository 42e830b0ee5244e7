//! Cover checks for a list of CIDR blocks against an address range.

use crate::models::Ipv4;
use itertools::Itertools;
use std::error::Error;
use std::net::Ipv4Addr;

/// Check that `blocks` is the exact, ordered, minimal cover of `[start, end]`.
///
/// Returns the first violation found as an error.
pub fn verify_cover(blocks: &[Ipv4], start: u32, end: u32) -> Result<(), Box<dyn Error>> {
    if start > end {
        if blocks.is_empty() {
            return Ok(());
        }
        return Err(format!("Empty range but {} block(s) returned", blocks.len()).into());
    }

    let (first, last) = match (blocks.first(), blocks.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("No blocks returned for a non-empty range".into()),
    };

    if let Some(b) = blocks.iter().find(|b| !b.is_aligned()) {
        return Err(format!("Block {b} is not aligned to its prefix").into());
    }
    if first.addr != Ipv4Addr::from(start) {
        let start = Ipv4Addr::from(start);
        return Err(format!("First block {first} does not start at {start}").into());
    }
    if last.hi() != Ipv4Addr::from(end) {
        let end = Ipv4Addr::from(end);
        return Err(format!("Last block {last} does not end at {end}").into());
    }

    for (prev, next) in blocks.iter().tuple_windows() {
        let expected = u64::from(u32::from(prev.hi())) + 1;
        if u64::from(u32::from(next.addr)) != expected {
            return Err(format!("Blocks {prev} and {next} are not contiguous").into());
        }
        if mergeable(prev, next) {
            let merged = prev.mask - 1;
            return Err(format!("Blocks {prev} and {next} could be one /{merged}").into());
        }
    }

    Ok(())
}

/// True when `lo` and `hi` are the two halves of one larger aligned block.
fn mergeable(lo: &Ipv4, hi: &Ipv4) -> bool {
    lo.mask == hi.mask
        && lo.mask > 0
        && Ipv4 {
            addr: lo.addr,
            mask: lo.mask - 1,
        }
        .is_aligned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::range_to_cidr;

    fn block(a: u8, b: u8, c: u8, d: u8, mask: u8) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::new(a, b, c, d),
            mask,
        }
    }

    fn ip(a: u8, b: u8, c: u8, d: u8) -> u32 {
        u32::from(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn test_verify_computed_cover() {
        for (start, end) in [
            (0, 0),
            (0, u32::MAX),
            (1, u32::MAX - 1),
            (ip(10, 0, 0, 5), ip(10, 0, 1, 10)),
            (ip(192, 168, 1, 0), ip(192, 168, 1, 255)),
        ] {
            let blocks = range_to_cidr(start, end);
            verify_cover(&blocks, start, end).unwrap();
        }
    }

    #[test]
    fn test_verify_empty_range() {
        assert!(verify_cover(&[], 5, 2).is_ok());
        assert!(verify_cover(&[block(0, 0, 0, 5, 32)], 5, 2).is_err());
        assert!(verify_cover(&[], 2, 5).is_err());
    }

    #[test]
    fn test_verify_unaligned() {
        let err = verify_cover(&[block(10, 0, 0, 1, 31)], ip(10, 0, 0, 0), ip(10, 0, 0, 1))
            .unwrap_err();
        assert_eq!(err.to_string(), "Block 10.0.0.1/31 is not aligned to its prefix");
    }

    #[test]
    fn test_verify_gap() {
        let blocks = [block(10, 0, 0, 0, 32), block(10, 0, 0, 2, 32)];
        let err = verify_cover(&blocks, ip(10, 0, 0, 0), ip(10, 0, 0, 2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Blocks 10.0.0.0/32 and 10.0.0.2/32 are not contiguous"
        );
    }

    #[test]
    fn test_verify_wrong_bounds() {
        let blocks = [block(10, 0, 0, 0, 30)];
        assert!(verify_cover(&blocks, ip(10, 0, 0, 1), ip(10, 0, 0, 3)).is_err());
        assert!(verify_cover(&blocks, ip(10, 0, 0, 0), ip(10, 0, 0, 4)).is_err());
    }

    #[test]
    fn test_verify_not_minimal() {
        let blocks = [block(10, 0, 0, 0, 31), block(10, 0, 0, 2, 31)];
        let err = verify_cover(&blocks, ip(10, 0, 0, 0), ip(10, 0, 0, 3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Blocks 10.0.0.0/31 and 10.0.0.2/31 could be one /30"
        );

        // Equal size neighbours across an alignment boundary are fine.
        let blocks = [block(10, 0, 0, 2, 31), block(10, 0, 0, 4, 31)];
        assert!(verify_cover(&blocks, ip(10, 0, 0, 2), ip(10, 0, 0, 5)).is_ok());
    }
}
