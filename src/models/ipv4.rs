//! IPv4 address and CIDR block utilities.
//!
//! Provides the [`Ipv4`] block type produced by the range conversion, the
//! address codec used by the command line, and the mask arithmetic both share.

use crate::error::RangeError;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_range_cidr::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Number of addresses in a block of the given prefix length.
///
/// Returned as u64 so that a /0 block (2^32 addresses) fits.
pub fn block_size(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast (highest) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Smallest prefix length a block starting at `ip` may have.
///
/// Bounded by the trailing zero bits of the address; 0.0.0.0 gives 0.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// Parse a textual address into its 32-bit big-endian form.
///
/// Dotted-quad IPv4 is accepted, as is an IPv4-mapped IPv6 literal
/// (`::ffff:a.b.c.d`). Anything else is [`RangeError::InvalidAddress`].
pub fn parse_addr(input: &str) -> Result<u32, RangeError> {
    let input = input.trim();
    let addr = match input.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => Some(v4),
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped(),
        Err(_) => None,
    };
    addr.map(u32::from)
        .ok_or_else(|| RangeError::InvalidAddress(input.to_string()))
}

/// An IPv4 CIDR block: base address plus prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The base (network) address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Create a block, rejecting a prefix length above [`MAX_LENGTH`].
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, Box<dyn Error>> {
        if mask > MAX_LENGTH {
            return Err(format!("Network length /{mask} is too long").into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Lowest (network) address in the block.
    ///
    /// # Panics
    /// If `mask` is above [`MAX_LENGTH`]; build with [`Ipv4::new`] to rule that out.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {self}: {e}"))
    }

    /// Highest (broadcast) address in the block.
    ///
    /// # Panics
    /// If `mask` is above [`MAX_LENGTH`].
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"))
    }

    /// Number of addresses covered, 0 for an invalid mask.
    pub fn size(&self) -> u64 {
        block_size(self.mask).unwrap_or(0)
    }

    /// True when `addr` has no bits set below the prefix.
    pub fn is_aligned(&self) -> bool {
        self.mask <= MAX_LENGTH && lo_mask(self.addr) <= self.mask
    }

    /// Check if an IP address is contained within this block.
    ///
    /// # Panics
    /// If `mask` is above [`MAX_LENGTH`].
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
