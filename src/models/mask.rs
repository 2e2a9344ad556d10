//! Subnet mask bit patterns.
//!
//! A mask is an ordinary [`IpAddress`] made of all-ones octets, at most one
//! transition octet, then all-zero octets. Nothing enforces that at construction
//! time; callers that use a value in a masking role check it with
//! [`IpAddress::check_mask`].

use super::ipv4::{IpAddress, OCTETS_COUNT};
use crate::error::{AddressError, Result};

/// Number of bits in one octet.
pub const OCTET_LENGTH: u32 = 8;
/// Smallest prefix length accepted by [`IpAddress::from_prefix_len`].
pub const MIN_PREFIX_LENGTH: i32 = 1;
/// Largest prefix length, a host route.
pub const MAX_PREFIX_LENGTH: i32 = 32;

/// Check that `octets` may be used as a mask.
///
/// Octets are scanned in order: `255` octets first, then one transition octet
/// whose set bits, once its trailing zeros are dropped, are all ones, then only
/// zero octets. The run of ones in the transition octet need not start at its top
/// bit, so `255.255.255.1` passes. An all-zero value passes (prefix length 0) even
/// though [`IpAddress::from_prefix_len`] refuses to build one.
///
/// # Examples
/// ```
/// use ipv4_subnet_mask::models::is_mask;
/// assert!(is_mask(&[255, 255, 248, 0]));
/// assert!(is_mask(&[255, 7, 0, 0]));
/// assert!(!is_mask(&[255, 0, 255, 0]));
/// ```
pub fn is_mask(octets: &[u8; OCTETS_COUNT]) -> bool {
    let mut expect_only_zeros = false;

    for &octet in octets {
        if expect_only_zeros && octet != 0 {
            return false;
        }
        if octet == u8::MAX {
            continue;
        }
        let mut bits = octet;
        while bits != 0 && bits & 1 == 0 {
            bits >>= 1;
        }
        while bits != 0 {
            if bits & 1 != 1 {
                return false;
            }
            bits >>= 1;
        }
        expect_only_zeros = true;
    }
    true
}

/// Build the canonical mask octets for a prefix length in `0..=32`.
pub(crate) fn raw_mask(len: u8) -> [u8; OCTETS_COUNT] {
    let mut raw = [u8::MAX; OCTETS_COUNT];
    let idx = (len as u32 / OCTET_LENGTH) as usize;

    if idx < OCTETS_COUNT {
        let rest = len as u32 % OCTET_LENGTH;
        raw[idx] = if rest == 0 {
            0
        } else {
            u8::MAX << (OCTET_LENGTH - rest)
        };
        raw[idx + 1..].fill(0);
    }
    raw
}

impl IpAddress {
    /// `true` when this value may be used as a subnet mask.
    pub fn is_valid_mask(&self) -> bool {
        is_mask(&self.octets())
    }

    /// Fail with [`AddressError::InvalidMask`] unless [`is_mask`] accepts this value.
    pub fn check_mask(&self) -> Result<()> {
        if self.is_valid_mask() {
            Ok(())
        } else {
            log::debug!("Rejecting invalid mask {self}");
            Err(AddressError::InvalidMask(*self))
        }
    }

    /// Number of leading one-bits, `0..=32`, of a mask whose ones start at the top bit.
    ///
    /// Masks that pass [`is_mask`] with the ones shifted down, such as
    /// `255.255.255.1`, have no prefix length and fail with
    /// [`AddressError::InvalidMask`].
    pub fn prefix_len(&self) -> Result<u8> {
        self.check_mask()?;
        let len = self.to_u32().leading_ones() as u8;
        if raw_mask(len) != self.octets() {
            log::debug!("Mask {self} has no prefix length");
            return Err(AddressError::InvalidMask(*self));
        }
        Ok(len)
    }
}
