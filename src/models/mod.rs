//! Address value types.
//!
//! - [`IpAddress`] - immutable 4-octet IPv4 address, also used as a subnet mask
//! - [`is_mask`] - the contiguous-bits predicate a mask must satisfy

mod ipv4;
mod mask;

// Re-export public types
pub use ipv4::{parse_cidr, IpAddress, OCTETS_COUNT};
pub use mask::{is_mask, MAX_PREFIX_LENGTH, MIN_PREFIX_LENGTH, OCTET_LENGTH};
