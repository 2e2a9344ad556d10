//! Error types for address and mask operations.

use crate::models::IpAddress;
use thiserror::Error;

/// Every way constructing or combining [`IpAddress`] values can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Mask length {0} must be in range [1..32]")]
    InvalidPrefixLength(i32),

    #[error("Invalid mask: {0}")]
    InvalidMask(IpAddress),

    #[error("Mask cannot be missing")]
    MissingMask,

    #[error("IP addresses {first} and {second} are not in the same net under mask {mask}")]
    NotSameSubnet {
        first: IpAddress,
        second: IpAddress,
        mask: IpAddress,
    },
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, AddressError>;
