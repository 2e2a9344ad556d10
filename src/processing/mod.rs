//! Subnet arithmetic.
//!
//! - [`subnet`] - masking, subnet membership, host counting and broadcast on [`IpAddress`]
//! - [`report`] - [`HostCountReport`] bundling a host count with its net
//!
//! [`IpAddress`]: crate::models::IpAddress

mod report;
mod subnet;

pub use report::HostCountReport;
