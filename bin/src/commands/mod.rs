//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod download;
pub(crate) mod funds;
