//! Unit Tests Module
//!
//! Component-level tests exercised through the public library API.

pub mod detection;
pub mod rpc;
