//! Integration Tests Module
//!
//! End-to-end tests that drive the scanner against scripted ledgers and a
//! local JSON-RPC stub.

pub mod scan_pipeline;
