//! IPAM status - health and build metadata endpoint for the IPAM engine
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod error;
pub mod routes;
