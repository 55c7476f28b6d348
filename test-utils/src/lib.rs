//! Shared test utilities for the Vault engines SDK.
//!
//! This crate provides:
//! - Proptest generators for resource names, tokens and payload fields
//! - Vault response fixtures as JSON values

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

pub use generators::*;
