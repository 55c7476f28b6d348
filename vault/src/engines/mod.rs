//! Engine trait implementations for [`crate::VaultSdk`].

mod ad;
mod alicloud;
mod aws;
