//! Subcommand implementations.

pub mod issuer;
pub mod owner;
pub mod rdn;
