//! RDN attribute table for distinguished-name editors.
//!
//! Maps the 17 supported Relative Distinguished Name attribute OIDs to the
//! labels a DN editor shows, in both directions. The table is fixed: a
//! [`RdnRegistry`] is built from it once and is read-only afterwards.
//!
//! ```rust
//! use certext_rdn::{display_name_for_oid, oid_for_display_name};
//!
//! assert_eq!(display_name_for_oid("2.5.4.3"), "Common Name (CN)");
//! assert_eq!(display_name_for_oid("9.9.9.9"), "9.9.9.9");
//! assert!(oid_for_display_name("Common Name (CN)").is_some());
//! ```
//!
#![deny(missing_docs)]

/// Static attribute table.
pub mod attributes;
/// Lookup maps built over the table.
pub mod registry;

pub use attributes::{RdnAttribute, RDN_ATTRIBUTES};
pub use registry::RdnRegistry;

use const_oid::ObjectIdentifier;

/// Labels in table order, from the global registry.
pub fn display_names() -> Vec<&'static str> {
    RdnRegistry::global().display_names().collect()
}

/// OID for an exact display-name match.
pub fn oid_for_display_name(name: &str) -> Option<ObjectIdentifier> {
    RdnRegistry::global().oid_for_display_name(name)
}

/// Label for a dotted OID, or the OID itself when it is not in the table.
pub fn display_name_for_oid(oid: &str) -> &str {
    RdnRegistry::global().display_name_for_oid(oid)
}
