use std::collections::HashMap;

use const_oid::ObjectIdentifier;
use lazy_static::lazy_static;
use log::trace;

use crate::attributes::{RdnAttribute, RDN_ATTRIBUTES};

lazy_static! {
    static ref GLOBAL: RdnRegistry = RdnRegistry::new();
}

/// Read-only lookup maps over [`RDN_ATTRIBUTES`].
#[derive(Debug)]
pub struct RdnRegistry {
    by_display_name: HashMap<&'static str, &'static RdnAttribute>,
    by_oid: HashMap<String, &'static RdnAttribute>,
}

impl RdnRegistry {
    /// Builds the maps from the fixed table.
    pub fn new() -> Self {
        let by_display_name = RDN_ATTRIBUTES
            .iter()
            .map(|attr| (attr.display_name, attr))
            .collect();
        let by_oid = RDN_ATTRIBUTES
            .iter()
            .map(|attr| (attr.oid.to_string(), attr))
            .collect();
        trace!("built RDN registry with {} attributes", RDN_ATTRIBUTES.len());
        Self {
            by_display_name,
            by_oid,
        }
    }

    /// Process-wide instance, built on first use.
    pub fn global() -> &'static RdnRegistry {
        &*GLOBAL
    }

    /// Every attribute, in table order.
    pub fn attributes(&self) -> &'static [RdnAttribute] {
        &RDN_ATTRIBUTES
    }

    /// Labels, in table order.
    pub fn display_names(&self) -> impl Iterator<Item = &'static str> {
        RDN_ATTRIBUTES.iter().map(|attr| attr.display_name)
    }

    /// Exact-match lookup by label.
    pub fn oid_for_display_name(&self, name: &str) -> Option<ObjectIdentifier> {
        self.by_display_name.get(name).map(|attr| attr.oid)
    }

    /// Label for a dotted OID. Unknown OIDs are returned unchanged.
    pub fn display_name_for_oid<'a>(&self, oid: &'a str) -> &'a str {
        match self.by_oid.get(oid) {
            Some(attr) => attr.display_name,
            None => oid,
        }
    }

    /// Attribute for a dotted OID.
    pub fn attribute_for_oid(&self, oid: &str) -> Option<&'static RdnAttribute> {
        self.by_oid.get(oid).copied()
    }

    /// ASCII case-insensitive lookup by short name (`cn`, `CN`).
    pub fn attribute_for_short_name(&self, short: &str) -> Option<&'static RdnAttribute> {
        RDN_ATTRIBUTES
            .iter()
            .find(|attr| attr.short_name.eq_ignore_ascii_case(short))
    }
}

impl Default for RdnRegistry {
    fn default() -> Self {
        Self::new()
    }
}
