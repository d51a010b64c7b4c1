use const_oid::ObjectIdentifier;
use serde::{Serialize, Serializer};

/// One row of the attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RdnAttribute {
    /// Conventional short name (`CN`, `OU`, ...).
    pub short_name: &'static str,
    /// Attribute type OID.
    #[serde(serialize_with = "dotted")]
    pub oid: ObjectIdentifier,
    /// Label shown to users.
    pub display_name: &'static str,
}

fn dotted<S: Serializer>(oid: &ObjectIdentifier, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(oid)
}

macro_rules! rdn {
    ($short:expr, $oid:expr, $label:expr) => {
        RdnAttribute {
            short_name: $short,
            oid: ObjectIdentifier::new_unwrap($oid),
            display_name: $label,
        }
    };
}

/// Supported attributes, in presentation order.
pub static RDN_ATTRIBUTES: [RdnAttribute; 17] = [
    rdn!("CN", "2.5.4.3", "Common Name (CN)"),
    rdn!("OU", "2.5.4.11", "Organisation Unit (OU)"),
    rdn!("O", "2.5.4.10", "Organisation Name (O)"),
    rdn!("L", "2.5.4.7", "Locality Name (L)"),
    rdn!("ST", "2.5.4.8", "State Name (ST)"),
    rdn!("C", "2.5.4.6", "Country (C)"),
    rdn!("E", "1.2.840.113549.1.9.1", "Email (E)"),
    rdn!("SN", "2.5.4.5", "Serial Number (SN)"),
    rdn!("GIVENNAME", "2.5.4.42", "Given Name (GIVENNAME)"),
    rdn!("SURNAME", "2.5.4.4", "Surname (SURNAME)"),
    rdn!("DC", "0.9.2342.19200300.100.1.25", "Domain Component (DC)"),
    rdn!("UID", "0.9.2342.19200300.100.1.1", "User ID (UID)"),
    // Russian qualified-certificate attributes
    rdn!("INN", "1.2.643.3.131.1.1", "INN"),
    rdn!("OGRN", "1.2.643.100.1", "OGRN"),
    rdn!("OGRNIP", "1.2.643.100.5", "OGRNIP"),
    rdn!("SNILS", "1.2.643.100.3", "SNILS"),
    rdn!("STREET", "2.5.4.9", "Street (STREET)"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn columns_are_unique() {
        let shorts: HashSet<_> = RDN_ATTRIBUTES.iter().map(|a| a.short_name).collect();
        let oids: HashSet<_> = RDN_ATTRIBUTES.iter().map(|a| a.oid).collect();
        let labels: HashSet<_> = RDN_ATTRIBUTES.iter().map(|a| a.display_name).collect();
        assert_eq!(shorts.len(), RDN_ATTRIBUTES.len());
        assert_eq!(oids.len(), RDN_ATTRIBUTES.len());
        assert_eq!(labels.len(), RDN_ATTRIBUTES.len());
    }

    #[test]
    fn serializes_oid_in_dotted_form() {
        let json = serde_json::to_value(RDN_ATTRIBUTES[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "short_name": "CN",
                "oid": "2.5.4.3",
                "display_name": "Common Name (CN)"
            })
        );
    }
}
