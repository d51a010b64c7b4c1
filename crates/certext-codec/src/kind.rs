use std::fmt;

use const_oid::ObjectIdentifier;
use serde::{Deserialize, Serialize};

/// `subjectSignTool` extension OID.
pub const ID_SUBJECT_SIGN_TOOL: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.643.100.111");

/// `issuerSignTool` extension OID.
pub const ID_ISSUER_SIGN_TOOL: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.643.100.112");

/// The extension values this crate knows how to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionKind {
    /// Four-string description of the issuing CA's tools.
    IssuerSignTool,
    /// Single string naming the subject's signature tool.
    SubjectSignTool,
}

impl ExtensionKind {
    /// Extension OID carried in the certificate's `extnID`.
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            ExtensionKind::IssuerSignTool => ID_ISSUER_SIGN_TOOL,
            ExtensionKind::SubjectSignTool => ID_SUBJECT_SIGN_TOOL,
        }
    }

    /// ASN.1 name of the extension.
    pub const fn name(self) -> &'static str {
        match self {
            ExtensionKind::IssuerSignTool => "issuerSignTool",
            ExtensionKind::SubjectSignTool => "subjectSignTool",
        }
    }

    /// Resolves an extension OID; `None` for anything else.
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        [ExtensionKind::IssuerSignTool, ExtensionKind::SubjectSignTool]
            .into_iter()
            .find(|kind| kind.oid() == *oid)
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.oid())
    }
}
