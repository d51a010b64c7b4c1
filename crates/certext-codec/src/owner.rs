use const_oid::{AssociatedOid, ObjectIdentifier};
use der::{Decode, Encode};
use serde::Serialize;

use crate::errors::DecodeError;
use crate::kind::ID_SUBJECT_SIGN_TOOL;
use crate::validation::{required, unencodable, ValidationError};

/// SubjectSignTool extension value: `SubjectSignTool ::= UTF8String`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubjectSignTool(String);

impl AssociatedOid for SubjectSignTool {
    const OID: ObjectIdentifier = ID_SUBJECT_SIGN_TOOL;
}

impl SubjectSignTool {
    /// Builds a value from raw input; surrounding whitespace is dropped.
    pub fn new(owner: &str) -> Result<Self, ValidationError> {
        required("owner", owner).map(Self)
    }

    /// Tool name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the tool name.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// DER-encodes the value as a single `UTF8String`.
    pub fn to_der_bytes(&self) -> Result<Vec<u8>, ValidationError> {
        self.0.to_der().map_err(unencodable("owner"))
    }

    /// Decodes exactly one `UTF8String`.
    pub fn from_der_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self(String::from_der(bytes)?))
    }
}

impl AsRef<str> for SubjectSignTool {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
