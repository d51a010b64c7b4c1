use const_oid::{AssociatedOid, ObjectIdentifier};
use der::{Decode, Encode, Sequence};
use serde::Serialize;

use crate::errors::DecodeError;
use crate::kind::ID_ISSUER_SIGN_TOOL;
use crate::validation::{required, unencodable, ValidationError};

/// Number of `UTF8String` elements in an `IssuerSignTool` value.
pub const ISSUER_FIELD_COUNT: usize = 4;

/// IssuerSignTool extension value.
///
/// ```text
/// IssuerSignTool ::= SEQUENCE {
///     signTool      UTF8String,
///     cATool        UTF8String,
///     signToolCert  UTF8String,
///     cAToolCert    UTF8String
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence, Serialize)]
pub struct IssuerSignTool {
    /// Name of the CA's signature tool.
    pub sign_tool: String,
    /// Name of the CA tool.
    pub ca_tool: String,
    /// Conformance certificate of the signature tool.
    pub sign_tool_cert: String,
    /// Conformance certificate of the CA tool.
    pub ca_tool_cert: String,
}

impl AssociatedOid for IssuerSignTool {
    const OID: ObjectIdentifier = ID_ISSUER_SIGN_TOOL;
}

impl IssuerSignTool {
    /// Builds a value from raw input, trimming each field.
    ///
    /// Fails on the first field that is empty after trimming, in argument order.
    pub fn new(
        sign_tool: &str,
        ca_tool: &str,
        sign_tool_cert: &str,
        ca_tool_cert: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sign_tool: required("sign_tool", sign_tool)?,
            ca_tool: required("ca_tool", ca_tool)?,
            sign_tool_cert: required("sign_tool_cert", sign_tool_cert)?,
            ca_tool_cert: required("ca_tool_cert", ca_tool_cert)?,
        })
    }

    /// Fields in encoding order.
    pub fn fields(&self) -> [&str; ISSUER_FIELD_COUNT] {
        [
            &self.sign_tool,
            &self.ca_tool,
            &self.sign_tool_cert,
            &self.ca_tool_cert,
        ]
    }

    /// DER-encodes the value. Fields are checked again since they are public.
    pub fn to_der_bytes(&self) -> Result<Vec<u8>, ValidationError> {
        let names = ["sign_tool", "ca_tool", "sign_tool_cert", "ca_tool_cert"];
        for (field, value) in names.into_iter().zip(self.fields()) {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyValue { field });
            }
        }
        self.to_der().map_err(unencodable("issuer_sign_tool"))
    }

    /// Decodes four independent fields.
    ///
    /// Unlike [`crate::decode_issuer`], every element is kept in its own slot and
    /// the sequence must hold exactly [`ISSUER_FIELD_COUNT`] strings.
    pub fn from_der_strict(bytes: &[u8]) -> Result<Self, DecodeError> {
        let elements = Vec::<String>::from_der(bytes)?;
        let fields: [String; ISSUER_FIELD_COUNT] =
            elements
                .try_into()
                .map_err(|rest: Vec<String>| DecodeError::FieldCount {
                    expected: ISSUER_FIELD_COUNT,
                    actual: rest.len(),
                })?;
        let [sign_tool, ca_tool, sign_tool_cert, ca_tool_cert] = fields;
        Ok(Self {
            sign_tool,
            ca_tool,
            sign_tool_cert,
            ca_tool_cert,
        })
    }

    /// Compatible reading: the first element fills all four slots.
    ///
    /// Existing producers and consumers of this extension read the value this
    /// way, so it is kept as-is. Use [`IssuerSignTool::from_der_strict`] for
    /// a field-by-field reading.
    pub fn from_der_first_element(bytes: &[u8]) -> Result<Self, DecodeError> {
        let first = Vec::<String>::from_der(bytes)?
            .into_iter()
            .next()
            .ok_or(DecodeError::EmptySequence)?;
        Ok(Self {
            sign_tool: first.clone(),
            ca_tool: first.clone(),
            sign_tool_cert: first.clone(),
            ca_tool_cert: first,
        })
    }
}
