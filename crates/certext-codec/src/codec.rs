use log::debug;
use serde::Serialize;

use crate::errors::DecodeError;
use crate::issuer::IssuerSignTool;
use crate::kind::ExtensionKind;
use crate::owner::SubjectSignTool;
use crate::validation::ValidationError;

/// A decoded extension value of either kind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ExtensionValue {
    /// Decoded `issuerSignTool` value.
    IssuerSignTool(IssuerSignTool),
    /// Decoded `subjectSignTool` value.
    SubjectSignTool(SubjectSignTool),
}

impl ExtensionValue {
    /// Kind of the decoded value.
    pub fn kind(&self) -> ExtensionKind {
        match self {
            ExtensionValue::IssuerSignTool(_) => ExtensionKind::IssuerSignTool,
            ExtensionValue::SubjectSignTool(_) => ExtensionKind::SubjectSignTool,
        }
    }
}

/// Encodes four tool strings as an `issuerSignTool` value.
///
/// Each argument is trimmed; an argument that is empty afterwards is rejected.
pub fn encode_issuer(
    url1: &str,
    url2: &str,
    url3: &str,
    url4: &str,
) -> Result<Vec<u8>, ValidationError> {
    let result = IssuerSignTool::new(url1, url2, url3, url4).and_then(|v| v.to_der_bytes());
    match &result {
        Ok(der) => debug!("encoded issuerSignTool ({} bytes)", der.len()),
        Err(err) => debug!("rejected issuerSignTool input: {}", err),
    }
    result
}

/// Decodes an `issuerSignTool` value.
///
/// Element 0 is returned in all four positions, matching how existing
/// consumers read this extension. [`IssuerSignTool::from_der_strict`] reads
/// the four elements separately.
pub fn decode_issuer(bytes: &[u8]) -> Result<(String, String, String, String), DecodeError> {
    let result = IssuerSignTool::from_der_first_element(bytes);
    match &result {
        Ok(_) => debug!("decoded issuerSignTool ({} bytes)", bytes.len()),
        Err(err) => debug!("failed to decode issuerSignTool: {}", err),
    }
    let value = result?;
    Ok((
        value.sign_tool,
        value.ca_tool,
        value.sign_tool_cert,
        value.ca_tool_cert,
    ))
}

/// Encodes the owner's tool name as a `subjectSignTool` value.
pub fn encode_owner(owner: &str) -> Result<Vec<u8>, ValidationError> {
    let result = SubjectSignTool::new(owner).and_then(|v| v.to_der_bytes());
    match &result {
        Ok(der) => debug!("encoded subjectSignTool ({} bytes)", der.len()),
        Err(err) => debug!("rejected subjectSignTool input: {}", err),
    }
    result
}

/// Decodes a `subjectSignTool` value.
pub fn decode_owner(bytes: &[u8]) -> Result<String, DecodeError> {
    let result = SubjectSignTool::from_der_bytes(bytes);
    if let Err(err) = &result {
        debug!("failed to decode subjectSignTool: {}", err);
    }
    result.map(SubjectSignTool::into_inner)
}

/// Decodes `bytes` according to `kind`.
pub fn decode_extension(kind: ExtensionKind, bytes: &[u8]) -> Result<ExtensionValue, DecodeError> {
    debug!("decoding {} from {} bytes", kind, bytes.len());
    match kind {
        ExtensionKind::IssuerSignTool => {
            IssuerSignTool::from_der_first_element(bytes).map(ExtensionValue::IssuerSignTool)
        }
        ExtensionKind::SubjectSignTool => {
            SubjectSignTool::from_der_bytes(bytes).map(ExtensionValue::SubjectSignTool)
        }
    }
}
