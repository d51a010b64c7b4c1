//! DER codec for the sign-tool certificate extension values.
//!
//! Two extension values are supported:
//! - `IssuerSignTool` (`1.2.643.100.112`): a `SEQUENCE` of four `UTF8String`s
//!   naming the CA's signature tool, CA tool and their certificates
//! - `SubjectSignTool` (`1.2.643.100.111`): a single `UTF8String` naming the
//!   subject's signature tool
//!
//! Encoding trims its inputs and rejects empty values. Decoding is strict DER:
//! wrong tags, bad lengths and trailing bytes are all rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use certext_codec::{decode_owner, encode_owner};
//!
//! let der = encode_owner("  CryptoPro CSP 5.0 ")?;
//! assert_eq!(der[0], 0x0c);
//! assert_eq!(decode_owner(&der)?, "CryptoPro CSP 5.0");
//! # Ok::<(), certext_codec::ExtensionError>(())
//! ```
//!
#![deny(missing_docs)]

/// Free-function entry points used by hosts.
pub mod codec;
/// Decode and umbrella error types.
pub mod errors;
/// `IssuerSignTool` value type.
pub mod issuer;
/// Extension identifiers.
pub mod kind;
/// `SubjectSignTool` value type.
pub mod owner;
/// Input validation shared by the encoders.
pub mod validation;

pub use codec::{
    decode_extension, decode_issuer, decode_owner, encode_issuer, encode_owner, ExtensionValue,
};
pub use errors::{DecodeError, ExtensionError};
pub use issuer::{IssuerSignTool, ISSUER_FIELD_COUNT};
pub use kind::{ExtensionKind, ID_ISSUER_SIGN_TOOL, ID_SUBJECT_SIGN_TOOL};
pub use owner::SubjectSignTool;
pub use validation::ValidationError;
