use thiserror::Error;

/// Validation errors raised while preparing a value for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value was empty after trimming whitespace.
    #[error("{field} must not be empty")]
    EmptyValue {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// The DER encoder refused the value (e.g. length overflow).
    #[error("{field} cannot be DER-encoded: {reason}")]
    Unencodable {
        /// Field or structure that failed to encode.
        field: &'static str,
        /// Encoder message.
        reason: String,
    },
}

/// Trims `value` and returns it, or fails if nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    Ok(trimmed.to_string())
}

/// Maps a DER encoder failure for `field` into a validation error.
pub(crate) fn unencodable(field: &'static str) -> impl FnOnce(der::Error) -> ValidationError {
    move |err| ValidationError::Unencodable {
        field,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_surrounding_whitespace() {
        assert_eq!(required("owner", "\t value \n").unwrap(), "value");
    }

    #[test]
    fn required_keeps_inner_whitespace() {
        assert_eq!(required("owner", " a  b ").unwrap(), "a  b");
    }

    #[test]
    fn required_rejects_blank() {
        for blank in ["", " ", "\t\r\n"] {
            assert_eq!(
                required("owner", blank),
                Err(ValidationError::EmptyValue { field: "owner" })
            );
        }
    }

    #[test]
    fn empty_value_message_names_field() {
        let err = ValidationError::EmptyValue { field: "ca_tool" };
        assert_eq!(err.to_string(), "ca_tool must not be empty");
    }
}
