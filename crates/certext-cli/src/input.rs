//! Reading encoded input and rendering encoded output.

use std::io::{self, Read};

use base64::Engine;
use clap::ValueEnum;
use log::debug;

use crate::errors::CliError;

/// Text encoding for DER bytes on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextFormat {
    Hex,
    Base64,
}

impl TextFormat {
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            TextFormat::Hex => hex::encode(bytes),
            TextFormat::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    pub fn decode(self, text: &str) -> Result<Vec<u8>, CliError> {
        let text = text.trim();
        let bytes = match self {
            TextFormat::Hex => hex::decode(text)?,
            TextFormat::Base64 => base64::engine::general_purpose::STANDARD.decode(text)?,
        };
        Ok(bytes)
    }
}

/// Reads encoded text from `path`, or stdin when no path is given, and decodes it.
pub fn read_der(path: Option<String>, format: TextFormat) -> Result<Vec<u8>, CliError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(&path).map_err(|source| CliError::Io {
            source_name: path.clone(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Io {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            buffer
        }
    };
    let bytes = format.decode(&text)?;
    debug!("read {} DER bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decode_ignores_surrounding_whitespace() {
        assert_eq!(TextFormat::Hex.decode(" 0c0161\n").unwrap(), vec![0x0c, 0x01, 0x61]);
    }

    #[test]
    fn base64_matches_hex() {
        let bytes = [0x0c, 0x03, b'a', b'b', b'c'];
        let text = TextFormat::Base64.encode(&bytes);
        assert_eq!(text, "DANhYmM=");
        assert_eq!(TextFormat::Base64.decode(&text).unwrap(), bytes.to_vec());
    }

    #[test]
    fn bad_hex_is_an_error() {
        assert!(matches!(TextFormat::Hex.decode("zz"), Err(CliError::Hex(_))));
    }
}
