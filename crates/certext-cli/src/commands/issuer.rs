//! Issuer command implementation.

use certext_codec::{decode_issuer, encode_issuer, IssuerSignTool};
use log::info;

use crate::errors::CliError;
use crate::input::{read_der, TextFormat};
use crate::output::format_json;

pub fn encode(fields: [&str; 4], format: TextFormat) -> Result<(), CliError> {
    let [sign_tool, ca_tool, sign_tool_cert, ca_tool_cert] = fields;
    let der = encode_issuer(sign_tool, ca_tool, sign_tool_cert, ca_tool_cert)?;
    info!("encoded issuerSignTool value ({} bytes)", der.len());
    println!("{}", format.encode(&der));
    Ok(())
}

pub fn decode(
    input: Option<String>,
    format: TextFormat,
    strict: bool,
    json: bool,
) -> Result<(), CliError> {
    let der = read_der(input, format)?;

    let value = if strict {
        IssuerSignTool::from_der_strict(&der)?
    } else {
        let (sign_tool, ca_tool, sign_tool_cert, ca_tool_cert) = decode_issuer(&der)?;
        IssuerSignTool {
            sign_tool,
            ca_tool,
            sign_tool_cert,
            ca_tool_cert,
        }
    };

    if json {
        println!("{}", format_json(&value)?);
    } else {
        for field in value.fields() {
            println!("{}", field);
        }
    }
    Ok(())
}
