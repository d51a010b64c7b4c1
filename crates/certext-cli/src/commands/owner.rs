//! Owner command implementation.

use certext_codec::{decode_owner, encode_owner};
use log::info;
use serde_json::json;

use crate::errors::CliError;
use crate::input::{read_der, TextFormat};
use crate::output::format_json;

pub fn encode(owner: &str, format: TextFormat) -> Result<(), CliError> {
    let der = encode_owner(owner)?;
    info!("encoded subjectSignTool value ({} bytes)", der.len());
    println!("{}", format.encode(&der));
    Ok(())
}

pub fn decode(input: Option<String>, format: TextFormat, json: bool) -> Result<(), CliError> {
    let der = read_der(input, format)?;
    let owner = decode_owner(&der)?;

    if json {
        println!("{}", format_json(&json!({ "owner": owner }))?);
    } else {
        println!("{}", owner);
    }
    Ok(())
}
