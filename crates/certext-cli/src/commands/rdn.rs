//! RDN command implementation.

use certext_rdn::RdnRegistry;

use crate::errors::CliError;
use crate::output::{format_json, format_table_row, print_table_header};

pub fn list(json: bool) -> Result<(), CliError> {
    let attributes = RdnRegistry::global().attributes();

    if json {
        println!("{}", format_json(&attributes)?);
        return Ok(());
    }

    print_table_header();
    for attr in attributes {
        println!("{}", format_table_row(attr));
    }
    Ok(())
}

pub fn oid(display_name: &str) -> Result<(), CliError> {
    let oid = RdnRegistry::global()
        .oid_for_display_name(display_name)
        .ok_or_else(|| CliError::UnknownDisplayName(display_name.to_string()))?;
    println!("{}", oid);
    Ok(())
}

pub fn name(oid: &str) -> Result<(), CliError> {
    println!("{}", RdnRegistry::global().display_name_for_oid(oid));
    Ok(())
}
