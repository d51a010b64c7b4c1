//! Output formatting utilities.

use certext_rdn::RdnAttribute;
use serde::Serialize;

use crate::errors::CliError;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Formats an attribute as a simple table row.
pub fn format_table_row(attr: &RdnAttribute) -> String {
    format!(
        "{:<10} {:<28} {}",
        attr.short_name,
        attr.oid.to_string(),
        attr.display_name
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<10} {:<28} {}", "SHORT", "OID", "DISPLAY_NAME");
    println!("{}", "-".repeat(64));
}

#[cfg(test)]
mod tests {
    use super::*;
    use certext_rdn::RDN_ATTRIBUTES;

    #[test]
    fn table_row_aligns_columns() {
        let row = format_table_row(&RDN_ATTRIBUTES[0]);
        assert!(row.starts_with("CN         2.5.4.3 "));
        assert!(row.ends_with("Common Name (CN)"));
    }
}
