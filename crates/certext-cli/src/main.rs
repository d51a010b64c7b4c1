//! certext CLI - encode and decode sign-tool extensions, browse RDN attributes.

use clap::{Parser, Subcommand};

mod commands;
mod errors;
mod input;
mod output;

use commands::{issuer, owner, rdn};
use input::TextFormat;

#[derive(Parser)]
#[command(name = "certext")]
#[command(about = "Sign-tool certificate extension codec and RDN attribute lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// issuerSignTool extension values (1.2.643.100.112)
    Issuer {
        #[command(subcommand)]
        action: IssuerAction,
    },
    /// subjectSignTool extension values (1.2.643.100.111)
    Owner {
        #[command(subcommand)]
        action: OwnerAction,
    },
    /// RDN attribute OIDs and display names
    Rdn {
        #[command(subcommand)]
        action: RdnAction,
    },
}

#[derive(Subcommand)]
enum IssuerAction {
    /// Encode four tool strings as DER
    Encode {
        /// Signature tool
        sign_tool: String,
        /// CA tool
        ca_tool: String,
        /// Signature tool conformance certificate
        sign_tool_cert: String,
        /// CA tool conformance certificate
        ca_tool_cert: String,
        /// Output text encoding
        #[arg(long, value_enum, default_value_t = TextFormat::Hex)]
        format: TextFormat,
    },
    /// Decode a DER value
    Decode {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Input text encoding
        #[arg(long, value_enum, default_value_t = TextFormat::Hex)]
        format: TextFormat,
        /// Read all four elements separately and require exactly four
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum OwnerAction {
    /// Encode the owner's tool name as DER
    Encode {
        /// Signature tool name
        owner: String,
        /// Output text encoding
        #[arg(long, value_enum, default_value_t = TextFormat::Hex)]
        format: TextFormat,
    },
    /// Decode a DER value
    Decode {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Input text encoding
        #[arg(long, value_enum, default_value_t = TextFormat::Hex)]
        format: TextFormat,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum RdnAction {
    /// List supported attributes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the OID for a display name
    Oid {
        /// Display name, e.g. "Common Name (CN)"
        display_name: String,
    },
    /// Print the display name for an OID (unknown OIDs are echoed back)
    Name {
        /// Dotted OID, e.g. 2.5.4.3
        oid: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Issuer { action } => match action {
            IssuerAction::Encode {
                sign_tool,
                ca_tool,
                sign_tool_cert,
                ca_tool_cert,
                format,
            } => issuer::encode(
                [
                    sign_tool.as_str(),
                    ca_tool.as_str(),
                    sign_tool_cert.as_str(),
                    ca_tool_cert.as_str(),
                ],
                format,
            ),
            IssuerAction::Decode {
                input,
                format,
                strict,
                json,
            } => issuer::decode(input, format, strict, json),
        },
        Commands::Owner { action } => match action {
            OwnerAction::Encode { owner, format } => owner::encode(&owner, format),
            OwnerAction::Decode {
                input,
                format,
                json,
            } => owner::decode(input, format, json),
        },
        Commands::Rdn { action } => match action {
            RdnAction::List { json } => rdn::list(json),
            RdnAction::Oid { display_name } => rdn::oid(&display_name),
            RdnAction::Name { oid } => rdn::name(&oid),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
