use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::SpoligotypeDb;
use crate::cli::OutputFormat;
use crate::core::code::BinaryCode;
use crate::core::encoding::{to_hex, to_octal};
use crate::core::types::Spoligotype;
use crate::matching::resolver::resolve;

#[derive(Args)]
pub struct EncodeArgs {
    /// 43-character binary code, one character per spacer
    #[arg(required = true)]
    pub binary: String,

    /// Also look the code up in this spoligotype database
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

/// Execute encode subcommand
///
/// # Errors
///
/// Returns an error if the binary code is malformed or the database cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: EncodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let binary: BinaryCode = args.binary.trim().parse()?;
    let octal = to_octal(&binary);
    let hex = to_hex(&binary);

    let spoligotype = match &args.database {
        Some(path) => {
            let db = SpoligotypeDb::load_from_file(path)?;
            if verbose {
                eprintln!("Loaded {} spoligotypes", db.len());
            }
            Some(resolve(&binary, &db))
        }
        None => None,
    };

    match format {
        OutputFormat::Text => {
            println!("Binary:      {binary}");
            println!("Octal:       {octal}");
            println!("Hexadecimal: {hex}");
            if let Some(s) = &spoligotype {
                println!("Spoligotype: {s}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "binary": binary,
                "octal": octal,
                "hexadecimal": hex,
                "spoligotype": spoligotype.as_ref().map(ToString::to_string),
                "identifier": spoligotype.as_ref().and_then(Spoligotype::identifier),
                "known": spoligotype.as_ref().map(Spoligotype::is_known),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("binary\toctal\thexadecimal\tspoligotype");
            println!(
                "{binary}\t{octal}\t{hex}\t{}",
                spoligotype
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            );
        }
    }

    Ok(())
}
