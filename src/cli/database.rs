use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::{DatabaseEntry, SpoligotypeDb};
use crate::cli::OutputFormat;
use crate::core::encoding::to_octal;

#[derive(Args)]
pub struct DatabaseArgs {
    /// Spoligotype database file
    #[arg(required = true)]
    pub path: PathBuf,

    /// Show the entries for this identifier (e.g. SB0145)
    #[arg(long)]
    pub id: Option<String>,
}

/// Execute database subcommand
///
/// # Errors
///
/// Returns an error if the database cannot be loaded or the identifier is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DatabaseArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let db = SpoligotypeDb::load_from_file(&args.path)?;

    match &args.id {
        Some(id) => {
            let entries = db.find_by_identifier(id);
            if entries.is_empty() {
                anyhow::bail!("Spoligotype '{id}' not found in {}", args.path.display());
            }
            print_entries(&db, &entries, format)?;
        }
        None => print_summary(&args, &db, format)?,
    }

    Ok(())
}

fn print_summary(
    args: &DatabaseArgs,
    db: &SpoligotypeDb,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Database: {}", args.path.display());
            println!("  Entries: {}", db.len());
            println!("  Distinct binary codes: {}", db.distinct_codes());
            if db.superseded() > 0 {
                println!(
                    "  Superseded by later duplicates: {} (last entry wins)",
                    db.superseded()
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": args.path.display().to_string(),
                "entries": db.len(),
                "distinct_codes": db.distinct_codes(),
                "superseded": db.superseded(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("path\tentries\tdistinct_codes\tsuperseded");
            println!(
                "{}\t{}\t{}\t{}",
                args.path.display(),
                db.len(),
                db.distinct_codes(),
                db.superseded()
            );
        }
    }
    Ok(())
}

fn print_entries(
    db: &SpoligotypeDb,
    entries: &[&DatabaseEntry],
    format: OutputFormat,
) -> anyhow::Result<()> {
    // An entry is active unless a later line with the same code shadows it
    let is_active = |e: &DatabaseEntry| db.get(&e.binary).is_some_and(|w| w.line == e.line);

    match format {
        OutputFormat::Text => {
            for &e in entries {
                println!("{} (line {})", e.identifier, e.line);
                println!("   Binary: {}", e.binary);
                println!("   Octal:  {}", to_octal(&e.binary));
                if !is_active(e) {
                    println!("   Superseded by a later entry with the same code");
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = entries
                .iter()
                .map(|&e| {
                    serde_json::json!({
                        "identifier": e.identifier,
                        "line": e.line,
                        "binary": e.binary,
                        "octal": to_octal(&e.binary),
                        "active": is_active(e),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("identifier\tline\tbinary\toctal\tactive");
            for &e in entries {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    e.identifier,
                    e.line,
                    e.binary,
                    to_octal(&e.binary),
                    is_active(e)
                );
            }
        }
    }
    Ok(())
}
