use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::catalog::store::SpoligotypeDb;
use crate::cli::{OutputFormat, ThresholdPolicyArg};
use crate::core::binarize::DEFAULT_THRESHOLD;
use crate::core::spacer::validate_panel;
use crate::core::types::MissReporting;
use crate::counting::{SampleInput, StatsFileCounter};
use crate::parsing::fasta::read_spacer_names;
use crate::pipeline::{SpoligotypeReport, Spoligotyper, TypingConfig};
use crate::report;
use crate::utils::validation::validate_filename;

#[derive(Args)]
pub struct TypeArgs {
    /// Spacer count stats files (BBTools seal.sh/bbduk.sh `stats=` output), one per sample
    #[arg(required = true)]
    pub stats: Vec<PathBuf>,

    /// Spoligotype database (whitespace-delimited: id, SB code, binary code)
    #[arg(short, long, required = true)]
    pub database: PathBuf,

    /// Detection threshold on spacer read counts
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u64,

    /// How counts are compared against the threshold
    #[arg(long, value_enum, default_value = "greater-than")]
    pub threshold_policy: ThresholdPolicyArg,

    /// Sample name (only with a single stats file; default is the file name minus `_stats`)
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Spacer FASTA the counts were produced from; its names must match the 43-spacer panel
    #[arg(long)]
    pub spacers: Option<PathBuf>,

    /// Directory for `<sample>_spoligotyping.txt` reports (created if missing)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave the hexadecimal code out of reports
    #[arg(long)]
    pub no_hex: bool,

    /// Report an all-zeros miss with the same label as any other miss
    #[arg(long)]
    pub unify_misses: bool,
}

impl TypeArgs {
    fn config(&self) -> TypingConfig {
        TypingConfig {
            threshold: self.threshold,
            policy: self.threshold_policy.into(),
            include_hex: !self.no_hex,
            miss_reporting: if self.unify_misses {
                MissReporting::Unified
            } else {
                MissReporting::Distinguished
            },
        }
    }

    /// Name each stats file. Names end up in report file names, so they must
    /// be safe file names and unique within the run.
    fn samples(&self) -> anyhow::Result<Vec<SampleInput>> {
        let samples = match (&self.sample, self.stats.as_slice()) {
            (Some(name), [path]) => vec![SampleInput::new(name, path)],
            (Some(_), _) => anyhow::bail!("--sample can only be used with a single stats file"),
            (None, paths) => paths
                .iter()
                .map(|p| SampleInput::from_stats_path(p))
                .collect(),
        };

        let mut seen: HashMap<&str, &Path> = HashMap::new();
        for sample in &samples {
            validate_filename(&sample.name).with_context(|| {
                format!(
                    "Sample name '{}' from {} cannot be used for a report file",
                    sample.name,
                    sample.source.display()
                )
            })?;
            if let Some(first) = seen.insert(&sample.name, &sample.source) {
                anyhow::bail!(
                    "Sample name '{}' is shared by {} and {}; rename one of the stats files",
                    sample.name,
                    first.display(),
                    sample.source.display()
                );
            }
        }

        Ok(samples)
    }
}

/// Execute type subcommand
///
/// # Errors
///
/// Returns an error if the database or spacer panel is invalid, a sample's
/// counts cannot be read, or a report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TypeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let samples = args.samples()?;

    if let Some(spacers) = &args.spacers {
        let names = read_spacer_names(spacers)?;
        validate_panel(names.as_slice()).with_context(|| {
            format!(
                "Spacer FASTA {} does not match the 43-spacer panel",
                spacers.display()
            )
        })?;
    }

    let db = SpoligotypeDb::load_from_file(&args.database)
        .with_context(|| format!("Failed to load database {}", args.database.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} spoligotypes ({} distinct codes)",
            db.len(),
            db.distinct_codes()
        );
    }

    let typer = Spoligotyper::new(&db, args.config());
    let config = typer.config();

    let mut reports = Vec::with_capacity(samples.len());
    for sample in &samples {
        reports.push(typer.type_sample(&StatsFileCounter, sample)?);
    }

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        for r in &reports {
            let path = report::write_report(dir, r)?;
            info!("Results saved in {}", path.display());
        }
    }

    match format {
        OutputFormat::Text => print_text_results(&reports, config),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Tsv => print_tsv_results(&reports, config.include_hex),
    }

    Ok(())
}

fn print_text_results(reports: &[SpoligotypeReport], config: &TypingConfig) {
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n{}", r.sample);
        println!("   Spoligotype: {}", r.spoligotype_label);
        println!("   Binary:      {}", r.binary);
        println!("   Octal:       {}", r.octal);
        if let Some(hex) = &r.hexadecimal {
            println!("   Hexadecimal: {hex}");
        }
        println!(
            "   Spacers present: {} of 43 (count {} {}, panel v{})",
            r.binary.present_count(),
            config.policy,
            config.threshold,
            r.spacer_panel_version
        );
        println!("\n   Spacer counts:");
        for (name, count) in r.spacer_counts.iter() {
            println!("     {name}\t{count}");
        }
    }

    println!();
}

fn print_tsv_results(reports: &[SpoligotypeReport], include_hex: bool) {
    println!("{}", report::header(include_hex));
    for r in reports {
        println!("{}", report::row(r));
    }
}
