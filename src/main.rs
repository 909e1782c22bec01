use clap::Parser;
use tracing_subscriber::EnvFilter;

use spoligotyper::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("spoligotyper=debug,info")
    } else {
        EnvFilter::new("spoligotyper=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Type(args) => {
            cli::typing::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Encode(args) => {
            cli::encode::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Database(args) => {
            cli::database::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
