use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod index;
mod parsing;
mod utils;
mod validation;

fn main() -> anyhow::Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1 like every other failure; help and version exit 0
            let code = i32::from(e.use_stderr());
            e.print()?;
            std::process::exit(code);
        }
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fastq_validator=debug,info")
    } else {
        EnvFilter::new("fastq_validator=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::validate::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}
