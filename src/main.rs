use anyhow::{Context, Result};
use clap::Parser;
use dictline_rust::{run_dictline, run_inflects, OutputFormat, PipelineOptions, RunReport};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dictline-rust")]
#[command(about = "Converts DICTLINE and INFLECTS plaintext files into JSON records")]
struct Args {
    /// Dictionary (headword) input file (plain or .bz2)
    #[arg(long, default_value = "DICTLINE.TXT")]
    dictline: PathBuf,

    /// Inflection (ending) input file (plain or .bz2)
    #[arg(long, default_value = "INFLECTS.txt")]
    inflects: PathBuf,

    /// Output file for headword records
    #[arg(long, default_value = "DICTLINE.json")]
    dictline_output: PathBuf,

    /// Output file for ending records
    #[arg(long, default_value = "INFLECTS.json")]
    inflects_output: PathBuf,

    /// Structured output layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Indent JSON output (default is compact)
    #[arg(long)]
    pretty: bool,

    /// Run both phases without asking for confirmation in between
    #[arg(long)]
    headless: bool,

    /// Write each phase's report next to its output file
    #[arg(long)]
    save_report: bool,

    /// Quiet mode - no spinner and no printed reports
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn options(&self, input: &Path, output: &Path) -> PipelineOptions {
        PipelineOptions {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            format: self.format,
            pretty: self.pretty,
            save_report: self.save_report,
            progress: !self.quiet,
        }
    }
}

fn print_report(report: &RunReport, quiet: bool) {
    if quiet {
        return;
    }
    println!();
    println!("============================================================");
    print!("{}", report);
    println!("============================================================");
}

/// Ask whether to go on to the inflection phase. Only an answer of `c` continues.
fn confirm_continue() -> Result<bool> {
    print!("Press 'c' if you wish to parse endings. Otherwise press any other key to exit: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim() == "c")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dictline_rust=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let dictline = args.options(&args.dictline, &args.dictline_output);
    let report = run_dictline(&dictline)
        .with_context(|| format!("Failed to convert {}", args.dictline.display()))?;
    print_report(&report, args.quiet);

    if !args.headless && !confirm_continue()? {
        info!("Stopping after the dictionary phase");
        return Ok(());
    }

    let inflects = args.options(&args.inflects, &args.inflects_output);
    let report = run_inflects(&inflects)
        .with_context(|| format!("Failed to convert {}", args.inflects.display()))?;
    print_report(&report, args.quiet);

    Ok(())
}
