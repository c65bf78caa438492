use anyhow::Result;
use clap::Parser;

use gdata_version::cli::{run_convert_workflow, ConvertWorkflowArgs};
use gdata_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "gdata-version",
    version,
    about = "Convert a Lightning version to the matching gdata-provider version"
)]
struct Args {
    #[arg(value_name = "VERSION", help = "Lightning version to convert (e.g. 3.2b2)")]
    source: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print debug logging to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Do not print warnings")]
    quiet: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let workflow_args = ConvertWorkflowArgs {
        version: args.source,
        config_path: args.config,
    };

    let result = match run_convert_workflow(&workflow_args) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::report_conversion(&result, args.quiet, args.verbose);
    Ok(())
}
