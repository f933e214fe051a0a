use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use orcid_bib::app::{App, RunOptions};
use orcid_bib::config::{ConfigLoader, ConfigOverrides};
use orcid_bib::error::BibError;
use orcid_bib::orcid::OrcidHttpClient;
use orcid_bib::output::{JsonOutput, OutputMode, TextOutput};

#[derive(Parser)]
#[command(name = "orcid-bib")]
#[command(about = "Regenerate a BibTeX bibliography from a researcher's ORCID works")]
#[command(version, author)]
struct Cli {
    /// ORCID iD to fetch works for
    #[arg(long)]
    orcid: Option<String>,

    /// Bibliography file to overwrite
    #[arg(long)]
    output: Option<Utf8PathBuf>,

    /// JSON config file (defaults to ./orcid-bib.json when present)
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Print the bibliography to stdout instead of writing it; status goes to stderr
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<BibError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &BibError) -> u8 {
    match error {
        BibError::InvalidOrcidId(_)
        | BibError::MissingConfig(_)
        | BibError::ConfigRead(_)
        | BibError::ConfigParse(_) => 2,
        BibError::OrcidHttp(_) | BibError::OrcidStatus { .. } | BibError::OrcidResponse(_) => 3,
        BibError::Filesystem(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let overrides = ConfigOverrides {
        orcid_id: cli.orcid,
        output: cli.output,
    };
    let config = ConfigLoader::resolve(cli.config.as_deref(), overrides)?;
    let client = OrcidHttpClient::new(&config.api_base)?;
    let app = App::new(client);
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    match output_mode {
        OutputMode::Json => {
            let result = app.run(&config, options, &JsonOutput)?;
            JsonOutput::print_report(&result).into_diagnostic()?;
        }
        OutputMode::Text => {
            let text = TextOutput::new(options.dry_run);
            let result = app.run(&config, options, &text)?;
            if options.dry_run {
                TextOutput::print_bibliography(&result).into_diagnostic()?;
            }
            text.print_summary(&result).into_diagnostic()?;
        }
    }
    Ok(())
}
