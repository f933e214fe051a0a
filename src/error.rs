use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BibError {
    #[error("invalid ORCID iD: {0}")]
    #[diagnostic(help("expected four groups of four digits, e.g. 0000-0002-1825-0097"))]
    InvalidOrcidId(String),

    #[error("config file not found: {0}")]
    MissingConfig(Utf8PathBuf),

    #[error("failed to read config file at {0}")]
    ConfigRead(Utf8PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("ORCID request failed: {0}")]
    OrcidHttp(String),

    #[error("ORCID returned status {status}: {message}")]
    OrcidStatus { status: u16, message: String },

    #[error("unexpected ORCID response: {0}")]
    OrcidResponse(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
