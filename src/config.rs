use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::domain::OrcidId;
use crate::error::BibError;
use crate::orcid::DEFAULT_API_BASE;

pub const DEFAULT_ORCID_ID: &str = "0000-0002-3284-2152";
pub const DEFAULT_OUTPUT: &str = "public/data/papers.bib";
pub const DEFAULT_CONFIG_FILE: &str = "orcid-bib.json";

/// On-disk config; every key is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub orcid_id: Option<String>,
    #[serde(default)]
    pub output: Option<Utf8PathBuf>,
    #[serde(default)]
    pub api_base: Option<String>,
}

/// Values given on the command line take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub orcid_id: Option<String>,
    pub output: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub orcid_id: OrcidId,
    pub output: Utf8PathBuf,
    pub api_base: String,
}

impl PipelineConfig {
    pub fn new(orcid_id: OrcidId, output: impl Into<Utf8PathBuf>) -> Self {
        Self {
            orcid_id,
            output: output.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `path`, or `orcid-bib.json` from the working directory when it
    /// exists, and applies `overrides` on top.
    pub fn resolve(
        path: Option<&Utf8Path>,
        overrides: ConfigOverrides,
    ) -> Result<PipelineConfig, BibError> {
        let config = match path {
            Some(path) => {
                if !path.as_std_path().exists() {
                    return Err(BibError::MissingConfig(path.to_path_buf()));
                }
                Self::load(path)?
            }
            None => {
                let default_path = Utf8Path::new(DEFAULT_CONFIG_FILE);
                if default_path.as_std_path().exists() {
                    Self::load(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        Self::resolve_config(config, overrides)
    }

    pub fn load(path: &Utf8Path) -> Result<Config, BibError> {
        let content = fs::read_to_string(path.as_std_path())
            .map_err(|_| BibError::ConfigRead(path.to_path_buf()))?;
        serde_json::from_str(&content).map_err(|err| BibError::ConfigParse(err.to_string()))
    }

    pub fn resolve_config(
        config: Config,
        overrides: ConfigOverrides,
    ) -> Result<PipelineConfig, BibError> {
        let orcid_id = overrides
            .orcid_id
            .or(config.orcid_id)
            .unwrap_or_else(|| DEFAULT_ORCID_ID.to_string())
            .parse()?;
        let output = overrides
            .output
            .or(config.output)
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT));
        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(PipelineConfig {
            orcid_id,
            output,
            api_base,
        })
    }
}
