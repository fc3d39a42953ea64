//! Loader for the RON controller configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::ControllerConfig;

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse configuration text. `file` only labels errors.
pub fn parse_config(contents: &str, file: &str) -> Result<ControllerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

pub fn load_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;
    parse_config(&contents, &file)
}
