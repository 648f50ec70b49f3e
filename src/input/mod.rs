use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::model::text::AnalysisText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub text: AnalysisText,
    pub source: String,
    pub bytes: usize,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {source_label}: {cause}")]
    Io {
        source_label: String,
        #[source]
        cause: io::Error,
    },
    #[error("{0} is not valid UTF-8 text")]
    NotUtf8(String),
}

pub fn load_input(source: &InputSource) -> Result<LoadedInput, InputError> {
    let label = source.label();
    let raw = match source {
        InputSource::Stdin => read_text(io::stdin().lock(), &label)?,
        InputSource::File(path) => read_path(path, &label)?,
    };

    let text = AnalysisText::from_raw(&raw);
    if text.is_blank() {
        tracing::warn!("input {} is empty or whitespace-only", label);
    } else {
        tracing::info!(
            "loaded {} ({} bytes, {} lines)",
            label,
            raw.len(),
            text.lines.len()
        );
    }

    Ok(LoadedInput {
        bytes: raw.len(),
        text,
        source: label,
    })
}

fn read_path(path: &Path, label: &str) -> Result<String, InputError> {
    let io_err = |cause: io::Error| InputError::Io {
        source_label: label.to_string(),
        cause,
    };
    let file = File::open(path).map_err(io_err)?;
    if is_gzip(path) {
        tracing::debug!("decompressing gzip input {}", label);
        read_text(MultiGzDecoder::new(BufReader::new(file)), label)
    } else {
        read_text(BufReader::new(file), label)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn read_text<R: Read>(mut reader: R, label: &str) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|cause| InputError::Io {
            source_label: label.to_string(),
            cause,
        })?;
    let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(label.to_string()))?;
    // Strip a UTF-8 byte order mark.
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
