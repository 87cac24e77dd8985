//! Input document loading functionality.
//!
//! This module provides the [`InputLoader`] type for loading time-punch
//! input documents from JSON files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::PunchData;

/// Loads time-punch input documents.
///
/// Any failure is fatal for the whole run: a missing file, malformed JSON,
/// a missing required field, or a timestamp that does not match the
/// `YYYY-MM-DD HH:MM:SS` format all propagate as errors and produce no
/// partial output.
///
/// # Example
///
/// ```no_run
/// use punch_engine::input::InputLoader;
///
/// let data = InputLoader::load("./data.json")?;
/// # Ok::<(), punch_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct InputLoader;

impl InputLoader {
    /// Loads an input document from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the input file (e.g., "./data.json")
    ///
    /// # Returns
    ///
    /// The parsed document, or an error if the file is missing or any part
    /// of it fails to parse.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<PunchData> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::InputNotFound {
            path: path_str.clone(),
        })?;

        let data = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            jobs = data.job_meta.len(),
            employees = data.employee_data.len(),
            "Loaded input document"
        );

        Ok(data)
    }

    /// Parses an input document from a JSON string.
    pub fn parse_str(content: &str) -> EngineResult<PunchData> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, source_name: &str) -> EngineResult<PunchData> {
        serde_json::from_str(content).map_err(|e| EngineError::InputParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }
}
