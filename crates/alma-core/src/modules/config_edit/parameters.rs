use crate::domain::{AlmaError, AlmaResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const NO_LAYERS: &str = "no_layers";
pub const MODEL_FILE_PATH: &str = "model_file_path";
pub const OUTPUT_FILE_H: &str = "output_file_h";
pub const OUTPUT_FILE_K: &str = "output_file_k";
pub const OUTPUT_FILE_L: &str = "output_file_l";

/// Logical parameter name to the marker text that identifies the
/// parameter's line in the ALMA3 configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct ParameterTable {
    markers: BTreeMap<String, String>,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl ParameterTable {
    pub fn load(path: &Path) -> AlmaResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            AlmaError::io_system(
                "IO.PARAMETER_FILE_READ",
                format!(
                    "failed to read parameter file '{}': {}",
                    path.display(),
                    source
                ),
            )
        })?;
        let mut table = Self::parse(&content).map_err(|source| {
            AlmaError::input_validation(
                "INPUT.PARAMETER_FILE_PARSE",
                format!(
                    "failed to parse parameter file '{}': {}",
                    path.display(),
                    source
                ),
            )
        })?;
        table.source = Some(path.to_path_buf());
        Ok(table)
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn marker(&self, name: &str) -> AlmaResult<&str> {
        self.markers.get(name).map(String::as_str).ok_or_else(|| {
            let origin = self
                .source
                .as_ref()
                .map(|path| format!(" in '{}'", path.display()))
                .unwrap_or_default();
            AlmaError::input_validation(
                "INPUT.PARAMETER_LOOKUP",
                format!(
                    "parameter '{}' is not defined{}; known parameters: {}",
                    name,
                    origin,
                    self.names().collect::<Vec<_>>().join(", ")
                ),
            )
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }
}
