//! File layout shared by every stage of an ALMA3 run.
//!
//! The solver lives in its own installation directory and is always started
//! with that directory as its working directory. Everything this crate
//! generates (edited configuration, model file, the three Love-number
//! outputs) lives in a separate work directory.

use crate::domain::{AlmaError, AlmaResult, LoveNumberKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXECUTABLE: &str = "alma.exe";
pub const DEFAULT_CONFIG_FILE: &str = "config.ALMApy_config.dat";
pub const DEFAULT_PARAMETER_FILE: &str = "parameters.json";
pub const DEFAULT_MODEL_FILE: &str = "ALMApy_model.dat";
pub const DEFAULT_OUTPUT_H: &str = "ALMApy_h_data.dat";
pub const DEFAULT_OUTPUT_K: &str = "ALMApy_k_data.dat";
pub const DEFAULT_OUTPUT_L: &str = "ALMApy_l_data.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmaPaths {
    pub executable: PathBuf,
    pub install_dir: PathBuf,
    pub config_file: PathBuf,
    pub parameter_file: PathBuf,
    pub model_file: PathBuf,
    pub output_h: PathBuf,
    pub output_k: PathBuf,
    pub output_l: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PathsFile {
    install_dir: PathBuf,
    #[serde(default)]
    work_dir: Option<PathBuf>,
    #[serde(default)]
    executable: Option<PathBuf>,
    #[serde(default)]
    config_file: Option<PathBuf>,
    #[serde(default)]
    parameter_file: Option<PathBuf>,
    #[serde(default)]
    model_file: Option<PathBuf>,
    #[serde(default)]
    output_h: Option<PathBuf>,
    #[serde(default)]
    output_k: Option<PathBuf>,
    #[serde(default)]
    output_l: Option<PathBuf>,
}

impl AlmaPaths {
    /// Default file names inside `work_dir`, solver `alma.exe` inside `install_dir`.
    pub fn with_layout(install_dir: impl Into<PathBuf>, work_dir: impl AsRef<Path>) -> Self {
        let install_dir = install_dir.into();
        let work_dir = work_dir.as_ref();
        Self {
            executable: install_dir.join(DEFAULT_EXECUTABLE),
            install_dir,
            config_file: work_dir.join(DEFAULT_CONFIG_FILE),
            parameter_file: work_dir.join(DEFAULT_PARAMETER_FILE),
            model_file: work_dir.join(DEFAULT_MODEL_FILE),
            output_h: work_dir.join(DEFAULT_OUTPUT_H),
            output_k: work_dir.join(DEFAULT_OUTPUT_K),
            output_l: work_dir.join(DEFAULT_OUTPUT_L),
        }
    }

    /// Reads a JSON layout file. Relative entries resolve against the
    /// directory holding the JSON file; omitted entries take the defaults of
    /// [`AlmaPaths::with_layout`].
    pub fn load(path: &Path) -> AlmaResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            AlmaError::io_system(
                "IO.PATHS_READ",
                format!("failed to read path layout '{}': {}", path.display(), source),
            )
        })?;
        let raw: PathsFile = serde_json::from_str(&content).map_err(|source| {
            AlmaError::input_validation(
                "INPUT.PATHS_PARSE",
                format!("failed to parse path layout '{}': {}", path.display(), source),
            )
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let install_dir = resolve_path(base, &raw.install_dir);
        let work_dir = raw
            .work_dir
            .map(|dir| resolve_path(base, &dir))
            .unwrap_or_else(|| base.to_path_buf());

        let mut paths = Self::with_layout(install_dir, &work_dir);
        let overrides = [
            (raw.executable, &mut paths.executable, &paths.install_dir),
            (raw.config_file, &mut paths.config_file, &work_dir),
            (raw.parameter_file, &mut paths.parameter_file, &work_dir),
            (raw.model_file, &mut paths.model_file, &work_dir),
            (raw.output_h, &mut paths.output_h, &work_dir),
            (raw.output_k, &mut paths.output_k, &work_dir),
            (raw.output_l, &mut paths.output_l, &work_dir),
        ];
        for (value, slot, root) in overrides {
            if let Some(value) = value {
                *slot = resolve_path(root, &value);
            }
        }

        Ok(paths)
    }

    pub fn output_file(&self, kind: LoveNumberKind) -> &Path {
        match kind {
            LoveNumberKind::H => &self.output_h,
            LoveNumberKind::K => &self.output_k,
            LoveNumberKind::L => &self.output_l,
        }
    }
}

pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Absolute form of `path` for writing into the solver configuration, since
/// ALMA3 resolves paths against its own installation directory.
pub fn absolute_path(path: &Path) -> AlmaResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let current = std::env::current_dir().map_err(|source| {
        AlmaError::io_system(
            "IO.CURRENT_DIR",
            format!("failed to read current working directory: {}", source),
        )
    })?;
    Ok(current.join(path))
}
