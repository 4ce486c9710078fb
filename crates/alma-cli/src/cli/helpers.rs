use super::{CliError, LayoutArgs};
use alma_core::{AlmaError, AlmaPaths, AlmaResult, LayerColumns, LoveSeries, ModelInput, Rheology};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub(super) const LAYOUT_FILE_NAME: &str = "alma-paths.json";

pub(super) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a subscriber may already be installed when embedded in a larger process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub(super) fn current_working_dir() -> AlmaResult<PathBuf> {
    std::env::current_dir().map_err(|source| {
        AlmaError::io_system(
            "IO.CLI_CURRENT_DIR",
            format!("failed to read current working directory: {}", source),
        )
    })
}

/// `--paths`, then `--install-dir`/`--work-dir`, then the nearest
/// `alma-paths.json` above the current directory.
pub(super) fn resolve_layout(layout: &LayoutArgs) -> Result<AlmaPaths, CliError> {
    if let Some(path) = &layout.paths {
        return Ok(AlmaPaths::load(path)?);
    }

    let working_dir = current_working_dir()?;
    if let Some(install_dir) = &layout.install_dir {
        let install_dir = resolve_cli_path(&working_dir, install_dir);
        let work_dir = layout
            .work_dir
            .as_ref()
            .map(|dir| resolve_cli_path(&working_dir, dir))
            .unwrap_or_else(|| working_dir.clone());
        return Ok(AlmaPaths::with_layout(install_dir, work_dir));
    }

    let layout_file = find_layout_file(&working_dir).ok_or_else(|| {
        CliError::Usage(format!(
            "no solver layout given; pass --paths or --install-dir, or place '{}' in '{}' or a parent directory",
            LAYOUT_FILE_NAME,
            working_dir.display()
        ))
    })?;
    tracing::debug!(layout = %layout_file.display(), "using discovered layout file");
    Ok(AlmaPaths::load(&layout_file)?)
}

pub(super) fn find_layout_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|candidate| candidate.join(LAYOUT_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

pub(super) fn resolve_cli_path(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

/// A single value per property describes a uniform body; anything longer is
/// a layer list.
pub(super) fn model_input_from_columns(columns: LayerColumns) -> ModelInput {
    let single = |len: usize| len == 1;
    if single(columns.radii.len())
        && single(columns.densities.len())
        && single(columns.rigidities.len())
        && single(columns.viscosities.len())
        && single(columns.rheologies.len())
    {
        ModelInput::Uniform {
            radius: columns.radii[0],
            density: columns.densities[0],
            rigidity: columns.rigidities[0],
            viscosity: columns.viscosities[0],
            rheology: columns.rheologies[0],
        }
    } else {
        ModelInput::Layers(columns)
    }
}

pub(super) fn parse_rheology(value: &str) -> Result<Rheology, AlmaError> {
    value.parse()
}

pub(super) fn render_series(series: &LoveSeries, json: bool) -> Result<String, CliError> {
    if json {
        let document = serde_json::json!({
            "periods": series.periods,
            "real": series.real,
            "imaginary": series.imaginary,
        });
        return serde_json::to_string_pretty(&document)
            .context("failed to render Love numbers as JSON")
            .map_err(CliError::from);
    }

    let mut rendered = String::new();
    for (index, (period, real)) in series.periods.iter().zip(&series.real).enumerate() {
        rendered.push_str(&format!("{} {}", period, real));
        if let Some(imaginary) = series.imaginary.as_ref().and_then(|values| values.get(index)) {
            rendered.push_str(&format!(" {}", imaginary));
        }
        rendered.push('\n');
    }
    Ok(rendered)
}

pub(super) fn render_sweep(radii: &[f64], k2: &[f64], json: bool) -> Result<String, CliError> {
    if json {
        let document = serde_json::json!({
            "atmosphereRadii": radii,
            "k2": k2,
        });
        return serde_json::to_string_pretty(&document)
            .context("failed to render sweep as JSON")
            .map_err(CliError::from);
    }

    Ok(radii
        .iter()
        .zip(k2)
        .map(|(radius, k2)| format!("{} {}\n", radius, k2))
        .collect())
}
