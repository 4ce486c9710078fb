use super::serialization::format_general_left;
use crate::domain::{AlmaError, AlmaResult, LayerColumns, Rheology};
use std::fs;
use std::path::Path;

pub const MODEL_HEADER: [&str; 4] = [
    "!------------------------------------------------------------",
    "! radius,    density,      rigidity     viscosity",
    "!  (m)       (kg/m^3)        (Pa)         (Pa.s) ",
    "!------------------------------------------------------------",
];

const SIGNIFICANT_DIGITS: usize = 5;
const RADIUS_WIDTH: usize = 12;
const DENSITY_WIDTH: usize = 10;
const RIGIDITY_WIDTH: usize = 12;
const VISCOSITY_WIDTH: usize = 12;

/// Writes the ALMA3 model file, replacing whatever was at `model_file`.
///
/// Column lengths are not validated here; rows stop at the shortest column.
/// A single radius `r` becomes the two layers `[r / 2, r]` with every other
/// column repeated once.
pub fn change_model_file(
    radii: &[f64],
    densities: &[f64],
    rigidities: &[f64],
    viscosities: &[f64],
    model_types: &[Rheology],
    model_file: &Path,
) -> AlmaResult<()> {
    let columns = if let [radius] = radii {
        LayerColumns::new(
            vec![radius / 2.0, *radius],
            repeat_twice(densities),
            repeat_twice(rigidities),
            repeat_twice(viscosities),
            repeat_twice(model_types),
        )
    } else {
        LayerColumns::new(
            radii.to_vec(),
            densities.to_vec(),
            rigidities.to_vec(),
            viscosities.to_vec(),
            model_types.to_vec(),
        )
    };

    let content = render_model_file(&columns);
    fs::write(model_file, content).map_err(|source| {
        AlmaError::io_system(
            "IO.MODEL_WRITE",
            format!(
                "failed to write ALMA3 model file '{}': {}",
                model_file.display(),
                source
            ),
        )
    })?;

    tracing::debug!(
        layers = columns.layers().len(),
        model = %model_file.display(),
        "wrote ALMA3 model file"
    );
    Ok(())
}

pub fn render_model_file(columns: &LayerColumns) -> String {
    let mut content = String::new();
    for line in MODEL_HEADER {
        content.push_str(line);
        content.push('\n');
    }
    for layer in columns.layers() {
        content.push_str(&format!(
            "{} {} {} {} {}\n",
            format_general_left(layer.radius, RADIUS_WIDTH, SIGNIFICANT_DIGITS),
            format_general_left(layer.density, DENSITY_WIDTH, SIGNIFICANT_DIGITS),
            format_general_left(layer.rigidity, RIGIDITY_WIDTH, SIGNIFICANT_DIGITS),
            format_general_left(layer.viscosity, VISCOSITY_WIDTH, SIGNIFICANT_DIGITS),
            layer.rheology
        ));
    }
    content
}

fn repeat_twice<T: Clone>(values: &[T]) -> Vec<T> {
    values.iter().chain(values).cloned().collect()
}
