pub mod errors;

pub use errors::{AlmaError, AlmaErrorCategory, AlmaResult, ParserResult};

use num_complex::Complex64;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Constitutive law selecting how ALMA3 treats a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rheology {
    Elastic,
    Maxwell,
    Newton,
    Kelvin,
    Burgers,
    Andrade,
}

impl Rheology {
    pub const ALL: [Rheology; 6] = [
        Self::Elastic,
        Self::Maxwell,
        Self::Newton,
        Self::Kelvin,
        Self::Burgers,
        Self::Andrade,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Elastic => "elastic",
            Self::Maxwell => "maxwell",
            Self::Newton => "newton",
            Self::Kelvin => "kelvin",
            Self::Burgers => "burgers",
            Self::Andrade => "andrade",
        }
    }
}

impl Display for Rheology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Rheology {
    type Err = AlmaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|rheology| rheology.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                AlmaError::input_validation(
                    "INPUT.RHEOLOGY",
                    format!(
                        "unknown rheology '{}'; expected one of {}",
                        value,
                        Self::ALL.map(Rheology::as_str).join(", ")
                    ),
                )
            })
    }
}

/// One radial shell of the modelled body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub radius: f64,
    pub density: f64,
    pub rigidity: f64,
    pub viscosity: f64,
    pub rheology: Rheology,
}

/// Column-oriented layer properties, one entry per layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerColumns {
    pub radii: Vec<f64>,
    pub densities: Vec<f64>,
    pub rigidities: Vec<f64>,
    pub viscosities: Vec<f64>,
    pub rheologies: Vec<Rheology>,
}

impl LayerColumns {
    pub fn new(
        radii: Vec<f64>,
        densities: Vec<f64>,
        rigidities: Vec<f64>,
        viscosities: Vec<f64>,
        rheologies: Vec<Rheology>,
    ) -> Self {
        Self {
            radii,
            densities,
            rigidities,
            viscosities,
            rheologies,
        }
    }

    pub fn has_uniform_length(&self) -> bool {
        let count = self.radii.len();
        self.densities.len() == count
            && self.rigidities.len() == count
            && self.viscosities.len() == count
            && self.rheologies.len() == count
    }

    pub fn validate_lengths(&self) -> AlmaResult<usize> {
        if !self.has_uniform_length() {
            return Err(AlmaError::input_validation(
                "INPUT.LAYER_LENGTHS",
                "All input lists must be of the same length.",
            ));
        }
        Ok(self.radii.len())
    }

    /// Row view truncated to the shortest column.
    pub fn layers(&self) -> Vec<Layer> {
        self.radii
            .iter()
            .zip(&self.densities)
            .zip(&self.rigidities)
            .zip(&self.viscosities)
            .zip(&self.rheologies)
            .map(
                |((((radius, density), rigidity), viscosity), rheology)| Layer {
                    radius: *radius,
                    density: *density,
                    rigidity: *rigidity,
                    viscosity: *viscosity,
                    rheology: *rheology,
                },
            )
            .collect()
    }
}

/// Input accepted by the run orchestrator.
///
/// `Uniform` describes a homogeneous body by its outer radius; it is split
/// into an outer shell and an inner half-radius layer with identical
/// properties because ALMA3 needs at least two layers.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput {
    Uniform {
        radius: f64,
        density: f64,
        rigidity: f64,
        viscosity: f64,
        rheology: Rheology,
    },
    Layers(LayerColumns),
}

impl ModelInput {
    pub fn into_columns(self) -> AlmaResult<LayerColumns> {
        let columns = match self {
            Self::Uniform {
                radius,
                density,
                rigidity,
                viscosity,
                rheology,
            } => LayerColumns::new(
                vec![radius, radius / 2.0],
                vec![density; 2],
                vec![rigidity; 2],
                vec![viscosity; 2],
                vec![rheology; 2],
            ),
            Self::Layers(columns) => columns,
        };
        columns.validate_lengths()?;
        Ok(columns)
    }
}

impl From<LayerColumns> for ModelInput {
    fn from(columns: LayerColumns) -> Self {
        Self::Layers(columns)
    }
}

/// Which of the three ALMA3 output files to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoveNumberKind {
    H,
    #[default]
    K,
    L,
}

impl LoveNumberKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H => "h",
            Self::K => "k",
            Self::L => "l",
        }
    }

    pub const fn parameter_name(self) -> &'static str {
        match self {
            Self::H => "output_file_h",
            Self::K => "output_file_k",
            Self::L => "output_file_l",
        }
    }
}

impl Display for LoveNumberKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for LoveNumberKind {
    type Err = AlmaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "h" => Ok(Self::H),
            "k" => Ok(Self::K),
            "l" => Ok(Self::L),
            _ => Err(AlmaError::input_validation(
                "INPUT.LOVE_NUMBER_KIND",
                format!("unknown Love number kind '{}'; expected h, k or l", value),
            )),
        }
    }
}

/// Parallel period / Love-number sequences parsed from one output file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoveSeries {
    pub periods: Vec<f64>,
    pub real: Vec<f64>,
    pub imaginary: Option<Vec<f64>>,
}

impl LoveSeries {
    pub fn real_only() -> Self {
        Self::default()
    }

    pub fn complex() -> Self {
        Self {
            imaginary: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn first_real(&self) -> Option<f64> {
        self.real.first().copied()
    }

    pub fn complex_values(&self) -> Option<Vec<Complex64>> {
        let imaginary = self.imaginary.as_ref()?;
        Some(
            self.real
                .iter()
                .zip(imaginary)
                .map(|(re, im)| Complex64::new(*re, *im))
                .collect(),
        )
    }

    pub fn into_pair(self) -> (Vec<f64>, Vec<f64>) {
        (self.periods, self.real)
    }
}
