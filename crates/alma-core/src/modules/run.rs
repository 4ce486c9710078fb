use super::SolverBackend;
use super::config_edit::{NO_LAYERS, change_param};
use super::model_file::change_model_file;
use super::output::read_output;
use super::solver::{ProcessSolver, execute_alma};
use crate::common::{AlmaPaths, RunOptions};
use crate::domain::{AlmaError, AlmaResult, LayerColumns, LoveSeries, ModelInput, Rheology};

/// Rheologies of the sweep model, outer shell first.
pub const SWEEP_RHEOLOGIES: [Rheology; 2] = [Rheology::Newton, Rheology::Maxwell];

/// A solver installation plus the files one run reads and writes.
#[derive(Debug, Clone)]
pub struct AlmaSession<B = ProcessSolver> {
    paths: AlmaPaths,
    backend: B,
}

impl AlmaSession<ProcessSolver> {
    pub fn new(paths: AlmaPaths) -> Self {
        Self::with_backend(paths, ProcessSolver)
    }
}

impl<B: SolverBackend> AlmaSession<B> {
    pub fn with_backend(paths: AlmaPaths, backend: B) -> Self {
        Self { paths, backend }
    }

    pub fn paths(&self) -> &AlmaPaths {
        &self.paths
    }

    /// One complete solver run: layer count, model file, solver, k output.
    ///
    /// Length mismatches are rejected before any file is touched. A solver
    /// that exits non-zero surfaces as `RUN.ALMA_EXIT` instead of handing
    /// back whatever output an earlier run left behind.
    pub fn run_alma(
        &self,
        input: impl Into<ModelInput>,
        options: &RunOptions,
    ) -> AlmaResult<LoveSeries> {
        let columns = input.into().into_columns()?;
        let layer_count = match columns.radii.len() {
            0 => {
                return Err(AlmaError::input_validation(
                    "INPUT.LAYER_COUNT",
                    "at least one layer is required",
                ));
            }
            // change_model_file splits a lone layer in two
            1 => 2,
            count => count,
        };

        change_param(
            NO_LAYERS,
            &layer_count.to_string(),
            &self.paths.config_file,
            &self.paths.parameter_file,
        )?;
        change_model_file(
            &columns.radii,
            &columns.densities,
            &columns.rigidities,
            &columns.viscosities,
            &columns.rheologies,
            &self.paths.model_file,
        )?;
        execute_alma(&self.paths, options, &self.backend)?.into_result()?;
        read_output(&self.paths.output_k, false, options.parse_policy)
    }

    /// k2 of a two-layer body (Newtonian envelope over a Maxwell core) for
    /// every envelope radius, in input order.
    ///
    /// `densities`, `rigidities` and `viscosities` list the envelope value
    /// first and the core value second.
    pub fn get_k2_vs_radius(
        &self,
        core_radius: f64,
        atmosphere_radii: &[f64],
        densities: &[f64],
        rigidities: &[f64],
        viscosities: &[f64],
    ) -> AlmaResult<Vec<f64>> {
        let options = RunOptions::quiet();
        let mut k2 = Vec::with_capacity(atmosphere_radii.len());

        for (index, atmosphere_radius) in atmosphere_radii.iter().copied().enumerate() {
            let columns = LayerColumns::new(
                vec![atmosphere_radius, core_radius],
                densities.to_vec(),
                rigidities.to_vec(),
                viscosities.to_vec(),
                SWEEP_RHEOLOGIES.to_vec(),
            );
            let series = self.run_alma(columns, &options)?;
            let first = series.first_real().ok_or_else(|| {
                AlmaError::computation(
                    "RUN.EMPTY_OUTPUT",
                    format!(
                        "ALMA3 produced no Love numbers for atmosphere radius {} (sweep step {})",
                        atmosphere_radius, index
                    ),
                )
            })?;
            tracing::debug!(atmosphere_radius, k2 = first, step = index, "sweep step finished");
            k2.push(first);
        }

        Ok(k2)
    }
}
