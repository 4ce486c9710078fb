use super::SolverBackend;
use super::config_edit::{
    MODEL_FILE_PATH, OUTPUT_FILE_H, OUTPUT_FILE_K, OUTPUT_FILE_L, change_params,
};
use crate::common::{AlmaPaths, RunOptions, absolute_path};
use crate::domain::{AlmaError, AlmaResult};
use std::process::Command;

/// Exit status and captured streams of one solver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl SolverOutcome {
    pub fn succeeded(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn failed(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn status_text(&self) -> String {
        self.exit_code.map_or_else(
            || "terminated by signal".to_string(),
            |code| format!("exit code {}", code),
        )
    }

    /// Turns a failed run into a `RUN.ALMA_EXIT` computation error carrying
    /// the solver's stderr.
    pub fn into_result(self) -> AlmaResult<Self> {
        if self.success {
            return Ok(self);
        }
        let stderr = self.stderr.trim();
        let detail = if stderr.is_empty() {
            String::new()
        } else {
            format!(": {}", stderr)
        };
        Err(AlmaError::computation(
            "RUN.ALMA_EXIT",
            format!("ALMA3 failed with {}{}", self.status_text(), detail),
        ))
    }
}

/// Runs the real ALMA3 executable as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSolver;

impl SolverBackend for ProcessSolver {
    fn run(&self, paths: &AlmaPaths) -> AlmaResult<SolverOutcome> {
        let executable = absolute_path(&paths.executable)?;
        let config_file = absolute_path(&paths.config_file)?;

        let output = Command::new(&executable)
            .arg(&config_file)
            .current_dir(&paths.install_dir)
            .output()
            .map_err(|source| {
                AlmaError::io_system(
                    "IO.ALMA_SPAWN",
                    format!(
                        "failed to execute ALMA3 '{}' in '{}': {}",
                        executable.display(),
                        paths.install_dir.display(),
                        source
                    ),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if output.status.success() {
            Ok(SolverOutcome::succeeded(stdout, stderr))
        } else {
            Ok(SolverOutcome::failed(output.status.code(), stdout, stderr))
        }
    }
}

/// Points the configuration at the model file and the three output files,
/// then runs the solver through `backend`.
///
/// A solver that exits non-zero is logged and returned as a failed
/// [`SolverOutcome`]; callers decide whether that is fatal.
pub fn execute_alma(
    paths: &AlmaPaths,
    options: &RunOptions,
    backend: &impl SolverBackend,
) -> AlmaResult<SolverOutcome> {
    let edits = [
        (MODEL_FILE_PATH, absolute_path(&paths.model_file)?),
        (OUTPUT_FILE_H, absolute_path(&paths.output_h)?),
        (OUTPUT_FILE_K, absolute_path(&paths.output_k)?),
        (OUTPUT_FILE_L, absolute_path(&paths.output_l)?),
    ]
    .map(|(name, path)| (name, path.display().to_string()));
    change_params(&edits, &paths.config_file, &paths.parameter_file)?;

    if options.show_start_stop {
        tracing::info!("Running ALMA3...");
    }

    let outcome = backend.run(paths)?;
    if outcome.is_success() {
        if options.show_output {
            tracing::info!(stdout = %outcome.stdout, stderr = %outcome.stderr, "ALMA3 output");
        }
    } else {
        tracing::error!(
            status = %outcome.status_text(),
            stderr = %outcome.stderr,
            "There was an error running ALMA3"
        );
    }

    if options.show_start_stop {
        tracing::info!("Done running!");
    }
    Ok(outcome)
}
