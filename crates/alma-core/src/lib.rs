//! Automation layer around the ALMA3 Love-number solver.
//!
//! A run edits the solver configuration, writes the layered model file,
//! starts the external executable and parses the Love numbers it wrote.

pub mod common;
pub mod domain;
pub mod modules;

pub use common::{AlmaPaths, ParsePolicy, RunOptions};
pub use domain::{
    AlmaError, AlmaErrorCategory, AlmaResult, Layer, LayerColumns, LoveNumberKind, LoveSeries,
    ModelInput, Rheology,
};
pub use modules::config_edit::{ParameterTable, change_param, change_params};
pub use modules::model_file::change_model_file;
pub use modules::output::{read_love_numbers, read_output};
pub use modules::run::AlmaSession;
pub use modules::solver::{ProcessSolver, SolverOutcome, execute_alma};
pub use modules::SolverBackend;
