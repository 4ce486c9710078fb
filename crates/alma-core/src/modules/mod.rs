pub mod config_edit;
pub mod model_file;
pub mod output;
pub mod run;
pub mod serialization;
pub mod solver;

mod traits;

pub use traits::SolverBackend;
