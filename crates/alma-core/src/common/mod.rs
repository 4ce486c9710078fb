pub mod options;
pub mod paths;

pub use options::{ParsePolicy, RunOptions};
pub use paths::{AlmaPaths, absolute_path, resolve_path};
