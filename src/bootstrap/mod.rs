pub mod env;
pub mod paths;

pub use env::invocation_dir;
pub use paths::{absolutize, ResolvedPath, RunPaths};
