pub mod app;

pub use app::{run_check, run_pipeline};
