pub mod checks;
pub mod report;

pub use checks::{planned_checks, run_preflight, ArtifactKind, PreflightCheck};
pub use report::{
    CheckResult, CheckStage, CheckStatus, FailureKind, PreflightFailure, PreflightReport,
    PreflightState,
};
