use std::io::Write;

use chrono::Utc;

use crate::bootstrap::{ResolvedPath, RunPaths};
use crate::error::AppResult;
use crate::preflight::report::{
    CheckResult, CheckStage, CheckStatus, FailureKind, PreflightFailure, PreflightReport,
    PreflightState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
pub struct PreflightCheck<'a> {
    pub name: &'static str,
    pub stage: CheckStage,
    pub kind: ArtifactKind,
    pub failure: FailureKind,
    pub path: &'a ResolvedPath,
}

impl PreflightCheck<'_> {
    /// Wrong-typed and blank paths count as missing.
    pub fn is_satisfied(&self) -> bool {
        if self.path.is_blank() {
            return false;
        }

        match self.kind {
            ArtifactKind::File => self.path.absolute.is_file(),
            ArtifactKind::Directory => self.path.absolute.is_dir(),
        }
    }
}

/// Checks in evaluation order, grouped by stage.
pub fn planned_checks(paths: &RunPaths) -> Vec<PreflightCheck<'_>> {
    vec![
        check(
            "input_video",
            CheckStage::Inputs,
            ArtifactKind::File,
            FailureKind::MissingInput,
            &paths.input_video,
        ),
        check(
            "input_audio",
            CheckStage::Inputs,
            ArtifactKind::File,
            FailureKind::MissingInput,
            &paths.input_audio,
        ),
        check(
            "tool_dir",
            CheckStage::Inputs,
            ArtifactKind::Directory,
            FailureKind::MissingDirectory,
            &paths.tool_dir,
        ),
        check(
            "entry_point",
            CheckStage::Inputs,
            ArtifactKind::File,
            FailureKind::MissingEntryPoint,
            &paths.entry_point,
        ),
        check(
            "checkpoint",
            CheckStage::Models,
            ArtifactKind::File,
            FailureKind::MissingModel,
            &paths.checkpoint,
        ),
        check(
            "detector_weights",
            CheckStage::Models,
            ArtifactKind::File,
            FailureKind::MissingModel,
            &paths.detector_weights,
        ),
    ]
}

/// Runs the checks in order and stops at the first missing artifact.
///
/// Progress goes to `console` one stage at a time. Checks after the failing
/// one are never evaluated and appear as [`CheckStatus::Skip`] in the report.
pub fn run_preflight(paths: &RunPaths, console: &mut dyn Write) -> AppResult<PreflightReport> {
    let checks = planned_checks(paths);
    let mut results = Vec::with_capacity(checks.len());
    let mut failure = None;
    let mut current_stage = None;

    for (index, check) in checks.iter().enumerate() {
        if current_stage != Some(check.stage) {
            if let Some(stage) = current_stage {
                finish_stage(stage, console)?;
            }
            writeln!(console, "Step {}: {}", check.stage.number(), check.stage.heading())?;
            current_stage = Some(check.stage);
        }

        if check.is_satisfied() {
            tracing::debug!(check = check.name, path = %check.path.absolute.display(), "preflight check passed");
            results.push(CheckResult {
                name: check.name.to_owned(),
                stage: check.stage,
                status: CheckStatus::Pass,
                path: check.path.configured.clone(),
                resolved: check.path.absolute.clone(),
                detail: format!("found {}", check.path.absolute.display()),
                remediation: None,
            });
            continue;
        }

        let missing = PreflightFailure {
            check: check.name.to_owned(),
            kind: check.failure,
            path: check.path.configured.clone(),
        };
        tracing::warn!(check = check.name, path = %check.path.absolute.display(), "preflight check failed");

        writeln!(console, "--> ERROR: {missing}")?;
        if let Some(remediation) = check.failure.remediation() {
            writeln!(console, "--> {remediation}")?;
        }

        results.push(CheckResult {
            name: check.name.to_owned(),
            stage: check.stage,
            status: CheckStatus::Fail,
            path: check.path.configured.clone(),
            resolved: check.path.absolute.clone(),
            detail: missing.to_string(),
            remediation: check.failure.remediation().map(ToOwned::to_owned),
        });
        results.extend(checks[index + 1..].iter().map(skipped));
        failure = Some(missing);
        break;
    }

    if failure.is_none() {
        if let Some(stage) = current_stage {
            finish_stage(stage, console)?;
        }
    }

    Ok(PreflightReport {
        generated_at_rfc3339: Utc::now().to_rfc3339(),
        state: if failure.is_some() {
            PreflightState::Failed
        } else {
            PreflightState::Ready
        },
        checks: results,
        failure,
    })
}

fn check<'a>(
    name: &'static str,
    stage: CheckStage,
    kind: ArtifactKind,
    failure: FailureKind,
    path: &'a ResolvedPath,
) -> PreflightCheck<'a> {
    PreflightCheck {
        name,
        stage,
        kind,
        failure,
        path,
    }
}

fn finish_stage(stage: CheckStage, console: &mut dyn Write) -> AppResult<()> {
    writeln!(console, "--> {}\n", stage.passed_message())?;
    Ok(())
}

fn skipped(check: &PreflightCheck<'_>) -> CheckResult {
    CheckResult {
        name: check.name.to_owned(),
        stage: check.stage,
        status: CheckStatus::Skip,
        path: check.path.configured.clone(),
        resolved: check.path.absolute.clone(),
        detail: "not checked after earlier failure".to_owned(),
        remediation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{planned_checks, run_preflight};
    use crate::bootstrap::RunPaths;
    use crate::config::LaunchConfig;
    use crate::preflight::report::{CheckStatus, FailureKind, PreflightState};
    use crate::test_support::{create_layout, remove_artifact};

    fn preflight(root: &std::path::Path, config: &LaunchConfig) -> (crate::preflight::PreflightReport, String) {
        let paths = RunPaths::resolve(config, root).expect("resolve");
        let mut console = Vec::new();
        let report = run_preflight(&paths, &mut console).expect("preflight");
        (report, String::from_utf8(console).expect("utf8 console"))
    }

    #[test]
    fn complete_layout_passes_both_stages() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());

        let (report, console) = preflight(temp.path(), &LaunchConfig::default());
        assert_eq!(report.state, PreflightState::Ready);
        assert!(report.outcome().is_ok());
        assert!(report.checks.iter().all(|check| check.status == CheckStatus::Pass));
        assert_eq!(
            console,
            "Step 1: Checking for required files and directories...\n\
             --> All required files and directories are present.\n\n\
             Step 2: Checking for pre-trained models...\n\
             --> Pre-trained models are in place.\n\n"
        );
    }

    #[test]
    fn missing_video_short_circuits_remaining_checks() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());
        remove_artifact(temp.path(), "input_video.mp4");
        remove_artifact(temp.path(), "new_audio.wav");

        let (report, console) = preflight(temp.path(), &LaunchConfig::default());
        let failure = report.outcome().expect_err("must fail");
        assert_eq!(failure.kind, FailureKind::MissingInput);
        assert_eq!(failure.check, "input_video");
        assert!(console.contains("--> ERROR: Required file not found: input_video.mp4"));
        assert!(!console.contains("new_audio.wav"));
        assert!(!console.contains("Step 2"));

        let statuses: Vec<_> = report.checks.iter().map(|check| check.status).collect();
        assert_eq!(statuses[0], CheckStatus::Fail);
        assert!(statuses[1..].iter().all(|status| *status == CheckStatus::Skip));
    }

    #[test]
    fn missing_checkpoint_names_path_and_remediation() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());
        remove_artifact(temp.path(), "Wav2Lip/checkpoints/wav2lip_gan.pth");

        let (report, console) = preflight(temp.path(), &LaunchConfig::default());
        let failure = report.outcome().expect_err("must fail");
        assert_eq!(failure.kind, FailureKind::MissingModel);
        assert!(console.contains("--> All required files and directories are present."));
        assert!(console
            .contains("--> ERROR: Pre-trained model not found: Wav2Lip/checkpoints/wav2lip_gan.pth"));
        assert!(console.contains("downloaded the models and placed them in the correct folders"));
        assert!(!console.contains("Pre-trained models are in place."));
    }

    #[test]
    fn missing_detector_weights_names_that_file() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());
        remove_artifact(temp.path(), "Wav2Lip/face_detection/detection/sfd/s3fd.pth");

        let (report, console) = preflight(temp.path(), &LaunchConfig::default());
        let failure = report.outcome().expect_err("must fail");
        assert_eq!(failure.check, "detector_weights");
        assert!(console.contains(
            "--> ERROR: Pre-trained model not found: Wav2Lip/face_detection/detection/sfd/s3fd.pth"
        ));
        assert!(console.contains("as per the README."));
    }

    #[test]
    fn file_where_directory_expected_counts_as_missing() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(temp.path().join("input_video.mp4"), b"video").expect("video");
        std::fs::write(temp.path().join("new_audio.wav"), b"audio").expect("audio");
        std::fs::write(temp.path().join("Wav2Lip"), b"not a dir").expect("file");

        let (report, console) = preflight(temp.path(), &LaunchConfig::default());
        let failure = report.outcome().expect_err("must fail");
        assert_eq!(failure.kind, FailureKind::MissingDirectory);
        assert!(console.contains(
            "--> ERROR: Wav2Lip directory not found: Wav2Lip\n\
             --> Clone the Wav2Lip repository next to this launcher or pass --tool-dir.\n"
        ));
    }

    #[test]
    fn directory_where_file_expected_counts_as_missing() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());
        remove_artifact(temp.path(), "new_audio.wav");
        std::fs::create_dir(temp.path().join("new_audio.wav")).expect("dir");

        let (report, _) = preflight(temp.path(), &LaunchConfig::default());
        let failure = report.outcome().expect_err("must fail");
        assert_eq!(failure.check, "input_audio");
    }

    #[test]
    fn blank_configured_path_is_missing() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());
        let config = LaunchConfig {
            tool_dir: std::path::PathBuf::from(" "),
            ..LaunchConfig::default()
        };

        let (report, _) = preflight(temp.path(), &config);
        assert_eq!(
            report.outcome().expect_err("must fail").kind,
            FailureKind::MissingDirectory
        );
    }

    #[test]
    fn missing_entry_point_fails_first_stage() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        create_layout(temp.path());
        remove_artifact(temp.path(), "Wav2Lip/inference.py");

        let (report, console) = preflight(temp.path(), &LaunchConfig::default());
        assert_eq!(
            report.outcome().expect_err("must fail").kind,
            FailureKind::MissingEntryPoint
        );
        assert!(console.contains(
            "--> ERROR: Inference entry-point not found: Wav2Lip/inference.py\n\
             --> Make sure the Wav2Lip checkout is complete or pass --entry-point.\n"
        ));
    }

    #[test]
    fn planned_order_checks_inputs_before_models() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let paths = RunPaths::resolve(&LaunchConfig::default(), temp.path()).expect("resolve");
        let names: Vec<_> = planned_checks(&paths).iter().map(|check| check.name).collect();
        assert_eq!(
            names,
            [
                "input_video",
                "input_audio",
                "tool_dir",
                "entry_point",
                "checkpoint",
                "detector_weights"
            ]
        );
    }
}
