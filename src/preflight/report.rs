use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreflightState {
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStage {
    Inputs,
    Models,
}

impl CheckStage {
    pub fn number(self) -> u8 {
        match self {
            CheckStage::Inputs => 1,
            CheckStage::Models => 2,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            CheckStage::Inputs => "Checking for required files and directories...",
            CheckStage::Models => "Checking for pre-trained models...",
        }
    }

    pub fn passed_message(self) -> &'static str {
        match self {
            CheckStage::Inputs => "All required files and directories are present.",
            CheckStage::Models => "Pre-trained models are in place.",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingInput,
    MissingDirectory,
    MissingEntryPoint,
    MissingModel,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::MissingInput => "Required file not found",
            FailureKind::MissingDirectory => "Wav2Lip directory not found",
            FailureKind::MissingEntryPoint => "Inference entry-point not found",
            FailureKind::MissingModel => "Pre-trained model not found",
        }
    }

    pub fn remediation(self) -> Option<&'static str> {
        match self {
            FailureKind::MissingInput => None,
            FailureKind::MissingDirectory => {
                Some("Clone the Wav2Lip repository next to this launcher or pass --tool-dir.")
            }
            FailureKind::MissingEntryPoint => {
                Some("Make sure the Wav2Lip checkout is complete or pass --entry-point.")
            }
            FailureKind::MissingModel => Some(
                "Please ensure you have downloaded the models and placed them in the correct folders as per the README.",
            ),
        }
    }
}

/// First missing artifact found by the preflight.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Error)]
#[error("{}: {}", .kind.label(), .path.display())]
pub struct PreflightFailure {
    pub check: String,
    pub kind: FailureKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub stage: CheckStage,
    pub status: CheckStatus,
    pub path: PathBuf,
    pub resolved: PathBuf,
    pub detail: String,
    pub remediation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreflightReport {
    pub generated_at_rfc3339: String,
    pub state: PreflightState,
    pub checks: Vec<CheckResult>,
    pub failure: Option<PreflightFailure>,
}

impl PreflightReport {
    pub fn outcome(&self) -> Result<(), PreflightFailure> {
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Preflight state: {:?}\n", self.state));
        out.push_str(&format!("Generated at: {}\n\n", self.generated_at_rfc3339));
        out.push_str(&format!("{:<20} {:<8} {:<6} {}\n", "CHECK", "STAGE", "STATUS", "DETAIL"));
        out.push_str(&format!("{:<20} {:<8} {:<6} {}\n", "-----", "-----", "------", "------"));

        for check in &self.checks {
            out.push_str(&format!(
                "{:<20} {:<8} {:<6} {}\n",
                check.name,
                check.stage.number(),
                status_label(check.status),
                check.detail
            ));
            if let Some(remediation) = &check.remediation {
                out.push_str(&format!("  remediation: {}\n", remediation));
            }
        }

        out
    }
}

fn status_label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "PASS",
        CheckStatus::Fail => "FAIL",
        CheckStatus::Skip => "SKIP",
    }
}
