//! Shared data models for validation and generation outputs.

pub mod component;
pub mod rules;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Whether a rule violation fails the run.
pub enum Severity {
    Error,
    Warning,
}

#[derive(Serialize, Debug, Clone)]
/// A single rule violation.
pub struct Finding {
    pub rule: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone)]
/// Findings for one component definition file.
pub struct FileReport {
    pub file: String,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
/// Aggregated counts used by printers and the exit policy.
pub struct Summary {
    pub components: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Serialize, Debug, Clone)]
/// Validation results container.
pub struct ValidationResult {
    pub reports: Vec<FileReport>,
    pub summary: Summary,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        self.summary.errors == 0
    }
}
