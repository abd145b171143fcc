//! JSON plan preview

use crate::config::NamingConfig;
use crate::plan::DistributionPlan;
use crate::Result;
use anyhow::Context;
use serde::Serialize;

/// Serializable view of a distribution plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonPlan {
    pub total_files: usize,
    pub num_directories: usize,
    pub files_per_dir: usize,
    pub remaining_files: usize,
    pub directories: Vec<JsonDirectory>,
}

/// One directory of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonDirectory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    pub count: usize,
}

impl JsonPlan {
    /// Build the JSON view of a plan with resolved names
    pub fn from_plan(plan: &DistributionPlan, naming: &NamingConfig) -> Self {
        let directories = plan
            .iter()
            .map(|a| JsonDirectory {
                name: naming.dir_name(a.dir_index),
                first: a.first().map(|i| naming.file_name(i)),
                last: a.last().map(|i| naming.file_name(i)),
                count: a.count(),
            })
            .collect();

        Self {
            total_files: plan.total_files,
            num_directories: plan.num_directories,
            files_per_dir: plan.files_per_dir,
            remaining_files: plan.remaining_files,
            directories,
        }
    }

    /// Pretty-printed JSON document
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize plan to JSON")
    }
}
