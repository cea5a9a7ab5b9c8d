use serde::{Deserialize, Serialize};

use crate::config::StevedoreConfig;
use stowage::io::ext_repr::{ExtItem, ExtManifest};

#[derive(Serialize, Deserialize, Clone)]
pub struct StowOutput {
    #[serde(flatten)]
    pub manifest: ExtManifest,
    pub report: RunReport,
    pub config: StevedoreConfig,
}

/// Results of executing a manifest against a commissioned fleet.
#[derive(Serialize, Deserialize, Clone)]
pub struct RunReport {
    /// One entry per container, in manifest declaration order
    pub containers: Vec<ContainerReport>,
    /// Items rejected as invalid and skipped during the run
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub invalid_items: Vec<ExtItem>,
    /// Total run time of the manifest in milliseconds
    pub run_time_ms: u64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ContainerReport {
    pub container_id: u64,
    /// Number of consigned items the container admitted
    pub stored: usize,
    /// Number of consigned items the admission policy refused
    pub refused: usize,
    /// Number of items the container claims to hold after the run
    pub reported_held: usize,
    /// Membership verdict for every item consigned to this container
    pub checks: Vec<MembershipCheck>,
    /// Membership verdicts for the manifest's explicit probes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub probes: Vec<MembershipCheck>,
    /// Admitted items the container denies holding, uncovered by the audit
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub misplaced: Vec<ExtItem>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct MembershipCheck {
    pub item: ExtItem,
    pub present: bool,
}
