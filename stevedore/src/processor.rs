use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};

use crate::config::StevedoreConfig;
use crate::io::output::{ContainerReport, MembershipCheck, RunReport};
use stowage::entities::{Container, Item, Manifest};
use stowage::io::ext_repr::ExtItem;

/// Executes a [`Manifest`]: commissions the fleet, offers every consignment
/// to its container's admission policy and answers all membership questions
/// against the final state.
pub struct ManifestProcessor {
    pub manifest: Manifest,
    pub config: StevedoreConfig,
    /// The commissioned fleet, one container per manifest entry
    pub containers: Vec<Box<dyn Container>>,
    /// Driver-side tally of the items each container admitted
    admitted: Vec<Vec<Item>>,
    refused: Vec<usize>,
    invalid: Vec<ExtItem>,
}

impl ManifestProcessor {
    pub fn new(manifest: Manifest, config: StevedoreConfig) -> Self {
        let containers = manifest.commission();
        let n_containers = containers.len();
        Self {
            manifest,
            config,
            containers,
            admitted: vec![Vec::new(); n_containers],
            refused: vec![0; n_containers],
            invalid: Vec::new(),
        }
    }

    pub fn run(&mut self) -> Result<RunReport> {
        let start = Instant::now();
        let total_qty = self.manifest.total_item_qty();
        let mut offered = 0;

        for consignment in &self.manifest.consignments {
            let c_idx = self
                .manifest
                .container_index(consignment.container_id)
                .expect("manifest only holds consignments for declared containers");

            for item in &consignment.items {
                offered += 1;
                match self.containers[c_idx].add(item.clone()) {
                    Ok(admission) if admission.is_stored() => {
                        self.admitted[c_idx].push(item.clone());
                        info!(
                            "[STOW] item {}/{}: container {} stored {}",
                            offered, total_qty, consignment.container_id, item
                        );
                    }
                    Ok(_) => {
                        self.refused[c_idx] += 1;
                        info!(
                            "[STOW] item {}/{}: container {} refused {}",
                            offered, total_qty, consignment.container_id, item
                        );
                    }
                    Err(err) => match self.config.halt_on_invalid {
                        true => {
                            return Err(err).with_context(|| {
                                format!(
                                    "consignment for container {} halted",
                                    consignment.container_id
                                )
                            });
                        }
                        false => {
                            warn!("[STOW] item {offered}/{total_qty}: skipped ({err})");
                            self.invalid.push(ExtItem::from(item));
                        }
                    },
                }
            }
        }

        //answer the membership question for every consigned item and every probe
        let containers = self
            .manifest
            .containers
            .iter()
            .enumerate()
            .map(|(c_idx, spec)| {
                let container = &self.containers[c_idx];
                let checks = self
                    .manifest
                    .consignments
                    .iter()
                    .filter(|c| c.container_id == spec.id)
                    .flat_map(|c| &c.items)
                    .map(|item| MembershipCheck {
                        item: ExtItem::from(item),
                        present: container.contains(item),
                    })
                    .collect_vec();
                let probes = self
                    .manifest
                    .probes
                    .iter()
                    .filter(|p| p.container_id == spec.id)
                    .map(|p| MembershipCheck {
                        item: ExtItem::from(&p.item),
                        present: container.contains(&p.item),
                    })
                    .collect_vec();
                //audit: admitted items the container no longer admits to holding
                let misplaced = match self.config.reveal_misplaced {
                    true => self.admitted[c_idx]
                        .iter()
                        .filter(|&item| !container.contains(item))
                        .map(ExtItem::from)
                        .collect_vec(),
                    false => vec![],
                };
                ContainerReport {
                    container_id: spec.id,
                    stored: self.admitted[c_idx].len(),
                    refused: self.refused[c_idx],
                    reported_held: container.len(),
                    checks,
                    probes,
                    misplaced,
                }
            })
            .collect_vec();

        for c_report in &containers {
            if !c_report.misplaced.is_empty() {
                warn!(
                    "[STOW] container {} denies holding {} admitted item(s)",
                    c_report.container_id,
                    c_report.misplaced.len()
                );
            }
        }

        let report = RunReport {
            containers,
            invalid_items: self.invalid.clone(),
            run_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "[STOW] manifest '{}' processed in {:.3}ms",
            self.manifest.name,
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[STOW] {} of {} items stored ({} refused, {} invalid)",
            report.containers.iter().map(|c| c.stored).sum::<usize>(),
            total_qty,
            report.containers.iter().map(|c| c.refused).sum::<usize>(),
            report.invalid_items.len()
        );

        Ok(report)
    }
}
