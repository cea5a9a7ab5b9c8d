use anyhow::Result;
use itertools::Itertools;
use log::warn;

use crate::entities::{Consignment, ContainerSpec, Item, Manifest, PolicySpec, Probe};
use crate::io::ext_repr::{
    ExtConsignment, ExtContainer, ExtItem, ExtManifest, ExtPolicy, ExtProbe,
};

/// Converts an external manifest into an internal [`Manifest`], validating
/// its structure (unique container ids, no dangling references).
///
/// Items are imported as-is: an invalid item is a legitimate part of a
/// manifest and surfaces on the admission path when the job runs.
pub fn import_manifest(ext: &ExtManifest) -> Result<Manifest> {
    let containers = ext.containers.iter().map(import_container).collect_vec();
    let consignments = ext.consignments.iter().map(import_consignment).collect_vec();
    let probes = ext.probes.iter().map(import_probe).collect_vec();

    let n_unnamed = consignments
        .iter()
        .flat_map(|c| &c.items)
        .filter(|item| !item.is_named())
        .count();
    if n_unnamed > 0 {
        warn!("[IMPORT] manifest holds {n_unnamed} unnamed item(s), admission will reject these");
    }

    Manifest::new(ext.name.clone(), containers, consignments, probes)
}

pub fn import_container(ext: &ExtContainer) -> ContainerSpec {
    ContainerSpec {
        id: ext.id,
        policy: import_policy(&ext.policy),
    }
}

pub fn import_policy(ext: &ExtPolicy) -> PolicySpec {
    match ext {
        ExtPolicy::WeightLimited { capacity } => PolicySpec::WeightLimited {
            capacity: *capacity,
        },
        ExtPolicy::SingleItem => PolicySpec::SingleItem,
        ExtPolicy::Misplacing => PolicySpec::Misplacing,
    }
}

pub fn import_item(ext: &ExtItem) -> Item {
    Item::new(ext.name.clone(), ext.weight)
}

fn import_consignment(ext: &ExtConsignment) -> Consignment {
    Consignment {
        container_id: ext.container,
        items: ext.items.iter().map(import_item).collect_vec(),
    }
}

fn import_probe(ext: &ExtProbe) -> Probe {
    Probe {
        container_id: ext.container,
        item: import_item(&ext.item),
    }
}
