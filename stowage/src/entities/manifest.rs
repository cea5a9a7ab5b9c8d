use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{
    Container, Item, MisplacingContainer, SingleItemContainer, WeightLimitedContainer,
};

/// Static, buildable description of one container's admission policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicySpec {
    /// Admit items while their combined weight stays within `capacity`
    WeightLimited { capacity: u64 },
    /// Admit exactly one item
    SingleItem,
    /// Admit everything, report nothing
    Misplacing,
}

impl PolicySpec {
    /// Commissions a live, empty container enforcing this policy.
    pub fn build(&self) -> Box<dyn Container> {
        match self {
            PolicySpec::WeightLimited { capacity } => {
                Box::new(WeightLimitedContainer::new(*capacity))
            }
            PolicySpec::SingleItem => Box::new(SingleItemContainer::new()),
            PolicySpec::Misplacing => Box::new(MisplacingContainer::new()),
        }
    }
}

/// A container to be commissioned for a stowage job.
#[derive(Clone, Debug)]
pub struct ContainerSpec {
    /// Unique identifier of the container within the manifest
    pub id: u64,
    /// The admission policy the container will enforce
    pub policy: PolicySpec,
}

/// The batch of items destined for one container.
#[derive(Clone, Debug)]
pub struct Consignment {
    /// Id of the receiving container
    pub container_id: u64,
    /// Items to offer, in order
    pub items: Vec<Item>,
}

/// An explicit membership query, answered after all consignments are stowed.
#[derive(Clone, Debug)]
pub struct Probe {
    /// Id of the container to interrogate
    pub container_id: u64,
    /// The item asked after, compared by value
    pub item: Item,
}

/// A [`Manifest`] is the static representation of a stowage job: which
/// containers to commission, which items to offer them, and which membership
/// questions to answer once everything is stowed.
///
/// Construction validates the job's structure (unique container ids, no
/// dangling references). Item validity is deliberately not checked here; it
/// is the admission path's concern and surfaces when the job runs.
#[derive(Clone, Debug)]
pub struct Manifest {
    pub name: String,
    pub containers: Vec<ContainerSpec>,
    pub consignments: Vec<Consignment>,
    pub probes: Vec<Probe>,
}

impl Manifest {
    pub fn new(
        name: String,
        containers: Vec<ContainerSpec>,
        consignments: Vec<Consignment>,
        probes: Vec<Probe>,
    ) -> Result<Self> {
        ensure!(
            containers.iter().map(|c| c.id).unique().count() == containers.len(),
            "Container ids must be unique"
        );
        let declared = |id: u64| containers.iter().any(|c| c.id == id);
        ensure!(
            consignments.iter().all(|c| declared(c.container_id)),
            "Every consignment must target a declared container"
        );
        ensure!(
            probes.iter().all(|p| declared(p.container_id)),
            "Every probe must target a declared container"
        );

        Ok(Self {
            name,
            containers,
            consignments,
            probes,
        })
    }

    /// Commissions a live, empty container for every [`ContainerSpec`], in
    /// declaration order.
    pub fn commission(&self) -> Vec<Box<dyn Container>> {
        self.containers
            .iter()
            .map(|spec| spec.policy.build())
            .collect()
    }

    /// Position of the declared container with the given id.
    pub fn container_index(&self, id: u64) -> Option<usize> {
        self.containers.iter().position(|c| c.id == id)
    }

    /// Total number of items the manifest will offer across all consignments.
    pub fn total_item_qty(&self) -> usize {
        self.consignments.iter().map(|c| c.items.len()).sum()
    }
}
