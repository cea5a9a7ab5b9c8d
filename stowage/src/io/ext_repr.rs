use crate::entities::Item;
use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Name of the item
    pub name: String,
    /// Weight of the item.
    /// Weightless if not specified.
    #[serde(default)]
    pub weight: u64,
}

impl From<&Item> for ExtItem {
    fn from(item: &Item) -> Self {
        ExtItem {
            name: item.name.clone(),
            weight: item.weight,
        }
    }
}

/// External representation of a [`ContainerSpec`](crate::entities::ContainerSpec).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    /// Unique identifier of the container
    pub id: u64,
    /// The admission policy the container enforces
    pub policy: ExtPolicy,
}

/// The available admission policies
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtPolicy {
    /// Admits items while their combined weight stays within the capacity
    WeightLimited { capacity: u64 },
    /// Admits exactly one item
    SingleItem,
    /// Admits everything and denies holding any of it
    Misplacing,
}

/// External representation of a [`Consignment`](crate::entities::Consignment):
/// the items destined for one container.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtConsignment {
    /// Id of the receiving container
    pub container: u64,
    /// Items to offer, in order
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Probe`](crate::entities::Probe):
/// a membership question to answer after stowing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProbe {
    /// Id of the container to interrogate
    pub container: u64,
    /// The item asked after
    pub item: ExtItem,
}

/// External representation of a [`Manifest`](crate::entities::Manifest).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtManifest {
    /// Name of the stowage job
    pub name: String,
    /// The containers to commission
    pub containers: Vec<ExtContainer>,
    /// The items to offer, grouped per container
    pub consignments: Vec<ExtConsignment>,
    /// Extra membership questions, on top of the per-item checks every run answers.
    /// Empty if not specified.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub probes: Vec<ExtProbe>,
}
