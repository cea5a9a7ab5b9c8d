mod container;
mod item;
mod manifest;
mod misplacing;
mod single_item;
mod weight_limited;

#[doc(inline)]
pub use container::Admission;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use manifest::Consignment;

#[doc(inline)]
pub use manifest::ContainerSpec;

#[doc(inline)]
pub use manifest::Manifest;

#[doc(inline)]
pub use manifest::PolicySpec;

#[doc(inline)]
pub use manifest::Probe;

#[doc(inline)]
pub use misplacing::MisplacingContainer;

#[doc(inline)]
pub use single_item::SingleItemContainer;

#[doc(inline)]
pub use weight_limited::WeightLimitedContainer;
