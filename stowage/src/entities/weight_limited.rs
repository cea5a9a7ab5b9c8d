use log::debug;

use crate::entities::container::vet;
use crate::entities::{Admission, Container, Item};
use crate::errors::StowageError;
use crate::util::assertions;

/// A container that admits items for as long as their combined weight stays
/// within a fixed capacity.
///
/// Admission is order-sensitive: items are never repacked, so an item that
/// does not fit is refused even if lighter items offered later still would.
#[derive(Clone, Debug)]
pub struct WeightLimitedContainer {
    capacity: u64,
    /// Items stored so far, in offer order
    items: Vec<Item>,
    /// Running total of the stored items' weights, kept in sync with `items`
    total_weight: u64,
}

impl WeightLimitedContainer {
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            items: Vec::new(),
            total_weight: 0,
        }
    }

    /// Maximum combined weight this container will hold.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Combined weight of the items currently stored.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Weight that can still be admitted before the capacity is reached.
    pub fn remaining_capacity(&self) -> u64 {
        self.capacity - self.total_weight
    }

    /// The stored items, in the order they were admitted.
    pub fn stored(&self) -> &[Item] {
        &self.items
    }
}

impl Container for WeightLimitedContainer {
    fn can_add(&self, item: &Item) -> bool {
        self.total_weight
            .checked_add(item.weight)
            .is_some_and(|w| w <= self.capacity)
    }

    fn add(&mut self, item: Item) -> Result<Admission, StowageError> {
        vet(&item)?;
        if !self.can_add(&item) {
            debug!(
                "[STOW] weight-limited container refused {item}: remaining capacity {}",
                self.remaining_capacity()
            );
            return Ok(Admission::Refused);
        }
        self.total_weight += item.weight;
        self.items.push(item);

        debug_assert!(assertions::weight_tally_consistent(self));
        debug_assert!(assertions::within_capacity(self));
        debug_assert!(assertions::all_items_named(&self.items));

        Ok(Admission::Stored)
    }

    fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
