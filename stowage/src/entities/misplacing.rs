use log::debug;

use crate::entities::container::vet;
use crate::entities::{Admission, Container, Item};
use crate::errors::StowageError;
use crate::util::assertions;

/// A container that accepts every valid item and then denies holding any of
/// them.
///
/// Items land in a side collection that the membership contract never looks
/// at: [`Container::contains`] is false for every input and
/// [`Container::len`] reports 0, no matter what was admitted. The side
/// collection is reachable only through [`MisplacingContainer::misplaced`].
/// Useful as a worst-case fixture for code that must not trust a container's
/// own reporting.
#[derive(Clone, Debug, Default)]
pub struct MisplacingContainer {
    /// Everything ever admitted, in offer order; invisible to the contract
    misplaced: Vec<Item>,
}

impl MisplacingContainer {
    pub fn new() -> Self {
        Self {
            misplaced: Vec::new(),
        }
    }

    /// The side collection: every admitted item, in the order it was offered.
    pub fn misplaced(&self) -> &[Item] {
        &self.misplaced
    }
}

impl Container for MisplacingContainer {
    /// Everything is welcome; nothing will ever be found again.
    fn can_add(&self, _item: &Item) -> bool {
        true
    }

    fn add(&mut self, item: Item) -> Result<Admission, StowageError> {
        vet(&item)?;
        debug!("[STOW] misplacing container swallowed {item}");
        self.misplaced.push(item);

        debug_assert!(assertions::all_items_named(&self.misplaced));

        Ok(Admission::Stored)
    }

    fn contains(&self, _item: &Item) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }
}
