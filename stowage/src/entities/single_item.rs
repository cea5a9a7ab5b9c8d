use log::debug;

use crate::entities::container::vet;
use crate::entities::{Admission, Container, Item};
use crate::errors::StowageError;

/// A container with room for exactly one item.
///
/// The first admitted item occupies the container for its entire lifetime;
/// everything offered afterwards is refused. There is no removal.
#[derive(Clone, Debug, Default)]
pub struct SingleItemContainer {
    held: Option<Item>,
}

impl SingleItemContainer {
    pub fn new() -> Self {
        Self { held: None }
    }

    /// The item occupying the container, if any.
    pub fn held(&self) -> Option<&Item> {
        self.held.as_ref()
    }

    /// The stored items as a slice of zero or one.
    pub fn stored(&self) -> &[Item] {
        self.held.as_slice()
    }
}

impl Container for SingleItemContainer {
    fn can_add(&self, _item: &Item) -> bool {
        self.held.is_none()
    }

    fn add(&mut self, item: Item) -> Result<Admission, StowageError> {
        vet(&item)?;
        match self.held {
            None => {
                self.held = Some(item);
                Ok(Admission::Stored)
            }
            Some(ref occupant) => {
                debug!("[STOW] single-item container refused {item}: already holds {occupant}");
                Ok(Admission::Refused)
            }
        }
    }

    fn contains(&self, item: &Item) -> bool {
        self.held.as_ref() == Some(item)
    }

    fn len(&self) -> usize {
        self.held.is_some() as usize
    }
}
