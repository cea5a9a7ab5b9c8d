use crate::entities::Item;
use crate::errors::StowageError;

/// Outcome of offering an item to a [`Container`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The admission policy let the item through; the container now accounts for it.
    Stored,
    /// The admission policy turned the item away; the container is unchanged.
    Refused,
}

impl Admission {
    pub fn is_stored(self) -> bool {
        matches!(self, Admission::Stored)
    }
}

/// Trait for the shared contract of all container variants.
///
/// Each variant owns its storage exclusively and brings its own admission
/// policy; the trait defines the contract only. It is object-safe, so drivers
/// can hold a mixed fleet as `Box<dyn Container>` and dispatch dynamically.
pub trait Container {
    /// Admission policy of this variant: true if offering `item` right now
    /// would store it. Pure check, never mutates. Judges policy only;
    /// validity of the item itself is the uniform concern of [`Container::add`].
    fn can_add(&self, item: &Item) -> bool;

    /// Offers a single item to the container.
    ///
    /// Unnamed items are turned down with [`StowageError::InvalidItem`]
    /// before any policy runs, leaving the container untouched. Otherwise the
    /// admission policy decides between [`Admission::Stored`] and a silent
    /// [`Admission::Refused`].
    fn add(&mut self, item: Item) -> Result<Admission, StowageError>;

    /// True iff an item equal by value to `item` is reported present.
    fn contains(&self, item: &Item) -> bool;

    /// Number of items this container reports holding.
    fn len(&self) -> usize;

    /// True if the container reports holding nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offers each item in order via [`Container::add`].
    ///
    /// Policy refusals do not stop the batch; the first invalid item does,
    /// and items stored before it stay stored. Returns the number of items
    /// that were stored. An empty batch is a no-op.
    fn add_all(&mut self, items: Vec<Item>) -> Result<usize, StowageError> {
        let mut stored = 0;
        for item in items {
            if self.add(item)?.is_stored() {
                stored += 1;
            }
        }
        Ok(stored)
    }
}

/// Uniform validity gate, applied by every variant before its policy runs.
pub(crate) fn vet(item: &Item) -> Result<(), StowageError> {
    match item.is_named() {
        true => Ok(()),
        false => Err(StowageError::InvalidItem {
            weight: item.weight,
        }),
    }
}
