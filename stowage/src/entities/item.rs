use std::fmt;

/// An item that can be offered to a [`Container`](crate::entities::Container).
///
/// Items are compared by value: two items are interchangeable iff both their
/// name and their weight match. Identity plays no role in membership checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Name of the item
    pub name: String,
    /// Weight of the item, in abstract whole units
    pub weight: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u64) -> Item {
        Item {
            name: name.into(),
            weight,
        }
    }

    /// True if the item carries a usable name.
    /// Containers refuse to even consider unnamed items.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.weight)
    }
}
