use thiserror::Error;

/// Errors raised by the admission path of a [`Container`](crate::entities::Container).
///
/// Policy refusals are not errors: a container that turns an item away
/// reports [`Admission::Refused`](crate::entities::Admission) and stays
/// untouched. The only failure mode is being handed an item that is invalid
/// regardless of policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StowageError {
    /// The offered item is malformed (blank name); no container accepts it
    /// and no state is modified.
    #[error("invalid item: name is blank (weight {weight})")]
    InvalidItem {
        /// Weight of the rejected item, kept for diagnostics
        weight: u64,
    },
}
