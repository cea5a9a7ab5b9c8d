use crate::entities::{Item, WeightLimitedContainer};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn weight_tally_consistent(container: &WeightLimitedContainer) -> bool {
    let tallied: u64 = container.stored().iter().map(|item| item.weight).sum();
    tallied == container.total_weight()
}

pub fn within_capacity(container: &WeightLimitedContainer) -> bool {
    container.total_weight() <= container.capacity()
}

pub fn all_items_named(items: &[Item]) -> bool {
    items.iter().all(Item::is_named)
}
