use lanes_model::{Item, NumOfSplits};

use crate::error::CoreError;

/// Deal `slow_items` then `normal_items` round robin over `num_of_splits` lanes.
///
/// The i-th item of the slow-then-normal sequence lands in lane `i % num_of_splits`, so:
/// - every lane holds `floor(slow / n)` or `ceil(slow / n)` slow items;
/// - lane sizes differ by at most one;
/// - when counts do not divide evenly the lower lanes get the extra items.
///
/// The result always has exactly `num_of_splits` lanes; surplus lanes are empty.
pub fn simple_split(
    normal_items: Vec<Item>,
    slow_items: Vec<Item>,
    num_of_splits: NumOfSplits,
) -> Result<Vec<Vec<Item>>, CoreError> {
    if num_of_splits == 0 {
        return Err(CoreError::InvalidSplitCount(num_of_splits));
    }

    let total = slow_items.len() + normal_items.len();
    let per_lane = total.div_ceil(num_of_splits);
    let mut splits: Vec<Vec<Item>> = (0..num_of_splits)
        .map(|_| Vec::with_capacity(per_lane))
        .collect();

    for (i, item) in slow_items.into_iter().chain(normal_items).enumerate() {
        splits[i % num_of_splits].push(item);
    }
    Ok(splits)
}
