use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Seed counts every process starts from.
pub const DEFAULT_STOCK: [(&str, u32); 5] = [
    ("margherita", 10),
    ("pepperoni", 10),
    ("cheese", 15),
    ("olives", 10),
    ("mushrooms", 12),
];

/// Remaining units per item id. The only way to change a count is
/// [`Inventory::check_and_decrement`].
#[derive(Debug, Clone)]
pub struct Inventory {
    counts: HashMap<String, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK.iter().map(|(id, count)| (id.to_string(), *count)))
    }
}

impl Inventory {
    pub fn new<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// Reserves one unit of `item_id`.
    ///
    /// Returns `false` without touching any count when the item is exhausted
    /// or not tracked at all.
    pub fn check_and_decrement(&mut self, item_id: &str) -> bool {
        match self.counts.get_mut(item_id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                debug!("Reserved 1 x {} ({} left)", item_id, count);
                true
            }
            Some(_) => {
                debug!("{} is out of stock", item_id);
                false
            }
            None => {
                debug!("{} is not stocked", item_id);
                false
            }
        }
    }

    pub fn remaining(&self, item_id: &str) -> Option<u32> {
        self.counts.get(item_id).copied()
    }

    /// Copy of the current counts, ordered by item id.
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.counts
            .iter()
            .map(|(id, count)| (id.clone(), *count))
            .collect()
    }
}
