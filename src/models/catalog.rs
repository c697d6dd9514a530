use std::fmt;

use crate::models::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Base,
    Topping,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Base => write!(f, "base"),
            ItemKind::Topping => write!(f, "topping"),
        }
    }
}

/// A priced catalog entry. `key` is what the user types at the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub kind: ItemKind,
    pub key: String,
}

impl Item {
    pub fn new(id: &str, name: &str, price: Money, kind: ItemKind, key: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            kind,
            key: key.to_string(),
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self.kind, ItemKind::Base)
    }

    pub fn is_topping(&self) -> bool {
        matches!(self.kind, ItemKind::Topping)
    }
}

/// Static set of bases and toppings, in menu order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Item::new("margherita", "Margherita", Money::from_cents(500), ItemKind::Base, "1"),
            Item::new("pepperoni", "Pepperoni", Money::from_cents(600), ItemKind::Base, "2"),
            Item::new("cheese", "Cheese", Money::from_cents(100), ItemKind::Topping, "1"),
            Item::new("olives", "Olives", Money::from_cents(50), ItemKind::Topping, "2"),
            Item::new("mushrooms", "Mushrooms", Money::from_cents(70), ItemKind::Topping, "3"),
        ])
    }
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn bases(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_base())
    }

    pub fn toppings(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_topping())
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_base(&self, id: &str) -> Option<&Item> {
        self.bases().find(|item| item.id == id)
    }

    pub fn find_topping(&self, id: &str) -> Option<&Item> {
        self.toppings().find(|item| item.id == id)
    }

    /// Resolves a menu key typed at the base prompt.
    pub fn base_by_key(&self, key: &str) -> Option<&Item> {
        let key = key.trim();
        self.bases().find(|item| item.key == key)
    }

    /// Resolves a menu key typed at the topping prompt.
    pub fn topping_by_key(&self, key: &str) -> Option<&Item> {
        let key = key.trim();
        self.toppings().find(|item| item.key == key)
    }
}
