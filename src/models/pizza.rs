use crate::models::{catalog::Item, money::Money};

/// A base with its toppings in the order they were added.
///
/// Adding a topping consumes the pizza and hands back the topped one, so a
/// pizza can only grow through [`Pizza::with_topping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    base: Item,
    toppings: Vec<Item>,
}

impl Pizza {
    /// Bakes a plain pizza from a base catalog entry.
    pub fn new(base: &Item) -> Self {
        debug_assert!(base.is_base(), "pizza base must be a base item");
        Self {
            base: base.clone(),
            toppings: Vec::new(),
        }
    }

    pub fn with_topping(mut self, topping: &Item) -> Self {
        debug_assert!(topping.is_topping(), "only toppings can be added to a pizza");
        self.toppings.push(topping.clone());
        self
    }

    pub fn description(&self) -> String {
        self.toppings
            .iter()
            .fold(self.base.name.clone(), |mut description, topping| {
                description.push_str(" + ");
                description.push_str(&topping.name);
                description
            })
    }

    pub fn cost(&self) -> Money {
        self.base.price + self.toppings.iter().map(|t| t.price).sum::<Money>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Catalog;
    use proptest::prelude::*;

    #[test]
    fn test_plain_pizza() {
        let catalog = Catalog::default();
        let pizza = Pizza::new(catalog.find("margherita").unwrap());
        assert_eq!(pizza.description(), "Margherita");
        assert_eq!(pizza.cost(), Money::from_cents(500));
    }

    #[test]
    fn test_toppings_append_in_order() {
        let catalog = Catalog::default();
        let pizza = Pizza::new(catalog.find("pepperoni").unwrap())
            .with_topping(catalog.find("olives").unwrap())
            .with_topping(catalog.find("cheese").unwrap())
            .with_topping(catalog.find("olives").unwrap());
        assert_eq!(pizza.description(), "Pepperoni + Olives + Cheese + Olives");
        assert_eq!(pizza.cost(), Money::from_cents(600 + 50 + 100 + 50));
    }

    fn topping_ids() -> impl Strategy<Value = Vec<&'static str>> {
        prop::collection::vec(prop::sample::select(vec!["cheese", "olives", "mushrooms"]), 0..12)
    }

    proptest! {
        /// Cost is the base price plus every topping price, whatever the order.
        #[test]
        fn cost_is_order_independent(ids in topping_ids()) {
            let catalog = Catalog::default();
            let base = catalog.find("margherita").unwrap();

            let forward = ids.iter().fold(Pizza::new(base), |p, id| p.with_topping(catalog.find(id).unwrap()));
            let backward = ids.iter().rev().fold(Pizza::new(base), |p, id| p.with_topping(catalog.find(id).unwrap()));

            let expected = ids.iter().map(|id| catalog.find(id).unwrap().price).sum::<Money>() + base.price;
            prop_assert_eq!(forward.cost(), expected);
            prop_assert_eq!(backward.cost(), expected);
        }

        /// Description lists the base then each topping in insertion order.
        #[test]
        fn description_follows_insertion_order(ids in topping_ids()) {
            let catalog = Catalog::default();
            let pizza = ids.iter().fold(Pizza::new(catalog.find("pepperoni").unwrap()), |p, id| {
                p.with_topping(catalog.find(id).unwrap())
            });

            let mut expected = vec!["Pepperoni".to_string()];
            expected.extend(ids.iter().map(|id| catalog.find(id).unwrap().name.clone()));
            prop_assert_eq!(pizza.description(), expected.join(" + "));
        }
    }
}
