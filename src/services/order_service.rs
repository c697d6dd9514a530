use thiserror::Error;
use tracing::{debug, info};

use crate::{
    models::{
        catalog::{Catalog, Item},
        order::{OrderStage, Receipt, StageError},
        payment::PaymentMethod,
        pizza::Pizza,
    },
    services::inventory_service::Inventory,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("{name} is unavailable or out of stock")]
    Unavailable { name: String },

    #[error("No base pizza has been selected")]
    NoBase,

    #[error("Invalid order step: {0}")]
    InvalidStep(#[from] StageError),
}

/// Assembles one pizza against the shared inventory.
///
/// Every accepted base or topping costs exactly one unit of stock; a rejected
/// selection leaves both the pizza and the inventory untouched.
pub struct OrderBuilder<'a> {
    catalog: &'a Catalog,
    inventory: &'a mut Inventory,
    pizza: Option<Pizza>,
    stage: OrderStage,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(catalog: &'a Catalog, inventory: &'a mut Inventory) -> Self {
        Self {
            catalog,
            inventory,
            pizza: None,
            stage: OrderStage::SelectingBase,
        }
    }

    pub fn stage(&self) -> OrderStage {
        self.stage
    }

    pub fn pizza(&self) -> Option<&Pizza> {
        self.pizza.as_ref()
    }

    pub fn inventory(&self) -> &Inventory {
        &*self.inventory
    }

    /// Starts the order with a base. Fails without creating a pizza when the
    /// base is unknown or sold out.
    pub fn select_base(&mut self, base_id: &str) -> Result<&Pizza, OrderError> {
        self.ensure_stage(OrderStage::SelectingBase, OrderStage::AddingToppings)?;

        let catalog = self.catalog;
        let base = catalog.find_base(base_id);
        let base = self.reserve(base, base_id)?;

        debug!("Starting order with {}", base.name);
        self.stage.advance(OrderStage::AddingToppings)?;
        Ok(self.pizza.insert(Pizza::new(base)))
    }

    /// Tops the current pizza. Unknown topping ids count as out of stock.
    pub fn add_topping(&mut self, topping_id: &str) -> Result<&Pizza, OrderError> {
        self.ensure_stage(OrderStage::AddingToppings, OrderStage::AddingToppings)?;
        if self.pizza.is_none() {
            return Err(OrderError::NoBase);
        }

        let catalog = self.catalog;
        let topping = catalog.find_topping(topping_id);
        let topping = self.reserve(topping, topping_id)?;

        let pizza = self.pizza.take().ok_or(OrderError::NoBase)?;
        Ok(self.pizza.insert(pizza.with_topping(topping)))
    }

    /// Closes the topping list and returns the pizza awaiting payment.
    pub fn finish(&mut self) -> Result<&Pizza, OrderError> {
        self.stage.advance(OrderStage::AwaitingPayment)?;
        self.pizza.as_ref().ok_or(OrderError::NoBase)
    }

    pub fn pay(mut self, method: PaymentMethod) -> Result<Receipt, OrderError> {
        self.stage.advance(OrderStage::Completed)?;
        let pizza = self.pizza.as_ref().ok_or(OrderError::NoBase)?;
        let receipt = Receipt::new(pizza, method);
        info!(
            "Order {} paid: {} for {} via {}",
            receipt.id, receipt.description, receipt.total, receipt.payment
        );
        Ok(receipt)
    }

    /// Abandons the order before any base was chosen.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.stage.advance(OrderStage::Cancelled)?;
        info!("Order cancelled before a base was selected");
        Ok(())
    }

    fn ensure_stage(&self, expected: OrderStage, next: OrderStage) -> Result<(), OrderError> {
        if self.stage != expected {
            return Err(OrderError::InvalidStep(StageError {
                from: self.stage,
                to: next,
            }));
        }
        Ok(())
    }

    fn reserve<'c>(&mut self, item: Option<&'c Item>, requested: &str) -> Result<&'c Item, OrderError> {
        match item {
            Some(item) if self.inventory.check_and_decrement(&item.id) => Ok(item),
            Some(item) => Err(OrderError::Unavailable {
                name: item.name.clone(),
            }),
            None => Err(OrderError::Unavailable {
                name: requested.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::Money;

    #[test]
    fn test_select_base_reserves_stock() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::default();
        let mut order = OrderBuilder::new(&catalog, &mut inventory);

        let pizza = order.select_base("margherita").unwrap();
        assert_eq!(pizza.cost(), Money::from_cents(500));
        assert_eq!(order.stage(), OrderStage::AddingToppings);
        assert_eq!(order.inventory().remaining("margherita"), Some(9));
    }

    #[test]
    fn test_sold_out_base_creates_no_pizza() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::new([
            ("margherita".to_string(), 10),
            ("pepperoni".to_string(), 0),
        ]);
        let mut order = OrderBuilder::new(&catalog, &mut inventory);

        let err = order.select_base("pepperoni").unwrap_err();
        assert_eq!(err, OrderError::Unavailable { name: "Pepperoni".to_string() });
        assert!(order.pizza().is_none());
        assert_eq!(order.stage(), OrderStage::SelectingBase);
        assert_eq!(order.inventory().remaining("pepperoni"), Some(0));
    }

    #[test]
    fn test_topping_id_is_not_a_base() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::default();
        let mut order = OrderBuilder::new(&catalog, &mut inventory);

        assert!(order.select_base("cheese").is_err());
        assert_eq!(order.inventory().remaining("cheese"), Some(15));
    }

    #[test]
    fn test_add_toppings_scenario() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::default();
        let mut order = OrderBuilder::new(&catalog, &mut inventory);

        order.select_base("margherita").unwrap();
        let pizza = order.add_topping("cheese").unwrap();
        assert_eq!(pizza.description(), "Margherita + Cheese");
        assert_eq!(pizza.cost(), Money::from_cents(600));
        let pizza = order.add_topping("olives").unwrap();
        assert_eq!(pizza.cost(), Money::from_cents(650));

        assert_eq!(order.inventory().remaining("cheese"), Some(14));
        assert_eq!(order.inventory().remaining("olives"), Some(9));

        order.finish().unwrap();
        let receipt = order.pay(PaymentMethod::PayPal).unwrap();
        assert_eq!(receipt.confirmation(), "Paid $6.50 using PayPal.");
    }

    #[test]
    fn test_rejected_topping_leaves_pizza_unchanged() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::new([
            ("margherita".to_string(), 1),
            ("cheese".to_string(), 0),
        ]);
        let mut order = OrderBuilder::new(&catalog, &mut inventory);
        order.select_base("margherita").unwrap();

        assert!(order.add_topping("cheese").is_err());
        // Olives are in the catalog but not stocked here.
        assert!(order.add_topping("olives").is_err());
        assert!(order.add_topping("anchovies").is_err());

        let pizza = order.pizza().unwrap();
        assert_eq!(pizza.description(), "Margherita");
        assert_eq!(pizza.cost(), Money::from_cents(500));
        assert_eq!(order.inventory().remaining("cheese"), Some(0));
    }

    #[test]
    fn test_topping_before_base_is_rejected() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::default();
        let mut order = OrderBuilder::new(&catalog, &mut inventory);

        assert!(matches!(order.add_topping("cheese"), Err(OrderError::InvalidStep(_))));
        assert_eq!(order.inventory().remaining("cheese"), Some(15));
    }

    #[test]
    fn test_cancel_only_before_base() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::default();

        let mut order = OrderBuilder::new(&catalog, &mut inventory);
        order.cancel().unwrap();
        assert_eq!(order.stage(), OrderStage::Cancelled);

        let mut order = OrderBuilder::new(&catalog, &mut inventory);
        order.select_base("pepperoni").unwrap();
        assert!(order.cancel().is_err());
    }

    #[test]
    fn test_no_toppings_after_finish() {
        let catalog = Catalog::default();
        let mut inventory = Inventory::default();
        let mut order = OrderBuilder::new(&catalog, &mut inventory);
        order.select_base("pepperoni").unwrap();
        order.finish().unwrap();

        assert!(order.add_topping("mushrooms").is_err());
        assert_eq!(order.inventory().remaining("mushrooms"), Some(12));
        let receipt = order.pay(PaymentMethod::CreditCard).unwrap();
        assert_eq!(receipt.confirmation(), "Paid $6.00 using Credit Card.");
    }
}
