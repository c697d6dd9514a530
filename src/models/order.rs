use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{money::Money, payment::PaymentMethod, pizza::Pizza};

/// Lifecycle of a single order. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStage {
    #[default]
    SelectingBase,
    AddingToppings,
    AwaitingPayment,
    Completed,
    Cancelled,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot move order from {from} to {to}")]
pub struct StageError {
    pub from: OrderStage,
    pub to: OrderStage,
}

impl OrderStage {
    pub fn can_advance_to(self, next: OrderStage) -> bool {
        matches!(
            (self, next),
            (OrderStage::SelectingBase, OrderStage::AddingToppings)
                | (OrderStage::SelectingBase, OrderStage::Cancelled)
                | (OrderStage::AddingToppings, OrderStage::AwaitingPayment)
                | (OrderStage::AwaitingPayment, OrderStage::Completed)
        )
    }

    pub fn advance(&mut self, next: OrderStage) -> Result<(), StageError> {
        if !self.can_advance_to(next) {
            return Err(StageError { from: *self, to: next });
        }
        tracing::debug!("Order stage: {} -> {}", self, next);
        *self = next;
        Ok(())
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStage::SelectingBase => write!(f, "selecting base"),
            OrderStage::AddingToppings => write!(f, "adding toppings"),
            OrderStage::AwaitingPayment => write!(f, "awaiting payment"),
            OrderStage::Completed => write!(f, "completed"),
            OrderStage::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Transient record of a paid order. Printed, never stored.
#[derive(Debug, Serialize, Clone)]
pub struct Receipt {
    pub id: Uuid,
    pub description: String,
    pub total: Money,
    pub payment: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(pizza: &Pizza, payment: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: pizza.description(),
            total: pizza.cost(),
            payment,
            paid_at: Utc::now(),
        }
    }

    pub fn confirmation(&self) -> String {
        self.payment.pay(self.total)
    }
}
