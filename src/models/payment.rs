use serde::Serialize;
use std::fmt;

use crate::models::money::Money;

/// How the customer settles the order. Paying never fails; the only effect is
/// the confirmation line.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    PayPal,
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::PayPal, PaymentMethod::CreditCard];

    /// Menu key shown at the payment prompt.
    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::PayPal => "1",
            PaymentMethod::CreditCard => "2",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|method| method.key() == key)
    }

    pub fn pay(&self, amount: Money) -> String {
        format!("Paid {} using {}.", amount, self)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::PayPal => write!(f, "PayPal"),
            PaymentMethod::CreditCard => write!(f, "Credit Card"),
        }
    }
}
