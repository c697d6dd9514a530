pub mod money;
pub mod catalog;
pub mod pizza;
pub mod payment;
pub mod order;

pub use money::Money;
pub use catalog::{Catalog, Item, ItemKind};
pub use pizza::Pizza;
pub use payment::PaymentMethod;
pub use order::{OrderStage, Receipt, StageError};
