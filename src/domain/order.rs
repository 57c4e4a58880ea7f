use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::customer::Customer;
use super::errors::DomainError;
use super::product::Product;

/// Soft failures recorded while an order is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderWarning {
    /// A requested product could not be found and was left out.
    ProductSkipped { product_id: u64 },
    /// The customer's postal code has no registered address, so no fee was
    /// charged.
    AddressNotFound { postal_code: String },
    /// The customer has no usable postal code, so no fee was charged.
    MissingShippingAddress,
}

/// An order assembled for one customer.
///
/// Items can only be appended and the shipping fee can only be set once.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: Uuid,
    placed_at: DateTime<Utc>,
    customer: Customer,
    items: Vec<Product>,
    shipping_fee: Option<BigDecimal>,
    warnings: Vec<OrderWarning>,
}

impl Order {
    pub fn new(customer: Customer) -> Self {
        Self {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            customer,
            items: Vec::new(),
            shipping_fee: None,
            warnings: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn warnings(&self) -> &[OrderWarning] {
        &self.warnings
    }

    /// The shipping fee, or zero when none was set.
    pub fn shipping_fee(&self) -> BigDecimal {
        self.shipping_fee.clone().unwrap_or_else(|| BigDecimal::from(0))
    }

    pub fn has_shipping_fee(&self) -> bool {
        self.shipping_fee.is_some()
    }

    pub(crate) fn add_item(&mut self, product: Product) {
        self.items.push(product);
    }

    pub(crate) fn set_shipping_fee(&mut self, fee: BigDecimal) -> Result<(), DomainError> {
        if self.shipping_fee.is_some() {
            return Err(DomainError::InvalidInput(format!(
                "shipping fee already set on order {}",
                self.id
            )));
        }
        self.shipping_fee = Some(fee);
        Ok(())
    }

    pub(crate) fn warn(&mut self, warning: OrderWarning) {
        self.warnings.push(warning);
    }
}
