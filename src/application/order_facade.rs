use crate::domain::errors::DomainError;
use crate::domain::ports::{CustomerLookup, ProductCatalog, ShippingFeeCalculator};
use crate::domain::{Order, OrderWarning};

/// Single entry point for placing an order.
///
/// Sequences the customer lookup, the product lookups and the shipping-fee
/// calculation, and assembles the result. A missing customer fails the call;
/// missing products and a missing shipping address are recorded as
/// [`OrderWarning`]s and the order is still returned.
pub struct OrderFacade<C, P, S> {
    customers: C,
    products: P,
    shipping: S,
}

impl<C, P, S> OrderFacade<C, P, S>
where
    C: CustomerLookup,
    P: ProductCatalog,
    S: ShippingFeeCalculator,
{
    pub fn new(customers: C, products: P, shipping: S) -> Self {
        Self {
            customers,
            products,
            shipping,
        }
    }

    pub fn customers(&self) -> &C {
        &self.customers
    }

    pub fn place_order(
        &self,
        customer_id: u64,
        product_ids: &[u64],
    ) -> Result<Order, DomainError> {
        // 1. Resolve the customer; nothing else happens without one.
        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(DomainError::CustomerNotFound(customer_id))?;

        // 2. Start an empty order owned by that customer.
        let mut order = Order::new(customer);

        // 3. Add the products that exist, in request order.
        for &product_id in product_ids {
            match self.products.find_by_id(product_id)? {
                Some(product) => order.add_item(product),
                None => {
                    log::warn!(
                        "order {}: product {} not found, skipping",
                        order.id(),
                        product_id
                    );
                    order.warn(OrderWarning::ProductSkipped { product_id });
                }
            }
        }

        // 4. Charge shipping only when there is somewhere to ship to.
        let customer = order.customer();
        let postal_code = customer.shipping_postal_code().map(str::to_string);
        let unresolved = customer.unresolved_postal_code().map(str::to_string);
        match (postal_code, unresolved) {
            (Some(postal_code), _) => {
                let fee = self.shipping.calculate(&postal_code)?;
                order.set_shipping_fee(fee)?;
            }
            (None, Some(postal_code)) => {
                log::warn!(
                    "order {}: {}, fee left at zero",
                    order.id(),
                    DomainError::AddressNotFound(postal_code.clone())
                );
                order.warn(OrderWarning::AddressNotFound { postal_code });
            }
            (None, None) => {
                log::warn!(
                    "order {}: customer {} has no shipping address, fee left at zero",
                    order.id(),
                    customer_id
                );
                order.warn(OrderWarning::MissingShippingAddress);
            }
        }

        log::info!(
            "order {} placed for customer {}: {} item(s), shipping fee {}",
            order.id(),
            customer_id,
            order.items().len(),
            order.shipping_fee()
        );
        Ok(order)
    }
}
