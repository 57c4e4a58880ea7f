//! Order placement built from three small patterns:
//!
//! * a single [`CustomerService`] shared through an `Arc` by every consumer,
//! * an [`AddressRepository`](domain::ports::AddressRepository) lookup whose
//!   backing store is picked at wiring time,
//! * an [`OrderFacade`] that sequences the lookups and the shipping-fee
//!   calculation into one [`Order`](domain::Order).

pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;

use std::sync::Arc;

use application::{CustomerService, OrderFacade};
use domain::ports::{AddressRepository, ShippingFeeCalculator};
use domain::Address;
use infrastructure::{
    FlatRateShipping, InMemoryAddressRepository, InMemoryProductCatalog, PostalZoneShipping,
};

pub use config::AppConfig;
pub use errors::AppError;

pub type SharedCustomerService = Arc<CustomerService<Arc<InMemoryAddressRepository>>>;

pub type ShopFacade =
    OrderFacade<SharedCustomerService, InMemoryProductCatalog, Arc<dyn ShippingFeeCalculator>>;

/// Everything wired together at startup.
pub struct Shop {
    pub addresses: Arc<InMemoryAddressRepository>,
    /// The one customer lookup instance; the facade holds a clone of this `Arc`.
    pub customers: SharedCustomerService,
    pub facade: ShopFacade,
}

/// Pick the shipping calculator the configuration asks for.
pub fn shipping_calculator(config: &AppConfig) -> Arc<dyn ShippingFeeCalculator> {
    if config.shipping_zone_rates.is_empty() {
        Arc::new(FlatRateShipping::new(config.shipping_flat_fee.clone()))
    } else {
        Arc::new(PostalZoneShipping::new(
            config.shipping_flat_fee.clone(),
            config.shipping_zone_rates.clone(),
        ))
    }
}

/// Build the address store, the shared customer service and the facade.
pub fn build_shop(config: &AppConfig, catalog: InMemoryProductCatalog) -> Result<Shop, AppError> {
    let addresses = Arc::new(InMemoryAddressRepository::new());
    for postal_code in &config.address_postal_codes {
        addresses.save(Address::new(postal_code.as_str()))?;
    }

    let mut customers = CustomerService::new(Arc::clone(&addresses));
    if let Some(postal_code) = &config.default_postal_code {
        customers = customers.with_default_postal_code(postal_code.as_str());
    }
    for (customer_id, postal_code) in &config.customer_postal_codes {
        customers = customers.assign_postal_code(*customer_id, postal_code.as_str());
    }
    let customers = Arc::new(customers);

    log::info!(
        "shop ready: {} address(es), {} product(s)",
        addresses.count()?,
        catalog.len()
    );

    let facade = OrderFacade::new(Arc::clone(&customers), catalog, shipping_calculator(config));

    Ok(Shop {
        addresses,
        customers,
        facade,
    })
}
