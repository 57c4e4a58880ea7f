//! Places orders through a fully wired shop, the way the binary does.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use order_facade::domain::ports::{AddressRepository, CustomerLookup, ShippingFeeCalculator};
use order_facade::application::OrderFacade;
use order_facade::domain::{Address, Customer, DomainError, OrderWarning, Product};
use order_facade::infrastructure::InMemoryProductCatalog;
use order_facade::{build_shop, shipping_calculator, AppConfig, Shop};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid decimal")
}

fn catalog() -> InMemoryProductCatalog {
    InMemoryProductCatalog::new([Product::new(1, "Keyboard"), Product::new(3, "Mouse")])
}

fn config(vars: &[(&str, &str)]) -> AppConfig {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .expect("config failed")
}

fn shop(vars: &[(&str, &str)]) -> Shop {
    build_shop(&config(vars), catalog()).expect("wiring failed")
}

#[test]
fn customer_lookup_is_shared_with_the_facade() {
    let shop = shop(&[]);
    assert!(Arc::ptr_eq(&shop.customers, shop.facade.customers()));
}

#[test]
fn any_customer_id_resolves_to_a_named_customer() {
    let shop = shop(&[]);
    let customer = shop
        .customers
        .find_by_id(31337)
        .expect("lookup failed")
        .expect("customer should exist");
    assert!(customer.name().contains("31337"));
}

#[test]
fn configured_postal_codes_are_registered() {
    let shop = shop(&[("ADDRESS_POSTAL_CODES", "10115,80331")]);
    assert_eq!(shop.addresses.count().expect("count failed"), 2);
    assert!(shop
        .addresses
        .exists_by_postal_code("80331")
        .expect("exists failed"));
}

#[test]
fn unregistered_postal_code_is_not_found_and_fee_stays_zero() {
    let shop = shop(&[("DEFAULT_POSTAL_CODE", "99999")]);

    let err = shop
        .addresses
        .get_by_postal_code("99999")
        .expect_err("lookup must fail");
    assert_eq!(err, DomainError::AddressNotFound("99999".to_string()));

    let order = shop.facade.place_order(1, &[1]).expect("order failed");
    assert_eq!(order.shipping_fee(), BigDecimal::from(0));
    assert_eq!(
        order.warnings(),
        &[OrderWarning::AddressNotFound {
            postal_code: "99999".to_string()
        }]
    );
    assert_eq!(order.customer().unresolved_postal_code(), Some("99999"));
}

#[test]
fn unregistered_address_and_no_address_warn_differently() {
    let unregistered = shop(&[("DEFAULT_POSTAL_CODE", "99999")])
        .facade
        .place_order(1, &[1])
        .expect("order failed");
    let no_address = shop(&[])
        .facade
        .place_order(1, &[1])
        .expect("order failed");

    assert_ne!(unregistered.warnings(), no_address.warnings());
    assert_eq!(no_address.warnings(), &[OrderWarning::MissingShippingAddress]);
}

#[test]
fn present_product_is_kept_and_absent_one_skipped() {
    let shop = shop(&[("ADDRESS_POSTAL_CODES", "10115"), ("DEFAULT_POSTAL_CODE", "10115")]);

    let order = shop.facade.place_order(1, &[1, 2]).expect("order failed");

    assert_eq!(order.items(), &[Product::new(1, "Keyboard")]);
    assert_eq!(
        order.warnings(),
        &[OrderWarning::ProductSkipped { product_id: 2 }]
    );
}

#[test]
fn customer_without_address_pays_no_shipping() {
    let shop = shop(&[("SHIPPING_FLAT_FEE", "5.00")]);

    let order = shop.facade.place_order(1, &[1, 3]).expect("order failed");

    assert_eq!(order.items().len(), 2);
    assert_eq!(order.shipping_fee(), BigDecimal::from(0));
    assert!(order
        .warnings()
        .contains(&OrderWarning::MissingShippingAddress));
}

#[test]
fn fee_matches_calculator_for_customer_postal_code() {
    let vars = [
        ("ADDRESS_POSTAL_CODES", "10115,80331"),
        ("CUSTOMER_POSTAL_CODES", "7=80331"),
        ("SHIPPING_FLAT_FEE", "9.00"),
        ("SHIPPING_ZONE_RATES", "8=3.50,10=1.25"),
    ];
    let shop = shop(&vars);
    let calculator = shipping_calculator(&config(&vars));

    let order = shop.facade.place_order(7, &[3]).expect("order failed");

    let expected = calculator.calculate("80331").expect("calc failed");
    assert_eq!(expected, dec("3.50"));
    assert_eq!(order.shipping_fee(), expected);
    assert!(order.warnings().is_empty());
}

#[test]
fn flat_rate_applies_when_no_zones_are_configured() {
    let shop = shop(&[
        ("ADDRESS_POSTAL_CODES", "10115"),
        ("DEFAULT_POSTAL_CODE", "10115"),
        ("SHIPPING_FLAT_FEE", "6.75"),
    ]);

    let order = shop.facade.place_order(2, &[]).expect("order failed");

    assert!(order.items().is_empty());
    assert_eq!(order.shipping_fee(), dec("6.75"));
}

#[test]
fn address_store_can_be_changed_after_wiring() {
    let shop = shop(&[("DEFAULT_POSTAL_CODE", "10115")]);

    let before = shop.facade.place_order(1, &[]).expect("order failed");
    assert_eq!(before.shipping_fee(), BigDecimal::from(0));

    shop.addresses
        .save(Address::new("10115"))
        .expect("save failed");
    let after = shop.facade.place_order(1, &[]).expect("order failed");
    assert_eq!(after.shipping_fee(), dec("4.99"));
    assert_ne!(before.id(), after.id());
}

/// A lookup backed by a fixed set of known customers.
struct RegisteredCustomers(Vec<u64>);

impl CustomerLookup for RegisteredCustomers {
    fn find_by_id(&self, id: u64) -> Result<Option<Customer>, DomainError> {
        Ok(self
            .0
            .contains(&id)
            .then(|| Customer::new(id, format!("Customer #{}", id), None)))
    }

    fn save(&self, _: &Customer) -> Result<(), DomainError> {
        Ok(())
    }
}

#[test]
fn unknown_customer_never_yields_an_order() {
    let facade = OrderFacade::new(
        RegisteredCustomers(vec![1]),
        catalog(),
        shipping_calculator(&config(&[])),
    );

    for _ in 0..3 {
        let err = facade.place_order(2, &[1]).expect_err("must fail");
        assert_eq!(err, DomainError::CustomerNotFound(2));
    }
    assert!(facade.place_order(1, &[1]).is_ok());
}
