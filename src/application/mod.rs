pub mod customer_service;
pub mod order_facade;

pub use customer_service::CustomerService;
pub use order_facade::OrderFacade;
