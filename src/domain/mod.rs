pub mod customer;
pub mod errors;
pub mod order;
pub mod ports;
pub mod product;

pub use customer::{Address, Customer};
pub use errors::DomainError;
pub use order::{Order, OrderWarning};
pub use product::Product;
