pub mod customers;
pub mod employees;
pub mod products;
pub mod stocks;
pub mod storage;
pub mod websocket;

pub use customers::create_customer;
pub use employees::{GetEmployee, GetHealth, PutEmployee};
pub use products::{delete_product, get_product, get_products, put_product};
pub use stocks::{StockLogic, get_stock};
pub use storage::ListBuckets;
pub use websocket::{OnConnect, OnDisconnect};
