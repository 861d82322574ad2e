pub mod attributes;
pub mod bedrock;
pub mod config;
pub mod connection;
pub mod customer;
pub mod employee;
pub mod events;
pub mod notification;
pub mod product;
pub mod stock;
pub mod storage;

pub use bedrock::{
    BedrockFunctionRequest, BedrockFunctionResponse, FunctionDetailsResponse, ResponseState,
};
pub use config::{CurrencyApiConfig, SamplesConfig};
pub use connection::Connection;
pub use customer::{CreateCustomerCommand, CustomerCreatedEvent, EventVersion};
pub use employee::Employee;
pub use events::{
    BatchItemFailure, BatchResponse, KinesisEvent, KinesisEventRecord, S3Event, S3EventRecord,
    SqsEvent, SqsRecord,
};
pub use notification::S3NotificationMessage;
pub use product::{Product, ProductWrapper, UpsertResult};
pub use stock::{CurrencyValue, Stock, StockWithCurrencies};
pub use storage::{ListStorageAreasQuery, ListStorageAreasResult};
