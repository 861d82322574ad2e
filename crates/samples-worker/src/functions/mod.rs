pub mod action_group;
pub mod employees;
pub mod s3;
pub mod websocket;

pub use action_group::ActionGroupFunction;
pub use employees::{ProcessEmployeeKinesis, ProcessEmployeeSqs};
pub use s3::{s3_notification, s3_transformer};
pub use websocket::WsMessage;
