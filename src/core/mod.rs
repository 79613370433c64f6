//! 核心模块：错误、响应、中间件

pub mod error;
pub mod middleware;
pub mod response;

pub use error::{ErrorKind, HandlerError, StoreError};
pub use response::FunctionResponse;
