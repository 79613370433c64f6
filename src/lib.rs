//! # pg-functions
//!
//! 一组无状态的数据库函数：
//! - 商品列表 / 用户列表：每次调用建立连接、执行一条固定查询、以 JSON 返回
//! - 问候：根据 `name` 参数格式化消息
//! - 保活：执行 `SELECT 1` 防止数据库因空闲被挂起
//!
//! 每个函数都通过显式的配置对象和数据访问 trait 构造，便于替换测试替身。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use config::FunctionsConfig;
pub use self::core::{ErrorKind, FunctionResponse, HandlerError, StoreError};
pub use server::{Backends, Functions};
