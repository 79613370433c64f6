//! 基础设施：数据库连接与日志

pub mod database;
pub mod logger;

pub use database::{redact, PgDatabase, Timed};
pub use logger::Logger;
