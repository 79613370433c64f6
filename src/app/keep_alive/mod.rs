//! 数据库保活任务

pub mod handler;
pub mod service;

pub use service::{spawn_schedule, KeepAlive, KeepAliveError, Pinger};
