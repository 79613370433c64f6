//! 问候函数

pub mod handler;
pub mod model;

pub use handler::greet;
pub use model::GreetingResponse;
