//! 用户列表函数

pub mod handler;
pub mod model;
pub mod service;

pub use model::{User, UsersResponse};
pub use service::{UserService, UserStore};
