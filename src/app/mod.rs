//! 各个函数：商品列表、用户列表、问候、数据库保活

pub mod greeting;
pub mod keep_alive;
pub mod products;
pub mod users;
