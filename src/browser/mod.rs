//! 浏览器连接管理

pub mod connection;

pub use connection::connect_to_browser;
