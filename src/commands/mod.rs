pub mod auth;
pub mod dispatch;
pub mod resolve;
