pub mod acting;
pub mod handlers;
pub mod password;
pub mod service;
