// Profile reads and owner-only updates for both sides of the marketplace.

pub mod handlers;
pub mod service;
