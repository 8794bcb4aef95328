pub mod business;
pub mod campaign;
pub mod content;
pub mod strategy;
pub mod user;
