pub mod cors;
pub mod database;
pub mod jwt;
pub mod payment;
