pub mod cookie;
pub mod jwt;

pub use jwt::{issue_token, verify_token};
