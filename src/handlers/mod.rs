pub mod advertisement;
pub mod auth;
pub mod moderation;
pub mod offer;
pub mod payment;
pub mod property;
pub mod report;
pub mod review;
pub mod user;
pub mod wishlist;

pub use auth::*;
