pub mod advertisement;
pub mod moderation;
pub mod offer;
pub mod payment;
pub mod payment_gateway;
pub mod property;
pub mod report;
pub mod review;
pub mod user;
pub mod wishlist;
