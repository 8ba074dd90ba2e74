pub mod advertisement;
pub mod offer;
pub mod payment;
pub mod property;
pub mod report;
pub mod review;
pub mod user;
pub mod wishlist;

pub use advertisement::{Entity as Advertisement, Model as AdvertisementModel};
pub use offer::{Entity as Offer, Model as OfferModel, OfferStatus};
pub use payment::{Entity as Payment, Model as PaymentModel};
pub use property::{
    EmbeddedReview, Entity as Property, ListingReviews, ListingStatus, Model as PropertyModel,
};
pub use report::{Entity as Report, Model as ReportModel};
pub use review::{Entity as Review, Model as ReviewModel};
pub use user::{Entity as User, Model as UserModel, UserRole};
pub use wishlist::{Entity as Wishlist, Model as WishlistModel};

/// Use the caller's `_id` when given, otherwise mint one.
pub fn resolve_id(requested: Option<String>) -> String {
    requested
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
