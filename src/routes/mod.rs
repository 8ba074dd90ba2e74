use crate::handlers;
use crate::middleware::auth::auth_middleware;
use axum::{middleware, routing, Router};

/// Public and gated routes merged into one router.
///
/// Paths that serve both sets (`/users/{id}`, `/requestOffer/{id}`) must use
/// the same parameter name on each side so the method routers merge. The gate
/// is a route layer so unmatched methods still fall through to 405.
pub fn create_routes() -> Router {
    let gated = gated_routes().route_layer(middleware::from_fn(auth_middleware));
    public_routes().merge(gated)
}

fn public_routes() -> Router {
    Router::new()
        // Session
        .route("/jwt", routing::post(handlers::issue_jwt))
        .route("/logout", routing::post(handlers::logout))
        // Users
        .route("/users", routing::get(handlers::user::list_users))
        .route("/users/{id}", routing::put(handlers::user::upsert_user))
        .route("/agents", routing::get(handlers::user::list_agents))
        .route(
            "/user/{id}",
            routing::get(handlers::user::get_user).put(handlers::user::update_user_role),
        )
        // Listings
        .route(
            "/requestedProperties",
            routing::post(handlers::property::create_property)
                .get(handlers::property::list_properties),
        )
        .route(
            "/requestedProperty",
            routing::get(handlers::property::list_listed_properties),
        )
        .route(
            "/requestedProperty/{id}",
            routing::get(handlers::property::get_property)
                .put(handlers::property::update_property),
        )
        .route(
            "/properties/{id}",
            routing::get(handlers::property::get_property),
        )
        .route(
            "/addedProperty/{id}",
            routing::get(handlers::property::get_property),
        )
        .route(
            "/updateStatus/{id}",
            routing::put(handlers::property::update_property_status),
        )
        .route(
            "/addAdsStatus/{id}",
            routing::put(handlers::property::update_ads_status),
        )
        .route(
            "/agentPropertyDeletedStatus/{id}",
            routing::put(handlers::property::soft_delete_property),
        )
        .route(
            "/searchProperties/{name}",
            routing::get(handlers::property::search_properties),
        )
        .route(
            "/property-review/{id}",
            routing::put(handlers::property::add_property_review),
        )
        // Moderation
        .route(
            "/fraudAgent/{email}",
            routing::get(handlers::moderation::list_fraud_agent_properties),
        )
        .route(
            "/fraudUserData",
            routing::post(handlers::moderation::purge_fraud_listings),
        )
        // Wishlists
        .route(
            "/wishlists",
            routing::post(handlers::wishlist::add_to_wishlist),
        )
        .route(
            "/wishlists/{email}",
            routing::get(handlers::wishlist::list_wishlist),
        )
        .route(
            "/wishlist/{id}",
            routing::get(handlers::wishlist::get_wishlist_entry)
                .delete(handlers::wishlist::delete_wishlist_entry),
        )
        // Reviews
        .route(
            "/reviews",
            routing::post(handlers::review::create_review).get(handlers::review::list_reviews),
        )
        .route(
            "/reviews/{username}",
            routing::get(handlers::review::list_reviews_by_reviewer),
        )
        .route(
            "/review/{id}",
            routing::delete(handlers::review::delete_review),
        )
        // Reports
        .route(
            "/reports",
            routing::post(handlers::report::create_report).get(handlers::report::list_reports),
        )
        .route(
            "/reportProperty/{id}",
            routing::delete(handlers::report::delete_reported_property),
        )
        // Offers
        .route(
            "/addedOfferPayment/{id}",
            routing::get(handlers::offer::get_offer),
        )
        .route(
            "/requestOffer/{id}",
            routing::put(handlers::offer::update_offer_status),
        )
        .route(
            "/offerDataUpdate/{id}",
            routing::put(handlers::offer::complete_offer_purchase),
        )
        // Payments
        .route(
            "/create-payment-intent",
            routing::post(handlers::payment::create_payment_intent),
        )
        .route("/payments", routing::post(handlers::payment::record_payment))
        // Advertisements
        .route(
            "/advertisement",
            routing::post(handlers::advertisement::create_advertisement),
        )
        .route(
            "/advertisementProperties",
            routing::get(handlers::advertisement::list_advertisements),
        )
        .route(
            "/removeAds/{id}",
            routing::delete(handlers::advertisement::delete_advertisement),
        )
}

/// Routes behind the bearer-token gate.
fn gated_routes() -> Router {
    Router::new()
        .route("/users/{id}", routing::delete(handlers::user::delete_user))
        .route(
            "/addedProperty/agent/{email}",
            routing::get(handlers::property::list_agent_properties),
        )
        .route("/addedOffers", routing::post(handlers::offer::create_offer))
        .route(
            "/addedOffer/{email}",
            routing::get(handlers::offer::list_buyer_offers),
        )
        .route(
            "/requestOffer/{id}",
            routing::get(handlers::offer::list_agent_offers),
        )
        .route(
            "/soldProperties/{email}",
            routing::get(handlers::offer::list_sold_offers),
        )
}
