mod common;

use serde_json::{json, Value};

async fn get_json(app: &common::TestApp, path: &str) -> Value {
    app.client
        .get(app.url(path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn ids(body: &Value) -> Vec<String> {
    let mut ids: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["_id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn create_and_fetch_listing_by_every_id_route() {
    let app = common::spawn_app().await;
    let id = common::create_listing(&app, "Sunny flat", "agent@estate.test", "pending").await;

    for path in ["/requestedProperty", "/properties", "/addedProperty"] {
        let resp = app
            .client
            .get(app.url(&format!("{}/{}", path, id)))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "{}", path);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["title"], "Sunny flat");
        assert_eq!(body["data"]["agent"]["email"], "agent@estate.test");
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["adsStatus"], false);
        assert_eq!(body["data"]["isDeleted"], false);
        assert!(body["data"]["reviewsCollection"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn caller_supplied_id_is_kept() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/requestedProperties"))
        .json(&json!({
            "_id": "listing-fixed-id",
            "title": "Chosen id",
            "location": "Sylhet",
            "price": 10.0,
            "agent": { "email": "agent@estate.test", "name": "Agent Smith" }
        }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["_id"], "listing-fixed-id");

    let resp = app
        .client
        .get(app.url("/properties/listing-fixed-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn unknown_listing_is_404() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .get(app.url("/requestedProperty/definitely-not-here"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn invalid_listing_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/requestedProperties"))
        .json(&json!({
            "title": "",
            "location": "Nowhere",
            "price": -5.0,
            "agent": { "email": "agent@estate.test", "name": "Agent Smith" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn default_listing_shows_only_verified_and_not_deleted() {
    let app = common::spawn_app().await;
    let verified = common::create_listing(&app, "Verified", "a@estate.test", "verified").await;
    let _pending = common::create_listing(&app, "Pending", "a@estate.test", "pending").await;
    let deleted = common::create_listing(&app, "Deleted", "a@estate.test", "verified").await;

    let resp = app
        .client
        .put(app.url(&format!("/agentPropertyDeletedStatus/{}", deleted)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["modifiedCount"], 1);

    let listed = get_json(&app, "/requestedProperty").await;
    assert_eq!(ids(&listed), vec![verified]);

    // Soft delete hides from the default view only.
    let direct = app
        .client
        .get(app.url(&format!("/requestedProperty/{}", deleted)))
        .send()
        .await
        .unwrap();
    assert_eq!(direct.status(), 200);
    let body: Value = direct.json().await.unwrap();
    assert_eq!(body["data"]["isDeleted"], true);

    let all = get_json(&app, "/requestedProperties").await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn status_transition_makes_listing_visible() {
    let app = common::spawn_app().await;
    let id = common::create_listing(&app, "Awaiting review", "a@estate.test", "pending").await;

    assert!(get_json(&app, "/requestedProperty").await["data"]
        .as_array()
        .unwrap()
        .is_empty());

    let resp = app
        .client
        .put(app.url(&format!("/updateStatus/{}", id)))
        .json(&json!({ "status": "verified" }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["matchedCount"], 1);

    let listed = get_json(&app, "/requestedProperty").await;
    assert_eq!(ids(&listed), vec![id]);
}

#[tokio::test]
async fn update_details_and_ads_flag() {
    let app = common::spawn_app().await;
    let id = common::create_listing(&app, "Old title", "a@estate.test", "verified").await;

    let resp = app
        .client
        .put(app.url(&format!("/requestedProperty/{}", id)))
        .json(&json!({
            "title": "New title",
            "location": "Khulna",
            "price": 150000.5,
            "image": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    app.client
        .put(app.url(&format!("/addAdsStatus/{}", id)))
        .json(&json!({ "adsStatus": true }))
        .send()
        .await
        .unwrap();

    let body = get_json(&app, &format!("/properties/{}", id)).await;
    assert_eq!(body["data"]["title"], "New title");
    assert_eq!(body["data"]["location"], "Khulna");
    assert_eq!(body["data"]["price"], 150000.5);
    assert!(body["data"]["image"].is_null());
    assert_eq!(body["data"]["adsStatus"], true);
}

#[tokio::test]
async fn update_of_unknown_listing_matches_nothing() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .put(app.url("/updateStatus/ghost"))
        .json(&json!({ "status": "verified" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["matchedCount"], 0);
}

#[tokio::test]
async fn search_is_case_insensitive_substring_on_title() {
    let app = common::spawn_app().await;
    let a = common::create_listing(&app, "Lake House", "a@estate.test", "verified").await;
    let b = common::create_listing(&app, "lakeside cabin", "a@estate.test", "pending").await;
    let _c = common::create_listing(&app, "City loft", "a@estate.test", "verified").await;

    let mut expected = vec![a, b];
    expected.sort();

    let found = get_json(&app, "/searchProperties/LAKE").await;
    assert_eq!(ids(&found), expected);

    let none = get_json(&app, "/searchProperties/castle").await;
    assert!(none["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let app = common::spawn_app().await;
    let pct = common::create_listing(&app, "100% renovated", "a@estate.test", "verified").await;
    let _other = common::create_listing(&app, "100 acre farm", "a@estate.test", "verified").await;

    let found = get_json(&app, "/searchProperties/100%25").await;
    assert_eq!(ids(&found), vec![pct]);
}

#[tokio::test]
async fn agent_listings_are_gated_and_hide_deleted() {
    let app = common::spawn_app().await;
    let keep = common::create_listing(&app, "Keep", "owner@estate.test", "pending").await;
    let gone = common::create_listing(&app, "Gone", "owner@estate.test", "verified").await;
    let _other = common::create_listing(&app, "Other", "else@estate.test", "verified").await;

    app.client
        .put(app.url(&format!("/agentPropertyDeletedStatus/{}", gone)))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url("/addedProperty/agent/owner@estate.test"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = app
        .client
        .get(app.url("/addedProperty/agent/owner@estate.test"))
        .bearer_auth(common::token_for("owner@estate.test"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), vec![keep]);
}

#[tokio::test]
async fn reviews_append_to_listing() {
    let app = common::spawn_app().await;
    let id = common::create_listing(&app, "Reviewed", "a@estate.test", "verified").await;

    for (name, text) in [("Rahim", "Great light"), ("Karim", "Noisy street")] {
        let resp = app
            .client
            .put(app.url(&format!("/property-review/{}", id)))
            .json(&json!({
                "reviewerName": name,
                "reviewerEmail": format!("{}@estate.test", name.to_lowercase()),
                "description": text,
                "rating": 4
            }))
            .send()
            .await
            .unwrap();
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["modifiedCount"], 1);
    }

    let body = get_json(&app, &format!("/properties/{}", id)).await;
    let reviews = body["data"]["reviewsCollection"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["reviewerName"], "Rahim");
    assert_eq!(reviews[1]["description"], "Noisy street");
}

#[tokio::test]
async fn fraud_agent_view_includes_deleted_listings() {
    let app = common::spawn_app().await;
    let a = common::create_listing(&app, "One", "shady@estate.test", "verified").await;
    let b = common::create_listing(&app, "Two", "shady@estate.test", "pending").await;
    app.client
        .put(app.url(&format!("/agentPropertyDeletedStatus/{}", b)))
        .send()
        .await
        .unwrap();

    let mut expected = vec![a, b];
    expected.sort();

    let body = get_json(&app, "/fraudAgent/shady@estate.test").await;
    assert_eq!(ids(&body), expected);
}
