mod common;

use serde_json::{json, Value};

async fn advertise(app: &common::TestApp, property_id: &str) {
    let body: Value = app
        .client
        .post(app.url("/advertisement"))
        .json(&common::ad_payload(property_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn purge_removes_listings_and_their_ads() {
    let app = common::spawn_app().await;
    let a = common::create_listing(&app, "Fake villa", "fraud@estate.test", "verified").await;
    let b = common::create_listing(&app, "Fake flat", "fraud@estate.test", "pending").await;
    let honest = common::create_listing(&app, "Real home", "honest@estate.test", "verified").await;

    advertise(&app, &a).await;
    advertise(&app, &honest).await;

    let resp = app
        .client
        .post(app.url("/fraudUserData"))
        .json(&json!([a, b]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["deleteAds"]["deletedCount"], 1);
    assert_eq!(body["data"]["deleteProperties"]["deletedCount"], 2);

    let left: Value = app
        .client
        .get(app.url("/fraudAgent/fraud@estate.test"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(left["data"].as_array().unwrap().is_empty());

    let ads: Value = app
        .client
        .get(app.url("/advertisementProperties"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ads = ads["data"].as_array().unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0]["propertyId"], honest.as_str());
}

#[tokio::test]
async fn purge_with_unknown_ids_reports_zero_counts() {
    let app = common::spawn_app().await;

    let body: Value = app
        .client
        .post(app.url("/fraudUserData"))
        .json(&json!(["ghost-1", "ghost-2"]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["deleteAds"]["deletedCount"], 0);
    assert_eq!(body["data"]["deleteProperties"]["deletedCount"], 0);
}

#[tokio::test]
async fn flagging_an_agent_sets_fraud_role() {
    let app = common::spawn_app().await;

    let body: Value = app
        .client
        .put(app.url("/users/fraud@estate.test"))
        .json(&json!({ "name": "Shady", "role": "agent" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    app.client
        .put(app.url(&format!("/user/{}", id)))
        .json(&json!({ "role": "fraud" }))
        .send()
        .await
        .unwrap();

    let user: Value = app
        .client
        .get(app.url("/user/fraud@estate.test"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user["data"]["role"], "fraud");

    let agents: Value = app
        .client
        .get(app.url("/agents"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(agents["data"].as_array().unwrap().is_empty());
}
