mod common;

use serde_json::{json, Value};

fn entry(id: &str, buyer: &str) -> Value {
    json!({
        "_id": id,
        "propertyId": "listing-1",
        "buyerEmail": buyer,
        "title": "Lake House",
        "location": "Rangamati",
        "price": 88000.0,
        "agent": { "email": "agent@estate.test", "name": "Agent Smith" }
    })
}

#[tokio::test]
async fn add_list_get_and_delete_entry() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/wishlists"))
        .json(&entry("wish-1", "buyer@estate.test"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["success"].as_bool().unwrap());
    assert_eq!(body["data"]["_id"], "wish-1");

    let list: Value = app
        .client
        .get(app.url("/wishlists/buyer@estate.test"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let one: Value = app
        .client
        .get(app.url("/wishlist/wish-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(one["data"]["buyerEmail"], "buyer@estate.test");
    assert_eq!(one["data"]["agent"]["name"], "Agent Smith");

    let del: Value = app
        .client
        .delete(app.url("/wishlist/wish-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(del["data"]["deletedCount"], 1);

    let resp = app
        .client
        .get(app.url("/wishlist/wish-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn duplicate_id_is_refused_without_a_second_row() {
    let app = common::spawn_app().await;

    app.client
        .post(app.url("/wishlists"))
        .json(&entry("wish-dup", "buyer@estate.test"))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .post(app.url("/wishlists"))
        .json(&entry("wish-dup", "buyer@estate.test"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Is already added in wishlist");
    assert!(body["data"].is_null());

    let list: Value = app
        .client
        .get(app.url("/wishlists/buyer@estate.test"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn wishlists_are_per_buyer() {
    let app = common::spawn_app().await;

    for (id, buyer) in [
        ("w-a", "one@estate.test"),
        ("w-b", "one@estate.test"),
        ("w-c", "two@estate.test"),
    ] {
        app.client
            .post(app.url("/wishlists"))
            .json(&entry(id, buyer))
            .send()
            .await
            .unwrap();
    }

    let list: Value = app
        .client
        .get(app.url("/wishlists/one@estate.test"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}
