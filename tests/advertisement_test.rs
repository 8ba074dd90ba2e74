mod common;

use serde_json::Value;

async fn add_ad(app: &common::TestApp, property_id: &str) -> Value {
    let resp = app
        .client
        .post(app.url("/advertisement"))
        .json(&common::ad_payload(property_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

async fn ad_count(app: &common::TestApp) -> usize {
    let body: Value = app
        .client
        .get(app.url("/advertisementProperties"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["data"].as_array().unwrap().len()
}

#[tokio::test]
async fn seventh_advertisement_is_refused() {
    let app = common::spawn_app().await;

    for i in 0..6 {
        let body = add_ad(&app, &format!("listing-{}", i)).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "success");
    }

    let body = add_ad(&app, "listing-7").await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(body["message"].as_str().unwrap().contains('6'));

    assert_eq!(ad_count(&app).await, 6);
}

#[tokio::test]
async fn concurrent_inserts_never_exceed_six() {
    let app = common::spawn_app().await;

    let handles: Vec<_> = (0..12)
        .map(|i| {
            tokio::spawn(
                app.client
                    .post(app.url("/advertisement"))
                    .json(&common::ad_payload(&format!("race-{}", i)))
                    .send(),
            )
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        let body: Value = handle.await.unwrap().unwrap().json().await.unwrap();
        if body["success"] == true {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 6);
    assert_eq!(ad_count(&app).await, 6);
}

#[tokio::test]
async fn removing_an_ad_frees_a_slot() {
    let app = common::spawn_app().await;

    let mut first_id = String::new();
    for i in 0..6 {
        let body = add_ad(&app, &format!("listing-{}", i)).await;
        if i == 0 {
            first_id = body["data"]["_id"].as_str().unwrap().to_string();
        }
    }

    let resp = app
        .client
        .delete(app.url(&format!("/removeAds/{}", first_id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["deletedCount"], 1);

    let body = add_ad(&app, "listing-late").await;
    assert_eq!(body["success"], true);
    assert_eq!(ad_count(&app).await, 6);
}
