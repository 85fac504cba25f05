mod common;

use serde_json::Value;

async fn movie_reviews(app: &common::TestApp, movie_id: i32) -> Value {
    let resp = app
        .client
        .get(app.url(&format!("/movies/{}", movie_id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    body["data"]["reviews"].clone()
}

#[tokio::test]
async fn valid_review_is_accepted_and_shows_in_tree() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Reviewed Movie", false).await;

    let reviewer = common::unique("Reviewer");
    let status = common::submit_review(&app, movie_id, &reviewer, None).await;
    assert_eq!(status, 201);

    let reviews = movie_reviews(&app, movie_id).await;
    let tree = reviews.as_array().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["name"], reviewer.as_str());
    assert_eq!(tree[0]["children"], serde_json::json!([]));
    // The reviewer's email is never exposed publicly.
    assert!(tree[0].get("email").is_none());
}

#[tokio::test]
async fn created_response_has_empty_body() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Empty Body Movie", false).await;

    let resp = app
        .client
        .post(app.url("/review"))
        .json(&serde_json::json!({
            "email": "viewer@example.com",
            "name": "Quiet",
            "text": "No body expected",
            "movie_id": movie_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    assert_eq!(resp.text().await.unwrap(), "");
}

#[tokio::test]
async fn invalid_email_is_rejected_with_field_error_and_not_persisted() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Strict Movie", false).await;

    let resp = app
        .client
        .post(app.url("/review"))
        .json(&serde_json::json!({
            "email": "not-an-email",
            "name": "Hopeful",
            "text": "Should never land",
            "movie_id": movie_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert!(body["fields"]["email"].is_array());

    let reviews = movie_reviews(&app, movie_id).await;
    assert_eq!(reviews.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_name_and_text_each_get_field_errors() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Picky Movie", false).await;

    let resp = app
        .client
        .post(app.url("/review"))
        .json(&serde_json::json!({
            "email": "viewer@example.com",
            "name": "",
            "text": "",
            "movie_id": movie_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["fields"]["name"].is_array());
    assert!(body["fields"]["text"].is_array());
}

#[tokio::test]
async fn review_for_unknown_movie_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/review"))
        .json(&serde_json::json!({
            "email": "viewer@example.com",
            "name": "Lost",
            "text": "Where does this go",
            "movie_id": 99999999,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn reply_to_unknown_parent_is_rejected() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Orphan Guard Movie", false).await;

    let resp = app
        .client
        .post(app.url("/review"))
        .json(&serde_json::json!({
            "email": "viewer@example.com",
            "name": "Echo",
            "text": "Replying to nothing",
            "movie_id": movie_id,
            "parent_id": 99999999,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn replies_nest_under_their_parent() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Threaded Movie", false).await;

    let root_name = common::unique("Root");
    assert_eq!(
        common::submit_review(&app, movie_id, &root_name, None).await,
        201
    );
    let root_id = common::find_review_id(&app, &root_name).await;

    let reply_name = common::unique("Reply");
    assert_eq!(
        common::submit_review(&app, movie_id, &reply_name, Some(root_id)).await,
        201
    );

    let reviews = movie_reviews(&app, movie_id).await;
    let tree = reviews.as_array().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["name"], root_name.as_str());
    let children = tree[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], reply_name.as_str());
}

#[tokio::test]
async fn cross_movie_parent_is_accepted_but_stays_out_of_the_tree() {
    let app = common::spawn_app().await;
    let movie_a = common::create_movie(&app, "Movie A", false).await;
    let movie_b = common::create_movie(&app, "Movie B", false).await;

    let anchor = common::unique("Anchor");
    common::submit_review(&app, movie_a, &anchor, None).await;
    let anchor_id = common::find_review_id(&app, &anchor).await;

    // A reply on movie B pointing at movie A's review is accepted...
    let stray = common::unique("Stray");
    assert_eq!(
        common::submit_review(&app, movie_b, &stray, Some(anchor_id)).await,
        201
    );

    // ...but it anchors to a review outside B's thread, so B's tree
    // stays empty, and it never shows under A either.
    let tree_b = movie_reviews(&app, movie_b).await;
    assert_eq!(tree_b.as_array().unwrap().len(), 0);
    let tree_a = movie_reviews(&app, movie_a).await;
    assert_eq!(tree_a.as_array().unwrap().len(), 1);
    assert_eq!(tree_a[0]["children"], serde_json::json!([]));
}

#[tokio::test]
async fn deleting_a_parent_promotes_its_replies() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Promotion Movie", false).await;

    let root_name = common::unique("DoomedRoot");
    common::submit_review(&app, movie_id, &root_name, None).await;
    let root_id = common::find_review_id(&app, &root_name).await;

    let reply_name = common::unique("Survivor");
    common::submit_review(&app, movie_id, &reply_name, Some(root_id)).await;

    let resp = app
        .client
        .delete(app.url(&format!("/admin/reviews/{}", root_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let reviews = movie_reviews(&app, movie_id).await;
    let tree = reviews.as_array().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["name"], reply_name.as_str());
    assert_eq!(tree[0]["children"], serde_json::json!([]));
}

#[tokio::test]
async fn deleting_a_movie_removes_its_reviews() {
    let app = common::spawn_app().await;
    let movie_id = common::create_movie(&app, "Cascade Movie", false).await;

    let reviewer = common::unique("Gone");
    common::submit_review(&app, movie_id, &reviewer, None).await;

    let resp = app
        .client
        .delete(app.url(&format!("/admin/movies/{}", movie_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url("/admin/reviews?per_page=100"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let leftovers: Vec<&Value> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["movie_id"] == movie_id)
        .collect();
    assert!(leftovers.is_empty());
}
