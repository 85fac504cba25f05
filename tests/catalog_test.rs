mod common;

use serde_json::Value;

#[tokio::test]
async fn category_crud_roundtrip() {
    let app = common::spawn_app().await;

    let name = common::unique("Serials");
    let id = common::create_category(&app, &name).await;

    let resp = app
        .client
        .get(app.url(&format!("/admin/categories/{}", id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], name.as_str());

    let new_slug = common::unique("renamed");
    let resp = app
        .client
        .put(app.url(&format!("/admin/categories/{}", id)))
        .json(&serde_json::json!({
            "name": "Renamed",
            "description": "Edited",
            "slug": new_slug,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["slug"], new_slug.as_str());

    let resp = app
        .client
        .delete(app.url(&format!("/admin/categories/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/admin/categories/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn duplicate_category_slug_is_a_conflict() {
    let app = common::spawn_app().await;

    let slug = common::unique("cat-slug");
    let payload = serde_json::json!({
        "name": "First",
        "description": "Original",
        "slug": slug,
    });

    let resp = app
        .client
        .post(app.url("/admin/categories"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .post(app.url("/admin/categories"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn deleting_a_category_unlinks_its_movies() {
    let app = common::spawn_app().await;

    let category_name = common::unique("Ephemeral");
    let category_id = common::create_category(&app, &category_name).await;

    let slug = common::unique("orphaned-movie");
    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": "Orphaned Movie",
            "description": "Loses its category",
            "poster": "movies/orphan.jpg",
            "year": 2005,
            "country": "USA",
            "world_premiere": "2005-02-01",
            "category_id": category_id,
            "slug": slug,
        }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let movie_id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .delete(app.url(&format!("/admin/categories/{}", category_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // The movie survives with a nulled category.
    let resp = app
        .client
        .get(app.url(&format!("/movies/{}", movie_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["category"], Value::Null);
}

#[tokio::test]
async fn genre_crud_roundtrip() {
    let app = common::spawn_app().await;

    let name = common::unique("Western");
    let id = common::create_genre(&app, &name).await;

    let resp = app
        .client
        .get(app.url(&format!("/admin/genres/{}", id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], name.as_str());

    let resp = app
        .client
        .delete(app.url(&format!("/admin/genres/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/admin/genres/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn actor_list_rows_carry_thumbnails() {
    let app = common::spawn_app().await;

    let name = common::unique("Pictured");
    let resp = app
        .client
        .post(app.url("/admin/actors"))
        .json(&serde_json::json!({
            "name": name,
            "age": 52,
            "description": "Photogenic",
            "image": "actors/pictured.jpg",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url("/admin/actors?per_page=100"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let row = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["name"] == name.as_str())
        .expect("actor missing from list");
    assert_eq!(row["image_thumb"], "/media/actors/pictured.jpg");
    assert_eq!(row["age"], 52);
}

#[tokio::test]
async fn negative_actor_age_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/admin/actors"))
        .json(&serde_json::json!({
            "name": "Benjamin",
            "age": -1,
            "description": "Aging backwards",
            "image": "actors/benjamin.jpg",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["fields"]["age"].is_array());
}

#[tokio::test]
async fn movie_short_crud_and_movie_filter() {
    let app = common::spawn_app().await;

    let movie_id = common::create_movie(&app, "Still Movie", true).await;
    let other_movie_id = common::create_movie(&app, "Other Movie", true).await;

    let title = common::unique("Still");
    let resp = app
        .client
        .post(app.url("/admin/movie-shorts"))
        .json(&serde_json::json!({
            "title": title,
            "description": "A memorable frame",
            "image": "movie_shorts/frame.jpg",
            "movie_id": movie_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let short_id = body["data"]["id"].as_i64().unwrap();

    // Filtered by the owning movie
    let resp = app
        .client
        .get(app.url(&format!("/admin/movie-shorts?movie_id={}", movie_id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], short_id);
    assert_eq!(rows[0]["image_thumb"], "/media/movie_shorts/frame.jpg");

    // The other movie has none
    let resp = app
        .client
        .get(app.url(&format!(
            "/admin/movie-shorts?movie_id={}",
            other_movie_id
        )))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn movie_short_for_unknown_movie_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/admin/movie-shorts"))
        .json(&serde_json::json!({
            "title": "Floating Frame",
            "description": "No movie to belong to",
            "image": "movie_shorts/floating.jpg",
            "movie_id": 99999999,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn deleting_a_movie_takes_its_stills_along() {
    let app = common::spawn_app().await;

    let movie_id = common::create_movie(&app, "Short-lived Movie", true).await;
    app.client
        .post(app.url("/admin/movie-shorts"))
        .json(&serde_json::json!({
            "title": common::unique("Doomed Still"),
            "description": "Cascades away",
            "image": "movie_shorts/doomed.jpg",
            "movie_id": movie_id,
        }))
        .send()
        .await
        .unwrap();

    app.client
        .delete(app.url(&format!("/admin/movies/{}", movie_id)))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(&format!("/admin/movie-shorts?movie_id={}", movie_id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
