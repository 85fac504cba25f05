mod common;

use serde_json::Value;

#[tokio::test]
async fn create_then_get_returns_relation_ids() {
    let app = common::spawn_app().await;

    let actor_id = common::create_actor(&app, &common::unique("Lead")).await;
    let director_id = common::create_actor(&app, &common::unique("Helmer")).await;
    let genre_id = common::create_genre(&app, &common::unique("Thriller")).await;

    let slug = common::unique("relations-movie");
    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": "Relations Movie",
            "description": "Carries relations",
            "poster": "movies/relations.jpg",
            "year": 2010,
            "country": "UK",
            "world_premiere": "2010-07-16",
            "slug": slug,
            "actor_ids": [actor_id, actor_id],
            "director_ids": [director_id],
            "genre_ids": [genre_id],
        }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true, "create failed: {}", body);
    let movie_id = body["data"]["id"].as_i64().unwrap();
    // Duplicate ids in the payload collapse to one link.
    assert_eq!(body["data"]["actor_ids"], serde_json::json!([actor_id]));

    let resp = app
        .client
        .get(app.url(&format!("/admin/movies/{}", movie_id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["actor_ids"], serde_json::json!([actor_id]));
    assert_eq!(body["data"]["director_ids"], serde_json::json!([director_id]));
    assert_eq!(body["data"]["genre_ids"], serde_json::json!([genre_id]));
    assert_eq!(body["data"]["draft"], true);
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let app = common::spawn_app().await;

    let slug = common::unique("taken-slug");
    let payload = serde_json::json!({
        "title": "First Claim",
        "description": "Owns the slug",
        "poster": "movies/first.jpg",
        "year": 2000,
        "country": "USA",
        "world_premiere": "2000-01-01",
        "slug": slug,
    });

    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn unknown_actor_id_rejects_the_whole_create() {
    let app = common::spawn_app().await;

    // Title doubles as the unique search key for the persistence check.
    let title = common::unique("BadActorMovie");
    let slug = common::unique("bad-actor-movie");
    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": title,
            "description": "Should not persist",
            "poster": "movies/bad.jpg",
            "year": 2001,
            "country": "USA",
            "world_premiere": "2001-01-01",
            "slug": slug,
            "actor_ids": [99999999],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // The movie itself must not have been created either.
    let resp = app
        .client
        .get(app.url(&format!("/admin/movies?search={}", title)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn update_replaces_scalars_and_relations() {
    let app = common::spawn_app().await;

    let old_actor = common::create_actor(&app, &common::unique("OldLead")).await;
    let new_actor = common::create_actor(&app, &common::unique("NewLead")).await;
    let movie_id = common::create_movie(&app, "Before Update", true).await;

    let new_slug = common::unique("updated-movie");
    let resp = app
        .client
        .put(app.url(&format!("/admin/movies/{}", movie_id)))
        .json(&serde_json::json!({
            "title": "After Update",
            "tagline": "Fresh",
            "description": "Updated",
            "poster": "movies/updated.jpg",
            "year": 2015,
            "country": "France",
            "world_premiere": "2015-05-20",
            "slug": new_slug,
            "draft": false,
            "actor_ids": [old_actor],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .put(app.url(&format!("/admin/movies/{}", movie_id)))
        .json(&serde_json::json!({
            "title": "After Update",
            "tagline": "Fresh",
            "description": "Updated",
            "poster": "movies/updated.jpg",
            "year": 2015,
            "country": "France",
            "world_premiere": "2015-05-20",
            "slug": new_slug,
            "draft": false,
            "actor_ids": [new_actor],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["title"], "After Update");
    assert_eq!(body["data"]["draft"], false);
    assert_eq!(body["data"]["actor_ids"], serde_json::json!([new_actor]));
}

#[tokio::test]
async fn bulk_publish_reports_count_and_message() {
    let app = common::spawn_app().await;

    let a = common::create_movie(&app, &common::unique("Bulk A"), true).await;
    let b = common::create_movie(&app, &common::unique("Bulk B"), true).await;
    let c = common::create_movie(&app, &common::unique("Bulk C"), true).await;

    let resp = app
        .client
        .post(app.url("/admin/movies/publish"))
        .json(&serde_json::json!({ "ids": [a, b, c] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["updated"], 3);
    assert_eq!(body["message"], "3 movies updated");

    // All three now show up publicly.
    for id in [a, b, c] {
        let resp = app
            .client
            .get(app.url(&format!("/admin/movies/{}", id)))
            .send()
            .await
            .unwrap();
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["draft"], false);
    }
}

#[tokio::test]
async fn bulk_unpublish_single_row_uses_singular_message() {
    let app = common::spawn_app().await;

    let id = common::create_movie(&app, &common::unique("Solo"), false).await;

    let resp = app
        .client
        .post(app.url("/admin/movies/unpublish"))
        .json(&serde_json::json!({ "ids": [id] }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["updated"], 1);
    assert_eq!(body["message"], "1 movie updated");

    let resp = app
        .client
        .get(app.url(&format!("/admin/movies/{}", id)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["draft"], true);
}

#[tokio::test]
async fn bulk_update_skips_unknown_ids() {
    let app = common::spawn_app().await;

    let id = common::create_movie(&app, &common::unique("Half Bulk"), true).await;

    let resp = app
        .client
        .post(app.url("/admin/movies/publish"))
        .json(&serde_json::json!({ "ids": [id, 99999999] }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["updated"], 1);
}

#[tokio::test]
async fn empty_selection_updates_nothing() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/admin/movies/publish"))
        .json(&serde_json::json!({ "ids": [] }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["updated"], 0);
    assert_eq!(body["message"], "0 movies updated");
}

#[tokio::test]
async fn search_matches_title_and_category_name() {
    let app = common::spawn_app().await;

    let category_name = common::unique("Noir");
    let category_id = common::create_category(&app, &category_name).await;

    let title = common::unique("Searchable");
    let slug = common::unique("searchable");
    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": title,
            "description": "Findable",
            "poster": "movies/search.jpg",
            "year": 1948,
            "country": "USA",
            "world_premiere": "1948-11-01",
            "category_id": category_id,
            "slug": slug,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // By title fragment
    let resp = app
        .client
        .get(app.url(&format!("/admin/movies?search={}", title)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["category"], category_name.as_str());

    // By category name
    let resp = app
        .client
        .get(app.url(&format!("/admin/movies?search={}", category_name)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], title.as_str());
}

#[tokio::test]
async fn filters_restrict_by_category_and_year() {
    let app = common::spawn_app().await;

    let category_id = common::create_category(&app, &common::unique("Filter Cat")).await;
    let title = common::unique("Filtered");
    let slug = common::unique("filtered");
    app.client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": title,
            "description": "Filter target",
            "poster": "movies/filter.jpg",
            "year": 1962,
            "country": "Italy",
            "world_premiere": "1962-09-01",
            "category_id": category_id,
            "slug": slug,
        }))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(&format!(
            "/admin/movies?category_id={}&year=1962",
            category_id
        )))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], title.as_str());

    let resp = app
        .client
        .get(app.url(&format!(
            "/admin/movies?category_id={}&year=1963",
            category_id
        )))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn list_rows_carry_poster_thumbnails() {
    let app = common::spawn_app().await;

    let title = common::unique("Thumbnail");
    let slug = common::unique("thumbnail");
    app.client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": title,
            "description": "Has a poster",
            "poster": "movies/thumb.jpg",
            "year": 1994,
            "country": "USA",
            "world_premiere": "1994-10-14",
            "slug": slug,
        }))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(&format!("/admin/movies?search={}", title)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["data"]["items"][0]["poster_thumb"],
        "/media/movies/thumb.jpg"
    );
}

#[tokio::test]
async fn deleted_movie_is_gone_from_admin_and_public() {
    let app = common::spawn_app().await;

    let id = common::create_movie(&app, &common::unique("Doomed"), false).await;

    let resp = app
        .client
        .delete(app.url(&format!("/admin/movies/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/admin/movies/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app
        .client
        .get(app.url(&format!("/movies/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
