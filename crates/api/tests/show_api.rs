//! HTTP-level integration tests for the `/shows` pages and how shows
//! surface on venue and artist pages.

mod common;

use axum::http::StatusCode;
use common::{
    artist_body, body_json, build_test_app, create_artist, create_venue, delete, get, post_json,
    venue_body,
};
use serde_json::json;
use sqlx::PgPool;

async fn page(pool: &PgPool, uri: &str) -> serde_json::Value {
    body_json(get(build_test_app(pool.clone()), uri).await).await
}

async fn book(pool: &PgPool, artist_id: i64, venue_id: i64, start_time: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/shows/create",
        json!({"artist_id": artist_id, "venue_id": venue_id, "start_time": start_time}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn future_show_is_upcoming_on_both_pages(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create_artist(&pool, artist_body("Guns N Petals")).await;

    let json = book(&pool, artist_id, venue_id, "2035-01-01 20:00:00").await;
    assert_eq!(json["success"], true);
    assert_eq!(json["flash"]["message"], "Show was successfully listed!");

    let venue = page(&pool, &format!("/venues/{venue_id}")).await;
    assert_eq!(venue["data"]["upcoming_shows_count"], 1);
    assert_eq!(venue["data"]["past_shows_count"], 0);
    assert_eq!(venue["data"]["upcoming_shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(venue["data"]["upcoming_shows"][0]["start_time"], "2035-01-01 20:00:00");

    let artist = page(&pool, &format!("/artists/{artist_id}")).await;
    assert_eq!(artist["data"]["upcoming_shows_count"], 1);
    assert_eq!(artist["data"]["upcoming_shows"][0]["venue_name"], "The Musical Hop");

    let areas = body_json(get(build_test_app(pool), "/venues").await).await;
    assert_eq!(areas["data"][0]["venues"][0]["num_upcoming_shows"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn past_show_is_past(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create_artist(&pool, artist_body("Guns N Petals")).await;
    book(&pool, artist_id, venue_id, "2019-05-21T21:30:00.000Z").await;

    let venue = body_json(get(build_test_app(pool), &format!("/venues/{venue_id}")).await).await;
    assert_eq!(venue["data"]["past_shows_count"], 1);
    assert_eq!(venue["data"]["upcoming_shows_count"], 0);
    assert_eq!(venue["data"]["past_shows"][0]["start_time"], "2019-05-21 21:30:00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn show_listing_resolves_names(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create_artist(&pool, artist_body("Guns N Petals")).await;
    book(&pool, artist_id, venue_id, "2019-05-21 21:30:00").await;

    let response = get(build_test_app(pool), "/shows").await;
    assert_eq!(response.status(), StatusCode::OK);
    let shows = body_json(response).await["data"].clone();
    assert_eq!(shows.as_array().unwrap().len(), 1);
    assert_eq!(shows[0]["venue_id"], venue_id);
    assert_eq!(shows[0]["venue_name"], "The Musical Hop");
    assert_eq!(shows[0]["artist_id"], artist_id);
    assert_eq!(shows[0]["artist_name"], "Guns N Petals");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_unknown_artist_reports_failure(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;

    let json = book(&pool, 999999, venue_id, "2035-01-01 20:00:00").await;
    assert_eq!(json["success"], false);
    assert_eq!(json["flash"]["message"], "An error occurred. Show could not be listed.");
    assert_eq!(json["failure"]["reason"], "constraint_violation");

    let shows = body_json(get(build_test_app(pool), "/shows").await).await;
    assert_eq!(shows["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unparseable_start_time_is_invalid_input(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create_artist(&pool, artist_body("Guns N Petals")).await;

    let json = book(&pool, artist_id, venue_id, "next tuesday").await;
    assert_eq!(json["success"], false);
    assert_eq!(json["failure"]["reason"], "invalid_input");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn show_form_offers_bookable_choices(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create_artist(&pool, artist_body("Guns N Petals")).await;

    let response = get(build_test_app(pool), "/shows/create").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["action"], "/shows/create");
    assert_eq!(
        json["choices"]["artists"],
        json!([{"id": artist_id, "name": "Guns N Petals"}])
    );
    assert_eq!(
        json["choices"]["venues"],
        json!([{"id": venue_id, "name": "The Musical Hop"}])
    );
    assert!(json["choices"]["default_start_time"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_venue_removes_its_shows(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create_artist(&pool, artist_body("Guns N Petals")).await;
    book(&pool, artist_id, venue_id, "2035-01-01 20:00:00").await;

    let response = delete(build_test_app(pool.clone()), &format!("/venues/{venue_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let shows = body_json(get(build_test_app(pool.clone()), "/shows").await).await;
    assert_eq!(shows["data"], json!([]));
    let artist = body_json(get(build_test_app(pool), &format!("/artists/{artist_id}")).await).await;
    assert_eq!(artist["data"]["upcoming_shows_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn text_artist_id_is_invalid_input(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_body("The Musical Hop", "San Francisco", "CA")).await;
    create_artist(&pool, artist_body("Guns N Petals")).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/shows/create",
        json!({"artist_id": "1", "venue_id": venue_id, "start_time": "2035-01-01 20:00:00"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["flash"]["category"], "error");
    assert_eq!(json["flash"]["message"], "An error occurred. Show could not be listed.");
    assert_eq!(json["failure"]["reason"], "invalid_input");
    assert!(json["failure"]["detail"].as_str().unwrap().contains("artist_id"));

    let shows = page(&pool, "/shows").await;
    assert_eq!(shows["data"], json!([]));
}
