use std::collections::BTreeMap;

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Pokemon, SpeciesPage};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- pokemon ---

#[tokio::test]
async fn get_pokemon_by_name() {
    let resp = app().oneshot(get("/pokemon/pikachu")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let pokemon: Pokemon = body_json(resp).await;
    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.species.name, "pikachu");
}

#[tokio::test]
async fn get_pokemon_by_id() {
    let resp = app().oneshot(get("/pokemon/132")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let pokemon: Pokemon = body_json(resp).await;
    assert_eq!(pokemon.name, "ditto");
}

#[tokio::test]
async fn get_pokemon_unknown_returns_404() {
    let resp = app().oneshot(get("/pokemon/missingno")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(&body_bytes(resp).await[..], b"Not Found");
}

// --- species ---

#[tokio::test]
async fn species_default_page() {
    let resp = app().oneshot(get("/pokemon-species/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: SpeciesPage = body_json(resp).await;
    assert_eq!(page.results.len(), page.count.min(mock_server::DEFAULT_LIMIT));
    assert!(page.previous.is_none());
}

#[tokio::test]
async fn species_without_trailing_slash() {
    let resp = app().oneshot(get("/pokemon-species")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn species_paginated() {
    let resp = app()
        .oneshot(get("/pokemon-species/?offset=0&limit=5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: SpeciesPage = body_json(resp).await;
    assert_eq!(page.results.len(), 5);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.next.as_deref(), Some("/pokemon-species/?offset=5&limit=5"));
}

#[tokio::test]
async fn species_bad_limit_returns_400() {
    let resp = app()
        .oneshot(get("/pokemon-species/?limit=lots"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- headers ---

#[tokio::test]
async fn headers_are_echoed() {
    let req = Request::builder()
        .uri("/headers")
        .header("x-trainer", "ash")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers: BTreeMap<String, String> = body_json(resp).await;
    assert_eq!(headers.get("x-trainer").map(String::as_str), Some("ash"));
}
