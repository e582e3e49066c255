use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const DEFAULT_LIMIT: usize = 20;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub species: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesPage {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// `(id, name, height, weight)` served by the mock.
const ROSTER: &[(u32, &str, u32, u32)] = &[
    (1, "bulbasaur", 7, 69),
    (2, "ivysaur", 10, 130),
    (3, "venusaur", 20, 1000),
    (4, "charmander", 6, 85),
    (5, "charmeleon", 11, 190),
    (6, "charizard", 17, 905),
    (7, "squirtle", 5, 90),
    (8, "wartortle", 10, 225),
    (9, "blastoise", 16, 855),
    (25, "pikachu", 4, 60),
    (132, "ditto", 3, 40),
    (133, "eevee", 3, 65),
];

pub type Db = Arc<Vec<Pokemon>>;

fn species_link(id: u32, name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: format!("/pokemon-species/{id}/"),
    }
}

fn seed() -> Vec<Pokemon> {
    ROSTER
        .iter()
        .map(|&(id, name, height, weight)| Pokemon {
            id,
            name: name.to_string(),
            height,
            weight,
            species: species_link(id, name),
        })
        .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/pokemon/{name}", get(get_pokemon))
        .route("/pokemon-species", get(list_species))
        .route("/pokemon-species/", get(list_species))
        .route("/headers", get(echo_headers))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Accepts either the name or the numeric id, as PokeAPI does.
async fn get_pokemon(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, (StatusCode, &'static str)> {
    db.iter()
        .find(|p| p.name == name || p.id.to_string() == name)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Not Found"))
}

async fn list_species(State(db): State<Db>, Query(page): Query<Pagination>) -> Json<SpeciesPage> {
    Json(paginate(&db, &page))
}

pub fn paginate(db: &[Pokemon], page: &Pagination) -> SpeciesPage {
    let count = db.len();
    let results = db
        .iter()
        .skip(page.offset)
        .take(page.limit)
        .map(|p| species_link(p.id, &p.name))
        .collect();

    let end = page.offset.saturating_add(page.limit);
    let next = (end < count).then(|| page_link(end, page.limit));
    let previous = (page.offset > 0).then(|| page_link(page.offset.saturating_sub(page.limit), page.limit));

    SpeciesPage {
        count,
        next,
        previous,
        results,
    }
}

fn page_link(offset: usize, limit: usize) -> String {
    format!("/pokemon-species/?offset={offset}&limit={limit}")
}

async fn echo_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let map = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    Json(map)
}
