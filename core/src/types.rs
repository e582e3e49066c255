//! PokeAPI response DTOs.
//!
//! # Design
//! Only the fields the call-site programs read are modelled; serde ignores
//! the rest of PokeAPI's large payloads. The mock-server crate defines its
//! own copies of these shapes and the integration tests catch any drift.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` link to another resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of a paginated resource list such as `pokemon-species/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeciesPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single pokemon from `pokemon/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    pub species: NamedResource,
}
