//! PokeAPI endpoints built from `get`.
//!
//! Each endpoint's handler simply hands back `(response, request)` so the
//! caller can inspect both, the same shape the `pokedex` binary prints.

use crate::endpoint::{get, GetArgs, GetEndpoint};
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestInfo};
use crate::query::QueryParams;
use crate::transport::{Transport, UreqTransport};

/// What every PokeAPI handler returns.
pub type Fetched = (HttpResponse, RequestInfo);

type Handler = fn(RequestInfo, HttpResponse, &GetArgs, ()) -> Fetched;

fn passthrough(request: RequestInfo, response: HttpResponse, _: &GetArgs, _: ()) -> Fetched {
    (response, request)
}

/// The `pokemon/` and `pokemon-species/` resources of a PokeAPI host.
#[derive(Debug, Clone)]
pub struct PokeApi<T = UreqTransport> {
    pokemon: GetEndpoint<Handler, T>,
    species: GetEndpoint<Handler, T>,
}

impl PokeApi {
    /// `base_url` is the API root, e.g. `https://pokeapi.co/api/v2/`.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport + Clone> PokeApi<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        let pokemon = get(&format!("{base_url}pokemon/"), None)
            .with_transport(transport.clone())
            .wrap(passthrough as Handler);
        let species = get(&format!("{base_url}pokemon-species/"), None)
            .with_transport(transport)
            .wrap(passthrough as Handler);
        Self { pokemon, species }
    }

    /// `GET pokemon/{name}`.
    pub fn get_pokemon(&self, name: &str) -> Result<Fetched, ApiError> {
        self.pokemon.call(GetArgs::new().param(name), ())
    }

    /// `GET pokemon-species/` with the API's default page.
    pub fn get_pokemons(&self) -> Result<Fetched, ApiError> {
        self.species.call(GetArgs::new(), ())
    }

    /// `GET pokemon-species/?{query}`, e.g. `offset=0&limit=5`.
    pub fn get_pokemons_paginated(&self, query: QueryParams) -> Result<Fetched, ApiError> {
        self.species.call(GetArgs::new().query_params(query), ())
    }
}
