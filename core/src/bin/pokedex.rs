//! Fetch a few PokeAPI resources and print what came back.
//!
//! Set `POKEDEX_BASE_URL` to point at another host (e.g. the mock server)
//! and `RUST_LOG=debug` to see each outgoing request.

use anyhow::Result;
use log::LevelFilter;
use pokedex_core::config::Config;
use pokedex_core::logging::init_logger;
use pokedex_core::{Fetched, PokeApi, QueryParams};
use serde_json::Value;

fn print_request((response, request): &Fetched) {
    println!("URL: {}", request.url);
    println!("Method: {}", request.method);
    println!("Status: {}", response.status);
    println!("Content-Type: {}", response.header("content-type").unwrap_or("-"));
}

fn main() -> Result<()> {
    init_logger(LevelFilter::Info)?;
    let config = Config::from_env();
    let api = PokeApi::new(&config.base_url);

    let species = api.get_pokemons()?;
    print_request(&species);
    let data: Value = species.0.json()?;
    println!("data: {}", serde_json::to_string_pretty(&data)?);
    println!("Total Pokemons: {}", data["count"]);

    let pikachu = api.get_pokemon("pikachu")?;
    print_request(&pikachu);
    let data: Value = pikachu.0.json()?;
    println!("Name: {}", data["species"]);

    let query = QueryParams::new().with("offset", 0).with("limit", 5);
    let page = api.get_pokemons_paginated(query)?;
    print_request(&page);
    let data: Value = page.0.json()?;
    println!("data: {}", serde_json::to_string_pretty(&data)?);
    println!("Total Pokemons: {}", data["count"]);
    let in_page = data["results"].as_array().map_or(0, Vec::len);
    println!("Total Pokemons in page: {in_page}");

    Ok(())
}
