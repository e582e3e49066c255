//! Runtime configuration for the `pokedex` binary.

/// Public PokeAPI root used when no override is set.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Environment variable that replaces `DEFAULT_BASE_URL`.
pub const BASE_URL_ENV: &str = "POKEDEX_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Read `POKEDEX_BASE_URL`, falling back to the public API.
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Resource names are concatenated onto the base URL, so a missing
    /// trailing `/` is added. Blank overrides are ignored.
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        let base = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let base_url = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        Self { base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_base_url(None)
    }
}
