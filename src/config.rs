use std::{env, str::FromStr};

use color_eyre::{eyre::WrapErr, Result};

pub const MOVES_VAR: &str = "QUEEN_MOVES";
pub const SEED_VAR: &str = "QUEEN_SEED";
pub const NARRATE_VAR: &str = "QUEEN_NARRATE";

const DEFAULT_MOVES: u64 = 10;

/// Settings for the narrated demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub moves:   u64,
    /// Fixed seed for a repeatable run. Without one, the run is seeded from
    /// OS entropy.
    pub seed:    Option<u64>,
    pub narrate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            moves:   DEFAULT_MOVES,
            seed:    None,
            narrate: true,
        }
    }
}

impl DemoConfig {
    /// # Errors
    ///
    /// Fails if any of the variables is set but can't be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source, falling back to defaults
    /// for anything unset.
    ///
    /// # Errors
    ///
    /// Fails if any of the variables is set but can't be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            moves:   parse(&lookup, MOVES_VAR)?.unwrap_or(defaults.moves),
            seed:    parse(&lookup, SEED_VAR)?.or(defaults.seed),
            narrate: parse(&lookup, NARRATE_VAR)?.unwrap_or(defaults.narrate),
        })
    }
}

fn parse<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .wrap_err_with(|| format!("{name} has an invalid value: {raw:?}"))
        })
        .transpose()
}
