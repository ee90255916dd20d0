//! Data-driven combat content and loaders.
//!
//! This crate houses the static content of the realm and the loaders for its
//! data files:
//! - Bestiary: enemy templates and loot tables (RON)
//! - Combat configuration and balance tables (TOML)
//!
//! A copy of both files is embedded in the binary (see [`builtin`]) so the
//! engine runs without a data directory. Content is consumed through
//! [`realm_core::BestiaryOracle`] and never appears in combat state.

pub mod bestiary;

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::StaticBestiary;

#[cfg(feature = "loaders")]
pub use loaders::{BestiaryLoader, ConfigLoader, ContentFactory, LoadResult};
