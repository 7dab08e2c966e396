//! Static catalog of combatant definitions.
//!
//! The catalog is an embedded RON document parsed once on first use. Entries
//! are read-only; battles receive clones from [`instantiate`].

use crate::combatant::Combatant;
use crate::errors::{CatalogError, CatalogResult};
use std::sync::LazyLock;

const CATALOG_SOURCE: &str = include_str!("../data/catalog.ron");

static CATALOG: LazyLock<CatalogResult<Vec<Combatant>>> =
    LazyLock::new(|| parse_catalog(CATALOG_SOURCE));

/// Parse and validate a catalog document.
pub fn parse_catalog(source: &str) -> CatalogResult<Vec<Combatant>> {
    let entries: Vec<Combatant> =
        ron::from_str(source).map_err(|e| CatalogError::MalformedData(e.to_string()))?;

    for entry in &entries {
        entry
            .validate()
            .map_err(|e| CatalogError::MalformedData(e.to_string()))?;
        if entry.id == 0 {
            return Err(CatalogError::MalformedData(format!(
                "{} has a zero id",
                entry.name
            )));
        }
    }

    Ok(entries)
}

/// Every catalog entry, in catalog order.
pub fn all() -> CatalogResult<&'static [Combatant]> {
    CATALOG.as_deref().map_err(Clone::clone)
}

pub fn get(id: u32) -> CatalogResult<&'static Combatant> {
    all()?
        .iter()
        .find(|entry| entry.id == id)
        .ok_or(CatalogError::EntryNotFound(id))
}

/// Case-insensitive lookup by display name.
pub fn find_by_name(name: &str) -> CatalogResult<&'static Combatant> {
    all()?
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CatalogError::NameNotFound(name.to_string()))
}

/// A fresh working copy of a catalog entry, at full health.
pub fn instantiate(id: u32) -> CatalogResult<Combatant> {
    let mut combatant = get(id)?.clone();
    combatant.set_hp_to_max();
    Ok(combatant)
}
