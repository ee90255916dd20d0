//! In-memory bestiary implementing [`BestiaryOracle`].

use std::collections::HashMap;

use realm_core::{Archetype, BestiaryOracle, EnemyTemplate, OracleError};

/// Bestiary backed by a map from archetype to template.
#[derive(Clone, Debug, Default)]
pub struct StaticBestiary {
    templates: HashMap<Archetype, EnemyTemplate>,
}

impl StaticBestiary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the template for `archetype`.
    pub fn add(&mut self, archetype: Archetype, template: EnemyTemplate) {
        if self.templates.insert(archetype, template).is_some() {
            tracing::warn!(%archetype, "bestiary template replaced");
        }
    }

    pub fn contains(&self, archetype: Archetype) -> bool {
        self.templates.contains_key(&archetype)
    }

    /// Archetypes with a template, in declaration order.
    pub fn archetypes(&self) -> Vec<Archetype> {
        Archetype::ALL
            .into_iter()
            .filter(|archetype| self.contains(*archetype))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Checks that every archetype has a template.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TemplateNotFound` for the first missing archetype.
    pub fn ensure_complete(&self) -> Result<(), OracleError> {
        match Archetype::ALL
            .into_iter()
            .find(|archetype| !self.contains(*archetype))
        {
            Some(missing) => Err(OracleError::TemplateNotFound(missing)),
            None => Ok(()),
        }
    }
}

impl FromIterator<(Archetype, EnemyTemplate)> for StaticBestiary {
    fn from_iter<I: IntoIterator<Item = (Archetype, EnemyTemplate)>>(iter: I) -> Self {
        let mut bestiary = Self::new();
        for (archetype, template) in iter {
            bestiary.add(archetype, template);
        }
        bestiary
    }
}

impl BestiaryOracle for StaticBestiary {
    fn template(&self, archetype: Archetype) -> Option<&EnemyTemplate> {
        self.templates.get(&archetype)
    }
}
