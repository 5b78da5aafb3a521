//! ListTechniquesHandler - Query handler for the technique catalog.

use serde::Serialize;

use crate::domain::foundation::TechniqueId;
use crate::domain::technique::{TechniqueCatalog, TechniqueDefinition};

/// Catalog entry for one technique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueSummary {
    pub id: TechniqueId,
    pub display_name: &'static str,
    pub overview: &'static str,
    pub duration_hint: &'static str,
    pub participant_hint: &'static str,
    pub when_to_use: &'static str,
}

impl From<&TechniqueDefinition> for TechniqueSummary {
    fn from(definition: &TechniqueDefinition) -> Self {
        Self {
            id: definition.id,
            display_name: definition.display_name(),
            overview: definition.overview,
            duration_hint: definition.duration_hint,
            participant_hint: definition.participant_hint,
            when_to_use: definition.when_to_use,
        }
    }
}

/// Handler listing every technique in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ListTechniquesHandler;

impl ListTechniquesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> Vec<TechniqueSummary> {
        TechniqueCatalog::all().map(TechniqueSummary::from).collect()
    }
}
