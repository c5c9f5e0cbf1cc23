use wayfarer_planner::{DataLoader, EmbeddedData, ItineraryGenerator, PlannerEngine};

/// Build the generator from a data loader, falling back to built-in tables.
pub fn generator_from<L: DataLoader>(loader: L) -> ItineraryGenerator {
    match PlannerEngine::new(loader).generator() {
        Ok(generator) => {
            log::debug!(
                "catalog ready: {} destinations, fallback `{}`",
                generator.catalog().destination_keys().len(),
                generator.catalog().fallback
            );
            generator
        }
        Err(err) => {
            log::warn!("embedded catalog rejected, using built-in tables: {err}");
            ItineraryGenerator::default()
        }
    }
}

/// Generator over the catalog and tuning bundled with the app.
#[must_use]
pub fn load_generator() -> ItineraryGenerator {
    generator_from(EmbeddedData)
}
