use anyhow::Result;
use indexmap::IndexMap;

use crate::DataStore;

/// Groups the display names of every form by species identifier.
///
/// Both the species and the forms within each species keep roster order.
pub fn forms_by_species(data: &dyn DataStore) -> Result<IndexMap<String, Vec<String>>> {
    let mut forms = IndexMap::<String, Vec<String>>::new();
    for id in data.all_species_ids(&|_| true)? {
        if let Some(species) = data.get_species(&id)? {
            forms
                .entry(species.species().to_owned())
                .or_default()
                .push(species.name().to_owned());
        }
    }
    Ok(forms)
}
