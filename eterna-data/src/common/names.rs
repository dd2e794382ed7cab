/// Capitalizes the first character of a word and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Converts a roster identifier into a display name.
///
/// Words separated by underscores are capitalized. Hyphens are kept and the word following a hyphen
/// is also capitalized.
///
/// ```
/// use eterna_data::display_name_from_id;
///
/// assert_eq!(display_name_from_id("MEGA_CHARIZARD_X"), "Mega Charizard X");
/// assert_eq!(display_name_from_id("HO-OH"), "Ho-Oh");
/// ```
pub fn display_name_from_id(id: &str) -> String {
    id.replace('-', "-_")
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .replace("- ", "-")
}

/// Converts a display name back into a roster identifier.
///
/// ```
/// use eterna_data::id_from_display_name;
///
/// assert_eq!(id_from_display_name("Mega Charizard X"), "MEGA_CHARIZARD_X");
/// assert_eq!(id_from_display_name("Ho-Oh"), "HO-OH");
/// ```
pub fn id_from_display_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

/// Converts a move identifier into a display name, dropping the fast move marker.
///
/// ```
/// use eterna_data::move_display_name;
///
/// assert_eq!(move_display_name("DRAGON_BREATH_FAST"), "Dragon Breath");
/// assert_eq!(move_display_name("HYDRO_PUMP"), "Hydro Pump");
/// ```
pub fn move_display_name(unique_id: &str) -> String {
    unique_id
        .replace("FAST", "")
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod names_test {
    use crate::{
        display_name_from_id,
        id_from_display_name,
        move_display_name,
    };

    #[test]
    fn builds_display_names() {
        assert_eq!(display_name_from_id("AZUMARILL"), "Azumarill");
        assert_eq!(display_name_from_id("GIRATINA_ALTERED"), "Giratina Altered");
        assert_eq!(display_name_from_id("PRIMAL_KYOGRE"), "Primal Kyogre");
        assert_eq!(display_name_from_id("JANGMO-O"), "Jangmo-O");
        assert_eq!(display_name_from_id("TING-LU"), "Ting-Lu");
    }

    #[test]
    fn round_trips_identifiers() {
        for id in ["AZUMARILL", "MEGA_CHARIZARD_Y", "HO-OH", "WO-CHIEN"] {
            assert_eq!(id_from_display_name(&display_name_from_id(id)), id);
        }
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert_eq!(id_from_display_name("  Mega   Gengar "), "MEGA_GENGAR");
    }

    #[test]
    fn builds_move_names() {
        assert_eq!(move_display_name("COUNTER_FAST"), "Counter");
        assert_eq!(move_display_name("MUD_SHOT_FAST"), "Mud Shot");
        assert_eq!(move_display_name("PLAY_ROUGH"), "Play Rough");
    }
}
