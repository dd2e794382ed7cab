use anyhow::{
    Error,
    Result,
};
use eterna_data::{
    DataStore,
    DataStoreByName,
    SpeciesData,
    Type,
};
use log::debug;

/// Types a boosted form boosts beyond its own types, keyed by species identifier.
const BONUS_TYPES: [(&str, &[Type]); 3] = [
    ("RAYQUAZA", &[Type::Psychic]),
    ("GROUDON", &[Type::Grass]),
    ("KYOGRE", &[Type::Electric, Type::Ice]),
];

/// Extra boosted types of the species, beyond its own types.
pub fn bonus_types(species: &str) -> &'static [Type] {
    BONUS_TYPES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(species))
        .map(|(_, types)| *types)
        .unwrap_or_default()
}

/// Checks if a boosted form boosts attacks against the target.
///
/// True if any of the target's types is one of the candidate's types or bonus types.
pub fn is_boosted(candidate: &SpeciesData, target: &SpeciesData) -> bool {
    let bonus = bonus_types(candidate.species());
    target
        .types()
        .iter()
        .any(|typ| candidate.has_type(*typ) || bonus.contains(typ))
}

/// A target with an importance weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTarget {
    pub species: SpeciesData,
    pub weight: f64,
}

impl WeightedTarget {
    pub fn new(species: SpeciesData, weight: f64) -> Self {
        Self { species, weight }
    }

    /// Creates a weighted target for the species with the given name.
    pub fn by_name(data: &dyn DataStoreByName, name: &str, weight: f64) -> Result<Self> {
        let species = data
            .get_species_by_name(name)?
            .ok_or_else(|| Error::msg(format!("invalid species name: {name}")))?;
        Ok(Self::new(species, weight))
    }
}

impl From<SpeciesData> for WeightedTarget {
    fn from(value: SpeciesData) -> Self {
        Self::new(value, 1.0)
    }
}

/// A boosted form with the targets it boosts against.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostedFormRanking {
    pub candidate: SpeciesData,
    /// Sum of the weights of all boosted targets.
    pub weight: f64,
    /// Number of boosted targets.
    pub raw_count: usize,
}

/// Ranks candidates by the summed weight of the targets they boost against.
///
/// Sorted by descending weight. Ties keep candidate order.
pub fn rank_boosted_forms(
    targets: &[WeightedTarget],
    candidates: &[SpeciesData],
) -> Vec<BoostedFormRanking> {
    let mut rankings = candidates
        .iter()
        .map(|candidate| {
            let (weight, raw_count) = targets
                .iter()
                .filter(|target| is_boosted(candidate, &target.species))
                .fold((0.0, 0), |(weight, count), target| {
                    (weight + target.weight, count + 1)
                });
            BoostedFormRanking {
                candidate: candidate.clone(),
                weight,
                raw_count,
            }
        })
        .collect::<Vec<_>>();
    rankings.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    rankings
}

/// Every boosted form in the roster, in roster order.
pub fn default_boosted_forms(data: &dyn DataStore) -> Result<Vec<SpeciesData>> {
    data.all_species_ids(&|species| species.is_boosted_form())?
        .into_iter()
        .filter_map(|id| data.get_species(&id).transpose())
        .collect()
}

/// Ranks boosted forms against the targets.
///
/// Every boosted form in the roster is a candidate when no candidates are given.
pub fn find_best_boosted_forms(
    data: &dyn DataStore,
    targets: &[WeightedTarget],
    candidates: Option<&[SpeciesData]>,
) -> Result<Vec<BoostedFormRanking>> {
    let rankings = match candidates {
        Some(candidates) => rank_boosted_forms(targets, candidates),
        None => rank_boosted_forms(targets, &default_boosted_forms(data)?),
    };
    debug!(
        "ranked {} boosted forms against {} targets",
        rankings.len(),
        targets.len()
    );
    Ok(rankings)
}

#[cfg(test)]
mod mega_test {
    use assert_matches::assert_matches;
    use eterna_data::{
        SpeciesData,
        StatTable,
        Type,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        mega::{
            WeightedTarget,
            bonus_types,
            default_boosted_forms,
            find_best_boosted_forms,
            is_boosted,
            rank_boosted_forms,
        },
        test_util::{
            local_data_store,
            species,
        },
    };

    fn typed(name: &str, types: Vec<Type>) -> SpeciesData {
        SpeciesData::new(
            name.to_uppercase(),
            name,
            name.to_uppercase(),
            types,
            StatTable::new(100, 100, 100),
            Vec::new(),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn looks_up_bonus_types() {
        assert_eq!(bonus_types("RAYQUAZA"), &[Type::Psychic]);
        assert_eq!(bonus_types("groudon"), &[Type::Grass]);
        assert_eq!(bonus_types("KYOGRE"), &[Type::Electric, Type::Ice]);
        assert!(bonus_types("CHARIZARD").is_empty());
    }

    #[test]
    fn boosts_shared_types() {
        let mega = species("Mega Charizard X");
        assert!(is_boosted(&mega, &typed("Fire", vec![Type::Fire])));
        assert!(is_boosted(&mega, &typed("Dragon Grass", vec![Type::Grass, Type::Dragon])));
        assert!(!is_boosted(&mega, &typed("Grass", vec![Type::Grass])));
        assert!(!is_boosted(&mega, &typed("Water Rock", vec![Type::Water, Type::Rock])));
    }

    #[test]
    fn boosts_bonus_types() {
        let primal = species("Primal Kyogre");
        assert!(is_boosted(&primal, &typed("Electric", vec![Type::Electric])));
        assert!(is_boosted(&primal, &typed("Ice", vec![Type::Ice])));
        assert!(!is_boosted(&primal, &typed("Grass", vec![Type::Grass])));

        let mega = species("Mega Rayquaza");
        assert!(is_boosted(&mega, &typed("Psychic", vec![Type::Psychic])));
    }

    #[test]
    fn bonus_types_do_not_leak_between_calls() {
        let primal = species("Primal Groudon");
        let grass = typed("Grass", vec![Type::Grass]);
        assert!(is_boosted(&primal, &grass));
        assert!(is_boosted(&primal, &grass));
        assert_eq!(primal.types(), &[Type::Ground, Type::Fire]);
    }

    #[test]
    fn sums_weights_of_boosted_targets() {
        let targets = [
            WeightedTarget::new(typed("Grass", vec![Type::Grass]), 2.0),
            WeightedTarget::new(typed("Water", vec![Type::Water]), 5.0),
            WeightedTarget::new(typed("Ground", vec![Type::Ground]), 1.0),
        ];
        let rankings = rank_boosted_forms(&targets, &[species("Primal Groudon")]);
        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].weight, 3.0);
        assert_eq!(rankings[0].raw_count, 2);
    }

    #[test]
    fn sorts_by_descending_weight_keeping_ties_stable() {
        let targets = [
            WeightedTarget::new(typed("Fire", vec![Type::Fire]), 1.0),
            WeightedTarget::new(typed("Water", vec![Type::Water]), 4.0),
            WeightedTarget::new(typed("Ghost", vec![Type::Ghost]), 1.5),
        ];
        let candidates = [
            species("Mega Charizard X"),
            species("Mega Charizard Y"),
            species("Mega Gengar"),
            species("Primal Kyogre"),
        ];
        let rankings = rank_boosted_forms(&targets, &candidates);
        assert_eq!(
            rankings
                .iter()
                .map(|ranking| (ranking.candidate.name(), ranking.weight, ranking.raw_count))
                .collect::<Vec<_>>(),
            vec![
                ("Primal Kyogre", 4.0, 1),
                ("Mega Gengar", 1.5, 1),
                ("Mega Charizard X", 1.0, 1),
                ("Mega Charizard Y", 1.0, 1),
            ]
        );
    }

    #[test]
    fn unboosted_candidates_rank_with_zero_weight() {
        let targets = [WeightedTarget::from(typed("Fairy", vec![Type::Fairy]))];
        let rankings = rank_boosted_forms(&targets, &[species("Mega Gengar")]);
        assert_eq!(rankings[0].weight, 0.0);
        assert_eq!(rankings[0].raw_count, 0);
        assert!(rank_boosted_forms(&targets, &[]).is_empty());
    }

    #[test]
    fn defaults_to_every_boosted_form() {
        let data = local_data_store();
        let names = default_boosted_forms(&data)
            .unwrap()
            .iter()
            .map(|species| species.name().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Mega Charizard X",
                "Mega Charizard Y",
                "Mega Gengar",
                "Primal Groudon",
                "Primal Kyogre",
                "Mega Rayquaza",
            ]
        );
    }

    #[test]
    fn finds_best_boosted_forms_by_name() {
        let data = local_data_store();
        let targets = [
            WeightedTarget::by_name(&data, "Azumarill", 3.0).unwrap(),
            WeightedTarget::by_name(&data, "Registeel", 2.0).unwrap(),
            WeightedTarget::by_name(&data, "Venusaur", 1.0).unwrap(),
        ];
        assert_matches!(find_best_boosted_forms(&data, &targets, None), Ok(rankings) => {
            assert_eq!(rankings.len(), 6);
            assert_eq!(rankings[0].candidate.name(), "Primal Kyogre");
            assert_eq!(rankings[0].weight, 3.0);
            assert_eq!(rankings[1].candidate.name(), "Mega Gengar");
            assert_eq!(rankings[1].weight, 1.0);
            assert_eq!(rankings[2].candidate.name(), "Primal Groudon");
            assert_eq!(rankings[2].weight, 1.0);
            assert_eq!(rankings[5].weight, 0.0);
        });
        let candidates = vec![species("Mega Gengar")];
        assert_matches!(
            find_best_boosted_forms(&data, &targets, Some(candidates.as_slice())),
            Ok(rankings) => {
                assert_eq!(rankings.len(), 1);
                assert_eq!(rankings[0].weight, 1.0);
                assert_eq!(rankings[0].raw_count, 1);
            }
        );
    }

    #[test]
    fn rejects_unknown_target_names() {
        let data = local_data_store();
        assert_matches!(WeightedTarget::by_name(&data, "Agumon", 1.0), Err(err) => {
            assert_eq!(err.to_string(), "invalid species name: Agumon");
        });
    }
}
