use std::{
    env,
    fs::File,
    path::Path,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use indexmap::IndexMap;
use log::{
    debug,
    warn,
};
use serde::de::DeserializeOwned;

use crate::{
    ChargeThresholds,
    DataStore,
    DataStoreByName,
    FAST_MOVE_SUFFIX,
    MoveData,
    MoveRecord,
    SpeciesData,
    SpeciesRecord,
    StatCurve,
    Type,
    TypeChart,
    display_name_from_id,
    id_from_display_name,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Species and moves keep the order of their roster files.
#[derive(Debug)]
pub struct LocalDataStore {
    root: String,
    pub type_chart: TypeChart,
    pub stat_curve: StatCurve,
    pub charge_thresholds: ChargeThresholds,
    pub moves: IndexMap<String, MoveData>,
    pub species: IndexMap<String, SpeciesData>,
}

impl LocalDataStore {
    /// Creature roster file name.
    pub const SPECIES_FILE: &str = "pokemon.json";
    /// Move roster file name.
    pub const MOVES_FILE: &str = "moves.json";
    /// CP multiplier curve file name.
    pub const CP_MULTIPLIERS_FILE: &str = "cp_multipliers.json";
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type_chart.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data. The CP multiplier curve must define every legal level.
    pub fn new(root: String) -> Result<Self> {
        if !Path::new(&root).is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({root}) does not exist",
            )));
        }
        let mut store = Self {
            root,
            type_chart: TypeChart::new(),
            stat_curve: StatCurve::new(),
            charge_thresholds: ChargeThresholds::default(),
            moves: IndexMap::default(),
            species: IndexMap::default(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The root directory the data was read from.
    pub fn root(&self) -> &str {
        &self.root
    }

    fn read_file<T: DeserializeOwned>(&self, file: &str, what: &str) -> Result<T> {
        serde_json::from_reader(
            File::open(Path::new(&self.root).join(file))
                .context(format!("failed to read {what}"))?,
        )
        .context(format!("failed to parse {what}"))
    }

    fn initialize(&mut self) -> Result<()> {
        self.type_chart = self.read_file(Self::TYPE_CHART_FILE, "type chart")?;

        self.stat_curve = self.read_file(Self::CP_MULTIPLIERS_FILE, "CP multipliers")?;
        let missing = self.stat_curve.missing_legal_levels();
        if !missing.is_empty() {
            return Err(Error::msg(format!(
                "CP multiplier curve is missing {} legal levels, starting at {}",
                missing.len(),
                missing[0],
            )));
        }

        let moves: IndexMap<String, MoveRecord> = self.read_file(Self::MOVES_FILE, "moves")?;
        self.moves = moves
            .into_iter()
            .map(|(id, record)| {
                if Type::parse_token(&record.typ).is_none() {
                    warn!(
                        "move {id} has unknown type \"{}\", using {}",
                        record.typ,
                        Type::default()
                    );
                }
                (id, MoveData::from(record))
            })
            .collect();

        let species: IndexMap<String, SpeciesRecord> =
            self.read_file(Self::SPECIES_FILE, "species")?;
        self.species = IndexMap::with_capacity(species.len());
        for (id, record) in species {
            if let Some(data) = self.species_from_record(&id, record) {
                self.species.insert(id, data);
            }
        }

        debug!(
            "loaded {} species, {} moves, and {} levels from {}",
            self.species.len(),
            self.moves.len(),
            self.stat_curve.len(),
            self.root,
        );
        Ok(())
    }

    fn resolve_move_pool(&self, species: &str, pool: &[String]) -> Vec<MoveData> {
        pool.iter()
            .filter_map(|id| {
                let mov = self.moves.get(id).cloned();
                if mov.is_none() {
                    warn!("species {species} references unknown move {id}, skipping");
                }
                mov
            })
            .collect()
    }

    fn species_from_record(&self, id: &str, record: SpeciesRecord) -> Option<SpeciesData> {
        let mut types = record
            .type_tokens()
            .map(|token| {
                Type::parse_token(token).unwrap_or_else(|| {
                    warn!(
                        "species {id} has unknown type \"{token}\", using {}",
                        Type::default()
                    );
                    Type::default()
                })
            })
            .collect::<Vec<_>>();
        if types.is_empty() {
            warn!("species {id} has no types, using {}", Type::default());
            types.push(Type::default());
        }
        let fast_move_pool = self.resolve_move_pool(id, &record.fast_move_pool);
        let charged_move_pool = self.resolve_move_pool(id, &record.charged_move_pool);
        let name = if record.name.is_empty() {
            id
        } else {
            record.name.as_str()
        };
        match SpeciesData::new(
            id,
            display_name_from_id(name),
            record.species.as_str(),
            types,
            record.base_stats(),
            fast_move_pool,
            charged_move_pool,
        ) {
            Ok(data) => Some(data),
            Err(err) => {
                warn!("skipping species {id}: {err}");
                None
            }
        }
    }
}

impl DataStore for LocalDataStore {
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<String>> {
        Ok(self
            .species
            .iter()
            .filter(|(_, species)| filter(species))
            .map(|(id, _)| id.clone())
            .collect())
    }

    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<String>> {
        let mut move_ids = Vec::new();
        for (id, move_data) in self.moves.iter() {
            if filter(move_data) {
                move_ids.push(id.clone());
            }
        }
        Ok(move_ids)
    }

    fn get_type_chart(&self) -> Result<&TypeChart> {
        Ok(&self.type_chart)
    }

    fn get_stat_curve(&self) -> Result<&StatCurve> {
        Ok(&self.stat_curve)
    }

    fn get_charge_thresholds(&self) -> Result<&ChargeThresholds> {
        Ok(&self.charge_thresholds)
    }

    fn get_move(&self, id: &str) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &str) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}

impl DataStoreByName for LocalDataStore {
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        if let Some(species) = self.get_species(name)? {
            return Ok(Some(species));
        }
        let id = id_from_display_name(name);
        if let Some(species) = self.get_species(&id)? {
            return Ok(Some(species));
        }
        Ok(self
            .species
            .values()
            .find(|species| species.name().eq_ignore_ascii_case(name.trim()))
            .cloned())
    }

    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>> {
        if let Some(mov) = self.get_move(name)? {
            return Ok(Some(mov));
        }
        let id = id_from_display_name(name);
        if let Some(mov) = self.get_move(&id)? {
            return Ok(Some(mov));
        }
        self.get_move(&format!("{id}{FAST_MOVE_SUFFIX}"))
    }
}
