//! Propellant gas properties and table loading.
//!
//! The gas table is an explicitly constructed, read-only lookup passed into the
//! sweep. It can be built from the built-in propellant set, from the
//! `gas_masses` block of a sweep configuration, or from a CSV file.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::constants::{ATOMIC_MASS_UNIT, ELEMENTARY_CHARGE};
use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a gas name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

/// Built-in propellants as (name, standard atomic weight in amu).
const BUILTIN_GASES: &[(&str, f64)] = &[
    ("Xenon", 131.293),
    ("Krypton", 83.798),
    ("Argon", 39.948),
    ("Iodine", 126.904),
];

/// Physical properties of one propellant species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gas {
    pub name: String,
    /// Ion mass in kilograms.
    pub mass_kg: f64,
    /// Charge-state multiplier (1 for singly charged ions).
    pub charge_state: u32,
}

impl Gas {
    /// Create a gas from its atomic or molecular mass in atomic mass units.
    pub fn from_amu(name: impl Into<String>, mass_amu: f64, charge_state: u32) -> Self {
        Self {
            name: name.into(),
            mass_kg: mass_amu * ATOMIC_MASS_UNIT,
            charge_state,
        }
    }

    /// Ion charge in coulombs.
    pub fn charge_coulombs(&self) -> f64 {
        f64::from(self.charge_state) * ELEMENTARY_CHARGE
    }

    /// Charge-to-mass ratio in C/kg.
    pub fn charge_to_mass(&self) -> f64 {
        self.charge_coulombs() / self.mass_kg
    }

    /// Validate gas properties for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::GasData {
                message: "gas name must not be empty".to_string(),
            });
        }

        if !self.mass_kg.is_finite() || self.mass_kg <= 0.0 {
            return Err(Error::GasData {
                message: format!(
                    "mass of gas '{}' must be a finite positive number, got {}",
                    self.name, self.mass_kg
                ),
            });
        }

        if self.charge_state == 0 {
            return Err(Error::GasData {
                message: format!("charge_state of gas '{}' must be at least 1", self.name),
            });
        }

        Ok(())
    }
}

/// Read-only collection of gases keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct GasTable {
    gases: BTreeMap<String, Gas>,
    source: Option<PathBuf>,
}

impl GasTable {
    /// The built-in propellant set, all singly charged.
    pub fn builtin() -> Self {
        let mut gases = BTreeMap::new();
        for (name, mass_amu) in BUILTIN_GASES {
            let gas = Gas::from_amu(*name, *mass_amu, 1);
            gases.insert(normalize_name(&gas.name), gas);
        }
        Self {
            gases,
            source: None,
        }
    }

    /// Build a table from a list of gases, rejecting invalid or duplicate entries.
    pub fn from_gases(gases: impl IntoIterator<Item = Gas>) -> Result<Self> {
        let mut table = Self::default();
        for gas in gases {
            table.insert(gas)?;
        }
        Ok(table)
    }

    /// Build a table of singly charged gases from a name -> mass (amu) mapping.
    pub fn from_masses_amu<'a, I>(masses: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        Self::from_gases(
            masses
                .into_iter()
                .map(|(name, mass)| Gas::from_amu(name.trim(), *mass, 1)),
        )
    }

    /// Load a gas table from a CSV file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut table = Self::from_reader(file)?;
        table.source = Some(path.to_path_buf());
        Ok(table)
    }

    /// Load a gas table from CSV data.
    ///
    /// Required columns are `name` and one of `mass_amu` or `mass_kg`; an optional
    /// `charge_state` column defaults to 1.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::GasData {
                message: format!("failed to read gas data headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };
        let normalized_headers: Vec<String> = headers.iter().map(&normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("name", &["name", "gas", "gas_name", "propellant"]),
            ("mass_amu", &["mass_amu", "amu", "atomic_mass", "molar_mass"]),
            ("mass_kg", &["mass_kg", "ion_mass_kg"]),
            ("charge_state", &["charge_state", "charge", "z"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(index) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h == alt))
            {
                index_map.insert(*canon, index);
            }
        }

        let has_mass = index_map.contains_key("mass_amu") || index_map.contains_key("mass_kg");
        if !index_map.contains_key("name") || !has_mass {
            return Err(Error::GasData {
                message: format!(
                    "gas data requires a name column and a mass_amu or mass_kg column. Available: {}",
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut table = Self::default();
        let mut row_num: usize = 1;
        for result in csv_reader.records() {
            row_num += 1;
            let record = result.map_err(|e| Error::GasData {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<&str> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
            };

            let name = get("name").unwrap_or_default().to_string();
            let parse = |field: &str, raw: &str| -> Result<f64> {
                raw.parse::<f64>().map_err(|e| Error::GasData {
                    message: format!("invalid {field} for gas '{name}' at row {row_num}: {e}"),
                })
            };

            let mass_kg = match (get("mass_kg"), get("mass_amu")) {
                (Some(raw), _) => parse("mass_kg", raw)?,
                (None, Some(raw)) => parse("mass_amu", raw)? * ATOMIC_MASS_UNIT,
                (None, None) => {
                    return Err(Error::GasData {
                        message: format!("missing mass for gas '{name}' at row {row_num}"),
                    })
                }
            };

            let charge_state = match get("charge_state") {
                Some(raw) => raw.parse::<u32>().map_err(|e| Error::GasData {
                    message: format!(
                        "invalid charge_state for gas '{name}' at row {row_num}: {e}"
                    ),
                })?,
                None => 1,
            };

            table.insert(Gas {
                name,
                mass_kg,
                charge_state,
            })?;
        }

        Ok(table)
    }

    fn insert(&mut self, gas: Gas) -> Result<()> {
        gas.validate()?;
        let key = normalize_name(&gas.name);
        if self.gases.contains_key(&key) {
            return Err(Error::DuplicateGas { name: key });
        }
        self.gases.insert(key, gas);
        Ok(())
    }

    /// Get a gas by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Gas> {
        self.gases.get(&normalize_name(name))
    }

    /// Get a gas by name, or an [`Error::UnknownGas`] carrying close-name suggestions.
    pub fn get_or_suggest(&self, name: &str) -> Result<&Gas> {
        self.get(name).ok_or_else(|| Error::UnknownGas {
            name: name.to_string(),
            suggestions: self.suggestions_for(name),
        })
    }

    fn suggestions_for(&self, name: &str) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .gases
            .iter()
            .map(|(key, gas)| (strsim::jaro_winkler(&needle, key), gas.name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// All gases ordered by name.
    pub fn gases_sorted(&self) -> Vec<&Gas> {
        let mut gases: Vec<&Gas> = self.gases.values().collect();
        gases.sort_by(|a, b| a.name.cmp(&b.name));
        gases
    }

    pub fn len(&self) -> usize {
        self.gases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gases.is_empty()
    }

    /// Get the source path if the table was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
