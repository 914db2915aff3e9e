//! # Kripke Model
//!
//! A finite Kripke model with a 0/1 accessibility relation and two 0/1 valuation
//! tables: `valuation1` records evidence for a variable at each world, `valuation2`
//! evidence against it.
//!
//! Raw tables are given as integers so that out-of-range values are reported as
//! [`ModelError`]s rather than silently truncated. Everything is validated once, when
//! the model is built or mutated, and stored as booleans afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;
use tracing::debug;

/// Raw valuation table: variable name to one 0/1 entry per world.
pub type RawValuation = HashMap<String, Vec<i64>>;

/// Raw accessibility matrix, `relation[i][j] == 1` iff world `i` sees world `j`.
pub type RawRelation = Vec<Vec<i64>>;

/// JSON shape of a model, mirroring the arguments of [`KripkeModel::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub worlds_size: usize,
    #[serde(default)]
    pub relation: Option<RawRelation>,
    #[serde(default)]
    pub valuation1: Option<RawValuation>,
    #[serde(default)]
    pub valuation2: Option<RawValuation>,
    #[serde(default)]
    pub self_relation: bool,
}

/// Which of the two valuation tables an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValuationTable {
    #[strum(serialize = "valuation1")]
    Positive,
    #[strum(serialize = "valuation2")]
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KripkeModel {
    worlds_size: usize,
    relation: Vec<Vec<bool>>,
    valuation1: HashMap<String, Vec<bool>>,
    valuation2: HashMap<String, Vec<bool>>,
}

impl KripkeModel {
    /// Builds and validates a model.
    ///
    /// Without an explicit `relation` the diagonal relation is used: every world sees
    /// itself when `self_relation` is set, and no world sees anything otherwise.
    pub fn new(
        worlds_size: usize,
        relation: Option<RawRelation>,
        valuation1: Option<RawValuation>,
        valuation2: Option<RawValuation>,
        self_relation: bool,
    ) -> ModelResult<Self> {
        let relation = match relation {
            Some(relation) => check_relation(&relation, worlds_size)?,
            None => (0..worlds_size)
                .map(|i| (0..worlds_size).map(|j| i == j && self_relation).collect())
                .collect(),
        };
        let valuation1 = match valuation1 {
            Some(valuation) => check_valuation(&valuation, worlds_size, ValuationTable::Positive)?,
            None => HashMap::new(),
        };
        let valuation2 = match valuation2 {
            Some(valuation) => check_valuation(&valuation, worlds_size, ValuationTable::Negative)?,
            None => HashMap::new(),
        };

        debug!(
            "built Kripke model: {} worlds, {} positive and {} negative variables",
            worlds_size,
            valuation1.len(),
            valuation2.len()
        );

        Ok(Self {
            worlds_size,
            relation,
            valuation1,
            valuation2,
        })
    }

    pub fn builder(worlds_size: usize) -> KripkeModelBuilder {
        KripkeModelBuilder::new(worlds_size)
    }

    pub fn worlds_size(&self) -> usize {
        self.worlds_size
    }

    pub fn relation(&self) -> &[Vec<bool>] {
        &self.relation
    }

    pub fn is_accessible(&self, from: usize, to: usize) -> bool {
        self.relation
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Worlds visible from `world`, in index order. Empty for an out-of-range world.
    pub fn accessible_worlds(&self, world: usize) -> impl Iterator<Item = usize> + '_ {
        self.relation
            .get(world)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(to, &seen)| seen.then_some(to))
    }

    pub fn valuation1(&self, variable: &str, world: usize) -> Option<bool> {
        self.valuation(ValuationTable::Positive, variable, world)
    }

    pub fn valuation2(&self, variable: &str, world: usize) -> Option<bool> {
        self.valuation(ValuationTable::Negative, variable, world)
    }

    pub fn valuation(&self, table: ValuationTable, variable: &str, world: usize) -> Option<bool> {
        self.table(table)
            .get(variable)
            .and_then(|values| values.get(world))
            .copied()
    }

    pub fn set_relation(&mut self, from: usize, to: usize, value: i64) -> ModelResult<()> {
        self.check_world(from)?;
        self.check_world(to)?;
        let seen = to_bit(value).ok_or(ModelError::RelationValue { from, to, value })?;
        self.relation[from][to] = seen;
        Ok(())
    }

    pub fn set_variable_valuation1(&mut self, variable: &str, values: Vec<i64>) -> ModelResult<()> {
        self.set_variable_valuation(ValuationTable::Positive, variable, values)
    }

    pub fn set_variable_valuation2(&mut self, variable: &str, values: Vec<i64>) -> ModelResult<()> {
        self.set_variable_valuation(ValuationTable::Negative, variable, values)
    }

    pub fn set_variable_valuation1_for_world(
        &mut self,
        variable: &str,
        world: usize,
        value: i64,
    ) -> ModelResult<()> {
        self.set_variable_valuation_for_world(ValuationTable::Positive, variable, world, value)
    }

    pub fn set_variable_valuation2_for_world(
        &mut self,
        variable: &str,
        world: usize,
        value: i64,
    ) -> ModelResult<()> {
        self.set_variable_valuation_for_world(ValuationTable::Negative, variable, world, value)
    }

    fn set_variable_valuation(
        &mut self,
        table: ValuationTable,
        variable: &str,
        values: Vec<i64>,
    ) -> ModelResult<()> {
        let values = check_variable_valuation(variable, &values, self.worlds_size, table)?;
        self.table_mut(table).insert(variable.to_string(), values);
        Ok(())
    }

    fn set_variable_valuation_for_world(
        &mut self,
        table: ValuationTable,
        variable: &str,
        world: usize,
        value: i64,
    ) -> ModelResult<()> {
        self.check_world(world)?;
        let bit = to_bit(value).ok_or_else(|| ModelError::ValuationValue {
            table,
            variable: variable.to_string(),
            world,
            value,
        })?;
        let values = self
            .table_mut(table)
            .get_mut(variable)
            .ok_or_else(|| ModelError::UnknownVariable {
                table,
                variable: variable.to_string(),
            })?;
        values[world] = bit;
        Ok(())
    }

    fn check_world(&self, world: usize) -> ModelResult<()> {
        if world < self.worlds_size {
            Ok(())
        } else {
            Err(ModelError::WorldOutOfRange {
                world,
                worlds_size: self.worlds_size,
            })
        }
    }

    fn table(&self, table: ValuationTable) -> &HashMap<String, Vec<bool>> {
        match table {
            ValuationTable::Positive => &self.valuation1,
            ValuationTable::Negative => &self.valuation2,
        }
    }

    fn table_mut(&mut self, table: ValuationTable) -> &mut HashMap<String, Vec<bool>> {
        match table {
            ValuationTable::Positive => &mut self.valuation1,
            ValuationTable::Negative => &mut self.valuation2,
        }
    }
}

impl TryFrom<ModelDefinition> for KripkeModel {
    type Error = ModelError;

    fn try_from(definition: ModelDefinition) -> ModelResult<Self> {
        KripkeModel::new(
            definition.worlds_size,
            definition.relation,
            definition.valuation1,
            definition.valuation2,
            definition.self_relation,
        )
    }
}

/// Fluent construction of a [`KripkeModel`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct KripkeModelBuilder {
    definition: ModelDefinition,
}

impl KripkeModelBuilder {
    pub fn new(worlds_size: usize) -> Self {
        Self {
            definition: ModelDefinition {
                worlds_size,
                ..Default::default()
            },
        }
    }

    pub fn relation(mut self, relation: RawRelation) -> Self {
        self.definition.relation = Some(relation);
        self
    }

    pub fn self_relation(mut self, self_relation: bool) -> Self {
        self.definition.self_relation = self_relation;
        self
    }

    pub fn valuation1(mut self, variable: &str, values: Vec<i64>) -> Self {
        self.definition
            .valuation1
            .get_or_insert_with(HashMap::new)
            .insert(variable.to_string(), values);
        self
    }

    pub fn valuation2(mut self, variable: &str, values: Vec<i64>) -> Self {
        self.definition
            .valuation2
            .get_or_insert_with(HashMap::new)
            .insert(variable.to_string(), values);
        self
    }

    pub fn build(self) -> ModelResult<KripkeModel> {
        KripkeModel::try_from(self.definition)
    }
}

fn to_bit(value: i64) -> Option<bool> {
    match value {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

fn check_relation(relation: &RawRelation, worlds_size: usize) -> ModelResult<Vec<Vec<bool>>> {
    if relation.len() != worlds_size {
        return Err(ModelError::RelationRows {
            expected: worlds_size,
            found: relation.len(),
        });
    }
    relation
        .iter()
        .enumerate()
        .map(|(from, row)| -> ModelResult<Vec<bool>> {
            if row.len() != worlds_size {
                return Err(ModelError::RelationRowLength {
                    row: from,
                    expected: worlds_size,
                    found: row.len(),
                });
            }
            row.iter()
                .enumerate()
                .map(|(to, &value)| {
                    to_bit(value).ok_or(ModelError::RelationValue { from, to, value })
                })
                .collect()
        })
        .collect()
}

fn check_valuation(
    valuation: &RawValuation,
    worlds_size: usize,
    table: ValuationTable,
) -> ModelResult<HashMap<String, Vec<bool>>> {
    valuation
        .iter()
        .map(|(variable, values)| {
            check_variable_valuation(variable, values, worlds_size, table)
                .map(|values| (variable.clone(), values))
        })
        .collect()
}

fn check_variable_valuation(
    variable: &str,
    values: &[i64],
    worlds_size: usize,
    table: ValuationTable,
) -> ModelResult<Vec<bool>> {
    if values.len() != worlds_size {
        return Err(ModelError::ValuationLength {
            table,
            variable: variable.to_string(),
            expected: worlds_size,
            found: values.len(),
        });
    }
    values
        .iter()
        .enumerate()
        .map(|(world, &value)| {
            to_bit(value).ok_or_else(|| ModelError::ValuationValue {
                table,
                variable: variable.to_string(),
                world,
                value,
            })
        })
        .collect()
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Relation error: relation must have {expected} rows, found {found}")]
    RelationRows { expected: usize, found: usize },
    #[error("Relation error: row {row} must have {expected} entries, found {found}")]
    RelationRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Relation error: relation[{from}][{to}] must be 0 or 1, found {value}")]
    RelationValue { from: usize, to: usize, value: i64 },
    #[error("Valuation error: {table} of '{variable}' must have {expected} entries, found {found}")]
    ValuationLength {
        table: ValuationTable,
        variable: String,
        expected: usize,
        found: usize,
    },
    #[error("Valuation error: {table} of '{variable}' at world {world} must be 0 or 1, found {value}")]
    ValuationValue {
        table: ValuationTable,
        variable: String,
        world: usize,
        value: i64,
    },
    #[error("World error: world {world} is out of range for a model of {worlds_size} worlds")]
    WorldOutOfRange { world: usize, worlds_size: usize },
    #[error("Valuation error: '{variable}' is not defined in {table}")]
    UnknownVariable {
        table: ValuationTable,
        variable: String,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
