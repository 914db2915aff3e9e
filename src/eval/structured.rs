//! Paraconsistent Kripke semantics.
//!
//! Every formula gets two independent truth values at a world: whether there is
//! evidence for it and whether there is evidence against it. Both may hold, or
//! neither.

use std::fmt;

use tracing::{debug, trace, warn};

use super::{check_depth, EvalError, EvalResult};
use crate::ast::Expression;
use crate::config::EngineConfig;
use crate::model::{KripkeModel, ValuationTable};

/// Result of structured evaluation: evidence for (`positive`) and against (`negative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Valuation {
    pub positive: bool,
    pub negative: bool,
}

impl Valuation {
    /// Value of `[]` over no accessible worlds.
    pub const BOX_UNIT: Valuation = Valuation::new(true, false);
    /// Value of `<>` over no accessible worlds.
    pub const DIAMOND_UNIT: Valuation = Valuation::new(false, true);

    pub const fn new(positive: bool, negative: bool) -> Self {
        Self { positive, negative }
    }

    pub fn negation(self) -> Self {
        Self::new(self.negative, self.positive)
    }

    pub fn conjunction(self, other: Self) -> Self {
        Self::new(
            self.positive.max(other.positive),
            self.negative.min(other.negative),
        )
    }

    pub fn disjunction(self, other: Self) -> Self {
        Self::new(
            self.positive.min(other.positive),
            self.negative.max(other.negative),
        )
    }

    pub fn implication(self, other: Self) -> Self {
        let positive = if self.positive <= other.positive {
            true
        } else {
            other.positive
        };
        let negative = if other.negative <= self.negative {
            false
        } else {
            other.negative
        };
        Self::new(positive, negative)
    }

    pub fn coimplication(self, other: Self) -> Self {
        let positive = if self.positive <= other.positive {
            false
        } else {
            self.positive
        };
        let negative = if other.negative <= self.negative {
            true
        } else {
            self.negative
        };
        Self::new(positive, negative)
    }

    // folds for the modalities; the units above are the values over no worlds
    fn meet(self, other: Self) -> Self {
        Self::new(
            self.positive && other.positive,
            self.negative || other.negative,
        )
    }

    fn join(self, other: Self) -> Self {
        Self::new(
            self.positive || other.positive,
            self.negative && other.negative,
        )
    }
}

impl From<Valuation> for (bool, bool) {
    fn from(valuation: Valuation) -> Self {
        (valuation.positive, valuation.negative)
    }
}

impl From<(bool, bool)> for Valuation {
    fn from((positive, negative): (bool, bool)) -> Self {
        Self::new(positive, negative)
    }
}

/// Renders as the 0/1 pair used by the model tables, e.g. `(1, 0)`.
impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            u8::from(self.positive),
            u8::from(self.negative)
        )
    }
}

/// Evaluates formulas against a borrowed [`KripkeModel`].
#[derive(Debug, Clone, Copy)]
pub struct StructuredEvaluator<'a> {
    model: &'a KripkeModel,
    max_depth: usize,
}

impl<'a> StructuredEvaluator<'a> {
    pub fn new(model: &'a KripkeModel) -> Self {
        Self::with_config(model, &EngineConfig::default())
    }

    pub fn with_config(model: &'a KripkeModel, config: &EngineConfig) -> Self {
        Self {
            model,
            max_depth: config.max_formula_depth,
        }
    }

    #[tracing::instrument(level = "debug", skip(self, expr), fields(formula = %expr))]
    pub fn evaluate(&self, expr: &Expression, world: usize) -> EvalResult<Valuation> {
        if world >= self.model.worlds_size() {
            warn!("world {} is outside the model", world);
            return Err(EvalError::WorldOutOfRange {
                world,
                worlds_size: self.model.worlds_size(),
            });
        }
        let valuations = self.eval_worlds(expr, 1)?;
        let valuation = valuations
            .get(world)
            .copied()
            .ok_or(EvalError::WorldOutOfRange {
                world,
                worlds_size: self.model.worlds_size(),
            })?;
        debug!("valuation at world {}: {}", world, valuation);
        Ok(valuation)
    }

    /// Evidence for `expr` at `world`.
    pub fn valuation1(&self, expr: &Expression, world: usize) -> EvalResult<bool> {
        self.evaluate(expr, world).map(|v| v.positive)
    }

    /// Evidence against `expr` at `world`.
    pub fn valuation2(&self, expr: &Expression, world: usize) -> EvalResult<bool> {
        self.evaluate(expr, world).map(|v| v.negative)
    }

    /// Valuation of `expr` at every world, indexed by world.
    ///
    /// Each subformula is evaluated once for the whole model, so modalities
    /// index their operand's vector instead of recursing per successor.
    fn eval_worlds(&self, expr: &Expression, depth: usize) -> EvalResult<Vec<Valuation>> {
        check_depth(depth, self.max_depth)?;
        let depth = depth + 1;

        let valuations = match expr {
            Expression::Variable(name) => (0..self.model.worlds_size())
                .map(|world| {
                    Ok(Valuation::new(
                        self.lookup(ValuationTable::Positive, name, world)?,
                        self.lookup(ValuationTable::Negative, name, world)?,
                    ))
                })
                .collect::<EvalResult<Vec<_>>>()?,
            Expression::Negation(operand) => self
                .eval_worlds(operand, depth)?
                .into_iter()
                .map(Valuation::negation)
                .collect(),
            Expression::Conjunction { left, right } => {
                self.pointwise(left, right, depth, Valuation::conjunction)?
            }
            Expression::Disjunction { left, right } => {
                self.pointwise(left, right, depth, Valuation::disjunction)?
            }
            Expression::Implication { left, right } => {
                self.pointwise(left, right, depth, Valuation::implication)?
            }
            Expression::Coimplication { left, right } => {
                self.pointwise(left, right, depth, Valuation::coimplication)?
            }
            Expression::BoxModality(operand) => {
                let inner = self.eval_worlds(operand, depth)?;
                self.fold_successors(&inner, Valuation::BOX_UNIT, Valuation::meet)
            }
            Expression::DiamondModality(operand) => {
                let inner = self.eval_worlds(operand, depth)?;
                self.fold_successors(&inner, Valuation::DIAMOND_UNIT, Valuation::join)
            }
        };

        trace!("{} over worlds = {:?}", expr, valuations);
        Ok(valuations)
    }

    fn pointwise(
        &self,
        left: &Expression,
        right: &Expression,
        depth: usize,
        connective: fn(Valuation, Valuation) -> Valuation,
    ) -> EvalResult<Vec<Valuation>> {
        let left = self.eval_worlds(left, depth)?;
        let right = self.eval_worlds(right, depth)?;
        Ok(left
            .into_iter()
            .zip(right)
            .map(|(l, r)| connective(l, r))
            .collect())
    }

    // folds `inner` over each world's successors, starting from `unit`
    fn fold_successors(
        &self,
        inner: &[Valuation],
        unit: Valuation,
        combine: fn(Valuation, Valuation) -> Valuation,
    ) -> Vec<Valuation> {
        (0..self.model.worlds_size())
            .map(|world| {
                self.model
                    .accessible_worlds(world)
                    .filter_map(|next| inner.get(next).copied())
                    .fold(unit, combine)
            })
            .collect()
    }

    fn lookup(&self, table: ValuationTable, name: &str, world: usize) -> EvalResult<bool> {
        self.model
            .valuation(table, name, world)
            .ok_or_else(|| EvalError::UnknownVariable {
                name: name.to_string(),
                table,
            })
    }
}
