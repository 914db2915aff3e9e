//! Fuzzy trust semantics.
//!
//! A [`FuzzyFrame`] assigns every variable a degree per agent and records how much each
//! agent trusts the others. `<> e` at an agent is the best degree of `e` among the
//! agents it trusts, capped by that trust; `[] e` is the worst, where an agent whose
//! degree reaches the trust placed in it counts as fully reliable.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{check_depth, EvalError, EvalResult};
use crate::ast::Expression;
use crate::config::{self, EngineConfig};
use crate::InternalResult;

type AgentDegrees = HashMap<String, f64>;

/// Degrees of variables per agent plus the agent trust relation.
///
/// Serialized as a single object:
///
/// ```json
/// {"p": {"alice": 0.5}, "relation": {"alice": {"bob": 1.0}}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzyFrame {
    #[serde(default)]
    relation: HashMap<String, AgentDegrees>,
    #[serde(flatten)]
    degrees: HashMap<String, AgentDegrees>,
}

impl FuzzyFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        config::from_file(path)
    }

    pub fn from_json(s: &str) -> InternalResult<Self> {
        config::from_str(s)
    }

    pub fn with_degree(mut self, variable: &str, agent: &str, degree: f64) -> Self {
        self.set_degree(variable, agent, degree);
        self
    }

    pub fn with_trust(mut self, truster: &str, trustee: &str, trust: f64) -> Self {
        self.set_trust(truster, trustee, trust);
        self
    }

    pub fn set_degree(&mut self, variable: &str, agent: &str, degree: f64) {
        self.degrees
            .entry(variable.to_string())
            .or_default()
            .insert(agent.to_string(), degree);
    }

    pub fn set_trust(&mut self, truster: &str, trustee: &str, trust: f64) {
        self.relation
            .entry(truster.to_string())
            .or_default()
            .insert(trustee.to_string(), trust);
    }

    /// Degree of `variable` at `agent`, 0.0 when either is absent.
    pub fn degree(&self, variable: &str, agent: &str) -> f64 {
        self.degrees
            .get(variable)
            .and_then(|agents| agents.get(agent))
            .copied()
            .unwrap_or(0.0)
    }

    /// Agents trusted by `agent`, with the trust placed in each.
    pub fn trusted_agents(&self, agent: &str) -> Option<&HashMap<String, f64>> {
        self.relation.get(agent)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.degrees.keys().map(String::as_str)
    }
}

pub fn fuzzy_negation(x: f64) -> f64 {
    if x > 0.0 {
        0.0
    } else {
        1.0
    }
}

pub fn fuzzy_conjunction(x: f64, y: f64) -> f64 {
    x.min(y)
}

pub fn fuzzy_disjunction(x: f64, y: f64) -> f64 {
    x.max(y)
}

/// `y` when `x <= y`, otherwise 1.0.
pub fn fuzzy_implication(x: f64, y: f64) -> f64 {
    if x <= y {
        y
    } else {
        1.0
    }
}

pub fn fuzzy_coimplication(x: f64, y: f64) -> f64 {
    if x <= y {
        0.0
    } else {
        x
    }
}

/// Evaluates formulas against a borrowed [`FuzzyFrame`].
#[derive(Debug, Clone, Copy)]
pub struct FuzzyEvaluator<'a> {
    frame: &'a FuzzyFrame,
    max_depth: usize,
}

impl<'a> FuzzyEvaluator<'a> {
    pub fn new(frame: &'a FuzzyFrame) -> Self {
        Self::with_config(frame, &EngineConfig::default())
    }

    pub fn with_config(frame: &'a FuzzyFrame, config: &EngineConfig) -> Self {
        Self {
            frame,
            max_depth: config.max_formula_depth,
        }
    }

    /// Degree of `expr` at `agent`.
    #[tracing::instrument(level = "debug", skip(self, expr), fields(formula = %expr))]
    pub fn evaluate(&self, expr: &Expression, agent: &str) -> EvalResult<f64> {
        let degree = self.eval_expression(expr, agent, 1)?;
        debug!("degree at {}: {}", agent, degree);
        Ok(degree)
    }

    fn eval_expression(&self, expr: &Expression, agent: &str, depth: usize) -> EvalResult<f64> {
        check_depth(depth, self.max_depth)?;
        let depth = depth + 1;

        let degree = match expr {
            Expression::Variable(name) => self.frame.degree(name, agent),
            Expression::Negation(operand) => {
                fuzzy_negation(self.eval_expression(operand, agent, depth)?)
            }
            Expression::Conjunction { left, right } => fuzzy_conjunction(
                self.eval_expression(left, agent, depth)?,
                self.eval_expression(right, agent, depth)?,
            ),
            Expression::Disjunction { left, right } => fuzzy_disjunction(
                self.eval_expression(left, agent, depth)?,
                self.eval_expression(right, agent, depth)?,
            ),
            Expression::Implication { left, right } => fuzzy_implication(
                self.eval_expression(left, agent, depth)?,
                self.eval_expression(right, agent, depth)?,
            ),
            Expression::Coimplication { left, right } => fuzzy_coimplication(
                self.eval_expression(left, agent, depth)?,
                self.eval_expression(right, agent, depth)?,
            ),
            Expression::DiamondModality(operand) => self.modality(
                operand,
                agent,
                depth,
                |trust, degree| trust.min(degree),
                f64::max,
            )?,
            Expression::BoxModality(operand) => self.modality(
                operand,
                agent,
                depth,
                |trust, degree| if trust <= degree { 1.0 } else { degree },
                f64::min,
            )?,
        };

        trace!("{} at {} = {}", expr, agent, degree);
        Ok(degree)
    }

    /// Weighs the operand's degree at each trusted agent and combines the results.
    ///
    /// The fold starts from the first trusted agent, so a lone NaN degree or trust
    /// comes back as NaN. Past that, NaN follows `f64::min`/`f64::max`, which keep
    /// the other operand.
    fn modality(
        &self,
        operand: &Expression,
        agent: &str,
        depth: usize,
        weigh: impl Fn(f64, f64) -> f64,
        combine: fn(f64, f64) -> f64,
    ) -> EvalResult<f64> {
        self.trusted_agents(agent)?
            .iter()
            .map(|(trustee, &trust)| {
                Ok(weigh(trust, self.eval_expression(operand, trustee, depth)?))
            })
            .collect::<EvalResult<Vec<_>>>()?
            .into_iter()
            .reduce(combine)
            .ok_or_else(|| EvalError::EmptyRelation {
                agent: agent.to_string(),
            })
    }

    fn trusted_agents(&self, agent: &str) -> EvalResult<&'a HashMap<String, f64>> {
        match self.frame.trusted_agents(agent) {
            Some(trusted) if !trusted.is_empty() => Ok(trusted),
            _ => {
                warn!("agent '{}' has no trusted agents", agent);
                Err(EvalError::EmptyRelation {
                    agent: agent.to_string(),
                })
            }
        }
    }
}
