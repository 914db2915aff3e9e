use core::fmt;
use core::ops::{BitAnd, BitOr, Not, Shr};

use crate::tokenizer::symbol::Operator;

// Formula AST. Every node owns its children, so a parsed formula is a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Variable(String),
    Negation(Box<Expression>),
    Conjunction {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Disjunction {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Implication {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Coimplication {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    BoxModality(Box<Expression>),
    DiamondModality(Box<Expression>),
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn negation(operand: Expression) -> Self {
        Expression::Negation(Box::new(operand))
    }

    pub fn box_modality(operand: Expression) -> Self {
        Expression::BoxModality(Box::new(operand))
    }

    pub fn diamond_modality(operand: Expression) -> Self {
        Expression::DiamondModality(Box::new(operand))
    }

    pub fn conjunction(left: Expression, right: Expression) -> Self {
        Expression::Conjunction {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn disjunction(left: Expression, right: Expression) -> Self {
        Expression::Disjunction {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn implication(left: Expression, right: Expression) -> Self {
        Expression::Implication {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn coimplication(left: Expression, right: Expression) -> Self {
        Expression::Coimplication {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds the node for a prefix operator.
    ///
    /// Returns `None` when `op` is a binary connective.
    pub fn unary(op: Operator, operand: Expression) -> Option<Self> {
        match op {
            Operator::Negation => Some(Self::negation(operand)),
            Operator::Box => Some(Self::box_modality(operand)),
            Operator::Diamond => Some(Self::diamond_modality(operand)),
            _ => None,
        }
    }

    /// Builds the node for a binary connective.
    ///
    /// Returns `None` when `op` is a prefix operator.
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Option<Self> {
        match op {
            Operator::Conjunction => Some(Self::conjunction(left, right)),
            Operator::Disjunction => Some(Self::disjunction(left, right)),
            Operator::Implication => Some(Self::implication(left, right)),
            Operator::Coimplication => Some(Self::coimplication(left, right)),
            _ => None,
        }
    }

    /// The operator at the root of this node, `None` for a variable.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Variable(_) => None,
            Expression::Negation(_) => Some(Operator::Negation),
            Expression::BoxModality(_) => Some(Operator::Box),
            Expression::DiamondModality(_) => Some(Operator::Diamond),
            Expression::Conjunction { .. } => Some(Operator::Conjunction),
            Expression::Disjunction { .. } => Some(Operator::Disjunction),
            Expression::Implication { .. } => Some(Operator::Implication),
            Expression::Coimplication { .. } => Some(Operator::Coimplication),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Variable(_) => 1,
            Expression::Negation(operand)
            | Expression::BoxModality(operand)
            | Expression::DiamondModality(operand) => 1 + operand.depth(),
            Expression::Conjunction { left, right }
            | Expression::Disjunction { left, right }
            | Expression::Implication { left, right }
            | Expression::Coimplication { left, right } => 1 + left.depth().max(right.depth()),
        }
    }
}

// `!a`, `a & b`, `a | b` and `a >> b` build the matching connective nodes
impl Not for Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        Expression::negation(self)
    }
}

impl BitAnd for Expression {
    type Output = Expression;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expression::conjunction(self, rhs)
    }
}

impl BitOr for Expression {
    type Output = Expression;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expression::disjunction(self, rhs)
    }
}

impl Shr for Expression {
    type Output = Expression;

    fn shr(self, rhs: Self) -> Self::Output {
        Expression::implication(self, rhs)
    }
}

/// Renders the formula in surface syntax.
///
/// Binary nodes are always parenthesized, so the output of a parsed formula parses
/// back to the same tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Negation(operand)
            | Expression::BoxModality(operand)
            | Expression::DiamondModality(operand) => {
                // operator() is always Some for non-variables
                if let Some(op) = self.operator() {
                    write!(f, "{}", op)?;
                }
                write!(f, "{}", operand)
            }
            Expression::Conjunction { left, right }
            | Expression::Disjunction { left, right }
            | Expression::Implication { left, right }
            | Expression::Coimplication { left, right } => {
                let op = self.operator().map(|op| op.to_string()).unwrap_or_default();
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}
