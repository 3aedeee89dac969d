//! Boolean expressions are simple structures that represent Boolean formulas explicitly.
//!
//! They can be parsed from a string representation (using `TryFrom`) and used to build
//! networks for the checker:
//!
//! ```rust
//! use biodivine_lib_cec::boolean_expression::BooleanExpression;
//! use biodivine_lib_cec::{Aig, BooleanNetwork};
//! use std::convert::TryFrom;
//!
//! let expression = BooleanExpression::try_from("a & !b => (b ^ c <=> (a | b))").unwrap();
//! assert_eq!("((a & !b) => ((b ^ c) <=> (a | b)))", expression.to_string());
//! assert_eq!(vec!["a", "b", "c"], expression.variables());
//!
//! let aig = Aig::from_expressions(&["a", "b", "c"], &["a & !b => (b ^ c <=> (a | b))"]).unwrap();
//! assert_eq!(3, aig.num_pis());
//! assert_eq!(1, aig.num_pos());
//! ```
//!
//! Operators, from the lowest to the highest priority: `<=>`, `=>`, `|`, `&`, `^` and `!`.
//! All binary operators are right-associative. Constants are written as `true` and `false`.

/// **(internal)** Implements expression printing and the construction of networks.
mod _impl_boolean_expression;

/// **(internal)** Parsing functions for Boolean expressions.
mod _impl_parser;

pub use _impl_boolean_expression::build_network;

/// Recursive type for Boolean expression tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BooleanExpression {
    Const(bool),
    Variable(String),
    Not(Box<BooleanExpression>),
    And(Box<BooleanExpression>, Box<BooleanExpression>),
    Or(Box<BooleanExpression>, Box<BooleanExpression>),
    Xor(Box<BooleanExpression>, Box<BooleanExpression>),
    Imp(Box<BooleanExpression>, Box<BooleanExpression>),
    Iff(Box<BooleanExpression>, Box<BooleanExpression>),
}
