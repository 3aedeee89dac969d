use super::BooleanExpression;
use super::BooleanExpression::*;
use crate::boolean_expression::_impl_parser::parse_boolean_expression;
use crate::{Aig, CecError, NetworkBuilder};
use fxhash::FxHashMap;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl TryFrom<&str> for BooleanExpression {
    type Error = CecError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_boolean_expression(value)
    }
}

impl Display for BooleanExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Const(value) => write!(f, "{}", value),
            Variable(name) => write!(f, "{}", name),
            Not(inner) => write!(f, "!{}", inner),
            And(l, r) => write!(f, "({} & {})", l, r),
            Or(l, r) => write!(f, "({} | {})", l, r),
            Xor(l, r) => write!(f, "({} ^ {})", l, r),
            Imp(l, r) => write!(f, "({} => {})", l, r),
            Iff(l, r) => write!(f, "({} <=> {})", l, r),
        }
    }
}

impl BooleanExpression {
    /// Names of all variables used in this expression, sorted and without duplicates.
    pub fn variables(&self) -> Vec<String> {
        let mut result = Vec::new();
        self.collect_variables(&mut result);
        result.sort();
        result.dedup();
        result
    }

    /// **(internal)** Push all variable names (with repetition) into `names`.
    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Const(_) => {}
            Variable(name) => names.push(name.clone()),
            Not(inner) => inner.collect_variables(names),
            And(l, r) | Or(l, r) | Xor(l, r) | Imp(l, r) | Iff(l, r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            }
        }
    }

    /// Build the function of this expression in `network` and return the signal computing it.
    ///
    /// Variables are resolved using `inputs`. If a variable is missing,
    /// `CecError::UnknownVariable` is returned (the gates built so far stay in the network).
    pub fn build<N: NetworkBuilder>(
        &self,
        network: &mut N,
        inputs: &FxHashMap<String, N::Signal>,
    ) -> Result<N::Signal, CecError> {
        Ok(match self {
            Const(value) => network.get_constant(*value),
            Variable(name) => match inputs.get(name) {
                Some(signal) => *signal,
                None => return Err(CecError::UnknownVariable(name.clone())),
            },
            Not(inner) => {
                let inner = inner.build(network, inputs)?;
                network.create_not(inner)
            }
            And(l, r) => {
                let (l, r) = (l.build(network, inputs)?, r.build(network, inputs)?);
                network.create_and(l, r)
            }
            Or(l, r) => {
                let (l, r) = (l.build(network, inputs)?, r.build(network, inputs)?);
                network.create_or(l, r)
            }
            Xor(l, r) => {
                let (l, r) = (l.build(network, inputs)?, r.build(network, inputs)?);
                network.create_xor(l, r)
            }
            Imp(l, r) => {
                let (l, r) = (l.build(network, inputs)?, r.build(network, inputs)?);
                let not_l = network.create_not(l);
                network.create_or(not_l, r)
            }
            Iff(l, r) => {
                let (l, r) = (l.build(network, inputs)?, r.build(network, inputs)?);
                let xor = network.create_xor(l, r);
                network.create_not(xor)
            }
        })
    }
}

/// Build a network with the given named primary inputs (in this order) and one primary
/// output for each of the `outputs` formulas (in this order).
///
/// *Panics:* `inputs` must not contain duplicate names.
pub fn build_network<N: NetworkBuilder>(inputs: &[&str], outputs: &[&str]) -> Result<N, CecError> {
    let mut network = N::empty();
    let mut names: FxHashMap<String, N::Signal> = FxHashMap::default();
    for name in inputs {
        let signal = network.create_pi();
        if names.insert(name.to_string(), signal).is_some() {
            panic!("Input name `{}` is not unique.", name);
        }
    }
    for formula in outputs {
        let expression = BooleanExpression::try_from(*formula)?;
        let signal = expression.build(&mut network, &names)?;
        network.create_po(signal);
    }
    Ok(network)
}

impl Aig {
    /// Build an `Aig` from named inputs and output formulas. See `build_network`.
    pub fn from_expressions(inputs: &[&str], outputs: &[&str]) -> Result<Aig, CecError> {
        build_network(inputs, outputs)
    }
}
