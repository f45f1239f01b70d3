use std::collections::HashMap;

use varisat::{CnfFormula, Lit, Solver, Var};

use crate::error::OracleFailure;

/// A satisfying assignment as reported by an [`Oracle`].
///
/// Variables the oracle did not mention read as false.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment {
    values: HashMap<Var, bool>,
}

impl Assignment {
    /// Truth value of `var`.
    pub fn value(&self, var: Var) -> bool {
        self.values.get(&var).copied().unwrap_or(false)
    }

    /// Truth value of `lit`, accounting for its sign.
    pub fn satisfies(&self, lit: Lit) -> bool {
        self.value(lit.var()) == lit.is_positive()
    }
}

impl FromIterator<Lit> for Assignment {
    /// Collect a model given as literals, the sign of each one being the value of its variable.
    fn from_iter<T: IntoIterator<Item=Lit>>(iter: T) -> Self {
        Self { values: iter.into_iter().map(|lit| (lit.var(), lit.is_positive())).collect() }
    }
}

/// Result of one oracle call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// Satisfiable, with a witness.
    Sat(Assignment),
    /// Unsatisfiable.
    Unsat,
}

/// A satisfiability oracle: clauses in, a model or UNSAT out.
///
/// Calls are independent. An implementation must not carry state from one formula to the next
/// in a way that changes its answers.
pub trait Oracle {
    /// Decide `formula`.
    fn solve(&mut self, formula: &CnfFormula) -> Result<Verdict, OracleFailure>;
}

/// [`Oracle`] backed by a fresh [`varisat::Solver`] per call.
#[derive(Copy, Clone, Debug, Default)]
pub struct VarisatOracle;

impl Oracle for VarisatOracle {
    fn solve(&mut self, formula: &CnfFormula) -> Result<Verdict, OracleFailure> {
        let mut solver = Solver::new();
        solver.add_formula(formula);

        let satisfiable = solver.solve()
            .map_err(|err| OracleFailure { reason: err.to_string() })?;
        if !satisfiable {
            return Ok(Verdict::Unsat);
        }

        match solver.model() {
            Some(model) => Ok(Verdict::Sat(model.into_iter().collect())),
            None => Err(OracleFailure { reason: "satisfiable, but no model was produced".to_string() }),
        }
    }
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn solve(&mut self, formula: &CnfFormula) -> Result<Verdict, OracleFailure> {
        (**self).solve(formula)
    }
}
