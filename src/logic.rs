use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use itertools::Itertools;
use varisat::{Lit, Var};

use crate::graph::Weight;

pub(crate) fn at_most_one(lits: &[Lit]) -> Vec<Vec<Lit>> {
    // no two are true; (!A + !B) * (!A + !C) * ...
    lits.iter()
        .combinations(2)
        .map(|pair| vec![!**pair.index(0), !**pair.index(1)])
        .collect_vec()
}

pub(crate) fn exactly_one(lits: Vec<Lit>) -> Vec<Vec<Lit>> {
    let mut clauses = Vec::with_capacity(lits.len() * (lits.len() + 1) / 2 + 1);

    clauses.extend(at_most_one(&lits));
    // at least one is true; A + B + C + ...
    clauses.push(lits);

    clauses
}

/// Hands out variables above every index already in use by an encoding.
#[derive(Debug)]
pub(crate) struct VarPool {
    next: usize,
}

impl VarPool {
    pub(crate) fn starting_at(next: usize) -> Self {
        Self { next }
    }

    pub(crate) fn fresh(&mut self) -> Var {
        let var = Var::from_index(self.next);
        self.next += 1;
        var
    }
}

/// Bound the total weight of the chosen terms by `bound`.
///
/// `steps` holds one group of weighted terms per step; at most one term per group may be true, which the caller must
/// already guarantee. Registers exist only for partial sums that some choice of terms can reach without exceeding
/// `bound`: register `r[j][v]` is forced true whenever the weight accumulated over steps `0..=j` reaches `v`, and any
/// term that would push the total above `bound` is refuted against the previous step's registers. The encoding grows
/// with the number of distinct reachable sums, not with the magnitude of the weights.
pub(crate) fn weighted_at_most(steps: &[Vec<(Lit, Weight)>], bound: Weight, pool: &mut VarPool) -> Vec<Vec<Lit>> {
    let mut clauses = Vec::new();
    // registers of the previous step, keyed by the partial sum they stand for
    let mut previous: BTreeMap<Weight, Var> = BTreeMap::new();

    for (step_idx, terms) in steps.iter().enumerate() {
        let mut sums: BTreeSet<Weight> = previous.keys().copied().collect();
        for &(lit, weight) in terms {
            if weight > bound {
                clauses.push(vec![!lit]);
                continue;
            }
            if weight == 0 {
                continue;
            }

            // smallest previous sum this term would carry over the bound
            if let Some((_, reg)) = previous.range(bound - weight + 1..).next() {
                clauses.push(vec![!lit, reg.negative()]);
            }
            sums.insert(weight);
            sums.extend(previous.range(..=bound - weight).map(|(sum, _)| sum + weight));
        }

        // registers for the final step would never be read
        if step_idx + 1 == steps.len() {
            break;
        }

        let current: BTreeMap<Weight, Var> = sums.into_iter().map(|sum| (sum, pool.fresh())).collect();
        // reaching v means reaching every smaller sum too
        for ((_, lower), (_, higher)) in current.iter().tuple_windows() {
            clauses.push(vec![higher.negative(), lower.positive()]);
        }
        for (sum, reg) in previous.iter() {
            clauses.push(vec![reg.negative(), current[sum].positive()]);
        }
        for &(lit, weight) in terms {
            if weight == 0 || weight > bound {
                continue;
            }

            clauses.push(vec![!lit, current[&weight].positive()]);
            for (sum, reg) in previous.range(..=bound - weight) {
                clauses.push(vec![!lit, reg.negative(), current[&(sum + weight)].positive()]);
            }
        }

        previous = current;
    }

    clauses
}
