//! Exhaustive search over every way to combine a hand.
//!
//! The search keeps a pool of exact rational values. Each step picks an
//! ordered pair from the pool, applies one of the four game operations,
//! and recurses on the shrunken pool until one value remains. Ordered
//! pairs make subtraction and division try both directions; exact
//! rationals make fractional lines like `8 / (3 - 8 / 3)` come out as
//! exactly 24 rather than within an epsilon of it.

use std::collections::BTreeSet;

use smallvec::SmallVec;
use tessera_num::Rational;

use crate::derivation::{Derivation, GameOp};

/// The classic target value.
pub const DEFAULT_TARGET: i64 = 24;

type Pool = SmallVec<[Rational; 4]>;
type Derivations = SmallVec<[Derivation; 4]>;

/// Whether `numbers` can be combined into exactly `target`.
///
/// Every number must be used exactly once. An empty slice has no
/// solution; a single number is a solution only if it already equals
/// the target.
#[must_use]
pub fn has_solution(numbers: &[i64], target: i64) -> bool {
    let pool: Pool = numbers.iter().map(|&n| Rational::from(n)).collect();
    reaches(&pool, &Rational::from(target))
}

/// Every distinct rendering of a way to reach `target` from `numbers`.
///
/// Renderings that coincide (such as `2 + 2` found once per operand
/// order) collapse; the set is otherwise exhaustive and sorted.
#[must_use]
pub fn find_solutions(numbers: &[i64], target: i64) -> BTreeSet<String> {
    let pool: Pool = numbers.iter().map(|&n| Rational::from(n)).collect();
    let derivations: Derivations = numbers.iter().map(|&n| Derivation::Leaf(n)).collect();
    let mut out = BTreeSet::new();
    collect(&pool, &derivations, &Rational::from(target), &mut out);
    out
}

fn reaches(pool: &Pool, target: &Rational) -> bool {
    if pool.len() == 1 {
        return pool[0] == *target;
    }
    for i in 0..pool.len() {
        for j in 0..pool.len() {
            if i == j {
                continue;
            }
            for op in GameOp::ALL {
                let Some(combined) = op.apply(&pool[i], &pool[j]) else {
                    continue;
                };
                if reaches(&shrink(pool, i, j, combined), target) {
                    return true;
                }
            }
        }
    }
    false
}

fn collect(pool: &Pool, derivations: &Derivations, target: &Rational, out: &mut BTreeSet<String>) {
    if pool.len() == 1 {
        if pool[0] == *target {
            out.insert(derivations[0].to_string());
        }
        return;
    }
    for i in 0..pool.len() {
        for j in 0..pool.len() {
            if i == j {
                continue;
            }
            for op in GameOp::ALL {
                let Some(combined) = op.apply(&pool[i], &pool[j]) else {
                    continue;
                };
                let next = shrink(pool, i, j, combined);
                let next_derivations = shrink_derivations(derivations, i, j, op);
                collect(&next, &next_derivations, target, out);
            }
        }
    }
}

/// Pool with positions `i` and `j` removed and `combined` appended.
fn shrink(pool: &Pool, i: usize, j: usize, combined: Rational) -> Pool {
    let mut next = Pool::with_capacity(pool.len() - 1);
    for (k, value) in pool.iter().enumerate() {
        if k != i && k != j {
            next.push(value.clone());
        }
    }
    next.push(combined);
    next
}

fn shrink_derivations(derivations: &Derivations, i: usize, j: usize, op: GameOp) -> Derivations {
    let mut next = Derivations::with_capacity(derivations.len() - 1);
    for (k, derivation) in derivations.iter().enumerate() {
        if k != i && k != j {
            next.push(derivation.clone());
        }
    }
    next.push(Derivation::combine(
        op,
        derivations[i].clone(),
        derivations[j].clone(),
    ));
    next
}
