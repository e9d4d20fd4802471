//! Property-based tests for the solver and answer checker.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::answer::{check_answer, Verdict};
    use crate::puzzle::Puzzle;
    use crate::search::{find_solutions, has_solution, DEFAULT_TARGET};

    fn digit() -> impl Strategy<Value = i64> {
        0_i64..=9
    }

    proptest! {
        // Full searches over four numbers are cheap but not free; keep
        // the case count where a debug run stays in seconds.
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn reachability_agrees_with_enumeration(
            a in digit(), b in digit(), c in digit(), d in digit()
        ) {
            let hand = [a, b, c, d];
            let solvable = has_solution(&hand, DEFAULT_TARGET);
            let solutions = find_solutions(&hand, DEFAULT_TARGET);
            prop_assert_eq!(solvable, !solutions.is_empty());
        }

        #[test]
        fn every_found_solution_scores_correct(
            a in digit(), b in digit(), c in digit(), d in digit()
        ) {
            let puzzle = Puzzle::new([a, b, c, d]).unwrap();
            for solution in puzzle.solutions().iter().take(8) {
                prop_assert_eq!(
                    check_answer(solution, &puzzle),
                    Verdict::Correct,
                    "rejected {}",
                    solution
                );
            }
        }

        #[test]
        fn generated_puzzles_are_always_solvable(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let puzzle = Puzzle::generate(&mut rng);
            prop_assert!(puzzle.has_solution());
            prop_assert!(puzzle.digits().iter().all(|d| (0..=9).contains(d)));
        }

        #[test]
        fn search_ignores_digit_order(
            a in digit(), b in digit(), c in digit(), d in digit()
        ) {
            let forward = has_solution(&[a, b, c, d], DEFAULT_TARGET);
            let backward = has_solution(&[d, c, b, a], DEFAULT_TARGET);
            prop_assert_eq!(forward, backward);
        }
    }
}
