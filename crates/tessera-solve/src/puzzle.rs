//! Hands of four digits and their generation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::search::{find_solutions, has_solution, DEFAULT_TARGET};

/// How many digits make up a hand.
pub const PUZZLE_SIZE: usize = 4;

/// Rejected puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The input did not contain exactly [`PUZZLE_SIZE`] numbers.
    #[error("a puzzle is exactly {} numbers", PUZZLE_SIZE)]
    WrongCount,
    /// A field was not a whole number.
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    /// A number fell outside the digit range.
    #[error("{0} is outside the digit range 0..=9")]
    OutOfRange(i64),
}

/// A 24-game hand: four digits, each between 0 and 9.
///
/// Digits keep the order they were given in; order never affects
/// solvability, only how the hand prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Puzzle {
    digits: [i64; PUZZLE_SIZE],
}

impl Puzzle {
    /// Builds a puzzle, checking the digit range.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::OutOfRange`] when a digit falls outside
    /// `0..=9`.
    pub fn new(digits: [i64; PUZZLE_SIZE]) -> Result<Self, PuzzleError> {
        for &digit in &digits {
            if !(0..=9).contains(&digit) {
                return Err(PuzzleError::OutOfRange(digit));
            }
        }
        Ok(Self { digits })
    }

    /// Draws digits until the hand is solvable.
    ///
    /// Roughly three in five random hands reach 24, so the loop ends
    /// after a couple of draws in practice.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let digits = std::array::from_fn(|_| rng.gen_range(0..=9));
            if has_solution(&digits, DEFAULT_TARGET) {
                return Self { digits };
            }
        }
    }

    /// The digits as given.
    #[must_use]
    pub fn digits(&self) -> [i64; PUZZLE_SIZE] {
        self.digits
    }

    /// Whether this hand reaches 24.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        has_solution(&self.digits, DEFAULT_TARGET)
    }

    /// Every distinct solution rendering for this hand.
    #[must_use]
    pub fn solutions(&self) -> BTreeSet<String> {
        find_solutions(&self.digits, DEFAULT_TARGET)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.digits[0], self.digits[1], self.digits[2], self.digits[3]
        )
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parses whitespace-separated digits, as [`Display`](fmt::Display)
    /// prints them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = [0_i64; PUZZLE_SIZE];
        let mut count = 0;
        for field in s.split_whitespace() {
            if count == PUZZLE_SIZE {
                return Err(PuzzleError::WrongCount);
            }
            digits[count] = field
                .parse()
                .map_err(|_| PuzzleError::NotANumber(field.to_owned()))?;
            count += 1;
        }
        if count != PUZZLE_SIZE {
            return Err(PuzzleError::WrongCount);
        }
        Self::new(digits)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_new_checks_range() {
        assert!(Puzzle::new([0, 3, 9, 5]).is_ok());
        assert_eq!(
            Puzzle::new([1, 2, 3, 12]),
            Err(PuzzleError::OutOfRange(12))
        );
        assert_eq!(
            Puzzle::new([-1, 2, 3, 4]),
            Err(PuzzleError::OutOfRange(-1))
        );
    }

    #[test]
    fn test_generate_is_solvable_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10 {
            let puzzle = Puzzle::generate(&mut rng);
            assert!(puzzle.has_solution());
            assert!(puzzle.digits().iter().all(|d| (0..=9).contains(d)));
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(Puzzle::generate(&mut a), Puzzle::generate(&mut b));
    }

    #[test]
    fn test_display_round_trips() {
        let puzzle = Puzzle::new([3, 1, 8, 8]).unwrap();
        assert_eq!(puzzle.to_string(), "3 1 8 8");
        assert_eq!(puzzle.to_string().parse::<Puzzle>(), Ok(puzzle));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let puzzle: Puzzle = "  3 \t 1  8 8 ".parse().unwrap();
        assert_eq!(puzzle.digits(), [3, 1, 8, 8]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("1 2 3".parse::<Puzzle>(), Err(PuzzleError::WrongCount));
        assert_eq!("1 2 3 4 5".parse::<Puzzle>(), Err(PuzzleError::WrongCount));
        assert_eq!("".parse::<Puzzle>(), Err(PuzzleError::WrongCount));
        assert_eq!(
            "1 2 x 4".parse::<Puzzle>(),
            Err(PuzzleError::NotANumber("x".to_owned()))
        );
        assert_eq!(
            "1 2 3 12".parse::<Puzzle>(),
            Err(PuzzleError::OutOfRange(12))
        );
    }

    #[test]
    fn test_solutions_match_reachability() {
        let solvable = Puzzle::new([4, 4, 4, 4]).unwrap();
        assert!(!solvable.solutions().is_empty());
        let stuck = Puzzle::new([1, 1, 1, 1]).unwrap();
        assert!(stuck.solutions().is_empty());
        assert!(!stuck.has_solution());
    }
}
