//! A scripted round of the 24 game.
//!
//! Draws a solvable hand from a fixed seed, scores a few answers the
//! way a game host would, then plays a book solution.
//!
//! Run with: cargo run --example play

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tessera_solve::{check_answer, Puzzle, Verdict};

fn score(answer: &str, puzzle: &Puzzle) {
    match check_answer(answer, puzzle) {
        Verdict::Correct => println!("  {answer:<24} correct!"),
        Verdict::Incorrect(value) => println!("  {answer:<24} = {value}, not 24"),
        Verdict::Invalid(reason) => println!("  {answer:<24} rejected: {reason}"),
    }
}

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let puzzle = Puzzle::generate(&mut rng);
    let solutions = puzzle.solutions();

    println!("your hand: {puzzle}");
    println!("({} distinct solutions exist)\n", solutions.len());

    score("1 + 2 + 3", &puzzle);
    score("24", &puzzle);
    score("4 ** 2 + 8", &puzzle);
    score("not even arithmetic", &puzzle);

    if let Some(solution) = solutions.iter().next() {
        score(solution, &puzzle);
    }
}
