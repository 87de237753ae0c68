//! Pairwise win-probability table for the dice pool.
//!
//! Informational only: the computer still picks its dice at random.

use std::fmt::Write;

use fairdice_core::Dice;

/// Probability that `a` beats `b`, by exhaustive face comparison.
pub fn win_probability(a: &Dice, b: &Dice) -> f64 {
    let mut wins = 0u64;
    let mut total = 0u64;
    for &x in a.values() {
        for &y in b.values() {
            if x > y {
                wins += 1;
            }
            total += 1;
        }
    }
    wins as f64 / total as f64
}

/// Render the win probability of each row dice against each column dice.
pub fn render_table(dice: &[Dice]) -> String {
    let labels: Vec<String> = dice.iter().map(|d| format!("[{}]", d)).collect();
    let width = labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max("row \\ column".len());

    let mut out = String::new();
    writeln!(
        out,
        "Win probability of the row dice against the column dice:"
    )
    .unwrap();

    write!(out, "{:width$}", "row \\ column").unwrap();
    for label in &labels {
        write!(out, "  {:>width$}", label).unwrap();
    }
    out.push('\n');

    for (row, a) in dice.iter().enumerate() {
        write!(out, "{:width$}", labels[row]).unwrap();
        for (column, b) in dice.iter().enumerate() {
            if row == column {
                write!(out, "  {:>width$}", "-").unwrap();
            } else {
                write!(out, "  {:>width$.4}", win_probability(a, b)).unwrap();
            }
        }
        out.push('\n');
    }
    out
}
