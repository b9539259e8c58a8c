//! Scoring math over Sleeper roster and matchup data.

use crate::sleeper::types::Matchup;

/// Recombine Sleeper's split fantasy-point representation into one value.
///
/// The API sends `fpts: 1617, fpts_decimal: 78` for 1617.78 points. The
/// decimal part scales by its own digit count, so `5` means `.5` and `05`
/// never occurs (Sleeper drops leading zeros into a smaller number, which is
/// the precision the site itself displays).
pub fn exact_points(whole: i64, decimal: i64) -> f64 {
    let decimal = decimal.unsigned_abs();
    if decimal == 0 {
        return whole as f64;
    }
    let digits = decimal.ilog10() + 1;
    let frac = decimal as f64 / 10f64.powi(digits as i32);
    if whole < 0 {
        whole as f64 - frac
    } else {
        whole as f64 + frac
    }
}

/// The matchup entry with the most effective points for the week, or `None`
/// for an empty slate. Ties keep the earliest entry.
pub fn highest_scorer(matchups: &[Matchup]) -> Option<&Matchup> {
    matchups.iter().reduce(|best, candidate| {
        if candidate.effective_points() > best.effective_points() {
            candidate
        } else {
            best
        }
    })
}

/// The top `depth` matchup entries by effective points, highest first.
/// Builds a fresh sorted sequence; the input slice is untouched.
pub fn top_scorers<'a>(matchups: &'a [Matchup], depth: usize) -> Vec<&'a Matchup> {
    let mut ranked: Vec<&Matchup> = matchups.iter().collect();
    ranked.sort_by(|a, b| {
        b.effective_points()
            .partial_cmp(&a.effective_points())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(depth);
    ranked
}
