//! Roster reconciliation: which trending players are actually available in a
//! user's leagues, and which of those could fill a roster slot.
//!
//! The pipeline is four pure stages over data fetched elsewhere:
//!
//! 1. aggregate every rostered player id in a league into one membership set
//! 2. drop trending candidates that appear in that set
//! 3. resolve survivors against the player directory and keep only positions
//!    the league's slot configuration can start
//! 4. assemble the per-league report
//!
//! Every stage builds a new sequence instead of mutating its input, so a
//! candidate list can be reconciled against many leagues in parallel.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::cli::types::PlayerId;
use crate::sleeper::types::{League, PlayerDirectory, PlayerRecord, Roster};

#[cfg(test)]
mod tests;

/// A league together with its fetched rosters, ready for reconciliation.
#[derive(Debug, Clone)]
pub struct LeagueContext {
    pub league: League,
    pub rosters: Vec<Roster>,
}

/// Trending availability across all of a user's leagues, keyed by league name
/// and presented under the user's display name.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityReport {
    pub user: String,
    pub leagues: BTreeMap<String, Vec<PlayerRecord>>,
}

/// Union of every rostered player id across all rosters in a league.
///
/// A player id held by two rosters (which the API should never produce)
/// collapses to one membership entry. Rosters with null or missing `players`
/// contribute nothing.
pub fn aggregate_rosters(rosters: &[Roster]) -> HashSet<PlayerId> {
    rosters
        .iter()
        .flat_map(|roster| roster.player_ids().iter().cloned())
        .collect()
}

/// Candidates not present in the league's membership set, in their original
/// order. Pure: callers can reuse `candidates` against another league.
pub fn filter_available(
    candidates: &[PlayerId],
    rostered: &HashSet<PlayerId>,
) -> Vec<PlayerId> {
    candidates
        .iter()
        .filter(|id| !rostered.contains(*id))
        .cloned()
        .collect()
}

/// Normalized slot codes a league can start.
///
/// Slot strings are normalized the same way player positions are, so "def"
/// and "DEF" configure the same slot. Matching stays literal: FLEX and
/// SUPER_FLEX pass through as their own codes and never admit RB/WR/TE.
fn slot_codes(roster_positions: &[String]) -> HashSet<String> {
    roster_positions
        .iter()
        .map(|slot| slot.trim().to_uppercase().replace(' ', "_"))
        .collect()
}

/// Keep candidates whose position matches a configured slot code literally.
///
/// Unknown positions never match, so a player the directory cannot place is
/// excluded rather than waved through.
pub fn filter_eligible(
    candidates: Vec<PlayerRecord>,
    roster_positions: &[String],
) -> Vec<PlayerRecord> {
    let slots = slot_codes(roster_positions);
    candidates
        .into_iter()
        .filter(|record| record.position.is_known() && slots.contains(record.position.slot_code()))
        .collect()
}

/// Run the full pipeline for one league.
///
/// Candidates the directory has no entry for are skipped, keeping the result
/// partial rather than failing the league.
pub fn reconcile_league(
    context: &LeagueContext,
    candidates: &[PlayerId],
    directory: &PlayerDirectory,
) -> Vec<PlayerRecord> {
    let rostered = aggregate_rosters(&context.rosters);
    let available = filter_available(candidates, &rostered);
    let resolved: Vec<PlayerRecord> = available
        .iter()
        .filter_map(|id| PlayerRecord::from_directory(id, directory))
        .collect();
    filter_eligible(resolved, &context.league.roster_positions)
}

/// Reconcile the candidate list against every league in parallel.
///
/// Leagues share the candidate slice and directory read-only, so the
/// per-league work fans out without locking and joins into one report.
pub fn reconcile_leagues(
    user: &str,
    contexts: &[LeagueContext],
    candidates: &[PlayerId],
    directory: &PlayerDirectory,
) -> AvailabilityReport {
    let leagues: BTreeMap<String, Vec<PlayerRecord>> = contexts
        .par_iter()
        .map(|context| {
            (
                context.league.name.clone(),
                reconcile_league(context, candidates, directory),
            )
        })
        .collect();

    AvailabilityReport {
        user: user.to_string(),
        leagues,
    }
}
