//! Automatic play of a whole session
//!
//! Spends every power-up first, then guesses with the solver until the
//! terminal unlocks or locks.

use super::engine::{Clue, Solver};
use super::strategy::Strategy;
use crate::core::WordEntry;
use crate::session::{GameSession, GuessOutcome, PowerUpEffect, PowerUpOutcome, SessionStatus};
use rand::RngCore;

/// How an automatic session went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    /// Guesses submitted, the accepted one included
    pub guesses: usize,
    pub duds_removed: usize,
    pub resets: usize,
    pub history: Vec<Clue>,
}

/// Play `session` to completion with `strategy`
pub fn play_session<S: Strategy + Copy>(
    session: &mut GameSession,
    strategy: S,
    rng: &mut dyn RngCore,
) -> GameRecord {
    let mut record = GameRecord {
        won: false,
        guesses: 0,
        duds_removed: 0,
        resets: 0,
        history: Vec::new(),
    };

    while !session.status().is_over() {
        if let Some(id) = session.grid().active_power_ups().first().map(|g| g.id) {
            match session.activate_power_up(id, rng) {
                PowerUpOutcome::Applied {
                    effect: PowerUpEffect::DudRemoved(_),
                    ..
                } => record.duds_removed += 1,
                PowerUpOutcome::Applied {
                    effect: PowerUpEffect::AttemptsReset,
                    ..
                } => record.resets += 1,
                PowerUpOutcome::Ignored => break,
            }
            continue;
        }

        let words: Vec<WordEntry> = session.remaining_words().into_iter().cloned().collect();
        let Some(guess) = Solver::new(strategy, &words)
            .next_guess(&record.history, rng)
            .cloned()
        else {
            break;
        };

        record.guesses += 1;
        match session.submit_guess(guess.id) {
            GuessOutcome::Accepted { .. } => {}
            GuessOutcome::Denied(report) => record.history.push(Clue::new(guess, report.likeness)),
            GuessOutcome::Ignored => break,
        }
    }

    record.won = session.status() == SessionStatus::Won;
    tracing::debug!(
        won = record.won,
        guesses = record.guesses,
        duds = record.duds_removed,
        "session finished"
    );
    record
}
