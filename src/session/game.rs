//! Guess evaluation and power-up resolution for one play-through

use crate::core::{CellRole, Grid, PowerUpId, WordEntry, WordId};
use crate::generator::Puzzle;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Chance that a power-up removes a dud rather than resetting attempts
pub const DUD_REMOVAL_CHANCE: f64 = 2.0 / 3.0;

/// Where a session stands; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Feedback for a wrong guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: String,
    pub likeness: usize,
    pub attempts_remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was the password; the session is won
    Accepted { password: String },
    /// Wrong guess; the session is lost if no attempts remain
    Denied(GuessReport),
    /// Session already over, or the word is no longer on the grid
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerUpEffect {
    DudRemoved(WordEntry),
    AttemptsReset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerUpOutcome {
    Applied {
        /// Text of the consumed group, brackets included
        group: String,
        effect: PowerUpEffect,
    },
    /// Already consumed, unknown, or the session is over
    Ignored,
}

/// Result of activating whatever sits under a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Guess(GuessOutcome),
    PowerUp(PowerUpOutcome),
    /// Garble or out of range
    Nothing,
}

/// One play-through from generation to `Won` or `Lost`
///
/// Owns the grid; the only mutations are dud removal and power-up consumption.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    placed_words: Vec<WordEntry>,
    password: WordEntry,
    status: SessionStatus,
    attempts_remaining: usize,
    max_attempts: usize,
}

impl GameSession {
    /// Start a session on a generated puzzle
    ///
    /// `max_attempts` below one is raised to one.
    #[must_use]
    pub fn new(puzzle: Puzzle, max_attempts: usize) -> Self {
        let max_attempts = max_attempts.max(1);
        Self {
            grid: puzzle.grid,
            placed_words: puzzle.placed_words,
            password: puzzle.password,
            status: SessionStatus::InProgress,
            attempts_remaining: max_attempts,
            max_attempts,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn password(&self) -> &WordEntry {
        &self.password
    }

    #[must_use]
    pub fn placed_words(&self) -> &[WordEntry] {
        &self.placed_words
    }

    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&WordEntry> {
        self.placed_words.get(id.0).filter(|w| w.id == id)
    }

    /// Placed words that can still be guessed
    #[must_use]
    pub fn remaining_words(&self) -> Vec<&WordEntry> {
        self.placed_words
            .iter()
            .filter(|w| self.grid.contains_word(w.id))
            .collect()
    }

    /// Guess the word with `id`
    pub fn submit_guess(&mut self, id: WordId) -> GuessOutcome {
        if self.status.is_over() || !self.grid.contains_word(id) {
            return GuessOutcome::Ignored;
        }
        let Some(guess) = self.word(id).cloned() else {
            return GuessOutcome::Ignored;
        };

        if guess.id == self.password.id {
            self.status = SessionStatus::Won;
            tracing::info!(password = %self.password, "password accepted");
            return GuessOutcome::Accepted {
                password: guess.text,
            };
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        let likeness = guess.likeness(&self.password);
        tracing::debug!(
            guess = %guess,
            likeness,
            attempts_remaining = self.attempts_remaining,
            "entry denied"
        );

        if self.attempts_remaining == 0 {
            self.status = SessionStatus::Lost;
            tracing::info!("attempts exhausted, terminal locked");
        }

        GuessOutcome::Denied(GuessReport {
            guess: guess.text,
            likeness,
            attempts_remaining: self.attempts_remaining,
        })
    }

    /// Trigger a power-up group
    ///
    /// Removes a random dud with probability 2/3, or always when attempts are
    /// full; otherwise resets attempts. With no dud left to remove, attempts
    /// are reset instead.
    pub fn activate_power_up<R: Rng + ?Sized>(
        &mut self,
        id: PowerUpId,
        rng: &mut R,
    ) -> PowerUpOutcome {
        if self.status.is_over() {
            return PowerUpOutcome::Ignored;
        }
        if self.grid.power_up(id).is_none_or(|g| g.consumed) {
            return PowerUpOutcome::Ignored;
        }

        let remove_dud =
            self.attempts_remaining == self.max_attempts || rng.random_bool(DUD_REMOVAL_CHANCE);

        let dud = if remove_dud {
            let duds: Vec<WordId> = self
                .grid
                .word_ids()
                .into_iter()
                .filter(|&w| w != self.password.id)
                .collect();
            duds.choose(rng).copied()
        } else {
            None
        };

        let effect = match dud.and_then(|dud_id| self.word(dud_id).cloned()) {
            Some(entry) => {
                self.grid.remove_word(entry.id);
                PowerUpEffect::DudRemoved(entry)
            }
            None => {
                self.attempts_remaining = self.max_attempts;
                PowerUpEffect::AttemptsReset
            }
        };

        let Some(group) = self.grid.consume_power_up(id) else {
            return PowerUpOutcome::Ignored;
        };
        tracing::debug!(%id, ?effect, "power-up consumed");

        PowerUpOutcome::Applied { group, effect }
    }

    /// Activate the cell at `index`: guess a word or trigger a power-up
    pub fn activate_cell<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Activation {
        match self.grid.cell(index).map(|c| c.role) {
            Some(CellRole::Word(id)) => Activation::Guess(self.submit_guess(id)),
            Some(CellRole::PowerUp(id)) => {
                Activation::PowerUp(self.activate_power_up(id, rng))
            }
            Some(CellRole::Garble) | None => Activation::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BracketStyle, GroupRef};
    use crate::generator::GridBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// All five example words with two power-ups; password is ALPHA
    fn example_session() -> GameSession {
        let mut builder = GridBuilder::new();
        for word in ["ALPHA", "BRAVO", "CHARL", "DELTA", "EPSIL"] {
            builder.push_garble("#$%".chars());
            builder.push_word(word);
        }
        builder.push_garble("?".chars());
        builder.push_power_up(BracketStyle::Square, "!!");
        builder.push_garble(";".chars());
        builder.push_power_up(BracketStyle::Angle, "*");
        builder.push_garble("..".chars());

        let (grid, placed_words) = builder.finish(12);
        let password = placed_words[0].clone();
        GameSession::new(
            Puzzle {
                grid,
                placed_words,
                password,
            },
            4,
        )
    }

    /// Session whose only guessable words are ALPHA and the near miss ALPHX
    fn near_miss_session() -> GameSession {
        let mut builder = GridBuilder::new();
        builder.push_garble("@@".chars());
        builder.push_word("ALPHA");
        builder.push_garble("@@".chars());
        builder.push_word("ALPHX");
        builder.push_garble("@@".chars());
        let (grid, placed_words) = builder.finish(12);
        let password = placed_words[0].clone();
        GameSession::new(
            Puzzle {
                grid,
                placed_words,
                password,
            },
            4,
        )
    }

    #[test]
    fn starts_in_progress_with_full_attempts() {
        let session = example_session();
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_remaining(), 4);
        assert_eq!(session.max_attempts(), 4);
        assert_eq!(session.remaining_words().len(), 5);
    }

    #[test]
    fn near_miss_reports_likeness_and_costs_an_attempt() {
        let mut session = near_miss_session();
        let outcome = session.submit_guess(WordId(1));

        assert_eq!(
            outcome,
            GuessOutcome::Denied(GuessReport {
                guess: "ALPHX".to_string(),
                likeness: 4,
                attempts_remaining: 3,
            })
        );
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn correct_guess_wins() {
        let mut session = example_session();
        assert_eq!(
            session.submit_guess(WordId(0)),
            GuessOutcome::Accepted {
                password: "ALPHA".to_string()
            }
        );
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempts_remaining(), 4);
    }

    #[test]
    fn four_wrong_guesses_lock_the_terminal() {
        let mut session = example_session();
        let mut seen = Vec::new();
        for id in [1, 2, 3, 4] {
            assert_eq!(session.status(), SessionStatus::InProgress);
            session.submit_guess(WordId(id));
            seen.push(session.attempts_remaining());
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);
        assert_eq!(session.status(), SessionStatus::Lost);
    }

    #[test]
    fn repeated_wrong_guess_still_costs_attempts() {
        let mut session = example_session();
        for _ in 0..4 {
            session.submit_guess(WordId(3));
        }
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn terminal_states_ignore_further_actions() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = example_session();
        session.submit_guess(WordId(0));

        assert_eq!(session.submit_guess(WordId(1)), GuessOutcome::Ignored);
        assert_eq!(
            session.activate_power_up(PowerUpId(0), &mut rng),
            PowerUpOutcome::Ignored
        );
        assert_eq!(session.status(), SessionStatus::Won);

        let mut lost = example_session();
        for id in [1, 2, 3, 4] {
            lost.submit_guess(WordId(id));
        }
        assert_eq!(lost.submit_guess(WordId(0)), GuessOutcome::Ignored);
        assert_eq!(lost.status(), SessionStatus::Lost);
        assert_eq!(lost.attempts_remaining(), 0);
    }

    #[test]
    fn likeness_of_every_dud_matches_positions() {
        let mut session = example_session();
        // ALPHA vs DELTA share only the final A
        match session.submit_guess(WordId(3)) {
            GuessOutcome::Denied(report) => assert_eq!(report.likeness, 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn power_up_at_full_attempts_always_removes_a_dud() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = example_session();
            match session.activate_power_up(PowerUpId(0), &mut rng) {
                PowerUpOutcome::Applied {
                    group,
                    effect: PowerUpEffect::DudRemoved(dud),
                } => {
                    assert_eq!(group, "[!!]");
                    assert_ne!(dud.id, session.password().id);
                    assert!(!session.grid().contains_word(dud.id));
                }
                other => panic!("seed {seed}: unexpected {other:?}"),
            }
            assert_eq!(session.remaining_words().len(), 4);
        }
    }

    #[test]
    fn dud_removal_never_removes_the_password() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = example_session();
            session.activate_power_up(PowerUpId(0), &mut rng);
            session.activate_power_up(PowerUpId(1), &mut rng);
            assert!(session.grid().contains_word(session.password().id));
        }
    }

    #[test]
    fn removed_dud_cells_become_inert_dots() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = example_session();
        let PowerUpOutcome::Applied {
            effect: PowerUpEffect::DudRemoved(dud),
            ..
        } = session.activate_power_up(PowerUpId(0), &mut rng)
        else {
            panic!("expected dud removal at full attempts");
        };

        let grid = session.grid();
        assert!(grid.group_cells(GroupRef::Word(dud.id)).is_empty());
        let dots = grid.cells().iter().filter(|c| c.glyph == '.').count();
        // Two trailing dots from the layout plus the removed word
        assert_eq!(dots, 2 + 5);
        assert_eq!(session.submit_guess(dud.id), GuessOutcome::Ignored);
    }

    #[test]
    fn power_up_below_full_attempts_can_reset() {
        let mut resets = 0;
        let mut removals = 0;
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = example_session();
            session.submit_guess(WordId(1));
            session.submit_guess(WordId(2));
            match session.activate_power_up(PowerUpId(0), &mut rng) {
                PowerUpOutcome::Applied {
                    effect: PowerUpEffect::AttemptsReset,
                    ..
                } => {
                    resets += 1;
                    assert_eq!(session.attempts_remaining(), 4);
                }
                PowerUpOutcome::Applied {
                    effect: PowerUpEffect::DudRemoved(_),
                    ..
                } => {
                    removals += 1;
                    assert_eq!(session.attempts_remaining(), 2);
                }
                PowerUpOutcome::Ignored => panic!("power-up ignored"),
            }
        }
        // Expect roughly one reset per three activations
        assert!((60..140).contains(&resets), "resets {resets}");
        assert_eq!(resets + removals, 300);
    }

    #[test]
    fn power_up_is_one_shot() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = example_session();
        assert!(matches!(
            session.activate_power_up(PowerUpId(1), &mut rng),
            PowerUpOutcome::Applied { .. }
        ));
        assert_eq!(
            session.activate_power_up(PowerUpId(1), &mut rng),
            PowerUpOutcome::Ignored
        );
        assert!(session.grid().power_up(PowerUpId(1)).unwrap().consumed);
        assert_eq!(session.grid().active_power_ups().len(), 1);
    }

    #[test]
    fn no_duds_left_falls_back_to_reset() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut builder = GridBuilder::new();
        builder.push_word("ALPHA");
        builder.push_garble("#".chars());
        builder.push_power_up(BracketStyle::Round, "%");
        builder.push_garble("#".chars());
        let (grid, placed_words) = builder.finish(12);
        let password = placed_words[0].clone();
        let mut session = GameSession::new(
            Puzzle {
                grid,
                placed_words,
                password,
            },
            4,
        );

        match session.activate_power_up(PowerUpId(0), &mut rng) {
            PowerUpOutcome::Applied { effect, .. } => {
                assert_eq!(effect, PowerUpEffect::AttemptsReset);
            }
            PowerUpOutcome::Ignored => panic!("power-up ignored"),
        }
        assert!(session.grid().contains_word(WordId(0)));
    }

    #[test]
    fn attempts_never_exceed_maximum() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = example_session();
            session.submit_guess(WordId(4));
            session.activate_power_up(PowerUpId(0), &mut rng);
            session.activate_power_up(PowerUpId(1), &mut rng);
            assert!(session.attempts_remaining() <= session.max_attempts());
        }
    }

    #[test]
    fn activate_cell_dispatches_on_role() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = example_session();

        // Index 0 is garble
        assert_eq!(session.activate_cell(0, &mut rng), Activation::Nothing);
        assert_eq!(session.activate_cell(10_000, &mut rng), Activation::Nothing);

        // Index 3 is the first letter of ALPHA
        assert!(matches!(
            session.activate_cell(3, &mut rng),
            Activation::Guess(GuessOutcome::Accepted { .. })
        ));
    }

    #[test]
    fn unknown_power_up_is_ignored() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = example_session();
        assert_eq!(
            session.activate_power_up(PowerUpId(42), &mut rng),
            PowerUpOutcome::Ignored
        );
        assert_eq!(session.attempts_remaining(), 4);
    }
}
