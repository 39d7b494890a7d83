use crate::game::{Board, Color, Move};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::SmallRng};
use std::time::Duration;

/// Trait that all bots must implement
pub trait Bot: Send {
    /// Get the name of the bot
    fn name(&self) -> &str;

    /// Get the next move for `color` on the current board.
    /// The bot has a time limit to respond.
    fn get_move(&mut self, board: &Board, color: Color, time_limit: Duration) -> Option<Move>;

    /// Notified when the game starts
    fn game_start(&mut self, _color: Color) {}

    /// Notified when a move is made (by either player)
    fn notify_move(&mut self, _mv: Move) {}

    /// Notified when the game ends
    fn game_end(&mut self) {}
}

/// A bot that picks a uniformly random legal move
pub struct RandomBot {
    name: String,
    rng: SmallRng,
}

impl RandomBot {
    pub fn new(name: String) -> Self {
        RandomBot {
            name,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible matches
    pub fn with_seed(name: String, seed: u64) -> Self {
        RandomBot {
            name,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board, color: Color, _time_limit: Duration) -> Option<Move> {
        board.legal_moves(color).choose(&mut self.rng).copied()
    }
}

/// A bot that plays the move leaving it the best piece differential.
/// One ply only: it tries each legal move and keeps the best outcome.
pub struct GreedyBot {
    name: String,
}

impl GreedyBot {
    pub fn new(name: String) -> Self {
        GreedyBot { name }
    }

    fn evaluate_move(&self, board: &Board, color: Color, mv: Move) -> i32 {
        let mut scratch = board.clone();
        let _ = scratch.try_move(mv);

        let own = scratch.piece_count(color) as i32;
        let theirs = scratch.piece_count(color.opponent()) as i32;

        // A move that flips the last opposing piece ends the game
        if theirs == 0 {
            return 1000;
        }
        own - theirs
    }
}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board, color: Color, _time_limit: Duration) -> Option<Move> {
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return None;
        }

        moves
            .into_iter()
            .max_by_key(|&mv| self.evaluate_move(board, color, mv))
    }
}
