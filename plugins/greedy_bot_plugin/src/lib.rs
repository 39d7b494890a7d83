use orthokon_arena::{Board, Bot, Color, Move};
use std::time::Duration;

/// A greedy bot that tries to flip as many opposing pieces as possible
pub struct GreedyBotPlugin {
    name: String,
    color: Option<Color>,
}

impl Default for GreedyBotPlugin {
    fn default() -> Self {
        Self {
            name: "GreedyPlugin".to_string(),
            color: None,
        }
    }
}

impl GreedyBotPlugin {
    fn evaluate_move(&self, board: &Board, color: Color, mv: Move) -> i32 {
        let mut scratch = board.clone();
        let _ = scratch.try_move(mv);

        let own = scratch.piece_count(color) as i32;
        let theirs = scratch.piece_count(color.opponent()) as i32;

        if theirs == 0 {
            return 1000; // Flipping the last opposing piece wins
        }
        own - theirs
    }
}

impl Bot for GreedyBotPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board, color: Color, _time_limit: Duration) -> Option<Move> {
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return None;
        }

        // Find the move with the best evaluation
        moves
            .into_iter()
            .max_by_key(|&mv| self.evaluate_move(board, color, mv))
    }

    fn game_start(&mut self, color: Color) {
        self.color = Some(color);
    }
}

// Export the bot plugin using the macro
orthokon_arena::export_bot!(GreedyBotPlugin);
