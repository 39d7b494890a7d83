/// Example of how to create your own bot
use orthokon_arena::*;
use std::time::Duration;

/// A custom bot that prefers moves landing closer to the center, where a
/// piece threatens the most flips.
pub struct CenterBot {
    name: String,
}

impl CenterBot {
    pub fn new(name: String) -> Self {
        CenterBot { name }
    }

    fn distance_to_center(&self, pos: Position) -> f64 {
        let center = (BOARD_SIZE as f64 - 1.0) / 2.0;
        let dr = pos.row as f64 - center;
        let dc = pos.col as f64 - center;
        (dr * dr + dc * dc).sqrt()
    }

    fn evaluate_move(&self, mv: Move) -> f64 {
        -self.distance_to_center(mv.to)
    }
}

impl Bot for CenterBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board, color: Color, _time_limit: Duration) -> Option<Move> {
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return None;
        }

        // Find best move according to our heuristic
        moves.into_iter().max_by(|a, b| {
            let score_a = self.evaluate_move(*a);
            let score_b = self.evaluate_move(*b);
            score_a.partial_cmp(&score_b).unwrap()
        })
    }

    fn game_start(&mut self, color: Color) {
        println!("{} starting as {}", self.name, color);
    }
}

fn main() {
    println!("Custom Bot Example\n");

    let bot1 = Box::new(CenterBot::new("CenterBot".to_string()));
    let bot2 = Box::new(GreedyBot::new("GreedyBot".to_string()));

    let config = MatchConfig {
        time_per_move: Duration::from_secs(1),
        max_moves: 150,
    };

    let mut match_game = Match::new(bot1, bot2, config, true);
    let result = match_game.play();

    println!("\nMatch completed!");
    if let Some(winner) = result.winner() {
        println!("Winner: {}", winner);
    } else {
        println!("Draw!");
    }
}
