use crate::bot::Bot;
use crate::game::{Board, Cell, Color, GameState, Move};
use std::time::{Duration, Instant};

pub struct MatchConfig {
    pub time_per_move: Duration,
    pub max_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            time_per_move: Duration::from_secs(5),
            max_moves: 200,
        }
    }
}

pub enum MatchResult {
    RedWins { winner_name: String, moves: usize },
    YellowWins { winner_name: String, moves: usize },
    Draw { moves: usize },
    Timeout { violator: String, winner: String },
    IllegalMove { violator: String, winner: String },
}

impl MatchResult {
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchResult::RedWins { winner_name, .. } => Some(winner_name),
            MatchResult::YellowWins { winner_name, .. } => Some(winner_name),
            MatchResult::Timeout { winner, .. } => Some(winner),
            MatchResult::IllegalMove { winner, .. } => Some(winner),
            MatchResult::Draw { .. } => None,
        }
    }
}

/// Runs one game between two bots.
///
/// The board engine accepts moves for either color at any time and keeps
/// accepting them after the game has ended, so the match is the layer that
/// enforces turn order (red moves first), checks that each bot moves its
/// own pieces, and stops play on a terminal state.
pub struct Match {
    config: MatchConfig,
    board: Board,
    red_bot: Box<dyn Bot>,
    yellow_bot: Box<dyn Bot>,
    to_move: Color,
    moves_played: usize,
    verbose: bool,
}

impl Match {
    pub fn new(
        red_bot: Box<dyn Bot>,
        yellow_bot: Box<dyn Bot>,
        config: MatchConfig,
        verbose: bool,
    ) -> Self {
        Match {
            config,
            board: Board::new(),
            red_bot,
            yellow_bot,
            to_move: Color::Red,
            moves_played: 0,
            verbose,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn play(&mut self) -> MatchResult {
        self.red_bot.game_start(Color::Red);
        self.yellow_bot.game_start(Color::Yellow);

        if self.verbose {
            println!("Match starting:");
            println!("  Red:    {}", self.red_bot.name());
            println!("  Yellow: {}", self.yellow_bot.name());
            println!("\nInitial board:");
            println!("{}", self.board.display_board());
        }

        while !self.board.is_game_over() && self.moves_played < self.config.max_moves {
            if let Some(result) = self.play_move(self.to_move) {
                return result;
            }
            self.to_move = self.to_move.opponent();
        }

        self.red_bot.game_end();
        self.yellow_bot.game_end();

        let moves = self.moves_played;
        match self.board.get_state() {
            GameState::RedWins => {
                if self.verbose {
                    println!("\n{} wins as Red!", self.red_bot.name());
                }
                MatchResult::RedWins {
                    winner_name: self.red_bot.name().to_string(),
                    moves,
                }
            }
            GameState::YellowWins => {
                if self.verbose {
                    println!("\n{} wins as Yellow!", self.yellow_bot.name());
                }
                MatchResult::YellowWins {
                    winner_name: self.yellow_bot.name().to_string(),
                    moves,
                }
            }
            GameState::Draw => {
                if self.verbose {
                    println!("\nGame is a draw!");
                }
                MatchResult::Draw { moves }
            }
            GameState::InProgress => {
                // Max moves reached
                if self.verbose {
                    println!("\nMax moves ({}) reached - Draw!", self.config.max_moves);
                }
                MatchResult::Draw { moves }
            }
        }
    }

    fn play_move(&mut self, color: Color) -> Option<MatchResult> {
        let bot = match color {
            Color::Red => &mut self.red_bot,
            Color::Yellow => &mut self.yellow_bot,
        };

        if self.verbose {
            println!(
                "\nMove {}: {} ({}) to play",
                self.moves_played + 1,
                bot.name(),
                color
            );
        }

        let start = Instant::now();
        let mv = bot.get_move(&self.board, color, self.config.time_per_move);
        let elapsed = start.elapsed();

        self.handle_move_result(mv, elapsed, color)
    }

    fn handle_move_result(
        &mut self,
        mv: Option<Move>,
        elapsed: Duration,
        color: Color,
    ) -> Option<MatchResult> {
        let (bot_name, opponent_name) = match color {
            Color::Red => (self.red_bot.name(), self.yellow_bot.name()),
            Color::Yellow => (self.yellow_bot.name(), self.red_bot.name()),
        };

        if elapsed > self.config.time_per_move {
            let violator = bot_name.to_string();
            let winner = opponent_name.to_string();

            if self.verbose {
                println!(
                    "TIMEOUT: {} took {:?} (limit: {:?})",
                    violator, elapsed, self.config.time_per_move
                );
            }

            return Some(MatchResult::Timeout { violator, winner });
        }

        let mv = match mv {
            Some(m) => m,
            None => {
                // No legal moves or bot gave up
                if self.verbose {
                    println!("{} returned no move", bot_name);
                }
                return Some(MatchResult::Draw {
                    moves: self.moves_played,
                });
            }
        };

        if self.verbose {
            println!("{} plays: {} (took {:?})", bot_name, mv, elapsed);
        }

        // The engine does not know whose turn it is, so moving the
        // opponent's piece must be caught here.
        let moves_own_piece = self.board.get_cell(mv.from) == Some(Cell::from(color));
        if !moves_own_piece || self.board.try_move(mv).is_err() {
            let violator = bot_name.to_string();
            let winner = opponent_name.to_string();

            if self.verbose {
                println!("ILLEGAL MOVE: {} - {}", violator, mv);
            }

            return Some(MatchResult::IllegalMove { violator, winner });
        }

        self.moves_played += 1;
        self.red_bot.notify_move(mv);
        self.yellow_bot.notify_move(mv);

        if self.verbose {
            println!("{}", self.board.display_board());
        }

        None
    }
}
