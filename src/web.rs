use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::services::ServeDir;

use crate::bot::{Bot, GreedyBot, RandomBot};
use crate::game::{BOARD_SIZE, Board, Cell, Color, GameState, Move, Position};

#[derive(Clone, Copy, Debug)]
enum BotType {
    Greedy,
    Random,
}

#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<WebGame>>,
}

/// The engine does not track turns, so the web layer keeps `to_move`
/// itself and alternates it after each accepted move.
#[derive(Clone)]
struct WebGame {
    board: Board,
    human_color: Color,
    bot_type: BotType,
    to_move: Color,
}

#[derive(Serialize, Deserialize)]
pub struct NewGameRequest {
    human_color: String,
    bot_type: String,
}

#[derive(Serialize)]
pub struct GameResponse {
    board: Vec<Vec<String>>,
    to_move: String,
    legal_moves: Vec<MoveResponse>,
    game_over: bool,
    winner: Option<String>,
    message: String,
}

#[derive(Serialize, Deserialize)]
pub struct MoveRequest {
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
}

#[derive(Serialize, Clone)]
pub struct MoveResponse {
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
}

impl AppState {
    pub fn new() -> Self {
        let game = WebGame {
            board: Board::new(),
            human_color: Color::Yellow,
            bot_type: BotType::Greedy,
            to_move: Color::Red,
        };
        AppState {
            game: Arc::new(Mutex::new(game)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_to_string(cell: Cell) -> String {
    match cell {
        Cell::Empty => ".".to_string(),
        Cell::Red => "R".to_string(),
        Cell::Yellow => "Y".to_string(),
    }
}

fn string_to_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        _ => Color::Yellow,
    }
}

fn string_to_bot_type(s: &str) -> BotType {
    match s.to_lowercase().as_str() {
        "greedy" => BotType::Greedy,
        "random" => BotType::Random,
        _ => BotType::Greedy,
    }
}

fn get_bot_instance(bot_type: BotType) -> Box<dyn Bot> {
    match bot_type {
        BotType::Greedy => Box::new(GreedyBot::new("Greedy Bot".to_string())),
        BotType::Random => Box::new(RandomBot::new("Random Bot".to_string())),
    }
}

fn winner_string(state: GameState) -> Option<String> {
    match state {
        GameState::RedWins => Some("Red".to_string()),
        GameState::YellowWins => Some("Yellow".to_string()),
        GameState::Draw => Some("Draw".to_string()),
        GameState::InProgress => None,
    }
}

/// Let the bot play one move if the game is still running and it is the
/// bot's turn. Returns a message describing what happened.
fn advance_bot(game: &mut WebGame) -> String {
    if game.board.is_game_over() || game.to_move == game.human_color {
        return String::new();
    }

    let bot_color = game.human_color.opponent();
    let mut bot = get_bot_instance(game.bot_type);
    match bot.get_move(&game.board, bot_color, std::time::Duration::from_secs(5)) {
        Some(bot_move) => {
            if game.board.try_move(bot_move).is_ok() {
                game.to_move = game.to_move.opponent();
                format!("Bot played: {}", bot_move)
            } else {
                "Bot proposed an invalid move".to_string()
            }
        }
        None => "Bot has no move".to_string(),
    }
}

#[axum::debug_handler]
async fn new_game(State(app_state): State<AppState>, Json(req): Json<NewGameRequest>) -> Response {
    let human_color = string_to_color(&req.human_color);
    let bot_type = string_to_bot_type(&req.bot_type);

    let message = {
        let mut game = app_state.game.lock().unwrap();
        game.board = Board::new();
        game.human_color = human_color;
        game.bot_type = bot_type;
        game.to_move = Color::Red;

        let bot_message = advance_bot(&mut game);
        if bot_message.is_empty() {
            "Your turn!".to_string()
        } else {
            bot_message
        }
    }; // MutexGuard dropped here

    let Json(mut game_response) = get_game_state(State(app_state)).await;
    game_response.message = message;
    Json(game_response).into_response()
}

#[axum::debug_handler]
async fn make_move(State(app_state): State<AppState>, Json(req): Json<MoveRequest>) -> Response {
    let message = {
        let mut game = app_state.game.lock().unwrap();

        if game.board.is_game_over() {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Game is over"
                })),
            )
                .into_response();
        }

        if game.to_move != game.human_color {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Not your turn"
                })),
            )
                .into_response();
        }

        let player_move = Move::new(
            Position::new(req.from_row, req.from_col),
            Position::new(req.to_row, req.to_col),
        );

        // The engine accepts moves for either color; keep the human honest
        let own_piece = game
            .board
            .get_cell(player_move.from)
            .and_then(|c| c.color())
            == Some(game.human_color);
        if !own_piece {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "That is not your piece"
                })),
            )
                .into_response();
        }

        if let Err(e) = game.board.try_move(player_move) {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": format!("Invalid move: {}", e)
                })),
            )
                .into_response();
        }
        game.to_move = game.to_move.opponent();

        advance_bot(&mut game)
    }; // Guard dropped here

    let Json(mut game_response) = get_game_state(State(app_state)).await;
    game_response.message = message;
    Json(game_response).into_response()
}

async fn get_game_state(State(app_state): State<AppState>) -> Json<GameResponse> {
    let game = app_state.game.lock().unwrap();

    let snapshot = game.board.snapshot();
    let mut board = vec![vec![String::new(); BOARD_SIZE]; BOARD_SIZE];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            board[row][col] = cell_to_string(snapshot[row][col]);
        }
    }

    let game_over = game.board.is_game_over();
    let legal_moves: Vec<MoveResponse> = if !game_over && game.to_move == game.human_color {
        game.board
            .legal_moves(game.human_color)
            .iter()
            .map(|m| MoveResponse {
                from_row: m.from.row,
                from_col: m.from.col,
                to_row: m.to.row,
                to_col: m.to.col,
            })
            .collect()
    } else {
        Vec::new()
    };

    Json(GameResponse {
        board,
        to_move: game.to_move.to_string(),
        legal_moves,
        game_over,
        winner: winner_string(game.board.get_state()),
        message: String::new(),
    })
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let app_state = AppState::new();

    let app = Router::new()
        .route("/api/new-game", post(new_game))
        .route("/api/move", post(make_move))
        .route("/api/game-state", get(get_game_state))
        .nest_service("/", ServeDir::new("static"))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    println!("Web server running at http://127.0.0.1:3000");
    println!("Open your browser and start playing!");

    axum::serve(listener, app).await?;
    Ok(())
}
