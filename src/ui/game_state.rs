//! Game state management for the Connect Four GUI
//!
//! Owns the real board, alternates turns between the human and the AI,
//! and runs AI turns on a worker thread.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::{AppConfig, EngineConfig, FirstTurn};
use crate::error::MoveError;
use crate::rules::{find_winning_line, outcome, Outcome, Window};
use crate::{AIEngine, Board, MoveResult, Piece, COL_COUNT};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// A piece that was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub row: usize,
    pub col: usize,
    pub piece: Piece,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// The four cells that won, if any
    pub winning_line: Option<Window>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Piece,
    pub game_over: Option<GameResult>,
    pub move_history: Vec<PlayedMove>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<usize>,
    pub message: Option<String>,

    engine_config: EngineConfig,
    first_turn: FirstTurn,
    starting_turn: Piece,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Self {
        let starting_turn = roll_first_turn(config.game.first_turn);
        let state = Self {
            board: Board::new(),
            current_turn: starting_turn,
            game_over: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine_config: config.engine.clone(),
            first_turn: config.game.first_turn,
            starting_turn,
        };
        state.log_start();
        state
    }

    /// Start a fresh game with the same settings
    pub fn reset(&mut self) {
        self.starting_turn = roll_first_turn(self.first_turn);
        self.board = Board::new();
        self.current_turn = self.starting_turn;
        self.game_over = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        self.log_start();
    }

    fn log_start(&self) {
        info!(
            "new game: {:?} moves first, AI {:?} at depth {}",
            self.starting_turn, self.engine_config.strategy, self.engine_config.depth
        );
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Piece::Player
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Piece::Ai
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Last dropped piece as (row, col)
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.move_history.last().map(|m| (m.row, m.col))
    }

    /// Attempt to drop the human's piece into `col`
    pub fn try_drop(&mut self, col: usize) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        if col >= COL_COUNT {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.board.is_valid(col) {
            return Err(MoveError::ColumnFull(col));
        }

        self.execute_move(col)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, col: usize) -> Result<(), MoveError> {
        let piece = self.current_turn;
        let row = self.board.play(col, piece)?;

        self.move_history.push(PlayedMove { row, col, piece });
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();
        debug!("{piece:?} dropped into column {col}\n{}", self.board);

        if let Some(result) = outcome(&self.board) {
            let winning_line = match result {
                Outcome::Win(winner) => find_winning_line(&self.board, winner),
                Outcome::Draw => None,
            };
            info!("game over after {} moves: {result:?}", self.move_history.len());
            self.game_over = Some(GameResult {
                outcome: result,
                winning_line,
            });
            return Ok(());
        }

        self.current_turn = piece.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let mut config = self.engine_config.clone();
        // Vary a fixed seed per ply so repeated positions still differ between games
        config.seed = config
            .seed
            .map(|seed| seed.wrapping_add(self.move_history.len() as u64));

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::from_config(&config);
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(col) => {
                    if let Err(err) = self.execute_move(col) {
                        warn!("AI produced an unplayable column {col}: {err}");
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Greedy hint for the human's next drop
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        let mut engine = AIEngine::from_config(&self.engine_config);
        self.suggested_move = engine.suggest_move(&self.board, Piece::Player);
    }

    /// Undo the human's last move along with the AI reply that followed it
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        while let Some(undone) = self.move_history.pop() {
            if undone.piece == Piece::Player {
                break;
            }
        }

        // Replay what is left
        self.board = Board::new();
        for m in &self.move_history {
            self.board.drop(m.row, m.col, m.piece);
        }
        self.current_turn = self
            .move_history
            .last()
            .map_or(self.starting_turn, |m| m.piece.opponent());
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

fn roll_first_turn(first_turn: FirstTurn) -> Piece {
    match first_turn {
        FirstTurn::Player => Piece::Player,
        FirstTurn::Ai => Piece::Ai,
        FirstTurn::Random => {
            if rand::random::<bool>() {
                Piece::Player
            } else {
                Piece::Ai
            }
        }
    }
}
