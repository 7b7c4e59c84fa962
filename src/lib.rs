//! Chinese Chess (Xiangqi) AI Engine
//!
//! 中国象棋引擎核心：带边框棋盘、逐兵种走法生成、
//! 子力加位置的静态评估，以及 Alpha-Beta 极小极大搜索。

pub mod board;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod search;
pub mod types;

pub use board::{Board, DEFAULT_AI_SEARCH_DEPTH};
pub use eval::evaluate;
pub use movegen::{generate_moves, is_legal_move, is_own_piece};
pub use notation::{looks_like_move, move_to_str, parse_move, replay_moves};
pub use search::{best_move, get_node_count, reset_node_count};
pub use types::{Move, Piece, PieceKind, Side};
