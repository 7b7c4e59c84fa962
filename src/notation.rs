//! 坐标记法转换
//!
//! 核心只认内部带边框坐标；与人打交道的 `b2e2` 这类记法
//! （列 'a'..'i' 从左到右，行 '0'..'9' 从下到上）在这里转换。

use crate::board::{Board, BOARD_ACTUAL_COL_BEGIN, BOARD_ACTUAL_ROW_BEGIN};
use crate::movegen::is_legal_move;
use crate::types::Move;

/// 输入是否形如一步走法（四个坐标字符）
pub fn looks_like_move(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() < 4 {
        return false;
    }
    (b'a'..=b'i').contains(&bytes[0])
        && bytes[1].is_ascii_digit()
        && (b'a'..=b'i').contains(&bytes[2])
        && bytes[3].is_ascii_digit()
}

/// 解析 `b2e2` 形式的走法字符串为内部坐标走法
pub fn parse_move(input: &str) -> Result<Move, String> {
    if !looks_like_move(input) {
        return Err(format!("not a valid move string: {}", input));
    }
    let bytes = input.as_bytes();

    let from_col = (bytes[0] - b'a') as i32 + BOARD_ACTUAL_COL_BEGIN;
    let from_row = 9 - (bytes[1] - b'0') as i32 + BOARD_ACTUAL_ROW_BEGIN;
    let to_col = (bytes[2] - b'a') as i32 + BOARD_ACTUAL_COL_BEGIN;
    let to_row = 9 - (bytes[3] - b'0') as i32 + BOARD_ACTUAL_ROW_BEGIN;

    Ok(Move::new(from_row, from_col, to_row, to_col))
}

/// 内部坐标走法转回记法字符串
pub fn move_to_str(mv: Move) -> String {
    format!(
        "{}{}{}{}",
        (b'a' + (mv.from_col - BOARD_ACTUAL_COL_BEGIN) as u8) as char,
        (b'0' + (9 - (mv.from_row - BOARD_ACTUAL_ROW_BEGIN)) as u8) as char,
        (b'a' + (mv.to_col - BOARD_ACTUAL_COL_BEGIN) as u8) as char,
        (b'0' + (9 - (mv.to_row - BOARD_ACTUAL_ROW_BEGIN)) as u8) as char,
    )
}

/// 从开局开始按序重放一串走法字符串，得到对应的棋盘
///
/// 每一步都要通过规则检查，失败时报告出错的那一步。
pub fn replay_moves(moves_str: &str) -> Result<Board, String> {
    let mut board = Board::new();

    for (i, token) in moves_str.split_whitespace().enumerate() {
        let mv = parse_move(token).map_err(|e| format!("move #{}: {}", i + 1, e))?;
        if !is_legal_move(&board, mv) {
            return Err(format!("move #{}: illegal move: {}", i + 1, token));
        }
        board.make_move(mv);
    }

    Ok(board)
}
