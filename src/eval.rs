//! 局面静态评估
//!
//! 分数 = 全盘每个棋子的子力价值 + 所在格的位置分。
//! 与子力价值同一符号约定：上方贡献负分，下方贡献正分，
//! 搜索直接用这个带符号的总分，不做视角翻转。

use crate::board::{Board, BOARD_ACTUAL_COL_BEGIN, BOARD_ACTUAL_COL_LEN, BOARD_ACTUAL_ROW_BEGIN, BOARD_ACTUAL_ROW_LEN};
use crate::types::Piece;

/// 各棋子的位置分值表，按实际棋盘 10x9 的局部坐标索引
mod pos_tables {
    pub const UP_PAWN: [[i32; 9]; 10] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [2, 0, 2, 0, -6, 0, 2, 0, 2],
        [-3, 0, -4, 0, -7, 0, -4, 0, -3],
        [-10, -18, -22, -35, -40, -35, -22, -18, -10],
        [-20, -27, -30, -40, -42, -40, -30, -27, -20],
        [-20, -30, -45, -55, -55, -55, -45, -30, -20],
        [-20, -30, -50, -65, -70, -65, -50, -30, -20],
        [0, 0, 0, -2, -4, -2, 0, 0, 0],
    ];

    pub const UP_CANNON: [[i32; 9]; 10] = [
        [0, 0, -1, -3, -3, -3, -1, 0, 0],
        [0, -1, -2, -2, -2, -2, -2, -1, 0],
        [-1, 0, -4, -3, -5, -3, -4, 0, -1],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, -3, 0, -4, 0, -3, 0, 1],
        [0, 0, 0, 0, -4, 0, 0, 0, 0],
        [0, -3, -3, -2, -4, -2, -3, -3, 0],
        [-1, -1, 0, 5, 4, 5, 0, -1, -1],
        [-2, -2, 0, 4, 7, 4, 0, -2, -2],
        [-4, -4, 0, 5, 6, 5, 0, -4, -4],
    ];

    pub const UP_ROOK: [[i32; 9]; 10] = [
        [6, -6, -4, -12, 0, -12, -4, -6, 6],
        [-5, -8, -6, -12, 0, -12, -6, -8, -5],
        [2, -8, -4, -12, -12, -12, -4, -8, 2],
        [-4, -9, -4, -12, -14, -12, -4, -9, -4],
        [-8, -12, -12, -14, -15, -14, -12, -12, -8],
        [-8, -11, -11, -14, -15, -14, -11, -11, -8],
        [-6, -13, -13, -16, -16, -16, -13, -13, -6],
        [-6, -8, -7, -14, -16, -14, -7, -8, -6],
        [-6, -12, -9, -16, -33, -16, -9, -12, -6],
        [-6, -8, -7, -13, -14, -13, -7, -8, -6],
    ];

    pub const UP_KNIGHT: [[i32; 9]; 10] = [
        [0, 3, -2, 0, -2, 0, -2, 3, 0],
        [3, -2, -4, -5, 10, -5, -4, -2, 3],
        [-5, -4, -6, -7, -4, -7, -6, -4, -5],
        [-4, -6, -10, -7, -10, -7, -10, -6, -4],
        [-2, -10, -13, -14, -15, -14, -13, -10, -2],
        [-2, -12, -11, -15, -16, -15, -11, -12, -2],
        [-5, -20, -12, -19, -12, -19, -12, -20, -5],
        [-4, -10, -11, -15, -11, -15, -11, -10, -4],
        [-2, -8, -15, -9, -6, -9, -15, -8, -2],
        [-2, -2, -2, -8, -2, -8, -2, -2, -2],
    ];

    pub const UP_BISHOP: [[i32; 9]; 10] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [2, 0, 0, 0, -3, 0, 0, 0, 2],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    pub const UP_ADVISOR: [[i32; 9]; 10] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, -3, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    pub const UP_GENERAL: [[i32; 9]; 10] = [
        [0, 0, 0, -1, -5, -1, 0, 0, 0],
        [0, 0, 0, 8, 8, 8, 0, 0, 0],
        [0, 0, 0, 9, 9, 9, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    pub const DOWN_PAWN: [[i32; 9]; 10] = [
        [0, 0, 0, 2, 4, 2, 0, 0, 0],
        [20, 30, 50, 65, 70, 65, 50, 30, 20],
        [20, 30, 45, 55, 55, 55, 45, 30, 20],
        [20, 27, 30, 40, 42, 40, 30, 27, 20],
        [10, 18, 22, 35, 40, 35, 22, 18, 10],
        [3, 0, 4, 0, 7, 0, 4, 0, 3],
        [-2, 0, -2, 0, 6, 0, -2, 0, -2],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    pub const DOWN_CANNON: [[i32; 9]; 10] = [
        [4, 4, 0, -5, -6, -5, 0, 4, 4],
        [2, 2, 0, -4, -7, -4, 0, 2, 2],
        [1, 1, 0, -5, -4, -5, 0, 1, 1],
        [0, 3, 3, 2, 4, 2, 3, 3, 0],
        [0, 0, 0, 0, 4, 0, 0, 0, 0],
        [-1, 0, 3, 0, 4, 0, 3, 0, -1],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, 4, 3, 5, 3, 4, 0, 1],
        [0, 1, 2, 2, 2, 2, 2, 1, 0],
        [0, 0, 1, 3, 3, 3, 1, 0, 0],
    ];

    pub const DOWN_ROOK: [[i32; 9]; 10] = [
        [6, 8, 7, 13, 14, 13, 7, 8, 6],
        [6, 12, 9, 16, 33, 16, 9, 12, 6],
        [6, 8, 7, 14, 16, 14, 7, 8, 6],
        [6, 13, 13, 16, 16, 16, 13, 13, 6],
        [8, 11, 11, 14, 15, 14, 11, 11, 8],
        [8, 12, 12, 14, 15, 14, 12, 12, 8],
        [4, 9, 4, 12, 14, 12, 4, 9, 4],
        [-2, 8, 4, 12, 12, 12, 4, 8, -2],
        [5, 8, 6, 12, 0, 12, 6, 8, 5],
        [-6, 6, 4, 12, 0, 12, 4, 6, -6],
    ];

    pub const DOWN_KNIGHT: [[i32; 9]; 10] = [
        [2, 2, 2, 8, 2, 8, 2, 2, 2],
        [2, 8, 15, 9, 6, 9, 15, 8, 2],
        [4, 10, 11, 15, 11, 15, 11, 10, 4],
        [5, 20, 12, 19, 12, 19, 12, 20, 5],
        [2, 12, 11, 15, 16, 15, 11, 12, 2],
        [2, 10, 13, 14, 15, 14, 13, 10, 2],
        [4, 6, 10, 7, 10, 7, 10, 6, 4],
        [5, 4, 6, 7, 4, 7, 6, 4, 5],
        [-3, 2, 4, 5, -10, 5, 4, 2, -3],
        [0, -3, 2, 0, 2, 0, 2, -3, 0],
    ];

    pub const DOWN_BISHOP: [[i32; 9]; 10] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [-2, 0, 0, 0, 3, 0, 0, 0, -2],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    pub const DOWN_ADVISOR: [[i32; 9]; 10] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 3, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    pub const DOWN_GENERAL: [[i32; 9]; 10] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, -9, -9, -9, 0, 0, 0],
        [0, 0, 0, -8, -8, -8, 0, 0, 0],
        [0, 0, 0, 1, 5, 1, 0, 0, 0],
    ];
}

/// 某棋子在实际棋盘局部坐标 (r, c) 处的位置分，空格/界外为 0
fn pos_value(piece: Piece, r: usize, c: usize) -> i32 {
    let table: &[[i32; 9]; 10] = match piece {
        Piece::UpPawn => &pos_tables::UP_PAWN,
        Piece::UpCannon => &pos_tables::UP_CANNON,
        Piece::UpRook => &pos_tables::UP_ROOK,
        Piece::UpKnight => &pos_tables::UP_KNIGHT,
        Piece::UpBishop => &pos_tables::UP_BISHOP,
        Piece::UpAdvisor => &pos_tables::UP_ADVISOR,
        Piece::UpGeneral => &pos_tables::UP_GENERAL,
        Piece::DownPawn => &pos_tables::DOWN_PAWN,
        Piece::DownCannon => &pos_tables::DOWN_CANNON,
        Piece::DownRook => &pos_tables::DOWN_ROOK,
        Piece::DownKnight => &pos_tables::DOWN_KNIGHT,
        Piece::DownBishop => &pos_tables::DOWN_BISHOP,
        Piece::DownAdvisor => &pos_tables::DOWN_ADVISOR,
        Piece::DownGeneral => &pos_tables::DOWN_GENERAL,
        Piece::Empty | Piece::Out => return 0,
    };
    table[r][c]
}

/// 计算整盘的静态分数
pub fn evaluate(board: &Board) -> i32 {
    let mut total = 0;

    let end_row = BOARD_ACTUAL_ROW_BEGIN + BOARD_ACTUAL_ROW_LEN;
    let end_col = BOARD_ACTUAL_COL_BEGIN + BOARD_ACTUAL_COL_LEN;

    for r in BOARD_ACTUAL_ROW_BEGIN..end_row {
        for c in BOARD_ACTUAL_COL_BEGIN..end_col {
            let p = board.get(r, c);
            if p != Piece::Empty {
                total += p.value();
                total += pos_value(
                    p,
                    (r - BOARD_ACTUAL_ROW_BEGIN) as usize,
                    (c - BOARD_ACTUAL_COL_BEGIN) as usize,
                );
            }
        }
    }

    total
}
