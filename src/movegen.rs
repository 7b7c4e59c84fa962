//! 走法生成
//!
//! 逐兵种枚举某一方的全部伪合法走法。"伪合法"指只服从棋子
//! 行动规则和棋盘边界，不过滤送将（走完暴露己方将被吃的走法
//! 照样生成，与既有引擎一致）。
//!
//! 遍历顺序固定：实际棋盘按行从上到下、列从左到右，每个己方
//! 棋子再按兵种内固定顺序出招，保证同一局面下生成序列可复现。

use crate::board::{
    Board, BOARD_9_PALACE_DOWN_BOTTOM, BOARD_9_PALACE_DOWN_LEFT, BOARD_9_PALACE_DOWN_RIGHT,
    BOARD_9_PALACE_DOWN_TOP, BOARD_9_PALACE_UP_BOTTOM, BOARD_9_PALACE_UP_LEFT,
    BOARD_9_PALACE_UP_RIGHT, BOARD_9_PALACE_UP_TOP, BOARD_ACTUAL_COL_BEGIN, BOARD_ACTUAL_COL_LEN,
    BOARD_ACTUAL_ROW_BEGIN, BOARD_ACTUAL_ROW_LEN, BOARD_RIVER_DOWN, BOARD_RIVER_UP,
    MAX_ONE_SIDE_POSSIBLE_MOVES_LEN,
};
use crate::types::{Move, Piece, PieceKind, Side};

/// 目标格合法则插入：不能落在界外哨兵上，也不能吃自己的子
fn try_insert(board: &Board, moves: &mut Vec<Move>, from_row: i32, from_col: i32, to_row: i32, to_col: i32) {
    let from_piece = board.get(from_row, from_col);
    let to_piece = board.get(to_row, to_col);

    if to_piece != Piece::Out && from_piece.side() != to_piece.side() {
        moves.push(Move::new(from_row, from_col, to_row, to_col));
    }
}

/// 兵：向对方底线前进一步，过河后还可以左右各走一步
fn gen_pawn_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, side: Side) {
    match side {
        Side::Up => {
            try_insert(board, moves, r, c, r + 1, c);
            if r > BOARD_RIVER_UP {
                try_insert(board, moves, r, c, r, c - 1);
                try_insert(board, moves, r, c, r, c + 1);
            }
        }
        Side::Down => {
            try_insert(board, moves, r, c, r - 1, c);
            if r < BOARD_RIVER_DOWN {
                try_insert(board, moves, r, c, r, c - 1);
                try_insert(board, moves, r, c, r, c + 1);
            }
        }
        Side::Neither => {}
    }
}

/// 炮的单方向扫描
///
/// 第一段：沿射线的空格都是平移走法，遇到第一个非空格停下。
/// 第二段：若挡住的不是界外（即有炮架），继续越过炮架扫描，
/// 跳过空格，遇到的第一个非空格若是敌子则为吃子走法；
/// 无论结果如何都在第一个非空格停止。
fn gen_cannon_dir(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, dr: i32, dc: i32, side: Side) {
    let mut row = r + dr;
    let mut col = c + dc;
    let mut p = board.get(row, col);

    while p == Piece::Empty {
        moves.push(Move::new(r, c, row, col));
        row += dr;
        col += dc;
        p = board.get(row, col);
    }

    if p != Piece::Out {
        row += dr;
        col += dc;
        loop {
            p = board.get(row, col);
            if p == Piece::Empty {
                row += dr;
                col += dc;
                continue;
            }
            if p.side() == side.opposite() {
                moves.push(Move::new(r, c, row, col));
            }
            break;
        }
    }
}

fn gen_cannon_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, side: Side) {
    gen_cannon_dir(board, moves, r, c, -1, 0, side);
    gen_cannon_dir(board, moves, r, c, 1, 0, side);
    gen_cannon_dir(board, moves, r, c, 0, -1, side);
    gen_cannon_dir(board, moves, r, c, 0, 1, side);
}

/// 车的单方向扫描：空格都可走，遇到的第一个非空格若是敌子则可吃
fn gen_rook_dir(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, dr: i32, dc: i32, side: Side) {
    let mut row = r + dr;
    let mut col = c + dc;
    let mut p = board.get(row, col);

    while p == Piece::Empty {
        moves.push(Move::new(r, c, row, col));
        row += dr;
        col += dc;
        p = board.get(row, col);
    }

    if p.side() == side.opposite() {
        moves.push(Move::new(r, c, row, col));
    }
}

fn gen_rook_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, side: Side) {
    gen_rook_dir(board, moves, r, c, -1, 0, side);
    gen_rook_dir(board, moves, r, c, 1, 0, side);
    gen_rook_dir(board, moves, r, c, 0, -1, side);
    gen_rook_dir(board, moves, r, c, 0, 1, side);
}

/// 马走日，先查马腿：主方向相邻格被占时，共用该马腿的两个
/// 落点都不考虑
fn gen_knight_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32) {
    if board.get(r + 1, c) == Piece::Empty {
        try_insert(board, moves, r, c, r + 2, c + 1);
        try_insert(board, moves, r, c, r + 2, c - 1);
    }

    if board.get(r - 1, c) == Piece::Empty {
        try_insert(board, moves, r, c, r - 2, c + 1);
        try_insert(board, moves, r, c, r - 2, c - 1);
    }

    if board.get(r, c + 1) == Piece::Empty {
        try_insert(board, moves, r, c, r + 1, c + 2);
        try_insert(board, moves, r, c, r - 1, c + 2);
    }

    if board.get(r, c - 1) == Piece::Empty {
        try_insert(board, moves, r, c, r + 1, c - 2);
        try_insert(board, moves, r, c, r - 1, c - 2);
    }
}

/// 象走田：象眼被占不能走，向前的两个落点不能过河
fn gen_bishop_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, side: Side) {
    match side {
        Side::Up => {
            if r + 2 <= BOARD_RIVER_UP {
                if board.get(r + 1, c + 1) == Piece::Empty {
                    try_insert(board, moves, r, c, r + 2, c + 2);
                }
                if board.get(r + 1, c - 1) == Piece::Empty {
                    try_insert(board, moves, r, c, r + 2, c - 2);
                }
            }
            if board.get(r - 1, c + 1) == Piece::Empty {
                try_insert(board, moves, r, c, r - 2, c + 2);
            }
            if board.get(r - 1, c - 1) == Piece::Empty {
                try_insert(board, moves, r, c, r - 2, c - 2);
            }
        }
        Side::Down => {
            if r - 2 >= BOARD_RIVER_DOWN {
                if board.get(r - 1, c + 1) == Piece::Empty {
                    try_insert(board, moves, r, c, r - 2, c + 2);
                }
                if board.get(r - 1, c - 1) == Piece::Empty {
                    try_insert(board, moves, r, c, r - 2, c - 2);
                }
            }
            if board.get(r + 1, c + 1) == Piece::Empty {
                try_insert(board, moves, r, c, r + 2, c + 2);
            }
            if board.get(r + 1, c - 1) == Piece::Empty {
                try_insert(board, moves, r, c, r + 2, c - 2);
            }
        }
        Side::Neither => {}
    }
}

/// 士在九宫内斜走一步
fn gen_advisor_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, side: Side) {
    match side {
        Side::Up => {
            if r + 1 <= BOARD_9_PALACE_UP_BOTTOM && c + 1 <= BOARD_9_PALACE_UP_RIGHT {
                try_insert(board, moves, r, c, r + 1, c + 1);
            }
            if r + 1 <= BOARD_9_PALACE_UP_BOTTOM && c - 1 >= BOARD_9_PALACE_UP_LEFT {
                try_insert(board, moves, r, c, r + 1, c - 1);
            }
            if r - 1 >= BOARD_9_PALACE_UP_TOP && c + 1 <= BOARD_9_PALACE_UP_RIGHT {
                try_insert(board, moves, r, c, r - 1, c + 1);
            }
            if r - 1 >= BOARD_9_PALACE_UP_TOP && c - 1 >= BOARD_9_PALACE_UP_LEFT {
                try_insert(board, moves, r, c, r - 1, c - 1);
            }
        }
        Side::Down => {
            if r + 1 <= BOARD_9_PALACE_DOWN_BOTTOM && c + 1 <= BOARD_9_PALACE_DOWN_RIGHT {
                try_insert(board, moves, r, c, r + 1, c + 1);
            }
            if r + 1 <= BOARD_9_PALACE_DOWN_BOTTOM && c - 1 >= BOARD_9_PALACE_DOWN_LEFT {
                try_insert(board, moves, r, c, r + 1, c - 1);
            }
            if r - 1 >= BOARD_9_PALACE_DOWN_TOP && c + 1 <= BOARD_9_PALACE_DOWN_RIGHT {
                try_insert(board, moves, r, c, r - 1, c + 1);
            }
            if r - 1 >= BOARD_9_PALACE_DOWN_TOP && c - 1 >= BOARD_9_PALACE_DOWN_LEFT {
                try_insert(board, moves, r, c, r - 1, c - 1);
            }
        }
        Side::Neither => {}
    }
}

/// 将在九宫内直走一步；另有"飞将"：沿将所在列向对方扫描，
/// 途中全空且第一个遇到的子是对方的将时，直接吃将
fn gen_general_moves(board: &Board, moves: &mut Vec<Move>, r: i32, c: i32, side: Side) {
    match side {
        Side::Up => {
            if r + 1 <= BOARD_9_PALACE_UP_BOTTOM {
                try_insert(board, moves, r, c, r + 1, c);
            }
            if r - 1 >= BOARD_9_PALACE_UP_TOP {
                try_insert(board, moves, r, c, r - 1, c);
            }
            if c + 1 <= BOARD_9_PALACE_UP_RIGHT {
                try_insert(board, moves, r, c, r, c + 1);
            }
            if c - 1 >= BOARD_9_PALACE_UP_LEFT {
                try_insert(board, moves, r, c, r, c - 1);
            }

            for row in (r + 1)..(BOARD_ACTUAL_ROW_BEGIN + BOARD_ACTUAL_ROW_LEN) {
                let p = board.get(row, c);
                if p == Piece::Empty {
                    continue;
                }
                if p == Piece::DownGeneral {
                    moves.push(Move::new(r, c, row, c));
                }
                break;
            }
        }
        Side::Down => {
            if r + 1 <= BOARD_9_PALACE_DOWN_BOTTOM {
                try_insert(board, moves, r, c, r + 1, c);
            }
            if r - 1 >= BOARD_9_PALACE_DOWN_TOP {
                try_insert(board, moves, r, c, r - 1, c);
            }
            if c + 1 <= BOARD_9_PALACE_DOWN_RIGHT {
                try_insert(board, moves, r, c, r, c + 1);
            }
            if c - 1 >= BOARD_9_PALACE_DOWN_LEFT {
                try_insert(board, moves, r, c, r, c - 1);
            }

            for row in (BOARD_ACTUAL_ROW_BEGIN..r).rev() {
                let p = board.get(row, c);
                if p == Piece::Empty {
                    continue;
                }
                if p == Piece::UpGeneral {
                    moves.push(Move::new(r, c, row, c));
                }
                break;
            }
        }
        Side::Neither => {}
    }
}

/// 生成某一方的全部伪合法走法
///
/// `side` 应为 [`Side::Up`] 或 [`Side::Down`]，
/// 传入 [`Side::Neither`] 得到空列表。
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(MAX_ONE_SIDE_POSSIBLE_MOVES_LEN);

    let end_row = BOARD_ACTUAL_ROW_BEGIN + BOARD_ACTUAL_ROW_LEN;
    let end_col = BOARD_ACTUAL_COL_BEGIN + BOARD_ACTUAL_COL_LEN;

    for r in BOARD_ACTUAL_ROW_BEGIN..end_row {
        for c in BOARD_ACTUAL_COL_BEGIN..end_col {
            let p = board.get(r, c);
            if p.side() != side {
                continue;
            }
            match p.kind() {
                PieceKind::Pawn => gen_pawn_moves(board, &mut moves, r, c, side),
                PieceKind::Cannon => gen_cannon_moves(board, &mut moves, r, c, side),
                PieceKind::Rook => gen_rook_moves(board, &mut moves, r, c, side),
                PieceKind::Knight => gen_knight_moves(board, &mut moves, r, c),
                PieceKind::Bishop => gen_bishop_moves(board, &mut moves, r, c, side),
                PieceKind::Advisor => gen_advisor_moves(board, &mut moves, r, c, side),
                PieceKind::General => gen_general_moves(board, &mut moves, r, c, side),
                PieceKind::Empty | PieceKind::Out => {}
            }
        }
    }

    moves
}

/// 走法是否符合规则：在起点棋子一方的生成列表里出现即合法
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    let p = board.get(mv.from_row, mv.from_col);
    generate_moves(board, p.side()).contains(&mv)
}

/// 起点格上是不是 `side` 自己的棋子（只能动自己的子）
pub fn is_own_piece(board: &Board, mv: Move, side: Side) -> bool {
    board.get(mv.from_row, mv.from_col).side() == side
}
