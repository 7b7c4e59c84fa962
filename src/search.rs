//! 极小极大搜索（Alpha-Beta 剪枝）
//!
//! 上方求最小分（价值为负的一方），下方求最大分。
//! 递归过程严格遵守"走一步、递归、立刻撤销"的 LIFO 纪律，
//! 即便剪枝提前跳出循环，当前这步也已经撤销，
//! 调用返回时棋盘保证与进入时相同。

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::Board;
use crate::eval::evaluate;
use crate::movegen::generate_moves;
use crate::types::{Move, Side};

/// 全局节点计数器，CLI 用它输出搜索统计
static NODE_COUNT: AtomicU64 = AtomicU64::new(0);

/// 重置节点计数器
pub fn reset_node_count() {
    NODE_COUNT.store(0, Ordering::Relaxed);
}

/// 获取当前节点计数
pub fn get_node_count() -> u64 {
    NODE_COUNT.load(Ordering::Relaxed)
}

/// 深度受限的极小极大递归
///
/// `depth == 0` 时直接返回静态评估。alpha/beta 自上而下传递，
/// 只在本层收紧；`alpha >= beta` 时停止枚举剩余兄弟走法。
fn min_max(board: &mut Board, depth: u8, mut alpha: i32, mut beta: i32, side: Side) -> i32 {
    NODE_COUNT.fetch_add(1, Ordering::Relaxed);

    if depth == 0 {
        return evaluate(board);
    }

    match side {
        Side::Up => {
            let mut min_value = i32::MAX;

            for mv in generate_moves(board, Side::Up) {
                board.make_move(mv);
                let value = min_max(board, depth - 1, alpha, beta, Side::Down);
                board.undo();

                min_value = min_value.min(value);
                beta = beta.min(min_value);
                if alpha >= beta {
                    break;
                }
            }

            min_value
        }
        Side::Down => {
            let mut max_value = i32::MIN;

            for mv in generate_moves(board, Side::Down) {
                board.make_move(mv);
                let value = min_max(board, depth - 1, alpha, beta, Side::Up);
                board.undo();

                max_value = max_value.max(value);
                alpha = alpha.max(max_value);
                if alpha >= beta {
                    break;
                }
            }

            max_value
        }
        // 走不到这里，只为返回值完整
        Side::Neither => 0,
    }
}

/// 为 `side` 选出最佳走法
///
/// `depth` 充当难度：根节点展开一层之后再往下搜 `depth` 层。
/// 根节点的 alpha/beta 保持在无穷哨兵上不收紧；分数打平时
/// 接受后枚举到的走法（`<=`/`>=`），保证同一局面的选择可复现。
///
/// 传入 [`Side::Neither`] 没有意义，直接返回零走法；
/// 一方无子可走时同样返回零走法。
pub fn best_move(board: &mut Board, side: Side, depth: u8) -> Move {
    let alpha = i32::MIN;
    let beta = i32::MAX;

    let mut best = Move::default();

    match side {
        Side::Up => {
            let mut min_value = beta;

            for mv in generate_moves(board, Side::Up) {
                board.make_move(mv);
                let value = min_max(board, depth, alpha, beta, Side::Down);
                board.undo();

                if value <= min_value {
                    min_value = value;
                    best = mv;
                }
            }

            log::debug!("best move for Up: {:?}, value {}", best, min_value);
        }
        Side::Down => {
            let mut max_value = alpha;

            for mv in generate_moves(board, Side::Down) {
                board.make_move(mv);
                let value = min_max(board, depth, alpha, beta, Side::Up);
                board.undo();

                if value >= max_value {
                    max_value = value;
                    best = mv;
                }
            }

            log::debug!("best move for Down: {:?}, value {}", best, max_value);
        }
        Side::Neither => {}
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{
        BOARD_ACTUAL_COL_BEGIN, BOARD_ACTUAL_COL_LEN, BOARD_ACTUAL_ROW_BEGIN,
        BOARD_ACTUAL_ROW_LEN, BOARD_COL_LEN, BOARD_ROW_LEN,
    };
    use crate::types::Piece;

    fn empty_board() -> Board {
        let mut board = Board::new();
        for r in BOARD_ACTUAL_ROW_BEGIN..(BOARD_ACTUAL_ROW_BEGIN + BOARD_ACTUAL_ROW_LEN) {
            for c in BOARD_ACTUAL_COL_BEGIN..(BOARD_ACTUAL_COL_BEGIN + BOARD_ACTUAL_COL_LEN) {
                board.set(r, c, Piece::Empty);
            }
        }
        board
    }

    fn boards_equal(a: &Board, b: &Board) -> bool {
        for r in 0..BOARD_ROW_LEN {
            for c in 0..BOARD_COL_LEN {
                if a.get(r, c) != b.get(r, c) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_neither_side_returns_zero_move() {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board, Side::Neither, 4), Move::default());
    }

    #[test]
    fn test_no_moves_returns_zero_move() {
        // 一方被吃光后无子可走，退化为零走法
        let mut board = empty_board();
        board.set(11, 6, Piece::DownGeneral);
        assert_eq!(best_move(&mut board, Side::Up, 2), Move::default());
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let mut board = Board::new();
        let snapshot = board.clone();
        best_move(&mut board, Side::Down, 2);
        assert!(boards_equal(&board, &snapshot));
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn test_depth_zero_picks_extremal_eval() {
        // 下方的车可以吃掉上方的车，深度 0 下这是分数最高的一步
        let mut board = empty_board();
        board.set(2, 6, Piece::UpGeneral);
        board.set(11, 5, Piece::DownGeneral);
        board.set(6, 2, Piece::UpRook);
        board.set(10, 2, Piece::DownRook);

        let best = best_move(&mut board, Side::Down, 0);
        assert_eq!(best, Move::new(10, 2, 6, 2));
    }

    #[test]
    fn test_depth_zero_tie_breaks_to_last_move() {
        // 宫心的士四个落点位置分全为 0：四步打平，取最后枚举的那个。
        // 将的走法分数更低，不会覆盖。
        let mut board = empty_board();
        board.set(2, 6, Piece::UpGeneral);
        board.set(11, 6, Piece::DownGeneral);
        board.set(10, 6, Piece::DownAdvisor);

        let chosen = best_move(&mut board, Side::Down, 0);
        // 士的出招顺序：(11,7) (11,5) (9,7) (9,5)，打平时留下最后一个
        assert_eq!(chosen, Move::new(10, 6, 9, 5));
    }

    #[test]
    fn test_search_takes_hanging_rook() {
        // 上方的车白送在下方车的线路上，浅层搜索应当吃掉它
        let mut board = empty_board();
        board.set(2, 6, Piece::UpGeneral);
        board.set(11, 5, Piece::DownGeneral);
        board.set(4, 2, Piece::UpRook);
        board.set(10, 2, Piece::DownRook);

        let best = best_move(&mut board, Side::Down, 2);
        assert_eq!(best, Move::new(10, 2, 4, 2));
    }

    #[test]
    fn test_search_defends_general() {
        // 上方车正要吃下方的将，轮到下方走：吃掉这只车是唯一解
        let mut board = empty_board();
        board.set(2, 6, Piece::UpGeneral);
        board.set(11, 5, Piece::DownGeneral);
        board.set(9, 5, Piece::UpRook);
        board.set(9, 10, Piece::DownRook);

        let best = best_move(&mut board, Side::Down, 2);
        assert_eq!(best, Move::new(9, 10, 9, 5));

        board.make_move(best);
        // 走完后上方任何走法都吃不到将
        let captures_general = generate_moves(&board, Side::Up)
            .iter()
            .any(|mv| board.get(mv.to_row, mv.to_col) == Piece::DownGeneral);
        assert!(!captures_general);
    }

    #[test]
    fn test_node_counter() {
        reset_node_count();
        let mut board = Board::new();
        best_move(&mut board, Side::Down, 1);
        assert!(get_node_count() > 0);
    }
}
