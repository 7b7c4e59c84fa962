//! 棋盘表示
//!
//! 实际棋盘为 10 行 x 9 列。为了加速规则检查，四周各垫了 2 行/列的
//! 界外哨兵格，内部存储为 14 x 13：滑动和跳跃走法从不越界，
//! 只需检查目标格是否为 [`Piece::Out`]。
//!
//! 走棋通过历史栈支持撤销，搜索依赖"走一步、递归、立即撤销"
//! 的 LIFO 纪律保证棋盘在子树探索后恢复原状。

use std::fmt;

use crate::types::{Move, Piece, Side};

/// 内部存储行数（含边框）
pub const BOARD_ROW_LEN: i32 = 14;
/// 内部存储列数（含边框）
pub const BOARD_COL_LEN: i32 = 13;
/// 实际棋盘行数
pub const BOARD_ACTUAL_ROW_LEN: i32 = 10;
/// 实际棋盘列数
pub const BOARD_ACTUAL_COL_LEN: i32 = 9;
/// 实际棋盘在内部坐标中的起始行
pub const BOARD_ACTUAL_ROW_BEGIN: i32 = 2;
/// 实际棋盘在内部坐标中的起始列
pub const BOARD_ACTUAL_COL_BEGIN: i32 = 2;

/// 河界：上方的兵过了这一行就算过河，可以左右移动
pub const BOARD_RIVER_UP: i32 = BOARD_ACTUAL_ROW_BEGIN + 4;
/// 河界：下方的卒过了这一行就算过河
pub const BOARD_RIVER_DOWN: i32 = BOARD_ACTUAL_ROW_BEGIN + 5;

/// 九宫格边界：将和士只能在九宫内活动
pub const BOARD_9_PALACE_UP_TOP: i32 = BOARD_ACTUAL_ROW_BEGIN;
pub const BOARD_9_PALACE_UP_BOTTOM: i32 = BOARD_ACTUAL_ROW_BEGIN + 2;
pub const BOARD_9_PALACE_UP_LEFT: i32 = BOARD_ACTUAL_COL_BEGIN + 3;
pub const BOARD_9_PALACE_UP_RIGHT: i32 = BOARD_ACTUAL_COL_BEGIN + 5;

pub const BOARD_9_PALACE_DOWN_TOP: i32 = BOARD_ACTUAL_ROW_BEGIN + 7;
pub const BOARD_9_PALACE_DOWN_BOTTOM: i32 = BOARD_ACTUAL_ROW_BEGIN + 9;
pub const BOARD_9_PALACE_DOWN_LEFT: i32 = BOARD_ACTUAL_COL_BEGIN + 3;
pub const BOARD_9_PALACE_DOWN_RIGHT: i32 = BOARD_ACTUAL_COL_BEGIN + 5;

/// 单方一步可走走法数的上限，用于预分配
pub const MAX_ONE_SIDE_POSSIBLE_MOVES_LEN: usize = 256;

/// 默认 AI 搜索深度
pub const DEFAULT_AI_SEARCH_DEPTH: u8 = 4;

/// 标准开局布局模板，边框填满 [`Piece::Out`]
const BOARD_DEFAULT_TEMPLATE: [[Piece; BOARD_COL_LEN as usize]; BOARD_ROW_LEN as usize] = {
    use Piece::{
        DownAdvisor as DA, DownBishop as DB, DownCannon as DC, DownGeneral as DG,
        DownKnight as DN, DownPawn as DP, DownRook as DR, Empty as EE, Out as EO,
        UpAdvisor as UA, UpBishop as UB, UpCannon as UC, UpGeneral as UG, UpKnight as UN,
        UpPawn as UP, UpRook as UR,
    };
    [
        [EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO],
        [EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO],
        [EO, EO, UR, UN, UB, UA, UG, UA, UB, UN, UR, EO, EO],
        [EO, EO, EE, EE, EE, EE, EE, EE, EE, EE, EE, EO, EO],
        [EO, EO, EE, UC, EE, EE, EE, EE, EE, UC, EE, EO, EO],
        [EO, EO, UP, EE, UP, EE, UP, EE, UP, EE, UP, EO, EO],
        [EO, EO, EE, EE, EE, EE, EE, EE, EE, EE, EE, EO, EO],
        [EO, EO, EE, EE, EE, EE, EE, EE, EE, EE, EE, EO, EO],
        [EO, EO, DP, EE, DP, EE, DP, EE, DP, EE, DP, EO, EO],
        [EO, EO, EE, DC, EE, EE, EE, EE, EE, DC, EE, EO, EO],
        [EO, EO, EE, EE, EE, EE, EE, EE, EE, EE, EE, EO, EO],
        [EO, EO, DR, DN, DB, DA, DG, DA, DB, DN, DR, EO, EO],
        [EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO],
        [EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO, EO],
    ]
};

/// 历史记录：一步走法，以及走之前起点和终点格上的棋子
#[derive(Debug, Clone, Copy)]
struct HistoryNode {
    mv: Move,
    from_piece: Piece,
    to_piece: Piece,
}

/// 棋盘：内部带边框的棋子网格，加上用于撤销的历史栈
#[derive(Clone, Debug)]
pub struct Board {
    squares: [[Piece; BOARD_COL_LEN as usize]; BOARD_ROW_LEN as usize],
    history: Vec<HistoryNode>,
}

impl Board {
    /// 创建摆好开局的棋盘
    pub fn new() -> Board {
        Board {
            squares: BOARD_DEFAULT_TEMPLATE,
            history: Vec::new(),
        }
    }

    /// 读取某格的棋子
    ///
    /// 不做范围检查：走法生成产生的坐标总在带边框的网格内。
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Piece {
        self.squares[row as usize][col as usize]
    }

    /// 直接放置棋子，不做合法性检查，由调用方保证
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, piece: Piece) {
        self.squares[row as usize][col as usize] = piece;
    }

    /// 执行走法
    ///
    /// 先记录起点和终点格的当前棋子，再把起点清空、
    /// 起点棋子放到终点。终点原有的棋子（若有）就这样被吃掉，
    /// 它只残留在历史记录里。
    pub fn make_move(&mut self, mv: Move) {
        let from_piece = self.get(mv.from_row, mv.from_col);
        let to_piece = self.get(mv.to_row, mv.to_col);

        self.history.push(HistoryNode {
            mv,
            from_piece,
            to_piece,
        });

        self.set(mv.from_row, mv.from_col, Piece::Empty);
        self.set(mv.to_row, mv.to_col, from_piece);
    }

    /// 撤销上一步走法
    ///
    /// 把起点和终点恢复为记录中的棋子并弹出记录。
    /// 历史为空时静默返回，不算错误。
    pub fn undo(&mut self) {
        if let Some(node) = self.history.pop() {
            self.set(node.mv.from_row, node.mv.from_col, node.from_piece);
            self.set(node.mv.to_row, node.mv.to_col, node.to_piece);
        }
    }

    /// 恢复开局布局并清空历史
    pub fn reset(&mut self) {
        self.squares = BOARD_DEFAULT_TEMPLATE;
        self.history.clear();
    }

    /// 已走的步数（历史栈深度）
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// 胜负判定：扫描双方九宫中将/帅是否还在
    ///
    /// 双方都在返回 [`Side::Neither`]（对局继续），
    /// 只剩上方的将返回 [`Side::Up`]，否则返回 [`Side::Down`]。
    /// 双方都不在是正常对局到不了的局面，按既有逻辑落到 `Down`。
    pub fn winner(&self) -> Side {
        let mut up_alive = false;
        let mut down_alive = false;

        'up: for r in BOARD_9_PALACE_UP_TOP..=BOARD_9_PALACE_UP_BOTTOM {
            for c in BOARD_9_PALACE_UP_LEFT..=BOARD_9_PALACE_UP_RIGHT {
                if self.get(r, c) == Piece::UpGeneral {
                    up_alive = true;
                    break 'up;
                }
            }
        }

        'down: for r in BOARD_9_PALACE_DOWN_TOP..=BOARD_9_PALACE_DOWN_BOTTOM {
            for c in BOARD_9_PALACE_DOWN_LEFT..=BOARD_9_PALACE_DOWN_RIGHT {
                if self.get(r, c) == Piece::DownGeneral {
                    down_alive = true;
                    break 'down;
                }
            }
        }

        if up_alive && down_alive {
            Side::Neither
        } else if up_alive {
            Side::Up
        } else {
            Side::Down
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// 渲染实际棋盘区域，左侧是行号 9..0，底部是列号 a..i，
    /// 河界画成双线
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let split_row = BOARD_ACTUAL_ROW_BEGIN + BOARD_ACTUAL_ROW_LEN / 2;
        let end_row = BOARD_ACTUAL_ROW_BEGIN + BOARD_ACTUAL_ROW_LEN;
        let end_col = BOARD_ACTUAL_COL_BEGIN + BOARD_ACTUAL_COL_LEN;

        writeln!(f, "\n    +-------------------+")?;
        let mut rank = BOARD_ACTUAL_ROW_LEN - 1;
        for r in BOARD_ACTUAL_ROW_BEGIN..end_row {
            if r == split_row {
                writeln!(f, "    |===================|")?;
                writeln!(f, "    |===================|")?;
            }
            write!(f, " {}  | ", rank)?;
            rank -= 1;
            for c in BOARD_ACTUAL_COL_BEGIN..end_col {
                write!(f, "{} ", self.get(r, c).glyph())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "    +-------------------+")?;
        writeln!(f, "\n      a b c d e f g h i")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();

        assert_eq!(board.get(2, 2), Piece::UpRook);
        assert_eq!(board.get(2, 6), Piece::UpGeneral);
        assert_eq!(board.get(4, 3), Piece::UpCannon);
        assert_eq!(board.get(5, 2), Piece::UpPawn);
        assert_eq!(board.get(11, 6), Piece::DownGeneral);
        assert_eq!(board.get(11, 10), Piece::DownRook);
        assert_eq!(board.get(8, 10), Piece::DownPawn);

        // 边框全是界外哨兵
        for c in 0..BOARD_COL_LEN {
            assert_eq!(board.get(0, c), Piece::Out);
            assert_eq!(board.get(1, c), Piece::Out);
            assert_eq!(board.get(12, c), Piece::Out);
            assert_eq!(board.get(13, c), Piece::Out);
        }
        for r in 0..BOARD_ROW_LEN {
            assert_eq!(board.get(r, 0), Piece::Out);
            assert_eq!(board.get(r, 1), Piece::Out);
            assert_eq!(board.get(r, 11), Piece::Out);
            assert_eq!(board.get(r, 12), Piece::Out);
        }
    }

    #[test]
    fn test_make_move_captures() {
        let mut board = Board::new();

        // 炮吃掉对面的炮（规则与否此处不管，棋盘层不校验）
        board.make_move(Move::new(4, 3, 9, 3));
        assert_eq!(board.get(4, 3), Piece::Empty);
        assert_eq!(board.get(9, 3), Piece::UpCannon);
        assert_eq!(board.history_len(), 1);
    }

    #[test]
    fn test_undo_restores_both_cells() {
        let mut board = Board::new();

        board.make_move(Move::new(4, 3, 9, 3));
        board.undo();
        assert_eq!(board.get(4, 3), Piece::UpCannon);
        assert_eq!(board.get(9, 3), Piece::DownCannon);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut board = Board::new();
        board.undo();
        assert_eq!(board.get(2, 2), Piece::UpRook);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn test_nested_moves_round_trip() {
        let mut board = Board::new();
        let snapshot = Board::new();

        board.make_move(Move::new(5, 2, 6, 2));
        board.make_move(Move::new(8, 2, 7, 2));
        board.make_move(Move::new(6, 2, 7, 2));
        board.undo();
        board.undo();
        board.undo();

        for r in 0..BOARD_ROW_LEN {
            for c in 0..BOARD_COL_LEN {
                assert_eq!(board.get(r, c), snapshot.get(r, c), "cell ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_reset_clears_history() {
        let mut board = Board::new();
        board.make_move(Move::new(5, 2, 6, 2));
        board.reset();

        assert_eq!(board.get(5, 2), Piece::UpPawn);
        assert_eq!(board.history_len(), 0);
        // reset 后 undo 不应有任何效果
        board.undo();
        assert_eq!(board.get(5, 2), Piece::UpPawn);
    }

    #[test]
    fn test_winner_start_is_neither() {
        assert_eq!(Board::new().winner(), Side::Neither);
    }

    #[test]
    fn test_winner_after_general_removed() {
        let mut board = Board::new();
        board.set(2, 6, Piece::Empty);
        assert_eq!(board.winner(), Side::Down);

        let mut board = Board::new();
        board.set(11, 6, Piece::Empty);
        assert_eq!(board.winner(), Side::Up);
    }

    #[test]
    fn test_winner_both_absent_falls_to_down() {
        // 正常对局到不了的局面，落到 Down 是既有行为
        let mut board = Board::new();
        board.set(2, 6, Piece::Empty);
        board.set(11, 6, Piece::Empty);
        assert_eq!(board.winner(), Side::Down);
    }
}
