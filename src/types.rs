//! 象棋核心类型定义
//!
//! 棋子阵营、兵种、16 种棋子标识以及走法结构

use std::fmt;

/// 棋子阵营
///
/// `Up` 位于棋盘上方（AI 默认执此方），`Down` 位于下方。
/// `Neither` 表示空格/界外，也在胜负判定里表示"尚无胜者"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Up,
    Down,
    Neither,
}

impl Side {
    /// 获取对方阵营，`Neither` 的对方仍是 `Neither`
    pub fn opposite(self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
            Side::Neither => Side::Neither,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Up => write!(f, "Up"),
            Side::Down => write!(f, "Down"),
            Side::Neither => write!(f, "Neither"),
        }
    }
}

/// 兵种
///
/// `Empty` 和 `Out` 也算作兵种，这样滑动/跳跃规则只需检查目标格的兵种，
/// 不需要显式的边界判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// 兵/卒
    Pawn,
    /// 炮
    Cannon,
    /// 车
    Rook,
    /// 马
    Knight,
    /// 象/相
    Bishop,
    /// 士/仕
    Advisor,
    /// 将/帅
    General,
    /// 空格
    Empty,
    /// 棋盘外
    Out,
}

/// 棋子标识：7 兵种 x 2 阵营，加上空格和界外哨兵
///
/// 阵营/兵种/棋子价值都通过显式的访问函数获取，
/// 绝不依赖枚举的序号区间来判断归属。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    UpPawn,
    UpCannon,
    UpRook,
    UpKnight,
    UpBishop,
    UpAdvisor,
    UpGeneral,
    DownPawn,
    DownCannon,
    DownRook,
    DownKnight,
    DownBishop,
    DownAdvisor,
    DownGeneral,
    Empty,
    Out,
}

impl Piece {
    /// 获取棋子所属阵营
    pub fn side(self) -> Side {
        match self {
            Piece::UpPawn
            | Piece::UpCannon
            | Piece::UpRook
            | Piece::UpKnight
            | Piece::UpBishop
            | Piece::UpAdvisor
            | Piece::UpGeneral => Side::Up,
            Piece::DownPawn
            | Piece::DownCannon
            | Piece::DownRook
            | Piece::DownKnight
            | Piece::DownBishop
            | Piece::DownAdvisor
            | Piece::DownGeneral => Side::Down,
            Piece::Empty | Piece::Out => Side::Neither,
        }
    }

    /// 获取兵种
    pub fn kind(self) -> PieceKind {
        match self {
            Piece::UpPawn | Piece::DownPawn => PieceKind::Pawn,
            Piece::UpCannon | Piece::DownCannon => PieceKind::Cannon,
            Piece::UpRook | Piece::DownRook => PieceKind::Rook,
            Piece::UpKnight | Piece::DownKnight => PieceKind::Knight,
            Piece::UpBishop | Piece::DownBishop => PieceKind::Bishop,
            Piece::UpAdvisor | Piece::DownAdvisor => PieceKind::Advisor,
            Piece::UpGeneral | Piece::DownGeneral => PieceKind::General,
            Piece::Empty => PieceKind::Empty,
            Piece::Out => PieceKind::Out,
        }
    }

    /// 控制台显示字符：上方阵营大写，下方阵营小写
    pub fn glyph(self) -> char {
        match self {
            Piece::UpPawn => 'P',
            Piece::UpCannon => 'C',
            Piece::UpRook => 'R',
            Piece::UpKnight => 'N',
            Piece::UpBishop => 'B',
            Piece::UpAdvisor => 'A',
            Piece::UpGeneral => 'G',
            Piece::DownPawn => 'p',
            Piece::DownCannon => 'c',
            Piece::DownRook => 'r',
            Piece::DownKnight => 'n',
            Piece::DownBishop => 'b',
            Piece::DownAdvisor => 'a',
            Piece::DownGeneral => 'g',
            Piece::Empty => '.',
            Piece::Out => '#',
        }
    }

    /// 棋子价值：上方为负，下方为正
    ///
    /// 评估函数直接对全盘求和，搜索利用这个符号约定
    /// （上方求最小值，下方求最大值），不做逐方归一化。
    pub fn value(self) -> i32 {
        match self {
            Piece::UpPawn => -20,
            Piece::UpCannon => -50,
            Piece::UpRook => -100,
            Piece::UpKnight => -50,
            Piece::UpBishop => -10,
            Piece::UpAdvisor => -10,
            Piece::UpGeneral => -10000,
            Piece::DownPawn => 20,
            Piece::DownCannon => 50,
            Piece::DownRook => 100,
            Piece::DownKnight => 50,
            Piece::DownBishop => 10,
            Piece::DownAdvisor => 10,
            Piece::DownGeneral => 10000,
            Piece::Empty | Piece::Out => 0,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 走法：内部带边框坐标下的 (起点行, 起点列, 终点行, 终点列)
///
/// 相等即四元组完全相等。默认值是零走法 (0,0,0,0)，
/// 搜索在无子可走时返回它。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Move {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
}

impl Move {
    pub fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Move {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }
}
