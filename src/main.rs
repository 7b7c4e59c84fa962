//! Cnchess AI CLI
//!
//! 两类用法：
//! 1. `play`：人机对弈的控制台界面（人执下方，先行）
//! 2. `best` / `eval` / `moves`：单次命令，走法序列描述局面，可输出 JSON

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use cnchess_ai::{
    best_move, evaluate, generate_moves, get_node_count, is_legal_move, is_own_piece,
    move_to_str, notation, parse_move, replay_moves, reset_node_count, Board, Move, Side,
    DEFAULT_AI_SEARCH_DEPTH,
};

#[derive(Parser)]
#[command(name = "cnchess-ai")]
#[command(about = "Chinese chess (Xiangqi) AI engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 开始人机对弈
    Play {
        /// AI 搜索深度（难度）
        #[arg(long, default_value_t = DEFAULT_AI_SEARCH_DEPTH)]
        depth: u8,
    },

    /// 计算最佳走法
    Best {
        /// 执棋方 (up / down)
        #[arg(long)]
        side: String,

        /// 从开局重放的走法序列，如 "b2e2 h9g7"
        #[arg(long, default_value = "")]
        moves: String,

        /// 搜索深度
        #[arg(long, default_value_t = DEFAULT_AI_SEARCH_DEPTH)]
        depth: u8,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 静态评估局面分数
    Eval {
        /// 从开局重放的走法序列
        #[arg(long, default_value = "")]
        moves: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 列出某方的全部走法
    Moves {
        /// 执棋方 (up / down)
        #[arg(long)]
        side: String,

        /// 从开局重放的走法序列
        #[arg(long, default_value = "")]
        moves: String,
    },
}

#[derive(Serialize)]
struct BestResponse {
    #[serde(rename = "move")]
    mv: String,
    piece: char,
    depth: u8,
    nodes: u64,
    elapsed_ms: f64,
    nps: f64,
}

#[derive(Serialize)]
struct EvalResponse {
    score: i32,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_lowercase().as_str() {
        "up" => Ok(Side::Up),
        "down" => Ok(Side::Down),
        _ => Err(format!("unknown side: {}. Available: up, down", s)),
    }
}

fn calc_nps(nodes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        nodes as f64 / elapsed_secs
    } else {
        0.0
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { depth } => {
            run_game(depth);
            Ok(())
        }
        Commands::Best {
            side,
            moves,
            depth,
            json,
        } => run_best(&side, &moves, depth, json),
        Commands::Eval { moves, json } => run_eval(&moves, json),
        Commands::Moves { side, moves } => run_moves(&side, &moves),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_best(side: &str, moves: &str, depth: u8, json: bool) -> Result<(), String> {
    let side = parse_side(side)?;
    let mut board = replay_moves(moves)?;

    reset_node_count();
    let start = Instant::now();
    let best = best_move(&mut board, side, depth);
    let elapsed = start.elapsed().as_secs_f64();
    let nodes = get_node_count();
    let nps = calc_nps(nodes, elapsed);

    if best == Move::default() {
        return Err(format!("no legal moves for side {}", side));
    }

    let mv_str = move_to_str(best);
    let piece = board.get(best.from_row, best.from_col).glyph();

    if json {
        let response = BestResponse {
            mv: mv_str,
            piece,
            depth,
            nodes,
            elapsed_ms: elapsed * 1000.0,
            nps,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?
        );
    } else {
        println!("Best move for {}: {} (piece '{}')", side, mv_str, piece);
        println!(
            "Stats: depth={}, nodes={}, time={:.3}s, nps={:.0}",
            depth, nodes, elapsed, nps
        );
    }

    Ok(())
}

fn run_eval(moves: &str, json: bool) -> Result<(), String> {
    let board = replay_moves(moves)?;
    let score = evaluate(&board);

    if json {
        let response = EvalResponse { score };
        println!(
            "{}",
            serde_json::to_string(&response).map_err(|e| e.to_string())?
        );
    } else {
        println!("Score: {} (negative favors Up, positive favors Down)", score);
    }

    Ok(())
}

fn run_moves(side: &str, moves: &str) -> Result<(), String> {
    let side = parse_side(side)?;
    let board = replay_moves(moves)?;
    let generated = generate_moves(&board, side);

    println!("Moves for {} ({}):", side, generated.len());
    for mv in &generated {
        println!("  {}", move_to_str(*mv));
    }

    Ok(())
}

fn print_help_page() {
    println!("\n=======================================");
    println!("Help Page\n");
    println!("    1. help         - this page.");
    println!("    2. b2e2         - input like this will be parsed as a move.");
    println!("    3. undo         - undo the previous move.");
    println!("    4. exit or quit - exit the game.");
    println!("    5. remake       - remake the game.");
    println!("    6. advice       - give me a best move.\n");
    println!("  The characters on the board have the following relationships: \n");
    println!("    P/p -> pawn      C/c -> cannon    R/r -> rook");
    println!("    N/n -> knight    B/b -> bishop    A/a -> advisor");
    println!("    G/g -> general   .   -> no piece here.");
    println!("  Uppercase is the AI side, lowercase is yours.");
    println!("=======================================");
}

/// 人机对弈主循环：人执下方先行，AI 执上方
fn run_game(depth: u8) {
    let user_side = Side::Down;
    let ai_side = Side::Up;

    let mut board = Board::new();
    let stdin = io::stdin();

    println!("{}", board);

    loop {
        print!("Your move: ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let input = input.trim();

        match input {
            "help" => {
                print_help_page();
                println!("{}", board);
            }
            "undo" => {
                // 退一整回合：己方和 AI 各一步
                board.undo();
                board.undo();
                println!("{}", board);
            }
            "quit" | "exit" => return,
            "remake" => {
                board.reset();
                println!("New game started.");
                println!("{}", board);
            }
            "advice" => {
                let advice = best_move(&mut board, user_side, depth);
                if advice == Move::default() {
                    println!("No move available.");
                    continue;
                }
                println!(
                    "Maybe you can try: {}, piece is '{}'.",
                    move_to_str(advice),
                    board.get(advice.from_row, advice.from_col).glyph()
                );
            }
            _ => {
                if !notation::looks_like_move(input) {
                    println!("Input is not a valid move nor instruction, please re-enter(try help ?).");
                    continue;
                }

                let user_move = match parse_move(input) {
                    Ok(mv) => mv,
                    Err(_) => {
                        println!("Input is not a valid move nor instruction, please re-enter(try help ?).");
                        continue;
                    }
                };

                if !is_own_piece(&board, user_move, user_side) {
                    println!("This piece is not yours, please choose your piece.");
                    continue;
                }

                if !is_legal_move(&board, user_move) {
                    println!("Given move doesn't fit for rules, please re-enter.");
                    continue;
                }

                board.make_move(user_move);
                println!("{}", board);

                if board.winner() == user_side {
                    println!("Congratulations! You win!");
                    return;
                }

                println!("AI thinking...");
                reset_node_count();
                let start = Instant::now();
                let ai_move = best_move(&mut board, ai_side, depth);
                if ai_move == Move::default() {
                    println!("AI has no moves left. You win!");
                    return;
                }
                log::debug!(
                    "ai searched {} nodes in {:.3}s",
                    get_node_count(),
                    start.elapsed().as_secs_f64()
                );

                board.make_move(ai_move);
                println!("{}", board);
                println!(
                    "AI move: {}, piece is '{}'.",
                    move_to_str(ai_move),
                    board.get(ai_move.to_row, ai_move.to_col).glyph()
                );

                if board.winner() == ai_side {
                    println!("Game over! You lose!");
                    return;
                }
            }
        }
    }
}
