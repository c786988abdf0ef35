use std::io::{stdin, stdout, BufRead, Write};

use anyhow::{Context, Result};
use chessgraph::autoplay::play_random;
use chessgraph::chess_board::INITIAL_PLACEMENT;
use chessgraph::ui::{history_table, render_board, status_line};
use chessgraph::{Board, ChessField, ClickOutcome, Color, Direction, Match};

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a game in the terminal")
                .arg(arg!(-p --position <PLACEMENT> "Piece placement").default_value(INITIAL_PLACEMENT))
                .arg(arg!(-b --"black-first" "Let black make the first move")),
        )
        .subcommand(
            Command::new("moves")
                .about("List the destinations of a single piece")
                .arg(arg!(<SQUARE> "Square of the piece, e.g. e2"))
                .arg(arg!(-p --position <PLACEMENT> "Piece placement").default_value(INITIAL_PLACEMENT)),
        )
        .subcommand(
            Command::new("random")
                .about("Play a seeded random game")
                .arg(
                    arg!(-s --seed <SEED> "Random seed")
                        .default_value("42")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(-n --plies <N> "Maximum number of half moves")
                        .default_value("40")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("cells").about("Print the cell labels in traversal order"))
        .get_matches();

    init_logging(matches.get_flag("debug"));

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => play(arg_matches),
        Some(("moves", arg_matches)) => moves(arg_matches),
        Some(("random", arg_matches)) => random(arg_matches),
        Some(("cells", _)) => {
            cells();
            Ok(())
        }
        None => play_match(Match::new()),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn position_arg(arg_matches: &ArgMatches) -> Result<Board> {
    let position = arg_matches
        .get_one::<String>("position")
        .map(String::as_str)
        .unwrap_or(INITIAL_PLACEMENT);
    Board::from_placement(position).with_context(|| format!("cannot set up position {}", position))
}

fn play(arg_matches: &ArgMatches) -> Result<()> {
    let board = position_arg(arg_matches)?;
    let first = if arg_matches.get_flag("black-first") {
        Color::Black
    } else {
        Color::White
    };
    play_match(Match::with_board(board, first))
}

fn play_match(mut game: Match) -> Result<()> {
    info!("Type a square (e2 or \"6 4\") to select and move, or cancel, board, history, quit");
    print_board(&game);
    prompt()?;

    for line in stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "cancel" => {
                game.deselect();
                print_board(&game);
            }
            "board" => print_board(&game),
            "history" => println!("{}", history_table(&game)),
            input => match input.parse::<ChessField>() {
                Ok(field) => match game.handle_selection(field) {
                    Ok(outcome) => {
                        report(field, outcome);
                        print_board(&game);
                    }
                    Err(e) => warn!("{}", e),
                },
                Err(e) => println!("{}", e),
            },
        }
        prompt()?;
    }
    Ok(())
}

fn report(field: ChessField, outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Ignored => println!("Nothing to select on {}", field),
        ClickOutcome::Selected(_) => {}
        ClickOutcome::Rejected => println!("{} is not a legal destination", field),
        ClickOutcome::Moved(record) => match record.captured {
            Some(kind) => println!("{} {}{}x{}{}", record.ply, record.kind, record.from, kind, record.to),
            None => println!("{} {}{}-{}", record.ply, record.kind, record.from, record.to),
        },
    }
}

fn print_board(game: &Match) {
    println!("{}", render_board(game));
    println!("{}", status_line(game));
}

fn prompt() -> Result<()> {
    print!("> ");
    stdout().flush()?;
    Ok(())
}

fn moves(arg_matches: &ArgMatches) -> Result<()> {
    let board = position_arg(arg_matches)?;
    let square = arg_matches
        .get_one::<String>("SQUARE")
        .context("missing square")?;
    let field: ChessField = square.parse()?;

    match board.occupant(field) {
        None => println!("{} is empty", field),
        Some(piece) => {
            let mut destinations = board.generate_moves_from(field);
            destinations.sort();
            let names: Vec<String> = destinations.iter().map(|f| f.as_algebraic()).collect();
            println!("{} {}{}: {}", piece.color, piece.kind, field, names.join(" "));
        }
    }
    Ok(())
}

fn random(arg_matches: &ArgMatches) -> Result<()> {
    let seed = *arg_matches.get_one::<u64>("seed").context("missing seed")?;
    let plies = *arg_matches.get_one::<u32>("plies").context("missing plies")?;
    println!("Random game with seed {} for up to {} plies", seed, plies);

    let game = play_random(seed, plies);
    print_board(&game);
    println!("{}", history_table(&game));
    Ok(())
}

fn cells() {
    let board = Board::new();
    for cell in board.cells() {
        if cell.neighbor(Direction::East).is_some() {
            print!("{} ", cell.label());
        } else {
            println!("{}", cell.label());
        }
    }
}
