use std::fs;
use std::process;

use clap::{App, Arg};

use bloxorz_solver::level::Level;
use bloxorz_solver::solution_formatter::SolutionFormatter;
use bloxorz_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("bloxorz-solver")
        .arg(
            Arg::with_name("status")
                .short("-s")
                .long("--status")
                .help("print progress while searching"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let print_status = matches.is_present("status");
    let path = matches.value_of("file").unwrap();

    let text = fs::read_to_string(path).unwrap_or_else(|err| {
        println!("Can't read file {}: {}", path, err);
        process::exit(1);
    });

    let level: Level = text.parse().unwrap_or_else(|err| {
        println!("Failed to parse {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(print_status);
    match solver_ok.moves {
        Some(ref moves) => {
            println!("Found solution:");
            print!("{}", SolutionFormatter::new(&level.board, &level.state, moves));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
        None => println!("No solution"),
    }
    print!("{}", solver_ok.stats);
}
