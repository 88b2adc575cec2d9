use std::fmt::Write;

use npuzzle::{generate, BoardError, Solver};

const DIMENSION: usize = 3;

fn main() -> Result<(), BoardError> {
    let board = generate(DIMENSION)?;
    println!("Initial board:");
    println!("{}", board);

    let solver = Solver::new(board);
    print!("{}", report(&solver));

    let stats = solver.stats();
    println!(
        "Expanded {} of {} queued nodes in {} rounds",
        stats.expanded, stats.enqueued, stats.rounds
    );
    Ok(())
}

/// Formats the result the way the classic 8-puzzle client prints it.
fn report(solver: &Solver) -> String {
    let mut report = String::new();
    match (solver.moves(), solver.solution()) {
        (Some(moves), Some(solution)) => {
            writeln!(report, "Minimum number of moves = {}", moves).unwrap();
            for board in solution {
                writeln!(report, "{}", board).unwrap();
            }
        }
        _ => writeln!(report, "No solution possible").unwrap(),
    }
    report
}
