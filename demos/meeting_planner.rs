//! Plans a week of meetings.
//!
//! Run with `RUST_LOG=debug cargo run --example meeting_planner` to see the
//! propagation and search logs.

use calsat::algorithms::ValueOrdering;
use calsat::{Constraint, Date, DateOperator, Solver, SolverConfig};

fn main() {
    env_logger::init();

    let day = |d| Date::from_ymd_opt(2024, 3, d).expect("valid March date");
    let names = ["Kickoff", "Design review", "Retro", "Demo"];

    let constraints = vec![
        // Kickoff opens the week, design review follows it.
        Constraint::binary(0, 1, DateOperator::Before),
        // The retro and the demo happen on different days, demo last.
        Constraint::binary(2, 3, DateOperator::NotEquals),
        Constraint::binary(3, 1, DateOperator::After),
        Constraint::binary(3, 2, DateOperator::AfterOrEqual),
        // Nobody is around on the 5th.
        Constraint::unary(1, DateOperator::NotEquals, day(5)),
        Constraint::unary(0, DateOperator::AfterOrEqual, day(4)),
    ];

    for (label, ordering) in [
        ("earliest first", ValueOrdering::Chronological),
        ("latest first", ValueOrdering::ReverseChronological),
    ] {
        let solver = Solver::new(SolverConfig::default().with_value_ordering(ordering));
        match solver.solve_with_report(names.len(), day(4), day(8), constraints.clone()) {
            Ok(report) => {
                println!("Plan ({label}):");
                match report.assignment {
                    Some(dates) => {
                        for (name, date) in names.iter().zip(dates) {
                            println!("  {name:<14} {date}");
                        }
                    }
                    None => println!("  no feasible plan"),
                }
                println!("  search: {}", report.stats.search);
            }
            Err(err) => eprintln!("invalid input: {err}"),
        }
    }
}
