use chrono::Local;

use crate::models::{Outcome, ProblemReport, RunReport};

pub fn display_report(report: &RunReport) {
    println!("\n{}", "=".repeat(60));
    println!("  DRILLBIT - Solution Test Report");
    println!("  {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}\n", "=".repeat(60));

    for problem in &report.problems {
        display_problem(problem);
    }

    if !report.parse_failures.is_empty() {
        println!("\n{}", "-".repeat(60));
        println!("Unparseable descriptor file(s):");
        for failure in &report.parse_failures {
            println!("  {}: {}", failure.path.display(), failure.message);
        }
        println!("{}", "-".repeat(60));
    }

    let passed = report.count(Outcome::Pass);
    let failed = report.count(Outcome::Fail);
    let skipped = report.count(Outcome::Skipped);
    let unresolved =
        report.count(Outcome::ResolutionFailed) + report.count(Outcome::LookupFailed);

    let mut summary = format!("{}/{} problems passed", passed, report.problems.len());
    if failed > 0 {
        summary.push_str(&format!(" - {} failed", failed));
    }
    if unresolved > 0 {
        summary.push_str(&format!(" - {} unresolved", unresolved));
    }
    if skipped > 0 {
        summary.push_str(&format!(" - {} skipped", skipped));
    }

    println!("\n{}", "=".repeat(60));
    println!("{}", summary);
    println!("{}", "=".repeat(60));
}

fn display_problem(problem: &ProblemReport) {
    match problem.outcome {
        Outcome::Pass => println!(
            "{}: {}/{} cases passed",
            problem.id, problem.total_cases, problem.total_cases
        ),
        Outcome::Fail => {
            let failed = problem.failures.len();
            println!(
                "{}: {}/{} cases passed - {} failed",
                problem.id,
                problem.total_cases - failed,
                problem.total_cases,
                failed
            );
            for failure in &problem.failures {
                println!("  Test #{}:", failure.case_number);
                println!("    Input: {}", failure.input);
                println!("    Expected: {}", failure.expected);
                if let Some(ref error) = failure.error {
                    println!("    Error: {}", error);
                } else if let Some(ref actual) = failure.actual {
                    println!("    Actual: {}", actual);
                }
            }
        }
        Outcome::Skipped => println!("{}: skipped (no test cases)", problem.id),
        Outcome::ResolutionFailed => println!("{}: no solution registered", problem.id),
        Outcome::LookupFailed => {
            println!("{}: solution does not export the declared entry point", problem.id)
        }
    }
}
