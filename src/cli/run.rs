use crate::config;
use crate::display::display_report;
use crate::driver;
use crate::models::{load_store, RunReport};
use crate::registry::Registry;

pub fn run_problems(id: Option<String>, json: bool) {
    let user_config = config::load_config();
    let dir = config::problems_dir(&user_config);

    let store = match load_store(&dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if store.is_empty() && store.parse_failures().is_empty() {
        // An empty store is a diagnostic, not a failure: the run proceeds
        // with an empty result set.
        eprintln!("No problems found in {}", dir.display());
    }

    let registry = Registry::with_builtins();

    let report = match id {
        Some(ref wanted) => {
            let desc = match store.find(wanted) {
                Some(d) => d,
                None => {
                    eprintln!("No problem '{}' in {}", wanted, dir.display());
                    std::process::exit(1);
                }
            };
            RunReport {
                problems: vec![driver::run_problem(desc, &registry)],
                parse_failures: Vec::new(),
            }
        }
        None => driver::run_store(&store, &registry),
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        display_report(&report);
    }

    if !report.all_green() {
        std::process::exit(1);
    }
}
