use crate::config;
use crate::models::load_store;
use crate::registry::Registry;

/// Authoring checks, independent of execution: every descriptor must have
/// a registered solution and at least one visible test case. Hidden cases
/// do not satisfy the second check.
pub fn check_store() {
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
        eprintln!("No problems found in {}", dir.display());
    }

    let registry = Registry::with_builtins();
    let mut flagged = 0;

    println!(
        "Checking {} problem(s) in {}",
        store.problems().len(),
        dir.display()
    );
    println!();

    for desc in store.problems() {
        let solution = registry.contains(&desc.id);
        let cases = desc.has_visible_cases();
        if !solution || !cases {
            flagged += 1;
        }
        println!(
            "{}: solution {}, visible cases {}",
            desc.id,
            if solution { "ok" } else { "MISSING" },
            if cases { "ok" } else { "NONE" }
        );
    }

    for failure in store.parse_failures() {
        flagged += 1;
        println!("{}: UNPARSEABLE ({})", failure.path.display(), failure.message);
    }

    println!();
    println!("{}", "=".repeat(60));
    if flagged == 0 {
        println!("All authoring checks passed");
    } else {
        println!("{} problem(s) need attention", flagged);
    }
    println!("{}", "=".repeat(60));

    if flagged > 0 {
        std::process::exit(1);
    }
}
