use std::path::PathBuf;

use crate::config;

pub fn handle_store(dir: Option<PathBuf>) {
    let mut user_config = config::load_config();

    match dir {
        None => {
            println!(
                "Problem store: {}",
                config::problems_dir(&user_config).display()
            );
            if user_config.problems_dir.is_none() {
                println!("(default; change it with: drillbit store <dir>)");
            }
        }
        Some(new_dir) => {
            if !new_dir.is_dir() {
                eprintln!("'{}' is not a directory", new_dir.display());
                std::process::exit(1);
            }

            user_config.problems_dir = Some(new_dir.clone());
            if let Err(e) = config::save_config(&user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!("Problem store set to {}", new_dir.display());
        }
    }
}
