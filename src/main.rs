//! `create_packages` - build BSDBook packages for every target.
//!
//! Prints one line per target and a final `Done` / `Done with errors`.
//! Exits 0 only when the dispatch succeeded.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match bsdbook_packager::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
