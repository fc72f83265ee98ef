//! pairtime main entrypoint.

use pairtime::run;
use pairtime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
