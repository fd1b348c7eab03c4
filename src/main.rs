//! timebank main entrypoint.

use timebank::run;
use timebank::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
