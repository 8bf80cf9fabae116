//! dailypay main entrypoint.

use dailypay::run;
use dailypay::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
