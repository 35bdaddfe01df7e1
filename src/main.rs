//! rHabits main entrypoint.

use rhabits::run;
use rhabits::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
