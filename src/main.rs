//! truckplan main entrypoint.

use truckplan::run;
use truckplan::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
