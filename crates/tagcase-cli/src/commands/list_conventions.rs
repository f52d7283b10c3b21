//! List conventions command implementation.

use tagcase_core::Convention;

const SAMPLE: &str = "UserAPIKey";

/// Runs the list-conventions command.
pub fn run() {
    println!("Supported conventions:\n");
    println!("{:<10} {SAMPLE} ->", "Name");
    println!("{}", "-".repeat(40));

    for convention in Convention::ALL {
        println!("{:<10} {}", convention.as_str(), convention.convert(SAMPLE));
    }

    println!("\nConfigure rules in tagcase.toml, e.g.:");
    println!("  [rules]");
    println!("  json = \"camel\"");
    println!("\nOr on the command line:");
    println!("  tagcase check --rule json=camel --rule db=snake");
}
