//! The binary only invokes `cli::run()` and maps errors to an exit code; argument
//! parsing, logging setup, and rendering live in `cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
