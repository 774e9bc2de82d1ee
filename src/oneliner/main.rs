//! The binary only invokes `cli::run()` and turns errors into an exit status.
//! Everything user-facing lives in `cli/`; everything else in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
