use clap::Parser;

/// Timed password gate: ten seconds to enter the right password.
#[derive(Parser)]
#[command(name = "locker-cli", version, about = "Locker CLI")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(e) = locker_core::runner::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
