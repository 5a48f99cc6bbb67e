// The CLI is intentionally minimal: no arguments, no flags, no
// configuration. Running `hello_world` prints the default greeting.
//
// Exit codes:
// - 0: Success (greeting written to standard output)
// - 1: Error (standard output was unavailable)

use std::io::Write;
use std::process;

use hello_world_base::tracing::init_tracing;
use hello_world_base::{ErrorKind, HelloResult, ResultExt};
use hello_world_core::greet;

fn run() -> HelloResult<()> {
    let message = greet(None);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{message}")
        .map_err(|source| ErrorKind::Io { source }.into())
        .context("writing greeting to standard output")?;
    Ok(())
}

fn main() {
    init_tracing().unwrap();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
