//! Terminal bowling scorer (default binary).
//!
//! Wires stdin and stdout into the session loop; everything interesting
//! happens in the library.

use std::io;

use anyhow::Result;

use tenpin::session;
use tenpin::term::ConsoleRenderer;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut renderer = ConsoleRenderer::new(io::stdout());
    session::run(stdin.lock(), &mut renderer)?;
    Ok(())
}
