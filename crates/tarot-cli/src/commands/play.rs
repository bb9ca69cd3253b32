use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::clipboard::ClipboardHandler;
use crate::config::AppConfig;
use crate::console::{Console, is_quit};

pub fn run(config: &AppConfig, seed: Option<u64>) -> Result<(), String> {
    let session = super::open_session(config.session_config(seed))?;
    // Copies stay pasteable while the console runs; on Linux they are lost
    // at quit unless a clipboard manager has taken them.
    let mut console = Console::new(session, ClipboardHandler::default(), config.auto_copy);

    println!("  {} Three-Card Tarot", "Starting".bold());
    match console.session().config().seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: random"),
    }
    println!("  Type 'start' to shuffle, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    Ok(())
}
