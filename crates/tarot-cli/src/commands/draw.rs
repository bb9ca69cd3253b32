use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tarot_core::{DECK_SIZE, PICK_LIMIT, shuffle};

use crate::clipboard::{COPY_FAILED, ClipboardHandler, ONE_SHOT_HOLD, copy_with_status};
use crate::config::AppConfig;

/// One-shot draw. `picks` are 1-based; without them three random positions
/// are chosen.
pub fn run(
    config: &AppConfig,
    picks: &[usize],
    seed: Option<u64>,
    copy: bool,
    json: bool,
) -> Result<(), String> {
    let session_config = config.session_config(seed);
    let seed = session_config.seed;
    let mut session = super::open_session(session_config)?;
    session.start();

    let positions = if picks.is_empty() {
        random_positions(seed)
    } else {
        // 0 maps off the grid so the session ignores it like any bad pick.
        picks
            .iter()
            .map(|&n| n.checked_sub(1).unwrap_or(DECK_SIZE))
            .collect()
    };
    for position in positions {
        session.pick(position);
    }

    let reading = session.reading().map_err(|e| e.to_string())?;

    if json {
        println!("{}", reading.to_json().map_err(|e| e.to_string())?);
    } else {
        match seed {
            Some(seed) => println!("  {} 78 cards | Seed: {seed}\n", "Shuffled".bold()),
            None => println!("  {} 78 cards\n", "Shuffled".bold()),
        }
        println!("{reading}\n");
        println!("{}", reading.prompt);
    }

    if copy || config.auto_copy {
        // The process exits next, so keep serving the clipboard for a while.
        if cfg!(target_os = "linux") {
            eprintln!(
                "Holding the clipboard for up to {}s so the prompt can be pasted...",
                ONE_SHOT_HOLD.as_secs()
            );
        }
        let mut clipboard = ClipboardHandler::holding(ONE_SHOT_HOLD);
        let status = copy_with_status(&mut clipboard, &reading.prompt);
        if status == COPY_FAILED {
            eprintln!("{}", status.yellow());
        } else {
            eprintln!("{status}");
        }
    }

    Ok(())
}

/// Three distinct 0-based positions, reproducible when seeded.
fn random_positions(seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        // Offset so picks do not replay the deck shuffle's stream.
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    };
    let all: Vec<usize> = (0..DECK_SIZE).collect();
    let mut positions = shuffle(&all, &mut rng);
    positions.truncate(PICK_LIMIT);
    positions
}
