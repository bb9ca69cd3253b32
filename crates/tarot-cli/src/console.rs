//! Line-oriented draw console.
//!
//! Each input line is one user action. The console owns the draw session,
//! runs the action to completion, and returns the text to show.

use tarot_core::{DECK_SIZE, DrawSession, PICK_LIMIT, PickOutcome, PositionState};

use crate::clipboard::{COPY_FAILED, TextSink, copy_with_status};

const STATUS_IDLE: &str = "尚未洗牌";
const STATUS_SHUFFLED: &str = "已洗牌：抽三张（含正/逆位）";
const STATUS_CONTINUE: &str = "继续抽牌";
const STATUS_COMPLETE: &str = "已抽满三张：请查看出牌结果";

const GRID_COLUMNS: usize = 13;

const HELP: &str = "\
Commands:
  start | shuffle           Shuffle a new deck and clear picks
  reset                     Put the deck away
  pick <n> [n...]           Pick positions 1-78 (a bare number also picks)
  grid                      Show the deck grid
  result                    Show the three picked cards
  prompt                    Show the reading prompt
  copy                      Copy the prompt to the clipboard (kept until quit)
  status                    Show session status
  help                      Show this help
  quit                      Exit

Grid: [12] available, [#1] picked (pick order), ---- no longer selectable";

/// Interactive front end over a [`DrawSession`].
pub struct Console<S> {
    session: DrawSession,
    sink: S,
    auto_copy: bool,
    status: &'static str,
}

impl<S: TextSink> Console<S> {
    /// Create a console in the idle state.
    pub fn new(session: DrawSession, sink: S, auto_copy: bool) -> Self {
        Self {
            session,
            sink,
            auto_copy,
            status: STATUS_IDLE,
        }
    }

    /// Process one line of input and return the response.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, char::is_whitespace).collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "start" | "shuffle" => Ok(self.do_start()),
            "reset" => Ok(self.do_reset()),
            "pick" | "p" => self.do_pick(rest),
            "grid" => Ok(self.render_grid()),
            "result" => self.do_result(),
            "prompt" => self.do_prompt(),
            "copy" => self.do_copy(),
            "status" => Ok(self.do_status()),
            "help" | "?" => Ok(HELP.to_string()),
            "quit" | "q" | "exit" => Ok("Goodbye!".to_string()),
            _ if cmd.chars().all(|c| c.is_ascii_digit() || c == ',') => self.do_pick(trimmed),
            other => Err(format!("unknown command: {other} (type 'help')")),
        }
    }

    fn do_start(&mut self) -> String {
        self.session.start();
        self.status = STATUS_SHUFFLED;
        format!("{}\n\n{}", self.status, self.render_grid())
    }

    fn do_reset(&mut self) -> String {
        self.session.reset();
        self.status = STATUS_IDLE;
        self.status.to_string()
    }

    fn do_pick(&mut self, rest: &str) -> Result<String, String> {
        let numbers = parse_positions(rest)?;

        let mut picked_any = false;
        for n in numbers {
            // Position 0 is off the grid; let the session ignore it.
            let position = n.checked_sub(1).unwrap_or(DECK_SIZE);
            if let PickOutcome::Picked { .. } = self.session.pick(position) {
                picked_any = true;
            }
        }

        if !picked_any {
            return Ok(self.count_line());
        }

        self.status = if self.session.is_complete() {
            STATUS_COMPLETE
        } else {
            STATUS_CONTINUE
        };

        let mut out = format!("{}\n\n{}", self.count_line(), self.render_grid());
        if let Ok(reading) = self.session.reading() {
            out.push_str(&format!("\n\n{reading}\n\n{}", reading.prompt));
            if self.auto_copy {
                out.push_str(&format!(
                    "\n\n{}",
                    copy_with_status(&mut self.sink, &reading.prompt)
                ));
            }
        }
        Ok(out)
    }

    fn do_result(&self) -> Result<String, String> {
        self.session
            .reading()
            .map(|r| r.to_string())
            .map_err(|e| e.to_string())
    }

    fn do_prompt(&self) -> Result<String, String> {
        self.session
            .reading()
            .map(|r| r.prompt)
            .map_err(|e| e.to_string())
    }

    fn do_copy(&mut self) -> Result<String, String> {
        let reading = self.session.reading().map_err(|e| e.to_string())?;
        let status = copy_with_status(&mut self.sink, &reading.prompt);
        if status == COPY_FAILED {
            Ok(format!("{status}\n\n{}", reading.prompt))
        } else {
            Ok(status.to_string())
        }
    }

    fn do_status(&self) -> String {
        let phase = match self.session.phase() {
            tarot_core::Phase::Idle => "idle",
            tarot_core::Phase::Active => "active",
        };
        let mut out = format!("{}\nPhase: {phase}", self.count_line());
        if let Some(seed) = self.session.config().seed {
            out.push_str(&format!("\nSeed: {seed}"));
        }
        out
    }

    fn count_line(&self) -> String {
        format!(
            "{}（已抽 {}/{PICK_LIMIT}）",
            self.status,
            self.session.picks().len()
        )
    }

    /// Render the deck grid, one cell per position.
    pub fn render_grid(&self) -> String {
        let Some(slate) = self.session.slate() else {
            return format!("（{STATUS_IDLE}）");
        };

        let cells: Vec<String> = (0..slate.len())
            .map(|p| match self.session.position_state(p) {
                Some(PositionState::Picked(order)) => format!("[#{order}]"),
                Some(PositionState::Disabled) => "----".to_string(),
                _ => format!("[{:>2}]", p + 1),
            })
            .collect();

        cells
            .chunks(GRID_COLUMNS)
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The underlying session.
    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    #[cfg(test)]
    fn sink(&self) -> &S {
        &self.sink
    }
}

/// Whether `input` asks to leave the console.
///
/// Only the first word counts, as in [`Console::process`].
pub fn is_quit(input: &str) -> bool {
    let first = input.split_whitespace().next().unwrap_or("");
    matches!(first.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Parse 1-based positions separated by spaces or commas.
fn parse_positions(input: &str) -> Result<Vec<usize>, String> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(format!("usage: pick <1-{DECK_SIZE}> [more positions]"));
    }
    tokens
        .iter()
        .map(|t| {
            t.parse::<usize>()
                .map_err(|_| format!("not a position: '{t}' (expected 1-{DECK_SIZE})"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tarot_core::{Phase, SessionConfig};

    use super::*;
    use crate::clipboard::COPY_OK;
    use crate::clipboard::tests::MemorySink;

    fn console(auto_copy: bool) -> Console<MemorySink> {
        let session = DrawSession::new(SessionConfig::default().with_seed(42)).unwrap();
        Console::new(session, MemorySink::default(), auto_copy)
    }

    #[test]
    fn grid_before_start() {
        let c = console(false);
        assert_eq!(c.render_grid(), "（尚未洗牌）");
    }

    #[test]
    fn start_shows_full_grid() {
        let mut c = console(false);
        let out = c.process("start").unwrap();
        assert!(out.starts_with(STATUS_SHUFFLED));
        assert!(out.contains("[ 1]"));
        assert!(out.contains("[78]"));
        assert_eq!(c.render_grid().lines().count(), 6);
    }

    #[test]
    fn pick_before_start_is_silent() {
        let mut c = console(false);
        let out = c.process("pick 3").unwrap();
        assert_eq!(out, "尚未洗牌（已抽 0/3）");
        assert_eq!(c.session().phase(), Phase::Idle);
    }

    #[test]
    fn picks_are_one_based_and_ordered() {
        let mut c = console(false);
        c.process("start").unwrap();
        let out = c.process("pick 10").unwrap();
        assert!(out.starts_with("继续抽牌（已抽 1/3）"));
        c.process("2, 78").unwrap();
        assert_eq!(c.session().picks(), &[9, 1, 77]);
    }

    #[test]
    fn third_pick_shows_result_and_prompt() {
        let mut c = console(false);
        c.process("shuffle").unwrap();
        let out = c.process("pick 1 2 3").unwrap();
        assert!(out.starts_with(STATUS_COMPLETE));
        assert!(out.contains("第 1 张"));
        assert!(out.contains("第 3 张"));
        assert!(out.contains("请输出："));
        assert!(out.contains("----"));
        assert!(out.contains("[#3]"));
        assert!(c.sink().copied.is_empty());
    }

    #[test]
    fn ignored_picks_leave_state_unchanged() {
        let mut c = console(false);
        c.process("start").unwrap();
        c.process("pick 5").unwrap();
        let out = c.process("pick 5 0 99").unwrap();
        assert_eq!(out, "继续抽牌（已抽 1/3）");
        assert_eq!(c.session().picks(), &[4]);
    }

    #[test]
    fn fourth_pick_ignored() {
        let mut c = console(false);
        c.process("start").unwrap();
        c.process("pick 1 2 3 4").unwrap();
        assert_eq!(c.session().picks(), &[0, 1, 2]);
    }

    #[test]
    fn bad_pick_input() {
        let mut c = console(false);
        c.process("start").unwrap();
        assert!(c.process("pick").is_err());
        assert!(c.process("pick seven").is_err());
        assert!(c.session().picks().is_empty());
    }

    #[test]
    fn result_and_prompt_need_three_cards() {
        let mut c = console(false);
        assert_eq!(c.process("result").unwrap_err(), "deck not shuffled yet");
        c.process("start").unwrap();
        c.process("pick 1").unwrap();
        assert_eq!(
            c.process("prompt").unwrap_err(),
            "need 3 picked cards, have 1"
        );
        c.process("pick 2 3").unwrap();
        let prompt = c.process("prompt").unwrap();
        assert!(prompt.starts_with("你是一位专业塔罗占卜师"));
        let result = c.process("result").unwrap();
        assert_eq!(result.lines().count(), 3);
    }

    #[test]
    fn copy_reports_status() {
        let mut c = console(false);
        c.process("start").unwrap();
        assert!(c.process("copy").is_err());
        c.process("pick 4 5 6").unwrap();
        assert_eq!(c.process("copy").unwrap(), COPY_OK);
        assert_eq!(c.sink().copied.len(), 1);
        assert!(c.sink().copied[0].contains("请输出："));
    }

    #[test]
    fn copy_failure_prints_prompt() {
        let session = DrawSession::new(SessionConfig::default().with_seed(1)).unwrap();
        let sink = MemorySink {
            fail: true,
            ..MemorySink::default()
        };
        let mut c = Console::new(session, sink, false);
        c.process("start").unwrap();
        c.process("pick 1 2 3").unwrap();
        let out = c.process("copy").unwrap();
        assert!(out.starts_with(COPY_FAILED));
        assert!(out.contains("抽到的三张牌（按抽牌顺序）："));
        assert_eq!(c.session().picks().len(), 3);
    }

    #[test]
    fn auto_copy_on_third_pick() {
        let mut c = console(true);
        c.process("start").unwrap();
        c.process("pick 7 8").unwrap();
        assert!(c.sink().copied.is_empty());
        let out = c.process("pick 9").unwrap();
        assert!(out.ends_with(COPY_OK));
        assert_eq!(c.sink().copied.len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut c = console(false);
        c.process("start").unwrap();
        c.process("pick 1 2").unwrap();
        assert_eq!(c.process("reset").unwrap(), STATUS_IDLE);
        assert_eq!(c.session().phase(), Phase::Idle);
        assert!(c.session().picks().is_empty());
        assert_eq!(c.process("reset").unwrap(), STATUS_IDLE);
    }

    #[test]
    fn status_reports_seed() {
        let mut c = console(false);
        c.process("start").unwrap();
        let out = c.process("status").unwrap();
        assert!(out.contains("Phase: active"));
        assert!(out.contains("Seed: 42"));
    }

    #[test]
    fn unknown_command() {
        let mut c = console(false);
        assert!(c.process("dance").unwrap_err().contains("unknown command"));
        assert_eq!(c.process("   ").unwrap(), "");
    }

    #[test]
    fn quit_detection() {
        assert!(is_quit("quit"));
        assert!(is_quit(" Q "));
        assert!(!is_quit("pick 1"));
        assert!(!is_quit("quitter"));
    }

    #[test]
    fn quit_with_trailing_words_leaves() {
        let mut c = console(false);
        assert_eq!(c.process("q now").unwrap(), "Goodbye!");
        assert!(is_quit("q now"));
        assert!(is_quit("EXIT please"));
    }
}
