use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use simple_log::{debug, info, warn};

use super::dictionary::{RankedDictionary, UNKNOWN_RANK};
use super::util::{parse_choice, suggestion_lines};

const RULE: &str = "========================================";
const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    AutoComplete,
    IncrementRank,
    GetRank,
    Exit,
}

impl Action {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Action::Search),
            2 => Some(Action::AutoComplete),
            3 => Some(Action::IncrementRank),
            4 => Some(Action::GetRank),
            5 => Some(Action::Exit),
            _ => None,
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for the word file. `None` on end of input.
    pub fn prompt_word_path(&mut self) -> io::Result<Option<String>> {
        self.prompt("📂 Enter the path to the file containing words: ")
    }

    pub fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self, dict: &mut RankedDictionary) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(input) = self.prompt("👉 Enter your choice (1-5): ")? else {
                break;
            };
            writeln!(self.output)?;

            let Some(choice) = parse_choice(&input) else {
                writeln!(self.output, "⚠️ Please enter a valid number between 1 and 5.\n")?;
                continue;
            };

            let action = Action::from_choice(choice);
            debug!("menu choice {} -> {:?}", choice, action);
            let keep_going = match action {
                Some(Action::Exit) => {
                    writeln!(self.output, "👋 Exiting... Goodbye!")?;
                    false
                }
                Some(action) => self.dispatch(action, dict)?,
                None => {
                    writeln!(
                        self.output,
                        "⚠️ Invalid choice. Please enter a number between 1 and 5."
                    )?;
                    true
                }
            };

            writeln!(self.output, "\n{}\n", SEPARATOR)?;
            if !keep_going {
                return Ok(());
            }
        }

        info!("input closed, leaving menu");
        Ok(())
    }

    fn dispatch(&mut self, action: Action, dict: &mut RankedDictionary) -> io::Result<bool> {
        match action {
            Action::Search => {
                let Some(word) = self.prompt("🔍 Enter word to search: ")? else {
                    return Ok(false);
                };
                let message = if dict.search_word(&word) {
                    "✅ Word found!"
                } else {
                    "❌ Word not found."
                };
                writeln!(self.output, "{}", message)?;
            }
            Action::AutoComplete => {
                let Some(prefix) = self.prompt("💡 Enter prefix for auto-complete: ")? else {
                    return Ok(false);
                };
                let suggestions = dict.auto_complete(&prefix);
                if suggestions.is_empty() {
                    writeln!(self.output, "❌ No suggestions found.")?;
                } else {
                    writeln!(self.output, "📋 Suggestions:")?;
                    for line in suggestion_lines(&suggestions) {
                        writeln!(self.output, "{}", line)?;
                    }
                }
            }
            Action::IncrementRank => {
                let Some(word) = self.prompt("⬆️  Enter word to increment rank: ")? else {
                    return Ok(false);
                };
                dict.increment_rank(&word);
                writeln!(self.output, "🔼 Rank incremented for '{}'", word.trim())?;
            }
            Action::GetRank => {
                let Some(word) = self.prompt("📊 Enter word to get rank: ")? else {
                    return Ok(false);
                };
                let rank = dict.get_rank(&word);
                if rank == UNKNOWN_RANK {
                    writeln!(self.output, "❌ Word not found.")?;
                } else {
                    writeln!(self.output, "🏅 Rank of '{}': {}", word.trim(), rank)?;
                }
            }
            Action::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "🧭 MAIN MENU:")?;
        writeln!(self.output, "1️⃣  Search Word")?;
        writeln!(self.output, "2️⃣  Auto-complete with Ranking")?;
        writeln!(self.output, "3️⃣  Increment Word Rank")?;
        writeln!(self.output, "4️⃣  Get Word Rank")?;
        writeln!(self.output, "5️⃣  Exit")?;
        writeln!(self.output, "{}", RULE)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("replaced invalid UTF-8 in input line");
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
