mod trie;
mod word_search;

use std::env;
use std::io;

use clap::Parser;
use simple_log::LogConfigBuilder;
use simple_log::{error, info};
use word_search::dictionary::RankedDictionary;
use word_search::menu::Menu;
use word_search::source::load_pattern;

#[derive(Parser, Debug)]
#[command(version, about = "Word lookup and ranked autocompletion", long_about = None)]
struct Args {
    /// Word file (one word per line) or glob pattern such as `dicts/*.txt`
    #[arg(long)]
    words: Option<String>,
    #[arg(long)]
    debug: bool,
}

fn setup_debug_logging() {
    let mut temp_dir = env::temp_dir();
    temp_dir.push("word-search.log");
    if let Some(log_path) = temp_dir.to_str() {
        let config = LogConfigBuilder::builder().path(log_path).build();
        if let Err(_e) = simple_log::new(config) {
            eprintln!("fail to setup log {}", log_path);
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.debug {
        setup_debug_logging();
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout());
    let mut dict = RankedDictionary::new();

    let pattern = match args.words {
        Some(pattern) => Some(pattern),
        None => menu.prompt_word_path()?,
    };
    if let Some(pattern) = pattern {
        match load_pattern(&mut dict, &pattern) {
            Ok(stats) => info!("loaded {} words from {}", stats.inserted, pattern),
            Err(e) => {
                error!("{}", e);
                menu.report(&format!("Error reading file: {}", e))?;
            }
        }
    }
    if dict.is_empty() {
        menu.report("⚠️ Dictionary is empty.")?;
    }

    menu.run(&mut dict)
}
