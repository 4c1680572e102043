// ABOUTME: REPL driver that reads a line, hands it to the core, and prints the result

use lispy::builtins::register_builtins;
use lispy::driver::{parse_and_eval, print};
use lispy::env::Environment;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

const WELCOME_MESSAGE: &str = "Lispy Version 0.1.0";
const WELCOME_SUBTITLE: &str = "Press Ctrl+C or Ctrl+D to exit";
const PROMPT: &str = "lispy> ";
const HISTORY_FILE: &str = ".lispy_history";

fn main() {
    let env = Environment::new();
    register_builtins(&env);

    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), rustyline::history::DefaultHistory> =
        Editor::with_config(config).expect("failed to initialize line editor");
    let _ = rl.load_history(HISTORY_FILE);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_and_eval(&env, &line) {
                    Ok(value) => println!("{}", print(&value)),
                    Err(diagnostic) => println!("{}", diagnostic),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
}
