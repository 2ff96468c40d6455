use std::io::{self, BufRead, Write};

use log::warn;

/// A trait, necessary for every entity that talks to the person operating the tool:
/// blocking yes/no questions and blocking notices.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Asks on stdin, answers on stdout. With `assume_yes` every question is answered "yes".
pub struct Terminal {
    assume_yes: bool,
}

impl Terminal {
    pub fn new(assume_yes: bool) -> Self {
        Terminal { assume_yes }
    }
}

impl Prompt for Terminal {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            println!("{} [y/N] y", message);
            return true;
        }
        print!("{} [y/N] ", message);
        if let Err(e) = io::stdout().flush() {
            warn!("Unable to flush stdout: {}", e);
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"),
            Err(e) => {
                warn!("Unable to read the answer: {}", e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        println!("! {}", message);
    }
}
