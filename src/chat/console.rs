use std::io::{self, BufRead, Write};

use crate::chat::ChatBot;
use crate::config::{BOT_MARKER, EXIT_WORDS, GOODBYE, GREETING, USER_PROMPT};

/// Line-by-line chat until an exit word or end of input.
pub fn run_console<R: BufRead, W: Write>(bot: &ChatBot, mut input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "{}: {}", BOT_MARKER, GREETING)?;
    writeln!(out, "Type 'exit' to end the conversation\n")?;

    let mut line = String::new();
    loop {
        write!(out, "{}", USER_PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::info!("Input closed, ending chat");
            writeln!(out)?;
            return Ok(());
        }

        let query = line.trim();
        if EXIT_WORDS.contains(&query.to_lowercase().as_str()) {
            writeln!(out, "{}: {}", BOT_MARKER, GOODBYE)?;
            return Ok(());
        }

        let response = bot.respond(query);
        writeln!(out, "{}: {}\n", BOT_MARKER, response)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        run_console(&ChatBot::default(), Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn greets_and_exits() {
        let transcript = session("Bye\n");
        assert!(transcript.starts_with("🤖: Hey there!"));
        assert!(transcript.contains("Type 'exit' to end the conversation\n"));
        assert!(transcript.ends_with(&format!("You: 🤖: {}\n", GOODBYE)));
    }

    #[test]
    fn answers_each_line_until_exit() {
        let transcript = session("  list  \nthanks\nexit\nhello\n");
        assert!(transcript.contains("🤖: 📋 Available cryptocurrencies in my database:"));
        assert!(transcript.contains("🤖: You're welcome! Happy investing! 🚀\n\n"));
        // nothing after exit is answered
        assert!(!transcript.contains("I can help you with"));
        assert_eq!(transcript.matches("You: ").count(), 3);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let transcript = session("analyze Cardano\n");
        assert!(transcript.contains("Analysis for Cardano:"));
        assert!(!transcript.contains("Goodbye"));
    }

    #[test]
    fn exit_word_must_be_the_whole_line() {
        // routed through the dispatcher instead, which still says goodbye
        let transcript = session("ok bye then\n");
        assert!(transcript.contains(&format!("🤖: {}\n\n", GOODBYE)));
    }
}
