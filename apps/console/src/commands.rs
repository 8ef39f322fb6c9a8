//! Line commands typed at the console prompt.

use navigation::{Event, Selection};

pub const USAGE: &str = "commands: search <name> | <name> | semester [id] | class [id] | back | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(Event),
    Help,
    Quit,
    /// A keyword used with the wrong arguments.
    Invalid(String),
}

/// A line is a keyword command when its first word is a keyword; any other
/// line is a name to search for.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "search" => submit(rest),
        "semester" => match single_arg(rest) {
            Some(value) => Command::Apply(Event::SelectSemester(Selection::from_value(value))),
            None => Command::Invalid(line.to_string()),
        },
        "class" => match single_arg(rest) {
            Some(value) => Command::Apply(Event::SelectClass(Selection::from_value(value))),
            None => Command::Invalid(line.to_string()),
        },
        "back" if rest.is_empty() => Command::Apply(Event::Back),
        "help" if rest.is_empty() => Command::Help,
        "quit" | "exit" if rest.is_empty() => Command::Quit,
        "back" | "help" | "quit" | "exit" => Command::Invalid(line.to_string()),
        _ => submit(line),
    }
}

fn submit(name: &str) -> Command {
    Command::Apply(Event::Submit { name: name.into() })
}

/// Zero or one whitespace-free argument. Empty means the placeholder.
fn single_arg(rest: &str) -> Option<&str> {
    if rest.split_whitespace().count() > 1 {
        None
    } else {
        Some(rest)
    }
}
