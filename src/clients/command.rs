use directory::{
    directory::overlay::OverlayInput,
    model::event::{CloseReason, Direction},
};

/// One line of terminal input.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// `/text` or `search text`. An empty query clears the filter.
    Search(String),
    /// 1-based position of a visible card
    Open(usize),
    /// Anything else goes to the detail overlay as a key press
    Key(String),
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();

        if line.is_empty() {
            return None;
        }

        if let Some(query) = line.strip_prefix('/') {
            return Some(Command::Search(query.trim().to_string()));
        }

        if line == "search" {
            return Some(Command::Search(String::new()));
        }

        if let Some(query) = line.strip_prefix("search ") {
            return Some(Command::Search(query.trim().to_string()));
        }

        let position = line.strip_prefix("open ").unwrap_or(line).trim();
        if let Ok(position) = position.parse::<usize>() {
            return Some(Command::Open(position));
        }

        let command = match line {
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            key => Command::Key(key.to_string()),
        };

        Some(command)
    }
}

/// Terminal spellings of the overlay keys, registered next to the
/// `ArrowRight` / `ArrowLeft` / `Escape` defaults.
pub const KEY_ALIASES: [(&str, OverlayInput); 8] = [
    ("n", OverlayInput::Navigate(Direction::Next)),
    ("next", OverlayInput::Navigate(Direction::Next)),
    ("p", OverlayInput::Navigate(Direction::Previous)),
    ("prev", OverlayInput::Navigate(Direction::Previous)),
    ("esc", OverlayInput::Close(CloseReason::CancelKey)),
    ("escape", OverlayInput::Close(CloseReason::CancelKey)),
    ("x", OverlayInput::Close(CloseReason::CloseControl)),
    ("close", OverlayInput::Close(CloseReason::CloseControl)),
];

pub const HELP: &str = "\
Commands:
  /<text>, search <text>   filter by name (/ alone clears the filter)
  <n>, open <n>            show details for card n
  list                     show the cards again
  help                     show this help
  quit                     leave
While a card is open:
  n, next, ArrowRight      next person
  p, prev, ArrowLeft       previous person
  x, close                 close the details
  esc, Escape              close the details";
