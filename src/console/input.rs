//! Reads typed command lines and turns them into messages.

use std::io::{self, BufRead};
use std::thread;

use country_quiz::lookup::LookupMessage;
use country_quiz::model::RegionFilter;
use country_quiz::quiz::QuizMessage;

use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

use crate::console::messages::RootMessage;

pub const HELP: &str = "\
commands:
  lookup <name>    look up a country by name
  random           show a random country
  new              get a new quiz country
  guess <text>     guess the quiz country
  submit           guess again with the current text
  giveup           reveal the answer and start over
  mode             switch between flags and capitals
  region <name>    quiz on all, africa, americas, asia, europe or oceania
  ok               dismiss the message
  help             show this list
  quit             leave";

/// Reads lines from `reader` on a dedicated thread. The thread is detached: a
/// read blocked on a terminal never holds up runtime shutdown, and it ends
/// with the process. The stream ends after end of input or the first error.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<UnboundedReceiverStream<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel();

    thread::Builder::new().name("input".to_string()).spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if sender.send(line).is_err() || failed {
                break;
            }
        }
        debug!("input reader finished");
    })?;

    Ok(UnboundedReceiverStream::new(receiver))
}

/// Parses one input line. A line may expand to several messages, e.g.
/// `guess x` both sets the guess field and submits it.
pub fn parse(line: &str) -> Vec<RootMessage> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, rest) = match line.trim_start().split_once(' ') {
        Some((command, rest)) => (command, Some(rest)),
        None => (line.trim(), None),
    };

    match (command.to_lowercase().as_str(), rest) {
        ("", _) => vec![],
        ("lookup", Some(name)) => vec![
            RootMessage::lookup(LookupMessage::QueryChanged(name.trim().to_string())),
            RootMessage::lookup(LookupMessage::Lookup),
        ],
        ("lookup", None) => vec![RootMessage::lookup(LookupMessage::Lookup)],
        ("random", _) => vec![RootMessage::lookup(LookupMessage::Random)],
        ("new", _) => vec![RootMessage::quiz(QuizMessage::NewTarget)],
        // The guess is kept verbatim, whitespace and all
        ("guess", Some(text)) => vec![
            RootMessage::quiz(QuizMessage::GuessChanged(text.to_string())),
            RootMessage::quiz(QuizMessage::SubmitGuess),
        ],
        ("guess", None) => vec![RootMessage::Unrecognized("guess needs some text".to_string())],
        ("submit", _) => vec![RootMessage::quiz(QuizMessage::SubmitGuess)],
        ("giveup" | "give-up", _) => vec![RootMessage::quiz(QuizMessage::GiveUp)],
        ("mode", _) => vec![RootMessage::quiz(QuizMessage::ToggleMode)],
        ("region", Some(name)) => match name.parse::<RegionFilter>() {
            Ok(region) => vec![RootMessage::quiz(QuizMessage::RegionSelected(region))],
            Err(e) => vec![RootMessage::Unrecognized(e.to_string())],
        },
        ("region", None) => vec![RootMessage::Unrecognized("region needs a name".to_string())],
        ("ok" | "dismiss", _) => vec![RootMessage::DismissMessages],
        ("help" | "?", _) => vec![RootMessage::Help],
        ("quit" | "exit" | "q", _) => vec![RootMessage::Quit],
        (other, _) => vec![RootMessage::Unrecognized(format!("unknown command \"{other}\""))],
    }
}
