//! Message handlers for the console session.
//!
//! Each handler updates state and hands back the effects the worker should
//! run next.

use country_quiz::effect::{Effect, Feature};
use country_quiz::lookup::LookupMessage;
use country_quiz::quiz::QuizMessage;
use tracing::debug;

use crate::console::input::HELP;
use crate::console::messages::RootMessage;
use crate::console::state::RootState;

/// Result of handling a root message
#[derive(Debug)]
pub enum HandleResult {
    /// Keep going, running these effects
    Continue(Vec<Effect>),
    /// The user asked to leave
    Quit,
}

pub fn handle_message(state: &mut RootState, message: RootMessage) -> HandleResult {
    state.notice = None;

    let effects = match message {
        RootMessage::Lookup(message) => state.lookup.update(message),
        RootMessage::Quiz(message) => state.quiz.update(message),

        RootMessage::Fetched(ticket, result) => {
            debug!(?ticket, ok = result.is_ok(), "response arrived");
            match ticket.feature {
                Feature::Lookup => state.lookup.update(LookupMessage::Loaded(ticket, result)),
                Feature::Quiz => state.quiz.update(QuizMessage::TargetLoaded(ticket, result)),
            }
        }

        RootMessage::DismissMessages => {
            state.lookup.update(LookupMessage::DismissMessage);
            state.quiz.update(QuizMessage::DismissMessage)
        }

        RootMessage::Help => {
            state.notice = Some(HELP.to_string());
            vec![]
        }

        RootMessage::Unrecognized(reason) => {
            state.notice = Some(format!("{reason} (type \"help\" for the list of commands)"));
            vec![]
        }

        RootMessage::Quit => return HandleResult::Quit,
    };

    HandleResult::Continue(effects)
}
