//! Interactive console front-end.
//!
//! Follows a message/update/view loop: typed lines and worker results become
//! [`RootMessage`]s, handlers update [`RootState`] and return effects for the
//! [`Worker`], and the whole view is printed again afterwards.

use std::io::BufReader;
use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use country_quiz::api::CountryApi;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{info, instrument, warn};

use crate::worker::Worker;

mod components;
mod handlers;
mod input;
pub mod messages;
mod state;
mod view;

use handlers::{handle_message, HandleResult};
use messages::RootMessage;
pub use state::Config;
use state::RootState;

#[instrument(skip(api))]
pub async fn run(api: Arc<dyn CountryApi>, config: Config) -> color_eyre::Result<()> {
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let mut worker = Worker::new(api, sender);
    let mut state = RootState::new(config);

    worker.run(state.mount());
    println!("{}", input::HELP);
    println!();
    print!("{}", view::view(&state));

    let mut lines =
        input::spawn_line_reader(BufReader::new(std::io::stdin())).wrap_err("failed to start input reader")?;

    loop {
        let messages = tokio::select! {
            line = lines.next() => match line {
                Some(Ok(line)) => input::parse(&line),
                Some(Err(e)) => {
                    return Err(e).wrap_err("failed to read input");
                }
                None => vec![RootMessage::Quit],
            },

            message = receiver.recv() => message.into_iter().collect(),

            _ = tokio::signal::ctrl_c() => {
                warn!("interrupted");
                vec![RootMessage::Quit]
            }
        };

        if messages.is_empty() {
            continue;
        }

        for message in messages {
            match handle_message(&mut state, message) {
                HandleResult::Continue(effects) => worker.run(effects),
                HandleResult::Quit => {
                    info!(score = state.quiz.score(), "leaving");
                    return Ok(());
                }
            }
        }

        println!();
        print!("{}", view::view(&state));
    }
}
