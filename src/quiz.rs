//! The country guessing quiz.
//!
//! Quiz state is a handful of orthogonal pieces (target, mode, region filter,
//! guess, streak, message box, animation). Every transition returns the
//! effects it needs; fetch results come back through [`QuizMessage::TargetLoaded`].

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::api::{ApiResult, Query};
use crate::effect::{pick_random, Effect, Feature, RequestSeq, Ticket, CORRECT_ANIMATION};
use crate::feedback::{CorrectAnimation, MessageState};
use crate::model::{CountryRecord, QuizMode, RegionFilter};

pub const NO_TARGET: &str = "Please get a random country first!";
pub const WRONG_GUESS: &str = "WRONG, keep trying or give up if you can't get it";
pub const GIVE_UP_NO_TARGET: &str = "You must first click the button to get a random country";
pub const LOAD_FAILED: &str = "Failed to load quiz country. Please try again.";

#[derive(Debug, Clone)]
pub enum QuizMessage {
    NewTarget,
    RegionSelected(RegionFilter),
    ToggleMode,
    GuessChanged(String),
    SubmitGuess,
    GiveUp,
    DismissMessage,
    CorrectAnimationElapsed(u64),
    TargetLoaded(Ticket, ApiResult),
}

/// What the quiz currently asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    Flag(&'a str),
    /// Flags mode, but the target has no flag glyph. Image links name the
    /// country code, so they are never shown as a quiz prompt.
    NoFlag,
    Capital(&'a str),
    /// Capitals mode, but the target has no capital on record.
    NoCapital,
}

/// Case-insensitive exact comparison. Surrounding whitespace is significant.
pub fn is_correct_guess(guess: &str, common_name: &str) -> bool {
    guess.to_lowercase() == common_name.to_lowercase()
}

pub struct QuizState {
    target: Option<CountryRecord>,
    mode: QuizMode,
    region: RegionFilter,
    guess: String,
    score: u32,
    message: MessageState,
    animation: CorrectAnimation,
    requests: RequestSeq,
    rng: StdRng,
}

impl QuizState {
    pub fn new(region: RegionFilter, mode: QuizMode, rng: StdRng) -> Self {
        Self {
            target: None,
            mode,
            region,
            guess: String::new(),
            score: 0,
            message: MessageState::default(),
            animation: CorrectAnimation::default(),
            requests: RequestSeq::default(),
            rng,
        }
    }

    /// Initial target acquisition.
    pub fn mount(&mut self) -> Vec<Effect> {
        vec![self.acquire_target()]
    }

    pub fn update(&mut self, message: QuizMessage) -> Vec<Effect> {
        match message {
            QuizMessage::NewTarget => vec![self.acquire_target()],
            QuizMessage::RegionSelected(region) => self.select_region(region),
            QuizMessage::ToggleMode => {
                self.mode = self.mode.toggled();
                vec![]
            }
            QuizMessage::GuessChanged(guess) => {
                self.guess = guess;
                vec![]
            }
            QuizMessage::SubmitGuess => self.evaluate_guess(),
            QuizMessage::GiveUp => self.give_up(),
            QuizMessage::DismissMessage => {
                self.message.dismiss();
                vec![]
            }
            QuizMessage::CorrectAnimationElapsed(token) => {
                self.animation.elapsed(token);
                vec![]
            }
            QuizMessage::TargetLoaded(ticket, result) => {
                self.target_loaded(ticket, result);
                vec![]
            }
        }
    }

    /// Sets the guess field to `text` and evaluates it.
    pub fn submit_guess(&mut self, text: impl Into<String>) -> Vec<Effect> {
        self.guess = text.into();
        self.evaluate_guess()
    }

    pub fn give_up(&mut self) -> Vec<Effect> {
        match &self.target {
            Some(target) => {
                info!(answer = target.common_name(), score = self.score, "gave up");
                self.message.show(format!("The correct answer was {}", target.common_name()));
            }
            None => self.message.show(GIVE_UP_NO_TARGET),
        }

        self.score = 0;
        self.guess.clear();
        vec![self.acquire_target()]
    }

    /// Replaces the region filter. Picking the filter already in place is not
    /// a change and fetches nothing.
    pub fn select_region(&mut self, region: RegionFilter) -> Vec<Effect> {
        if region == self.region {
            return vec![];
        }

        info!(%region, "region changed");
        self.region = region;
        vec![self.acquire_target()]
    }

    fn evaluate_guess(&mut self) -> Vec<Effect> {
        let Some(target) = &self.target else {
            self.message.show(NO_TARGET);
            return vec![];
        };

        if is_correct_guess(&self.guess, target.common_name()) {
            self.score += 1;
            info!(answer = target.common_name(), score = self.score, "correct guess");
            let token = self.animation.show();
            self.guess.clear();
            vec![
                Effect::HideCorrectAfter {
                    token,
                    delay: CORRECT_ANIMATION,
                },
                self.acquire_target(),
            ]
        } else {
            debug!(guess = %self.guess, "wrong guess");
            self.message.show(WRONG_GUESS);
            self.score = 0;
            vec![]
        }
    }

    fn acquire_target(&mut self) -> Effect {
        let ticket = self.requests.issue(Feature::Quiz);
        let query = match self.region {
            RegionFilter::All => Query::All,
            RegionFilter::Only(region) => Query::Region(region),
        };
        Effect::Fetch { ticket, query }
    }

    fn target_loaded(&mut self, ticket: Ticket, result: ApiResult) {
        if !self.requests.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale quiz response");
            return;
        }

        match result.map(|records| pick_random(&records, &mut self.rng)) {
            Ok(Some(target)) => {
                info!(target = target.common_name(), region = %self.region, "new quiz target");
                self.target = Some(target);
            }
            Ok(None) => {
                warn!(region = %self.region, "no countries to pick from");
                self.message.show(LOAD_FAILED);
                self.target = None;
            }
            Err(e) => {
                warn!(%e, "failed to fetch quiz country");
                self.message.show(LOAD_FAILED);
                self.target = None;
            }
        }
    }

    pub fn prompt(&self) -> Option<Prompt<'_>> {
        let target = self.target.as_ref()?;

        Some(match self.mode {
            QuizMode::Flags if target.flag.is_empty() => Prompt::NoFlag,
            QuizMode::Flags => Prompt::Flag(&target.flag),
            QuizMode::Capitals => match target.first_capital() {
                Some(capital) => Prompt::Capital(capital),
                None => Prompt::NoCapital,
            },
        })
    }

    pub fn target(&self) -> Option<&CountryRecord> {
        self.target.as_ref()
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn region(&self) -> RegionFilter {
        self.region
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> &MessageState {
        &self.message
    }

    pub fn animation(&self) -> &CorrectAnimation {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::model::{CountryName, FlagImages, NumericInput, Region};

    fn country(common: &str, capital: &[&str]) -> CountryRecord {
        CountryRecord {
            name: CountryName {
                common: common.to_string(),
                official: common.to_string(),
                native_name: None,
            },
            flag: "🏳".to_string(),
            flags: None,
            population: NumericInput::Integer(1),
            capital: capital.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn loaded(quiz: &mut QuizState, effects: Vec<Effect>, records: Vec<CountryRecord>) {
        let ticket = effects
            .iter()
            .find_map(|e| match e {
                Effect::Fetch { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap();
        quiz.update(QuizMessage::TargetLoaded(ticket, Ok(records)));
    }

    fn quiz_with(target: CountryRecord, mode: QuizMode) -> QuizState {
        let mut quiz = QuizState::new(RegionFilter::All, mode, StdRng::seed_from_u64(1));
        let effects = quiz.mount();
        loaded(&mut quiz, effects, vec![target]);
        quiz
    }

    #[test]
    fn comparison_ignores_case_only() {
        assert!(is_correct_guess("france", "France"));
        assert!(is_correct_guess("FRANCE", "France"));
        assert!(!is_correct_guess(" france", "France"));
        assert!(!is_correct_guess("france ", "France"));
        assert!(!is_correct_guess("fran", "France"));
        assert!(!is_correct_guess("cote d'ivoire", "Côte d'Ivoire"));
        assert!(is_correct_guess("côte d'ivoire", "Côte d'Ivoire"));
    }

    #[test]
    fn mount_fetches_for_current_region() {
        let mut quiz = QuizState::new(RegionFilter::Only(Region::Asia), QuizMode::Flags, StdRng::seed_from_u64(1));
        let effects = quiz.mount();

        assert!(matches!(
            effects.as_slice(),
            [Effect::Fetch { query: Query::Region(Region::Asia), .. }]
        ));
    }

    #[test]
    fn capital_prompt() {
        let quiz = quiz_with(country("France", &["Paris"]), QuizMode::Capitals);
        assert_eq!(quiz.prompt(), Some(Prompt::Capital("Paris")));

        let quiz = quiz_with(country("Japan", &[]), QuizMode::Capitals);
        assert_eq!(quiz.prompt(), Some(Prompt::NoCapital));
    }

    #[test]
    fn flag_prompt() {
        let quiz = quiz_with(country("France", &["Paris"]), QuizMode::Flags);
        assert_eq!(quiz.prompt(), Some(Prompt::Flag("🏳")));
    }

    #[test]
    fn flag_prompt_never_shows_image_link() {
        let mut france = country("France", &["Paris"]);
        france.flag.clear();
        france.flags = Some(FlagImages {
            png: Some("https://flagcdn.com/w320/fr.png".to_string()),
            svg: Some("https://flagcdn.com/fr.svg".to_string()),
            alt: None,
        });

        let quiz = quiz_with(france, QuizMode::Flags);
        assert_eq!(quiz.prompt(), Some(Prompt::NoFlag));
    }

    #[test]
    fn no_prompt_without_target() {
        let quiz = QuizState::new(RegionFilter::All, QuizMode::Capitals, StdRng::seed_from_u64(1));
        assert_eq!(quiz.prompt(), None);
    }

    #[test]
    fn toggle_mode_fetches_nothing() {
        let mut quiz = quiz_with(country("France", &["Paris"]), QuizMode::Flags);
        assert!(quiz.update(QuizMessage::ToggleMode).is_empty());
        assert_eq!(quiz.mode(), QuizMode::Capitals);
        assert_eq!(quiz.target().unwrap().common_name(), "France");
    }

    #[test]
    fn stale_target_is_discarded() {
        let mut quiz = QuizState::new(RegionFilter::All, QuizMode::Flags, StdRng::seed_from_u64(1));
        let first = quiz.mount();
        let second = quiz.update(QuizMessage::NewTarget);

        loaded(&mut quiz, second, vec![country("Peru", &["Lima"])]);
        loaded(&mut quiz, first, vec![country("Chad", &["N'Djamena"])]);

        assert_eq!(quiz.target().unwrap().common_name(), "Peru");
    }

    #[test]
    fn empty_collection_clears_target() {
        let mut quiz = quiz_with(country("France", &["Paris"]), QuizMode::Flags);
        let effects = quiz.update(QuizMessage::NewTarget);
        loaded(&mut quiz, effects, vec![]);

        assert!(quiz.target().is_none());
        assert_eq!(quiz.message().text(), Some(LOAD_FAILED));
    }
}
