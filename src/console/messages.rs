use country_quiz::api::ApiResult;
use country_quiz::effect::Ticket;
use country_quiz::lookup::LookupMessage;
use country_quiz::quiz::QuizMessage;

// ============================================================================
// Root Message - Aggregates all message types
// ============================================================================

#[derive(Debug, Clone)]
pub enum RootMessage {
    // Feature messages
    Lookup(LookupMessage),
    Quiz(QuizMessage),

    // Worker results, routed by the ticket's feature
    Fetched(Ticket, ApiResult),

    // Session control
    DismissMessages,
    Help,
    Unrecognized(String),
    Quit,
}

impl RootMessage {
    pub fn lookup(message: LookupMessage) -> Self {
        Self::Lookup(message)
    }

    pub fn quiz(message: QuizMessage) -> Self {
        Self::Quiz(message)
    }
}
