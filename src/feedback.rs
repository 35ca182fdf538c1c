//! Presentational state shared by the features: a dismissible message box and
//! a self-hiding success animation.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageState {
    #[default]
    Hidden,
    Visible(String),
}

impl MessageState {
    pub fn show(&mut self, text: impl Into<String>) {
        *self = MessageState::Visible(text.into());
    }

    /// Clears both visibility and text.
    pub fn dismiss(&mut self) {
        *self = MessageState::Hidden;
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            MessageState::Hidden => None,
            MessageState::Visible(text) => Some(text),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, MessageState::Visible(_))
    }
}

/// Each `show` gets a fresh token; a hide request only lands if it carries the
/// token of the animation currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectAnimation {
    Hidden { last_token: u64 },
    Showing { token: u64 },
}

impl Default for CorrectAnimation {
    fn default() -> Self {
        CorrectAnimation::Hidden { last_token: 0 }
    }
}

impl CorrectAnimation {
    pub fn show(&mut self) -> u64 {
        let token = match *self {
            CorrectAnimation::Hidden { last_token } => last_token + 1,
            CorrectAnimation::Showing { token } => token + 1,
        };
        *self = CorrectAnimation::Showing { token };
        token
    }

    /// Returns whether the animation was actually hidden.
    pub fn elapsed(&mut self, token: u64) -> bool {
        match *self {
            CorrectAnimation::Showing { token: current } if current == token => {
                *self = CorrectAnimation::Hidden { last_token: current };
                true
            }
            _ => false,
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self, CorrectAnimation::Showing { .. })
    }
}
