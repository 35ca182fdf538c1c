//! Boxed notice with an OK prompt.

use country_quiz::feedback::MessageState;

const PADDING: usize = 2;

/// Renders the box, or nothing at all while the message is hidden.
pub fn message_box(state: &MessageState) -> Option<String> {
    let text = state.text()?;

    let width = text.chars().count().max("[ ok ]".len()) + PADDING * 2;
    let border = format!("+{}+", "-".repeat(width));
    let line = |content: &str| {
        let fill = width - PADDING - content.chars().count();
        format!("|{}{}{}|", " ".repeat(PADDING), content, " ".repeat(fill))
    };

    Some([border.clone(), line(text), line("[ ok ]"), border].join("\n"))
}
