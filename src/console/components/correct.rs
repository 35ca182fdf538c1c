use country_quiz::feedback::CorrectAnimation;

pub fn correct_banner(animation: &CorrectAnimation) -> Option<&'static str> {
    animation.is_showing().then_some(">>> CORRECT! <<<")
}
