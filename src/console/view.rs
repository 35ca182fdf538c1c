//! Text rendering of the whole session.

use std::fmt::Write;

use country_quiz::format::format_population;
use country_quiz::lookup::LookupState;
use country_quiz::model::{QuizMode, RegionFilter};
use country_quiz::quiz::{Prompt, QuizState};

use crate::console::components::{correct_banner, message_box};
use crate::console::state::RootState;

pub const NO_CAPITAL: &str = "No capital data available.";
pub const NO_FLAG: &str = "No flag available, switch to capitals with \"mode\".";

pub fn view(state: &RootState) -> String {
    let mut out = String::new();

    out.push_str(&lookup_view(&state.lookup));
    out.push('\n');
    out.push_str(&quiz_view(&state.quiz));

    if let Some(notice) = &state.notice {
        out.push('\n');
        out.push_str(notice);
        out.push('\n');
    }

    out
}

fn lookup_view(lookup: &LookupState) -> String {
    let mut out = String::from("=== Country Lookup ===\n");

    if let Some(country) = lookup.record() {
        let _ = writeln!(out, "{}", country.name.common);
        let _ = writeln!(out, "{}", country.name.official);

        if let Some(native) = &country.name.native_name {
            out.push_str("Native Names:\n");
            for (lang, names) in native {
                let _ = writeln!(out, "  {}: {} ({})", lang.to_uppercase(), names.common, names.official);
            }
        }

        if let Some(flag) = country.flag_display() {
            let _ = writeln!(out, "{flag}");
        }
        let _ = writeln!(out, "Population of {}", format_population(&country.population));
    } else if !lookup.query().is_empty() {
        let _ = writeln!(out, "(nothing to show for \"{}\")", lookup.query());
    }

    if let Some(message) = message_box(lookup.message()) {
        let _ = writeln!(out, "{message}");
    }

    out
}

fn quiz_view(quiz: &QuizState) -> String {
    let mut out = String::from("=== Country Quiz ===\n");

    let _ = writeln!(out, "Region: {}", quiz.region());
    let scope = match quiz.region() {
        RegionFilter::All => String::new(),
        region => format!("{region} "),
    };
    let _ = match quiz.mode() {
        QuizMode::Flags => writeln!(out, "Testing your {scope}flag knowledge!"),
        QuizMode::Capitals => writeln!(out, "Testing your {scope}capital city knowledge!"),
    };

    match quiz.prompt() {
        Some(Prompt::Flag(flag)) => {
            let _ = writeln!(out, "\n    {flag}\n");
        }
        Some(Prompt::NoFlag) => {
            let _ = writeln!(out, "\n    {NO_FLAG}\n");
        }
        Some(Prompt::Capital(capital)) => {
            let _ = writeln!(out, "\n    {capital}\n");
        }
        Some(Prompt::NoCapital) => {
            let _ = writeln!(out, "\n    {NO_CAPITAL}\n");
        }
        None => out.push_str("\n    (no country yet, type \"new\")\n\n"),
    }

    if !quiz.guess().is_empty() {
        let _ = writeln!(out, "Your guess: {}", quiz.guess());
    }
    let _ = writeln!(out, "Score (in a row): {}", quiz.score());

    if let Some(banner) = correct_banner(quiz.animation()) {
        let _ = writeln!(out, "{banner}");
    }
    if let Some(message) = message_box(quiz.message()) {
        let _ = writeln!(out, "{message}");
    }

    out
}
