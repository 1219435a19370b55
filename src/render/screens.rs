use super::ViewOptions;
use crate::activity::ActivityRecord;
use crate::app::{AppView, ModuleKind, Screen};
use chrono::Local;
use std::fmt::Write;

const MISSIONS: [&str; 4] = [
    "Say thank you to a teacher",
    "Help a classmate with homework",
    "Drink a glass of water between lessons",
    "Write down three good things about today",
];

pub fn render_screen(screen: Screen, view: &AppView<'_>, options: &ViewOptions) -> String {
    match screen {
        Screen::Home => home(view),
        Screen::EmotionData => emotion_data(view, options),
        Screen::Challenges => challenges(),
        Screen::ZenRoom => zen_room(),
        Screen::Events => events(view),
    }
}

fn home(view: &AppView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  What would you like to do today?");
    let _ = writeln!(out);

    ModuleKind::ALL.into_iter().for_each(|module| {
        let _ = writeln!(out, "    open {:<12} {}", module.as_str(), module.title());
    });

    let _ = writeln!(out);
    if view.log.is_empty() {
        let _ = writeln!(out, "  Nothing recorded yet.");
        return out;
    }

    let _ = writeln!(
        out,
        "  {} activities recorded, {} emotion check-ins",
        view.log.len(),
        view.log.emotion_records().len()
    );

    if let Some(record) = view.log.last() {
        let _ = writeln!(
            out,
            "  Latest: {} ({})",
            record.content.as_deref().unwrap_or(record.kind.as_str()),
            record.user_name
        );
    }
    out
}

fn emotion_data(view: &AppView<'_>, options: &ViewOptions) -> String {
    let records = view.log.emotion_records();
    let mut out = String::new();

    if records.is_empty() {
        let _ = writeln!(out, "  No emotions recorded yet. Try `open emotion-map`.");
        return out;
    }

    let _ = writeln!(out, "  Emotion check-ins ({})", records.len());
    records.into_iter().for_each(|record| {
        let _ = writeln!(out, "    {}", emotion_line(record, options));
    });
    out
}

fn emotion_line(record: &ActivityRecord, options: &ViewOptions) -> String {
    let label = record
        .emotion
        .map(|emotion| emotion.label())
        .unwrap_or("-");

    if options.show_timestamps {
        let at = record.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        format!("{at}  {:<12} {label}", record.user_name)
    } else {
        format!("{:<12} {label}", record.user_name)
    }
}

fn challenges() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Kindness challenges");
    MISSIONS.iter().enumerate().for_each(|(index, mission)| {
        let _ = writeln!(out, "    {}. {mission}", index + 1);
    });
    let _ = writeln!(out);
    let _ = writeln!(out, "  Done one? `do mission <what you did>`");
    out
}

fn zen_room() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Find a quiet spot. Breathe in for 4, hold for 4, out for 4.");
    let _ = writeln!(out, "  For a guided session: `open zen-room`");
    out
}

fn events(view: &AppView<'_>) -> String {
    let students = view.log.unique_student_logins();
    let mut out = String::new();
    let _ = writeln!(out, "  Happy Week is coming! `open happy-week` for the plan.");

    if students.is_empty() {
        let _ = writeln!(out, "  Nobody has joined yet.");
    } else {
        let _ = writeln!(
            out,
            "  {} students joined: {}",
            students.len(),
            students.join(", ")
        );
    }
    out
}
