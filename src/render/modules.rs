use super::ViewOptions;
use crate::activity::Emotion;
use crate::app::{AppView, ModuleKind};
use chrono::Local;
use std::fmt::Write;

pub fn render_module(module: ModuleKind, view: &AppView<'_>, options: &ViewOptions) -> String {
    match module {
        ModuleKind::EmotionMap => emotion_map(),
        ModuleKind::SmartBreak => smart_break(),
        ModuleKind::ZenRoom => zen_room(),
        ModuleKind::Mission5 => mission_5(),
        ModuleKind::HappyWeek => happy_week(),
        ModuleKind::Statistics => statistics(view, options),
    }
}

fn emotion_map() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "How are you feeling right now?");
    Emotion::ALL.into_iter().for_each(|emotion| {
        let _ = writeln!(out, "  feel {:<11} {}", emotion.as_str(), emotion.label());
    });
    let _ = writeln!(out, "`data` shows everyone's check-ins.");
    out
}

fn smart_break() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Stand up, stretch your arms, roll your shoulders.");
    let _ = writeln!(out, "Look at something far away for 20 seconds.");
    let _ = writeln!(out, "Finished? `do smart-break`");
    out
}

fn zen_room() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Close your eyes and follow five slow breaths.");
    let _ = writeln!(out, "Finished? `do zen-room` then `points` to collect your reward.");
    out
}

fn mission_5() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Five minutes, one good deed.");
    let _ = writeln!(out, "Tell us what you did: `do mission <description>`");
    out
}

fn happy_week() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mon  gratitude notes     Tue  smart breaks");
    let _ = writeln!(out, "Wed  zen room            Thu  kindness missions");
    let _ = writeln!(out, "Fri  share your feelings");
    let _ = writeln!(out, "Join in with `do happy-week`, or jump to `open emotion-map`.");
    out
}

fn statistics(view: &AppView<'_>, options: &ViewOptions) -> String {
    let mut out = String::new();
    let Some(user_name) = view.session.user_name() else {
        return out;
    };

    let records = view.log.records_for_user(user_name);
    let _ = writeln!(
        out,
        "{user_name}: {} activities, ✨ {} happy points",
        records.len(),
        view.session.happy_points()
    );
    records.into_iter().for_each(|record| {
        let content = record.content.as_deref().unwrap_or("");
        if options.show_timestamps {
            let at = record.timestamp.with_timezone(&Local).format("%H:%M");
            let _ = writeln!(out, "  {at}  {:<15} {content}", record.kind.as_str());
        } else {
            let _ = writeln!(out, "  {:<15} {content}", record.kind.as_str());
        }
    });
    out
}
