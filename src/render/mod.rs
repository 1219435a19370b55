mod modules;
mod screens;

use crate::app::{AppView, ModuleKind, Screen};
use crate::config::Config;
use std::fmt::Write;

pub use modules::render_module;
pub use screens::render_screen;

const RULE: &str = "──────────────────────────────────────────";

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub school_name: String,
    pub show_timestamps: bool,
}

impl From<&Config> for ViewOptions {
    fn from(config: &Config) -> Self {
        Self {
            school_name: config.school_name.clone(),
            show_timestamps: config.show_timestamps,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

pub fn render_login(options: &ViewOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {}", options.school_name);
    let _ = writeln!(out, "  Welcome! Tell us your name to begin.");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  login <name>");
    out
}

pub fn render_frame(view: &AppView<'_>, options: &ViewOptions) -> String {
    let Some(user_name) = view.session.user_name() else {
        return with_notifications(render_login(options), view);
    };

    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "  {}  |  {user_name}  |  ✨ {} happy points",
        options.school_name,
        view.session.happy_points()
    );
    let _ = writeln!(out, "  {}", render_tabs(view.screen));
    let _ = writeln!(out, "{RULE}");
    out.push_str(&render_screen(view.screen, view, options));

    if let Some(module) = view.module {
        out.push_str(&render_overlay(module, view, options));
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  © 2025 {}", options.school_name);

    with_notifications(out, view)
}

fn render_tabs(active: Screen) -> String {
    Screen::ALL
        .into_iter()
        .map(|screen| {
            if screen == active {
                format!("[{}]", screen.title())
            } else {
                screen.title().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_overlay(module: ModuleKind, view: &AppView<'_>, options: &ViewOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  ┌─ {} ─ (close)", module.title());
    render_module(module, view, options)
        .lines()
        .for_each(|line| {
            let _ = writeln!(out, "  │ {line}");
        });
    let _ = writeln!(out, "  └─");
    out
}

fn with_notifications(mut out: String, view: &AppView<'_>) -> String {
    view.notifications.iter().for_each(|notification| {
        let _ = writeln!(out, "  🔔 {}", notification.message);
    });
    out
}

#[cfg(test)]
mod tests {
    use super::{ViewOptions, render_frame};
    use crate::app::{AppController, ModuleKind, Screen};
    use crate::audio::Silent;
    use crate::config::Config;
    use std::sync::Arc;

    fn controller() -> AppController {
        AppController::new(&Config::default(), Arc::new(Silent))
    }

    #[tokio::test(start_paused = true)]
    async fn shows_login_until_a_student_logs_in() {
        let mut app = controller();
        app.open_module(ModuleKind::Statistics);
        app.navigate(Screen::Events);

        let frame = render_frame(&app.view(), &ViewOptions::default());
        assert!(frame.contains("login <name>"));
        assert!(!frame.contains("Statistics"));
    }

    #[tokio::test(start_paused = true)]
    async fn frame_has_header_screen_overlay_and_toasts() {
        let mut app = controller();
        app.login("Ana");
        app.award_happy_points();
        app.open_module(ModuleKind::EmotionMap);

        let frame = render_frame(&app.view(), &ViewOptions::default());
        assert!(frame.contains("Ana"));
        assert!(frame.contains("✨ 10 happy points"));
        assert!(frame.contains("[Home]"));
        assert!(frame.contains("┌─ Emotion map"));
        assert!(frame.contains("🔔 Welcome Ana!"));
        assert!(frame.contains("© 2025 Happy Mind School"));
    }
}
