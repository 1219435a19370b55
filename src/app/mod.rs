pub mod navigation;

pub use navigation::{ModuleKind, Screen};

use crate::activity::{ActivityLog, ActivityType, Emotion};
use crate::audio::{AudioCue, AudioSink};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::notify::{Notification, NotificationQueue};
use std::sync::Arc;
use tokio::time::Duration;
use tracing::{debug, info};

pub const HAPPY_POINTS_STEP: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct Session {
    user_name: Option<String>,
    happy_points: u32,
}

impl Session {
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn happy_points(&self) -> u32 {
        self.happy_points
    }

    pub fn is_active(&self) -> bool {
        self.user_name.is_some()
    }
}

pub struct AppView<'a> {
    pub session: &'a Session,
    pub screen: Screen,
    pub module: Option<ModuleKind>,
    pub log: &'a ActivityLog,
    pub notifications: Vec<Notification>,
}

pub struct AppController {
    session: Session,
    screen: Screen,
    module: Option<ModuleKind>,
    log: ActivityLog,
    notifications: NotificationQueue,
    audio: Arc<dyn AudioSink>,
}

impl AppController {
    pub fn new(config: &Config, audio: Arc<dyn AudioSink>) -> Self {
        Self::with_clock(config, audio, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &Config, audio: Arc<dyn AudioSink>, clock: Arc<dyn Clock>) -> Self {
        let ttl = Duration::from_millis(config.notification_ttl_ms);

        Self {
            session: Session::default(),
            screen: Screen::default(),
            module: None,
            log: ActivityLog::new(Arc::clone(&clock)),
            notifications: NotificationQueue::new(clock, ttl),
            audio,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn module(&self) -> Option<ModuleKind> {
        self.module
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn view(&self) -> AppView<'_> {
        AppView {
            session: &self.session,
            screen: self.screen,
            module: self.module,
            log: &self.log,
            notifications: self.notifications.snapshot(),
        }
    }

    pub fn login(&mut self, name: &str) {
        self.session.user_name = Some(name.to_string());
        self.log.append(
            name,
            ActivityType::StudentLogin,
            Some(format!("{name} logged in.")),
        );
        info!(user = %name, "student logged in");

        self.notify(format!("Welcome {name}!"));
        self.audio.play(AudioCue::Success);
    }

    pub fn open_module(&mut self, module: ModuleKind) {
        self.module = Some(module);
        debug!(module = %module, "module opened");
        self.audio.play(AudioCue::Click);
    }

    pub fn close_module(&mut self) {
        if let Some(module) = self.module.take() {
            debug!(module = %module, "module closed");
        }
        self.audio.play(AudioCue::Click);
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        debug!(screen = %screen, "screen changed");
    }

    pub fn navigate_to(&mut self, raw: &str) {
        self.navigate(Screen::parse_or_home(raw));
    }

    pub fn record_activity(&mut self, kind: ActivityType, content: Option<String>) {
        let Some(user_name) = self.session.user_name.as_deref() else {
            debug!(kind = %kind, "activity ignored without a session");
            return;
        };

        let record = self.log.append(user_name, kind, content);
        info!(id = record.id, user = %record.user_name, kind = %kind, "activity recorded");
    }

    pub fn record_emotion(&mut self, emotion: Emotion) {
        let Some(user_name) = self.session.user_name.as_deref() else {
            debug!(emotion = %emotion, "emotion ignored without a session");
            return;
        };

        let record = self.log.append_emotion(user_name, emotion);
        info!(id = record.id, user = %record.user_name, emotion = %emotion, "emotion recorded");

        self.notify("Thank you for sharing your feelings! 😊");
        self.audio.play(AudioCue::Happy);
        self.close_module();
    }

    pub fn view_emotion_data(&mut self) {
        self.close_module();
        self.navigate(Screen::EmotionData);
    }

    pub fn award_happy_points(&mut self) {
        self.session.happy_points = self.session.happy_points.saturating_add(HAPPY_POINTS_STEP);
        info!(total = self.session.happy_points, "happy points awarded");

        self.notify(format!("You earned {HAPPY_POINTS_STEP} happy points! ✨"));
    }

    pub fn notify(&self, message: impl Into<String>) -> i64 {
        let id = self.notifications.enqueue(message);
        self.audio.play(AudioCue::Notification);
        id
    }

    pub fn dismiss_notifications(&self) -> usize {
        self.notifications
            .snapshot()
            .into_iter()
            .filter(|notification| self.notifications.remove(notification.id))
            .count()
    }

    pub fn shutdown(&self) {
        self.notifications.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::{AppController, ModuleKind, Screen};
    use crate::activity::{ActivityType, Emotion};
    use crate::audio::{AudioCue, RecordingSink};
    use crate::clock::ManualClock;
    use crate::config::Config;
    use std::sync::Arc;
    use tokio::time::{Duration, sleep};

    fn controller() -> (AppController, Arc<RecordingSink>) {
        let audio = Arc::new(RecordingSink::default());
        let clock = Arc::new(ManualClock::at("2025-03-01T08:00:00Z"));
        let controller = AppController::with_clock(&Config::default(), audio.clone(), clock);
        (controller, audio)
    }

    #[tokio::test(start_paused = true)]
    async fn activities_without_session_are_ignored() {
        let (mut app, _) = controller();

        app.record_activity(ActivityType::Mission, Some("tidy the classroom".to_string()));
        app.record_activity(ActivityType::ZenRoom, None);
        app.record_emotion(Emotion::Happy);

        assert!(app.log().is_empty());
        assert!(app.view().notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn login_records_and_welcomes_the_student() {
        let (mut app, audio) = controller();
        app.login("Ana");

        let last = app.log().last().expect("login record");
        assert_eq!(last.kind, ActivityType::StudentLogin);
        assert_eq!(last.user_name, "Ana");
        assert_eq!(last.content.as_deref(), Some("Ana logged in."));
        assert_eq!(app.session().user_name(), Some("Ana"));

        let messages = app
            .view()
            .notifications
            .into_iter()
            .map(|notification| notification.message)
            .collect::<Vec<_>>();
        assert_eq!(messages, vec!["Welcome Ana!"]);
        assert_eq!(audio.cues(), vec![AudioCue::Notification, AudioCue::Success]);
    }

    #[tokio::test(start_paused = true)]
    async fn logging_in_twice_creates_two_records() {
        let (mut app, _) = controller();
        app.login("Ana");
        app.login("Ana");

        assert_eq!(app.log().len(), 2);
        assert_eq!(app.log().unique_student_logins(), vec!["Ana"]);
    }

    #[tokio::test(start_paused = true)]
    async fn recording_an_emotion_closes_the_module() {
        let (mut app, audio) = controller();
        app.login("Ana");
        app.open_module(ModuleKind::EmotionMap);
        let before = app.log().emotion_records().len();

        app.record_emotion(Emotion::Sad);

        let last = app.log().last().expect("emotion record").clone();
        assert_eq!(last.kind, ActivityType::EmotionRecord);
        assert_eq!(last.emotion, Some(Emotion::Sad));
        assert_eq!(app.module(), None);

        let emotions = app.log().emotion_records();
        assert_eq!(emotions.len(), before + 1);
        assert_eq!(emotions.last().copied(), Some(&last));
        assert!(audio.cues().ends_with(&[
            AudioCue::Notification,
            AudioCue::Happy,
            AudioCue::Click
        ]));
    }

    #[tokio::test(start_paused = true)]
    async fn happy_points_accumulate_with_a_notification_each() {
        let (mut app, _) = controller();
        let before = app.session().happy_points();

        app.award_happy_points();
        app.award_happy_points();
        app.award_happy_points();

        assert_eq!(app.session().happy_points(), before + 30);
        assert_eq!(app.view().notifications.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn closing_without_a_module_changes_nothing() {
        let (mut app, _) = controller();
        app.login("Ana");
        app.navigate(Screen::Challenges);
        let records = app.log().len();

        app.close_module();

        assert_eq!(app.module(), None);
        assert_eq!(app.screen(), Screen::Challenges);
        assert_eq!(app.log().len(), records);
    }

    #[tokio::test(start_paused = true)]
    async fn screen_and_module_are_independent() {
        let (mut app, _) = controller();
        app.login("Ana");

        app.open_module(ModuleKind::Statistics);
        app.navigate_to("events");
        assert_eq!(app.screen(), Screen::Events);
        assert_eq!(app.module(), Some(ModuleKind::Statistics));

        app.navigate_to("playground");
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.module(), Some(ModuleKind::Statistics));
    }

    #[tokio::test(start_paused = true)]
    async fn view_emotion_data_closes_module_and_navigates() {
        let (mut app, _) = controller();
        app.login("Ana");
        app.open_module(ModuleKind::EmotionMap);

        app.view_emotion_data();

        assert_eq!(app.module(), None);
        assert_eq!(app.screen(), Screen::EmotionData);
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_clears_notifications_now() {
        let (mut app, _) = controller();
        app.login("Ana");
        app.award_happy_points();

        assert_eq!(app.dismiss_notifications(), 2);
        assert!(app.view().notifications.is_empty());
        assert_eq!(app.dismiss_notifications(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn welcome_notification_expires_but_the_log_stays() {
        let (mut app, _) = controller();
        app.login("Ana");

        sleep(Duration::from_millis(3_001)).await;
        tokio::task::yield_now().await;

        assert!(app.view().notifications.is_empty());
        assert_eq!(app.log().len(), 1);
    }
}
