pub mod types;

pub use types::{ActivityType, Emotion};

use crate::clock::{Clock, MonotonicIds};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_name: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

pub struct ActivityLog {
    records: Vec<ActivityRecord>,
    ids: MonotonicIds,
    clock: Arc<dyn Clock>,
}

impl ActivityLog {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            ids: MonotonicIds::default(),
            clock,
        }
    }

    pub fn append(
        &mut self,
        user_name: &str,
        kind: ActivityType,
        content: Option<String>,
    ) -> &ActivityRecord {
        self.push(user_name, kind, content, None)
    }

    /// The only way to attach an emotion to a record.
    pub fn append_emotion(&mut self, user_name: &str, emotion: Emotion) -> &ActivityRecord {
        self.push(
            user_name,
            ActivityType::EmotionRecord,
            Some(format!("Emotion recorded: {emotion}")),
            Some(emotion),
        )
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&ActivityRecord> {
        self.records.last()
    }

    pub fn emotion_records(&self) -> Vec<&ActivityRecord> {
        self.records
            .iter()
            .filter(|record| record.kind == ActivityType::EmotionRecord)
            .collect::<Vec<_>>()
    }

    pub fn unique_student_logins(&self) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.records
            .iter()
            .filter(|record| record.kind == ActivityType::StudentLogin)
            .map(|record| record.user_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect::<Vec<_>>()
    }

    pub fn records_for_user(&self, user_name: &str) -> Vec<&ActivityRecord> {
        self.records
            .iter()
            .filter(|record| record.user_name == user_name)
            .collect::<Vec<_>>()
    }

    fn push(
        &mut self,
        user_name: &str,
        kind: ActivityType,
        content: Option<String>,
        emotion: Option<Emotion>,
    ) -> &ActivityRecord {
        let timestamp = self.clock.now();
        let record = ActivityRecord {
            id: self.ids.next(timestamp),
            timestamp,
            user_name: user_name.to_string(),
            kind,
            content,
            emotion,
        };

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivityLog, ActivityType, Emotion};
    use crate::clock::ManualClock;
    use std::sync::Arc;

    fn log() -> (ActivityLog, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at("2025-03-01T08:00:00Z"));
        (ActivityLog::new(clock.clone()), clock)
    }

    #[test]
    fn unique_logins_keep_first_occurrence_order() {
        let (mut log, _) = log();
        log.append("Ana", ActivityType::StudentLogin, None);
        log.append("Ben", ActivityType::StudentLogin, None);
        log.append("Ana", ActivityType::StudentLogin, None);

        assert_eq!(log.unique_student_logins(), vec!["Ana", "Ben"]);
    }

    #[test]
    fn unique_logins_ignore_other_activity_types() {
        let (mut log, _) = log();
        log.append("Cam", ActivityType::Mission, Some("help a friend".to_string()));
        log.append("Ana", ActivityType::StudentLogin, None);

        assert_eq!(log.unique_student_logins(), vec!["Ana"]);
    }

    #[test]
    fn emotion_records_preserve_insertion_order() {
        let (mut log, clock) = log();
        log.append_emotion("Ana", Emotion::Sad);
        clock.advance_millis(10);
        log.append("Ana", ActivityType::ZenRoom, None);
        clock.advance_millis(10);
        log.append_emotion("Ben", Emotion::VeryHappy);

        let emotions = log
            .emotion_records()
            .into_iter()
            .map(|record| (record.user_name.as_str(), record.emotion))
            .collect::<Vec<_>>();

        assert_eq!(
            emotions,
            vec![("Ana", Some(Emotion::Sad)), ("Ben", Some(Emotion::VeryHappy))]
        );
    }

    #[test]
    fn ids_and_timestamps_follow_insertion_order() {
        let (mut log, clock) = log();
        assert!(log.is_empty());
        log.append("Ana", ActivityType::StudentLogin, None);
        log.append("Ana", ActivityType::Mission, None);
        clock.advance_millis(1_500);
        log.append("Ana", ActivityType::HappyWeek, None);

        assert!(!log.is_empty());
        assert_eq!(log.len(), 3);
        let records = log.records();
        assert!(records.windows(2).all(|pair| pair[0].id < pair[1].id));
        assert!(
            records
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp)
        );
    }

    #[test]
    fn only_emotion_records_carry_an_emotion() {
        let (mut log, _) = log();
        let record = log.append("Ana", ActivityType::Emotion, Some("journal".to_string()));
        assert_eq!(record.emotion, None);

        let record = log.append_emotion("Ana", Emotion::Neutral);
        assert_eq!(record.kind, ActivityType::EmotionRecord);
        assert_eq!(record.emotion, Some(Emotion::Neutral));
        assert_eq!(record.content.as_deref(), Some("Emotion recorded: neutral"));
    }

    #[test]
    fn records_for_user_filters_by_name() {
        let (mut log, _) = log();
        log.append("Ana", ActivityType::StudentLogin, None);
        log.append("Ben", ActivityType::StudentLogin, None);
        log.append("Ana", ActivityType::SmartBreak, None);

        let kinds = log
            .records_for_user("Ana")
            .into_iter()
            .map(|record| record.kind)
            .collect::<Vec<_>>();

        assert_eq!(kinds, vec![ActivityType::StudentLogin, ActivityType::SmartBreak]);
    }

    #[test]
    fn records_serialize_with_camel_case_fields() {
        let (mut log, _) = log();
        log.append_emotion("Ana", Emotion::Happy);

        let value = serde_json::to_value(log.records()).expect("serialized");
        let record = &value[0];

        assert_eq!(record["userName"], "Ana");
        assert_eq!(record["type"], "emotion_record");
        assert_eq!(record["emotion"], "happy");
        assert_eq!(record["timestamp"], "2025-03-01T08:00:00Z");
    }
}
