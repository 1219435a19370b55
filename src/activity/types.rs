use anyhow::{Error, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "student_login")]
    StudentLogin,
    #[serde(rename = "emotion_record")]
    EmotionRecord,
    #[serde(rename = "smart-break")]
    SmartBreak,
    #[serde(rename = "zen-room")]
    ZenRoom,
    #[serde(rename = "emotion")]
    Emotion,
    #[serde(rename = "mission")]
    Mission,
    #[serde(rename = "happy-week")]
    HappyWeek,
}

impl ActivityType {
    pub const ALL: [ActivityType; 7] = [
        ActivityType::StudentLogin,
        ActivityType::EmotionRecord,
        ActivityType::SmartBreak,
        ActivityType::ZenRoom,
        ActivityType::Emotion,
        ActivityType::Mission,
        ActivityType::HappyWeek,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::StudentLogin => "student_login",
            ActivityType::EmotionRecord => "emotion_record",
            ActivityType::SmartBreak => "smart-break",
            ActivityType::ZenRoom => "zen-room",
            ActivityType::Emotion => "emotion",
            ActivityType::Mission => "mission",
            ActivityType::HappyWeek => "happy-week",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = Error;

    // Accepts both separators so `smart_break` and `student-login` resolve too.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase().replace('_', "-");

        match normalized.as_str() {
            "student-login" => Ok(ActivityType::StudentLogin),
            "emotion-record" => Ok(ActivityType::EmotionRecord),
            "smart-break" => Ok(ActivityType::SmartBreak),
            "zen-room" => Ok(ActivityType::ZenRoom),
            "emotion" => Ok(ActivityType::Emotion),
            "mission" => Ok(ActivityType::Mission),
            "happy-week" => Ok(ActivityType::HappyWeek),
            _ => bail!(
                "Unknown activity type: {raw}. Expected one of: {}",
                ActivityType::ALL.map(ActivityType::as_str).join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emotion {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    Stressed,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::VeryHappy,
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Stressed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::VeryHappy => "very-happy",
            Emotion::Happy => "happy",
            Emotion::Neutral => "neutral",
            Emotion::Sad => "sad",
            Emotion::Stressed => "stressed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::VeryHappy => "😄 Very happy",
            Emotion::Happy => "🙂 Happy",
            Emotion::Neutral => "😐 Neutral",
            Emotion::Sad => "😢 Sad",
            Emotion::Stressed => "😣 Stressed",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase().replace('_', "-");

        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str() == normalized)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown emotion: {raw}. Expected one of: {}",
                    Emotion::ALL.map(Emotion::as_str).join(", ")
                )
            })
    }
}
