use anyhow::{Error, anyhow};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    EmotionData,
    Challenges,
    ZenRoom,
    Events,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::EmotionData,
        Screen::Challenges,
        Screen::ZenRoom,
        Screen::Events,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::EmotionData => "emotion-data",
            Screen::Challenges => "challenges",
            Screen::ZenRoom => "zen-room",
            Screen::Events => "events",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::EmotionData => "Emotion data",
            Screen::Challenges => "Challenges",
            Screen::ZenRoom => "Zen room",
            Screen::Events => "Events",
        }
    }

    /// Unrecognised names land on the home screen instead of failing.
    pub fn parse_or_home(raw: &str) -> Screen {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase().replace('_', "-");

        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == normalized)
            .ok_or_else(|| anyhow!("Unknown screen: {raw}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    SmartBreak,
    ZenRoom,
    EmotionMap,
    Mission5,
    HappyWeek,
    Statistics,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 6] = [
        ModuleKind::SmartBreak,
        ModuleKind::ZenRoom,
        ModuleKind::EmotionMap,
        ModuleKind::Mission5,
        ModuleKind::HappyWeek,
        ModuleKind::Statistics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::SmartBreak => "smart-break",
            ModuleKind::ZenRoom => "zen-room",
            ModuleKind::EmotionMap => "emotion-map",
            ModuleKind::Mission5 => "mission-5",
            ModuleKind::HappyWeek => "happy-week",
            ModuleKind::Statistics => "statistics",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ModuleKind::SmartBreak => "Smart break",
            ModuleKind::ZenRoom => "Zen room",
            ModuleKind::EmotionMap => "Emotion map",
            ModuleKind::Mission5 => "Mission 5",
            ModuleKind::HappyWeek => "Happy week",
            ModuleKind::Statistics => "Statistics",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase().replace('_', "-");

        ModuleKind::ALL
            .into_iter()
            .find(|module| module.as_str() == normalized)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown module: {raw}. Expected one of: {}",
                    ModuleKind::ALL.map(ModuleKind::as_str).join(", ")
                )
            })
    }
}
