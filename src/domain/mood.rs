//! Mood tags for entries

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of mood tags, one per entry.
///
/// The first variant is the default for drafts that carry no mood and for
/// stored records whose mood field is missing or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Excited,
    Smart,
    Lazy,
    Playful,
    Sun,
    Rain,
    Calm,
    Tired,
    Sad,
}

impl Mood {
    /// All ten moods, in display order
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Smart,
        Mood::Lazy,
        Mood::Playful,
        Mood::Sun,
        Mood::Rain,
        Mood::Calm,
        Mood::Tired,
        Mood::Sad,
    ];

    /// Stable identifier used in stored records and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Smart => "smart",
            Mood::Lazy => "lazy",
            Mood::Playful => "playful",
            Mood::Sun => "sun",
            Mood::Rain => "rain",
            Mood::Calm => "calm",
            Mood::Tired => "tired",
            Mood::Sad => "sad",
        }
    }

    /// Display label shown next to the mood
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "暖暖熊",
            Mood::Excited => "元气兔",
            Mood::Smart => "机智狐",
            Mood::Lazy => "懒懒猫",
            Mood::Playful => "修勾",
            Mood::Sun => "小鸡啄米",
            Mood::Rain => "听雨蛙",
            Mood::Calm => "森之鹿",
            Mood::Tired => "睡睡考拉",
            Mood::Sad => "深海鲸",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "excited" => Ok(Mood::Excited),
            "smart" => Ok(Mood::Smart),
            "lazy" => Ok(Mood::Lazy),
            "playful" => Ok(Mood::Playful),
            "sun" => Ok(Mood::Sun),
            "rain" => Ok(Mood::Rain),
            "calm" => Ok(Mood::Calm),
            "tired" => Ok(Mood::Tired),
            "sad" => Ok(Mood::Sad),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: happy, excited, smart, lazy, playful, sun, rain, calm, tired, sad",
                s
            )),
        }
    }
}

/// Lenient deserializer for the `mood` field of stored records: absent,
/// null, or unrecognized values fall back to the default mood instead of
/// rejecting the whole record.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Mood, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| Mood::from_str(&s).ok())
        .unwrap_or_default())
}
