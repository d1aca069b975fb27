//! Mood labels offered to the user
//!
//! A mood steers the tone of the generated quote and scene. The emoji and
//! colors are presentation only and never reach the prompts.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Tired,
    Anxious,
    Bored,
    Hungry,
    Overwhelmed,
}

/// Display attributes for rendering a mood picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodStyle {
    pub emoji: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
        Mood::Anxious,
        Mood::Bored,
        Mood::Hungry,
        Mood::Overwhelmed,
    ];

    /// The label used in prompts and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
            Mood::Anxious => "Anxious",
            Mood::Bored => "Bored",
            Mood::Hungry => "Hungry",
            Mood::Overwhelmed => "Overwhelmed",
        }
    }

    pub fn style(self) -> MoodStyle {
        let (emoji, color, text_color) = match self {
            Mood::Happy => ("😊", "#FDE047", "#713F12"),
            Mood::Sad => ("😢", "#93C5FD", "#1E3A8A"),
            Mood::Angry => ("😠", "#FCA5A5", "#7F1D1D"),
            Mood::Tired => ("😴", "#C4B5FD", "#4C1D95"),
            Mood::Anxious => ("😰", "#FDBA74", "#7C2D12"),
            Mood::Bored => ("😐", "#D1D5DB", "#1F2937"),
            Mood::Hungry => ("🍕", "#86EFAC", "#14532D"),
            Mood::Overwhelmed => ("🤯", "#F9A8D4", "#831843"),
        };
        MoodStyle {
            emoji,
            color,
            text_color,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::InvalidMood(needle.to_string()))
    }
}
