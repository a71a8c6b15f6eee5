//! Emotion - Sentiment attached to a character reply

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Emotion expressed by a character.
///
/// Serialized as the Arabic sentiment word the chat prompt asks the model for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, ToSchema)]
pub enum Emotion {
    #[serde(rename = "سعيد")]
    Happy,
    #[serde(rename = "حزين")]
    Sad,
    #[serde(rename = "غاضب")]
    Angry,
    #[serde(rename = "متفاجئ")]
    Surprised,
    #[default]
    #[serde(rename = "محايد")]
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Neutral,
    ];

    /// Arabic label as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "سعيد",
            Emotion::Sad => "حزين",
            Emotion::Angry => "غاضب",
            Emotion::Surprised => "متفاجئ",
            Emotion::Neutral => "محايد",
        }
    }

    /// Map whatever the model wrote to a known emotion.
    ///
    /// Accepts the Arabic labels and their English names. Anything else,
    /// including the `a/b/c` template copied verbatim, is neutral.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(emotion) = Emotion::ALL.iter().find(|e| e.as_str() == trimmed) {
            return Ok(*emotion);
        }
        match trimmed.to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "angry" => Ok(Emotion::Angry),
            "surprised" => Ok(Emotion::Surprised),
            "neutral" => Ok(Emotion::Neutral),
            _ => Err(format!("Unknown emotion: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_labels_parse() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.as_str()), emotion);
        }
        assert_eq!(Emotion::from_label("  حزين "), Emotion::Sad);
    }

    #[test]
    fn test_unknown_label_is_neutral() {
        assert_eq!(
            Emotion::from_label("سعيد/حزين/غاضب/متفاجئ/محايد"),
            Emotion::Neutral
        );
        assert_eq!(Emotion::from_label(""), Emotion::Neutral);
        assert_eq!(Emotion::from_label("Happy"), Emotion::Happy);
    }

    #[test]
    fn test_serializes_as_arabic() {
        let json = serde_json::to_string(&Emotion::Surprised).unwrap();
        assert_eq!(json, "\"متفاجئ\"");
    }
}
