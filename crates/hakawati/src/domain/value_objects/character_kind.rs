//! CharacterKind - Flavor of a character to invent

/// Kind of character the generate endpoint is asked to create.
///
/// Clients send free text; only `real` and `anime` are recognized and
/// everything else becomes a fictional character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharacterKind {
    Real,
    Anime,
    #[default]
    Fictional,
}

impl CharacterKind {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "real" => CharacterKind::Real,
            "anime" => CharacterKind::Anime,
            _ => CharacterKind::Fictional,
        }
    }

    /// Arabic description used inside the creation prompt
    pub fn prompt_label(&self) -> &'static str {
        match self {
            CharacterKind::Real => "حقيقية تاريخية",
            CharacterKind::Anime => "أنمي يابانية",
            CharacterKind::Fictional => "خيالية",
        }
    }
}
