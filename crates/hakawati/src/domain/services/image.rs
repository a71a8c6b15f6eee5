//! Image URL composition
//!
//! No image is ever generated: chat scenes point at a placeholder service
//! that renders the prompt as text, and generated characters get a
//! deterministic avatar seeded by their name.

/// Placeholder image service (400x300, violet background, white text)
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/400x300/7C3AED/FFFFFF";

/// Avatar service used for generated characters
pub const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars-neutral/svg";

/// Maximum number of prompt characters embedded in a placeholder URL
pub const IMAGE_PROMPT_LIMIT: usize = 50;

/// First [`IMAGE_PROMPT_LIMIT`] characters of the prompt.
///
/// Counts Unicode scalar values so Arabic text is never cut mid-character.
pub fn truncate_prompt(prompt: &str) -> &str {
    match prompt.char_indices().nth(IMAGE_PROMPT_LIMIT) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}

/// Placeholder URL showing the (truncated, percent-encoded) prompt.
pub fn placeholder_image_url(base: &str, prompt: &str) -> String {
    format!(
        "{}?text={}",
        base.trim_end_matches('/'),
        urlencoding::encode(truncate_prompt(prompt))
    )
}

/// Deterministic avatar URL for a character name.
pub fn avatar_url(base: &str, name: &str) -> String {
    format!(
        "{}?seed={}",
        base.trim_end_matches('/'),
        urlencoding::encode(name)
    )
}
