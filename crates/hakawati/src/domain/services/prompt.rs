//! Prompt construction
//!
//! All prompts are written in Arabic; replies are expected in Arabic too,
//! except image descriptions which the model writes in English.

use crate::domain::entities::{Character, HistoryMessage};
use crate::domain::value_objects::CharacterKind;

/// Number of prior history messages embedded in a chat prompt
pub const HISTORY_WINDOW: usize = 3;

/// Name used in prompts when the client did not supply one
pub const UNNAMED_CHARACTER: &str = "شخصية";

/// Build the chat prompt: persona, recent history, the new message and the
/// JSON reply format.
pub fn chat_prompt(character: &Character, history: &[HistoryMessage], message: &str) -> String {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let recent = history[start..]
        .iter()
        .map(|h| {
            let speaker = if h.is_user() {
                "المستخدم"
            } else {
                character.name.as_str()
            };
            format!("{}: {}", speaker, h.content)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
أنت تلعب دور {name}.
صفاتك: {personality}
قصتك: {story}
المكان الحالي: {scene}

المحادثة السابقة:
{recent}

رسالة المستخدم: "{message}"

تعليمات:
1. أجب كما لو كنت {name} الحقيقي
2. استخدم الشخصية ولهجة {name}
3. عبّر عن مشاعر مناسبة
4. يمكنك تغيير المكان إذا كان منطقياً
5. أعد الرد بتنسيق JSON:
{{
    "text": "ردك هنا",
    "emotion": "سعيد/حزين/غاضب/متفاجئ/محايد",
    "scene": "المكان الجديد",
    "imagePrompt": "وصف للصورة بالإنجليزية"
}}"#,
        name = character.name,
        personality = character.personality,
        story = character.story,
        scene = character.scene,
        recent = recent,
        message = message,
    )
}

/// Build the role-priming prompt used by training.
pub fn training_prompt(character: &Character) -> String {
    format!(
        r#"
أنت الآن {name}.
صفاتك الشخصية: {personality}
قصتك الكاملة: {story}

ستتلقى رسائل من مستخدمين وتجب كما لو كنت هذه الشخصية.
تذكر:
1. لا تكشف أنك ذكاء اصطناعي
2. تصرف بسلوك {name}
3. استخدم معرفتك وخبراتك من القصة
4. حافظ على الاتساق في الشخصية

هل فهمت دورك؟ أجب بنعم مع وصف قصير لشخصيتك."#,
        name = character.name,
        personality = character.personality,
        story = character.story,
    )
}

/// Ask the model to expand an existing story.
///
/// `kind` is echoed as the client sent it.
pub fn elaboration_prompt(name: Option<&str>, kind: &str, base_story: &str) -> String {
    format!(
        r#"
حسن من قصة الشخصية التالية:

الاسم: {name}
النوع: {kind}
القصة الحالية: {base_story}

أعد كتابة القصة لجعلها أكثر تفصيلاً وإثارة.
أضف:
1. خلفية مفصلة
2. تجارب مهمة
3. الصفات الشخصية
4. هدف في الحياة
5. مشهد ابتدائي مناسب

أعد القصة باللغة العربية."#,
        name = name.unwrap_or(UNNAMED_CHARACTER),
        kind = kind,
        base_story = base_story,
    )
}

/// Ask the model to invent a new character of the given kind.
pub fn creation_prompt(kind: CharacterKind) -> String {
    format!(
        r#"
أنشئ شخصية {label} جديدة.

المتطلبات:
1. اسم عربي مميز
2. قصة مفصلة (5-7 جمل)
3. صفات شخصية متعددة
4. مشهد ابتدائي
5. صورة ذهنية للشخصية

أعد النتيجة بتنسيق JSON:
{{
    "name": "الاسم",
    "story": "القصة",
    "personality": "الصفات",
    "scene": "المشهد",
    "imagePrompt": "وصف الصورة بالإنجليزية"
}}"#,
        label = kind.prompt_label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layla() -> Character {
        Character::new("Layla", "حالمة وهادئة", "شاعرة من بغداد", "مكتبة قديمة")
    }

    #[test]
    fn test_chat_prompt_uses_last_three_messages() {
        let history = vec![
            HistoryMessage::user("الأولى"),
            HistoryMessage::character("الثانية"),
            HistoryMessage::user("الثالثة"),
            HistoryMessage::character("الرابعة"),
        ];
        let prompt = chat_prompt(&layla(), &history, "مرحبا");

        assert!(!prompt.contains("الأولى"));
        assert!(prompt.contains("Layla: الثانية"));
        assert!(prompt.contains("المستخدم: الثالثة"));
        assert!(prompt.contains("Layla: الرابعة"));
        assert!(prompt.contains("رسالة المستخدم: \"مرحبا\""));
        assert!(prompt.contains("المكان الحالي: مكتبة قديمة"));
        assert!(prompt.contains("\"imagePrompt\""));
    }

    #[test]
    fn test_chat_prompt_with_empty_history() {
        let prompt = chat_prompt(&layla(), &[], "مرحبا");
        assert!(prompt.contains("المحادثة السابقة:\n\n"));
    }

    #[test]
    fn test_training_prompt_forbids_disclosure() {
        let prompt = training_prompt(&layla());
        assert!(prompt.contains("أنت الآن Layla."));
        assert!(prompt.contains("لا تكشف أنك ذكاء اصطناعي"));
    }

    #[test]
    fn test_elaboration_prompt_defaults_name() {
        let prompt = elaboration_prompt(None, "anime", "فتى يحلم بالبحر");
        assert!(prompt.contains(&format!("الاسم: {}", UNNAMED_CHARACTER)));
        assert!(prompt.contains("النوع: anime"));
        assert!(prompt.contains("القصة الحالية: فتى يحلم بالبحر"));
    }

    #[test]
    fn test_creation_prompt_kind_label() {
        assert!(creation_prompt(CharacterKind::Real).contains("حقيقية تاريخية"));
        assert!(creation_prompt(CharacterKind::Anime).contains("أنمي يابانية"));
        assert!(creation_prompt(CharacterKind::Fictional).contains("شخصية خيالية جديدة"));
    }
}
