// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interface languages and the localized phrases the companion shows.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A supported interface language.
///
/// Unknown tags resolve to English; the service and the speech layer only
/// ever see one of these three codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Tamil,
    Hindi,
}

impl Language {
    /// Resolve a free-form language tag (`ta`, `hi-IN`, `en_GB`, ...).
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.starts_with("ta") {
            Language::Tamil
        } else if tag.starts_with("hi") {
            Language::Hindi
        } else {
            Language::English
        }
    }

    /// Two-letter code sent to the companion service.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Tamil => "ta",
            Language::Hindi => "hi",
        }
    }

    /// Locale tag used to pick a speech voice.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Tamil => "ta-IN",
            Language::Hindi => "hi-IN",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "தமிழ்",
            Language::Hindi => "हिन्दी",
        }
    }

    pub fn phrase(self, phrase: Phrase) -> &'static str {
        phrase.text(self)
    }
}

/// Fixed user-facing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Phrase {
    /// First bot turn of an empty conversation.
    Welcome,
    /// Report requested with no user utterances.
    NoConversation,
    /// Report generation failed remotely.
    ReportFallback,
    /// The chat service answered with an empty reply.
    ChatFallback,
    /// Chat reply failed at the transport level.
    ConnectionError,
    /// No speech synthesis on this host.
    VoiceUnsupported,
}

impl Phrase {
    pub fn text(self, lang: Language) -> &'static str {
        use Language::*;
        use Phrase::*;
        match (self, lang) {
            (Welcome, English) => "Hi! I'm Wikoo 💙 How are you feeling today?",
            (Welcome, Tamil) => "வணக்கம்! நான் விக்கூ 💙 இன்று நீங்கள் எப்படி உணர்கிறீர்கள்?",
            (Welcome, Hindi) => "नमस्ते! मैं विकू हूँ 💙 आज आप कैसा महसूस कर रहे हैं?",

            (NoConversation, English) => "No conversation yet — let's chat first! 💙",
            (NoConversation, Tamil) => "இன்னும் உரையாடல் இல்லை — முதலில் பேசலாம்! 💙",
            (NoConversation, Hindi) => "अभी तक कोई बातचीत नहीं — पहले बात करते हैं! 💙",

            (ReportFallback, English) => {
                "I'm having trouble creating your report right now. But I'm here 💙"
            }
            (ReportFallback, Tamil) => {
                "அறிக்கை எழுதுவதில் சிறு சிரமம் உள்ளது, ஆனால் நான் உங்களுடன் இருக்கிறேன்."
            }
            (ReportFallback, Hindi) => {
                "रिपोर्ट लिखने में थोड़ी दिक्कत है, लेकिन मैं आपके साथ हूँ."
            }

            (ChatFallback, English) => "I'm here to listen 💙",
            (ChatFallback, Tamil) => "நான் உங்களுக்காக இருக்கேன்.",
            (ChatFallback, Hindi) => "मैं आपके लिए यहाँ हूँ.",

            (ConnectionError, English) => "Sorry, I'm having trouble connecting right now 😔",
            (ConnectionError, Tamil) => "மன்னிக்கவும், இப்போது இணைப்பதில் சிரமம் உள்ளது 😔",
            (ConnectionError, Hindi) => "माफ़ कीजिए, अभी कनेक्ट करने में दिक्कत हो रही है 😔",

            (VoiceUnsupported, English) => "Voice not supported on this device",
            (VoiceUnsupported, Tamil) => "இந்த சாதனத்தில் குரல் ஆதரிக்கப்படவில்லை",
            (VoiceUnsupported, Hindi) => "इस डिवाइस पर आवाज़ समर्थित नहीं है",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tags_resolve_by_prefix() {
        assert_eq!(Language::from_tag("ta"), Language::Tamil);
        assert_eq!(Language::from_tag("ta-IN"), Language::Tamil);
        assert_eq!(Language::from_tag("HI"), Language::Hindi);
        assert_eq!(Language::from_tag("en-GB"), Language::English);
        assert_eq!(Language::from_tag("fr"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
    }

    #[test]
    fn codes_and_locales() {
        assert_eq!(Language::Tamil.code(), "ta");
        assert_eq!(Language::Tamil.locale_tag(), "ta-IN");
        assert_eq!(Language::Hindi.locale_tag(), "hi-IN");
        assert_eq!(Language::English.locale_tag(), "en-US");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn every_phrase_is_localized() {
        for phrase in Phrase::iter() {
            for lang in Language::iter() {
                assert!(!phrase.text(lang).is_empty(), "{phrase:?} missing for {lang}");
            }
            assert_ne!(phrase.text(Language::English), phrase.text(Language::Tamil));
            assert_ne!(phrase.text(Language::English), phrase.text(Language::Hindi));
        }
    }

    #[test]
    fn language_serializes_lowercase() {
        let json = serde_json::to_string(&Language::Hindi).unwrap();
        assert_eq!(json, "\"hindi\"");
        let parsed: Language = serde_json::from_str("\"tamil\"").unwrap();
        assert_eq!(parsed, Language::Tamil);
    }
}
