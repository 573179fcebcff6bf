//! Localized reply text.
//!
//! Templates use `{name}` placeholders filled by [`render`].

/// Reply language, selected by the `language` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
}

impl Language {
    /// Parse a language code or name; unknown values fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Language::Hindi,
            "pa" | "punjabi" => Language::Punjabi,
            _ => Language::English,
        }
    }

    /// ISO 639-1 code, sent to data providers as the language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Punjabi => "pa",
        }
    }
}

/// Every message an action can reply with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    SpecifyDisease,
    SpecifyAgeGroup,
    ServiceUnavailable,
    NoData,
    Symptoms,
    VaccineSchedule,
    Prevention,
    CentersHeader,
    NoCenters,
    OutbreakHeader,
    NoOutbreaks,
    SubscribeMissing,
    Subscribed,
    SubscribeFailed,
}

/// Raw template for a message.
pub fn template(language: Language, key: MessageKey) -> &'static str {
    use Language::*;
    use MessageKey::*;

    match (language, key) {
        (English, SpecifyDisease) => "Please specify the disease.",
        (Hindi, SpecifyDisease) => "कृपया बीमारी का नाम बताएं।",
        (Punjabi, SpecifyDisease) => "ਕਿਰਪਾ ਕਰਕੇ ਬਿਮਾਰੀ ਦਾ ਨਾਮ ਦੱਸੋ।",

        (English, SpecifyAgeGroup) => "Please specify the age group (for example: infant, child, adult).",
        (Hindi, SpecifyAgeGroup) => "कृपया आयु वर्ग बताएं (जैसे: शिशु, बच्चा, वयस्क)।",
        (Punjabi, SpecifyAgeGroup) => "ਕਿਰਪਾ ਕਰਕੇ ਉਮਰ ਵਰਗ ਦੱਸੋ (ਜਿਵੇਂ: ਨਵਜੰਮਿਆ, ਬੱਚਾ, ਬਾਲਗ)।",

        (English, ServiceUnavailable) => "The health information service is unavailable right now. Please try again later.",
        (Hindi, ServiceUnavailable) => "स्वास्थ्य सूचना सेवा अभी उपलब्ध नहीं है। कृपया बाद में पुनः प्रयास करें।",
        (Punjabi, ServiceUnavailable) => "ਸਿਹਤ ਜਾਣਕਾਰੀ ਸੇਵਾ ਇਸ ਵੇਲੇ ਉਪਲਬਧ ਨਹੀਂ ਹੈ। ਕਿਰਪਾ ਕਰਕੇ ਬਾਅਦ ਵਿੱਚ ਦੁਬਾਰਾ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",

        (English, NoData) => "No information found for {topic}.",
        (Hindi, NoData) => "{topic} के लिए कोई जानकारी नहीं मिली।",
        (Punjabi, NoData) => "{topic} ਲਈ ਕੋਈ ਜਾਣਕਾਰੀ ਨਹੀਂ ਮਿਲੀ।",

        (English, Symptoms) => "Common symptoms of {disease}: {summary}. Please consult a doctor if symptoms are severe.",
        (Hindi, Symptoms) => "{disease} के सामान्य लक्षण: {summary}। लक्षण गंभीर हों तो डॉक्टर से परामर्श लें।",
        (Punjabi, Symptoms) => "{disease} ਦੇ ਆਮ ਲੱਛਣ: {summary}। ਲੱਛਣ ਗੰਭੀਰ ਹੋਣ ਤਾਂ ਡਾਕਟਰ ਨਾਲ ਸਲਾਹ ਕਰੋ।",

        (English, VaccineSchedule) => "Vaccine schedule for {age_group}: {summary}",
        (Hindi, VaccineSchedule) => "{age_group} के लिए टीकाकरण कार्यक्रम: {summary}",
        (Punjabi, VaccineSchedule) => "{age_group} ਲਈ ਟੀਕਾਕਰਨ ਸਮਾਂ-ਸਾਰਣੀ: {summary}",

        (English, Prevention) => "To prevent {disease}: {summary}",
        (Hindi, Prevention) => "{disease} से बचाव के लिए: {summary}",
        (Punjabi, Prevention) => "{disease} ਤੋਂ ਬਚਾਅ ਲਈ: {summary}",

        (English, CentersHeader) => "Here are some vaccination centers:",
        (Hindi, CentersHeader) => "कुछ टीकाकरण केंद्र:",
        (Punjabi, CentersHeader) => "ਕੁਝ ਟੀਕਾਕਰਨ ਕੇਂਦਰ:",

        (English, NoCenters) => "No vaccination centers found today in your district.",
        (Hindi, NoCenters) => "आज आपके जिले में कोई टीकाकरण केंद्र नहीं मिला।",
        (Punjabi, NoCenters) => "ਅੱਜ ਤੁਹਾਡੇ ਜ਼ਿਲ੍ਹੇ ਵਿੱਚ ਕੋਈ ਟੀਕਾਕਰਨ ਕੇਂਦਰ ਨਹੀਂ ਮਿਲਿਆ।",

        (English, OutbreakHeader) => "Latest WHO outbreak indicators:",
        (Hindi, OutbreakHeader) => "WHO के नवीनतम प्रकोप संकेतक:",
        (Punjabi, OutbreakHeader) => "WHO ਦੇ ਨਵੀਨਤਮ ਪ੍ਰਕੋਪ ਸੂਚਕ:",

        (English, NoOutbreaks) => "No outbreak indicators found in the WHO database.",
        (Hindi, NoOutbreaks) => "WHO डेटाबेस में कोई प्रकोप संकेतक नहीं मिला।",
        (Punjabi, NoOutbreaks) => "WHO ਡਾਟਾਬੇਸ ਵਿੱਚ ਕੋਈ ਪ੍ਰਕੋਪ ਸੂਚਕ ਨਹੀਂ ਮਿਲਿਆ।",

        (English, SubscribeMissing) => "Please share your phone number and location to subscribe to alerts.",
        (Hindi, SubscribeMissing) => "अलर्ट पाने के लिए कृपया अपना फ़ोन नंबर और स्थान बताएं।",
        (Punjabi, SubscribeMissing) => "ਅਲਰਟ ਲੈਣ ਲਈ ਕਿਰਪਾ ਕਰਕੇ ਆਪਣਾ ਫ਼ੋਨ ਨੰਬਰ ਅਤੇ ਟਿਕਾਣਾ ਦੱਸੋ।",

        (English, Subscribed) => "You are subscribed to health alerts for {location}.",
        (Hindi, Subscribed) => "आप {location} के स्वास्थ्य अलर्ट के लिए पंजीकृत हो गए हैं।",
        (Punjabi, Subscribed) => "ਤੁਸੀਂ {location} ਲਈ ਸਿਹਤ ਅਲਰਟਾਂ ਲਈ ਦਰਜ ਹੋ ਗਏ ਹੋ।",

        (English, SubscribeFailed) => "Sorry, we could not save your subscription. Please try again later.",
        (Hindi, SubscribeFailed) => "क्षमा करें, आपकी सदस्यता सहेजी नहीं जा सकी। कृपया बाद में पुनः प्रयास करें।",
        (Punjabi, SubscribeFailed) => "ਮਾਫ਼ ਕਰਨਾ, ਤੁਹਾਡੀ ਮੈਂਬਰੀ ਸੰਭਾਲੀ ਨਹੀਂ ਜਾ ਸਕੀ। ਕਿਰਪਾ ਕਰਕੇ ਬਾਅਦ ਵਿੱਚ ਦੁਬਾਰਾ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
    }
}

/// Fill a message template.
///
/// Placeholders are substituted in one pass over the template, so argument
/// values are inserted verbatim even if they contain `{...}` themselves.
/// Unknown placeholders are left as written.
pub fn render(language: Language, key: MessageKey, args: &[(&str, &str)]) -> String {
    let mut rest = template(language, key);
    let mut text = String::with_capacity(rest.len());

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let tail = &rest[open..];
        let value = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                text.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                text.push('{');
                rest = &tail[1..];
            }
        }
    }
    text.push_str(rest);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("hi"), Language::Hindi);
        assert_eq!(Language::from_code("Punjabi"), Language::Punjabi);
        assert_eq!(Language::from_code("fr"), Language::English);
    }

    #[test]
    fn test_render_fills_placeholders() {
        let text = render(
            Language::English,
            MessageKey::Symptoms,
            &[("disease", "dengue"), ("summary", "high fever")],
        );
        assert_eq!(
            text,
            "Common symptoms of dengue: high fever. Please consult a doctor if symptoms are severe."
        );
    }

    #[test]
    fn test_render_inserts_values_verbatim() {
        let text = render(
            Language::English,
            MessageKey::Symptoms,
            &[("disease", "{summary}"), ("summary", "high fever")],
        );
        assert_eq!(
            text,
            "Common symptoms of {summary}: high fever. Please consult a doctor if symptoms are severe."
        );
    }

    #[test]
    fn test_render_leaves_missing_args() {
        let text = render(Language::English, MessageKey::Subscribed, &[]);
        assert_eq!(text, "You are subscribed to health alerts for {location}.");
    }

    #[test]
    fn test_render_localized() {
        let text = render(Language::Hindi, MessageKey::NoData, &[("topic", "dengue")]);
        assert!(text.starts_with("dengue "));
        assert!(!text.contains("{topic}"));
    }
}
