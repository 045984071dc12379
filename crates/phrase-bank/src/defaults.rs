//! Per-language seed phrases
//!
//! Ten care-oriented phrases shipped for every supported language. Seed ids
//! are the stable strings "1"-"10" so edits and deletions survive reloads.

use locale::Language;

use crate::phrase::Phrase;

fn seed_texts(language: Language) -> [&'static str; 10] {
    match language {
        Language::English => [
            "Yes",
            "No",
            "Help",
            "Thank you",
            "I need water",
            "I need food",
            "I need rest",
            "I need medicine",
            "Call doctor",
            "Call family",
        ],
        Language::Hindi => [
            "हां",
            "नहीं",
            "मदद",
            "धन्यवाद",
            "मुझे पानी चाहिए",
            "मुझे भोजन चाहिए",
            "मुझे आराम चाहिए",
            "मुझे दवा चाहिए",
            "डॉक्टर को बुलाओ",
            "परिवार को बुलाओ",
        ],
        Language::Telugu => [
            "అవును",
            "కాదు",
            "సహాయం",
            "ధన్యవాదాలు",
            "నాకు నీరు కావాలి",
            "నాకు ఆహారం కావాలి",
            "నాకు విశ్రాంతి కావాలి",
            "నాకు మందు కావాలి",
            "డాక్టర్‌ని పిలవండి",
            "కుటుంబాన్ని పిలవండి",
        ],
        Language::Tamil => [
            "ஆம்",
            "இல்லை",
            "உதவி",
            "நன்றி",
            "எனக்கு தண்ணீர் வேண்டும்",
            "எனக்கு உணவு வேண்டும்",
            "எனக்கு ஓய்வு வேண்டும்",
            "எனக்கு மருந்து வேண்டும்",
            "மருத்துவரை அழைக்கவும்",
            "குடும்பத்தை அழைக்கவும்",
        ],
        Language::Kannada => [
            "ಹೌದು",
            "ಇಲ್ಲ",
            "ಸಹಾಯ",
            "ಧನ್ಯವಾದಗಳು",
            "ನನಗೆ ನೀರು ಬೇಕು",
            "ನನಗೆ ಆಹಾರ ಬೇಕು",
            "ನನಗೆ ವಿಶ್ರಾಂತಿ ಬೇಕು",
            "ನನಗೆ ಔಷಧಿ ಬೇಕು",
            "ವೈದ್ಯರನ್ನು ಕರೆಯಿರಿ",
            "ಕುಟುಂಬವನ್ನು ಕರೆಯಿರಿ",
        ],
        Language::Bengali => [
            "হ্যাঁ",
            "না",
            "সাহায্য",
            "ধন্যবাদ",
            "আমার জল দরকার",
            "আমার খাবার দরকার",
            "আমার বিশ্রাম দরকার",
            "আমার ওষুধ দরকার",
            "ডাক্তারকে ডাকুন",
            "পরিবারকে ডাকুন",
        ],
        Language::Japanese => [
            "はい",
            "いいえ",
            "助けて",
            "ありがとう",
            "水が必要です",
            "食べ物が必要です",
            "休息が必要です",
            "薬が必要です",
            "医者を呼んでください",
            "家族を呼んでください",
        ],
        Language::Korean => [
            "네",
            "아니오",
            "도움",
            "감사합니다",
            "물이 필요합니다",
            "음식이 필요합니다",
            "휴식이 필요합니다",
            "약이 필요합니다",
            "의사를 불러주세요",
            "가족을 불러주세요",
        ],
        Language::Mandarin => [
            "是",
            "否",
            "帮助",
            "谢谢",
            "我需要水",
            "我需要食物",
            "我需要休息",
            "我需要药",
            "叫医生",
            "叫家人",
        ],
    }
}

/// Default phrases for a language, in display order.
pub fn seed_phrases(language: Language) -> Vec<Phrase> {
    seed_texts(language)
        .iter()
        .enumerate()
        .map(|(i, text)| Phrase::with_id((i + 1).to_string(), *text, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_ten_seeds() {
        for language in Language::ALL {
            let phrases = seed_phrases(language);
            assert_eq!(phrases.len(), 10, "{}", language);
            assert!(phrases.iter().all(|p| p.language == language));
        }
    }

    #[test]
    fn test_seed_ids_are_stable() {
        let phrases = seed_phrases(Language::English);
        assert_eq!(phrases[0].id, "1");
        assert_eq!(phrases[9].id, "10");
        assert_eq!(phrases[2].text, "Help");
    }
}
