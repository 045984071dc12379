//! Phrase records and the selectable phrase list

use locale::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One vocalizable phrase.
///
/// The id is unique within a language and stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: String,
    pub text: String,
    pub language: Language,
}

impl Phrase {
    /// Create a user-authored phrase with a fresh id.
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            language,
        }
    }

    /// Create a phrase with a known id (seed data, storage load).
    pub fn with_id(
        id: impl Into<String>,
        text: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            language,
        }
    }
}

/// Ordered phrase sequence for one language with a wrapping selection index.
///
/// The index stays in `[0, len)` while the list is non-empty and is held at
/// zero when it is empty; every mutation re-establishes that invariant.
#[derive(Debug, Clone)]
pub struct PhraseList {
    language: Language,
    phrases: Vec<Phrase>,
    selected: usize,
}

impl PhraseList {
    /// Create a list over already-filtered phrases of one language.
    pub fn new(language: Language, phrases: Vec<Phrase>) -> Self {
        Self {
            language,
            phrases,
            selected: 0,
        }
    }

    /// Build a list for one language out of a mixed phrase collection.
    pub fn for_language(language: Language, all: &[Phrase]) -> Self {
        let phrases = all
            .iter()
            .filter(|p| p.language == language)
            .cloned()
            .collect();
        Self::new(language, phrases)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Current selection index (zero when the list is empty).
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently selected phrase, or `None` for an empty list.
    pub fn selected_phrase(&self) -> Option<&Phrase> {
        self.phrases.get(self.selected)
    }

    /// Advance the selection by one, wrapping at the end.
    ///
    /// No-op on an empty list.
    pub fn advance(&mut self) {
        if !self.phrases.is_empty() {
            self.selected = (self.selected + 1) % self.phrases.len();
        }
    }

    /// Reset the selection to the first phrase.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    /// Append a user-authored phrase; returns a clone of the new record.
    pub fn add(&mut self, text: impl Into<String>) -> Phrase {
        let phrase = Phrase::new(text, self.language);
        self.phrases.push(phrase.clone());
        phrase
    }

    /// Replace the text of the phrase with the given id.
    ///
    /// Returns false when no phrase has that id. The id itself never changes.
    pub fn update(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.phrases.iter_mut().find(|p| p.id == id) {
            Some(phrase) => {
                phrase.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Remove the phrase with the given id.
    ///
    /// Returns false when no phrase has that id. The selection index is
    /// clamped back into range afterwards.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.phrases.iter().position(|p| p.id == id) else {
            return false;
        };
        self.phrases.remove(pos);

        if self.phrases.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.phrases.len() {
            self.selected = self.phrases.len() - 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list_of(texts: &[&str]) -> PhraseList {
        let phrases = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Phrase::with_id((i + 1).to_string(), *t, Language::English))
            .collect();
        PhraseList::new(Language::English, phrases)
    }

    #[test]
    fn test_advance_wraps() {
        let mut list = list_of(&["Yes", "No", "Help"]);

        list.advance();
        list.advance();
        assert_eq!(list.selected_phrase().unwrap().text, "Help");

        list.advance();
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut list = list_of(&[]);

        list.advance();
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected_phrase().is_none());
    }

    #[test]
    fn test_update_keeps_id() {
        let mut list = list_of(&["Yes", "No"]);

        assert!(list.update("2", "Never"));
        assert_eq!(list.phrases()[1].id, "2");
        assert_eq!(list.phrases()[1].text, "Never");

        assert!(!list.update("99", "missing"));
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut list = list_of(&["Yes", "No", "Help"]);
        list.advance();
        list.advance();
        assert_eq!(list.selected_index(), 2);

        assert!(list.remove("3"));
        assert_eq!(list.selected_index(), 1);
        assert_eq!(list.selected_phrase().unwrap().text, "No");

        assert!(list.remove("1"));
        assert!(list.remove("2"));
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected_phrase().is_none());
    }

    #[test]
    fn test_for_language_filters() {
        let all = vec![
            Phrase::with_id("1", "Yes", Language::English),
            Phrase::with_id("1", "はい", Language::Japanese),
            Phrase::with_id("2", "No", Language::English),
        ];
        let list = PhraseList::for_language(Language::English, &all);
        assert_eq!(list.len(), 2);
        assert!(list.phrases().iter().all(|p| p.language == Language::English));
    }

    #[test]
    fn test_new_phrase_ids_are_unique() {
        let mut list = list_of(&[]);
        let a = list.add("water");
        let b = list.add("food");
        assert_ne!(a.id, b.id);
    }

    proptest! {
        #[test]
        fn prop_advance_is_modular(len in 1usize..20, ticks in 0usize..100) {
            let texts: Vec<String> = (0..len).map(|i| format!("p{}", i)).collect();
            let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
            let mut list = list_of(&refs);

            for _ in 0..ticks {
                list.advance();
            }
            prop_assert_eq!(list.selected_index(), ticks % len);
        }
    }
}
