use bee_types::{NewWord, Word, WordFilters, WordsPayload};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordBankError {
    #[error("duplicate word: {0}")]
    DuplicateWord(String),
    #[error("word text cannot be empty")]
    EmptyWord,
    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),
    #[error("no word with id {0}")]
    UnknownWord(String),
    #[error("import failed: invalid JSON")]
    InvalidJson,
    #[error("import failed: invalid structure")]
    InvalidStructure,
}

/// Totals shown on the admin screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankCounts {
    pub total: usize,
    pub active: usize,
}

/// Lenient import shape: ids and flags may be missing, the words array may
/// not. Anything that fails to parse into this is structurally invalid.
#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(default)]
    version: Option<u32>,
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    #[serde(default)]
    id: Option<String>,
    word: String,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<u8>,
    #[serde(default)]
    active: Option<bool>,
}

/// Administers the word collection behind the play and admin screens.
/// Every mutation refreshes the payload's `updated_at` stamp; persisting
/// the payload is the caller's concern.
#[derive(Debug, Clone)]
pub struct WordBank {
    payload: WordsPayload,
}

impl WordBank {
    pub fn new(payload: WordsPayload) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &WordsPayload {
        &self.payload
    }

    pub fn words(&self) -> &[Word] {
        &self.payload.words
    }

    pub fn find(&self, id: &str) -> Option<&Word> {
        self.payload.words.iter().find(|w| w.id == id)
    }

    /// Adds a new word with a generated id. Rejects empty text and
    /// case-insensitive duplicates of an existing spelling.
    pub fn add_word(&mut self, input: NewWord) -> Result<String, WordBankError> {
        let text = validate_text(&input.word)?;
        validate_difficulty(input.difficulty)?;
        if self.text_exists(&text, None) {
            return Err(WordBankError::DuplicateWord(text));
        }
        let id = Uuid::new_v4().to_string();
        self.payload.words.push(Word {
            id: id.clone(),
            word: text,
            hint: clean_optional(input.hint),
            category: clean_optional(input.category),
            difficulty: input.difficulty,
            active: input.active.unwrap_or(true),
        });
        self.touch();
        Ok(id)
    }

    /// Replaces the editable fields of an existing word. The id never
    /// changes; the duplicate check excludes the word being edited.
    pub fn update_word(&mut self, id: &str, input: NewWord) -> Result<(), WordBankError> {
        let text = validate_text(&input.word)?;
        validate_difficulty(input.difficulty)?;
        if self.text_exists(&text, Some(id)) {
            return Err(WordBankError::DuplicateWord(text));
        }
        let word = self
            .payload
            .words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| WordBankError::UnknownWord(id.to_string()))?;
        word.word = text;
        word.hint = clean_optional(input.hint);
        word.category = clean_optional(input.category);
        word.difficulty = input.difficulty;
        if let Some(active) = input.active {
            word.active = active;
        }
        self.touch();
        Ok(())
    }

    pub fn delete_word(&mut self, id: &str) -> Result<(), WordBankError> {
        let before = self.payload.words.len();
        self.payload.words.retain(|w| w.id != id);
        if self.payload.words.len() == before {
            return Err(WordBankError::UnknownWord(id.to_string()));
        }
        self.touch();
        Ok(())
    }

    pub fn toggle_active(&mut self, id: &str) -> Result<bool, WordBankError> {
        let word = self
            .payload
            .words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| WordBankError::UnknownWord(id.to_string()))?;
        word.active = !word.active;
        let active = word.active;
        self.touch();
        Ok(active)
    }

    /// Active words narrowed by the session filters. The category match is
    /// case-insensitive; a word without a difficulty passes any difficulty
    /// filter.
    pub fn active_words(&self, filters: &WordFilters) -> Vec<Word> {
        self.payload
            .words
            .iter()
            .filter(|w| w.active)
            .filter(|w| match &filters.category {
                Some(category) => w
                    .category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == category.to_lowercase()),
                None => true,
            })
            .filter(|w| match filters.difficulty {
                Some(difficulty) => w.difficulty.is_none() || w.difficulty == Some(difficulty),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> BankCounts {
        BankCounts {
            total: self.payload.words.len(),
            active: self.payload.words.iter().filter(|w| w.active).count(),
        }
    }

    /// Sorted distinct categories across the whole bank.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .payload
            .words
            .iter()
            .filter_map(|w| w.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Replaces the whole collection from an import document, sanitizing as
    /// it goes: missing ids are generated, text is trimmed, `active`
    /// defaults to true. Rejection leaves the existing collection untouched
    /// and distinguishes unparseable JSON from a payload without a `words`
    /// array.
    pub fn import_json(&mut self, text: &str) -> Result<usize, WordBankError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|_| WordBankError::InvalidJson)?;
        let raw: RawPayload =
            serde_json::from_value(value).map_err(|_| WordBankError::InvalidStructure)?;

        let mut words = Vec::with_capacity(raw.words.len());
        for entry in raw.words {
            let text = entry.word.trim();
            if text.is_empty() {
                warn!("skipping import entry with empty word text");
                continue;
            }
            words.push(Word {
                id: entry
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                word: text.to_string(),
                hint: clean_optional(entry.hint),
                category: clean_optional(entry.category),
                difficulty: entry.difficulty.filter(|d| (1..=5).contains(d)),
                active: entry.active.unwrap_or(true),
            });
        }

        let imported = words.len();
        self.payload = WordsPayload {
            version: raw.version.unwrap_or(1),
            updated_at: now_stamp(),
            words,
        };
        Ok(imported)
    }

    /// Pretty-printed export of the current collection.
    pub fn export_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.payload)?)
    }

    /// Wholesale replacement, used when resetting to the seed collection.
    pub fn replace(&mut self, payload: WordsPayload) {
        self.payload = payload;
    }

    fn text_exists(&self, text: &str, exclude_id: Option<&str>) -> bool {
        let needle = text.to_lowercase();
        self.payload
            .words
            .iter()
            .filter(|w| exclude_id != Some(w.id.as_str()))
            .any(|w| w.word.to_lowercase() == needle)
    }

    fn touch(&mut self) {
        self.payload.updated_at = now_stamp();
    }
}

fn now_stamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn validate_text(raw: &str) -> Result<String, WordBankError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(WordBankError::EmptyWord);
    }
    Ok(text.to_string())
}

fn validate_difficulty(difficulty: Option<u8>) -> Result<(), WordBankError> {
    match difficulty {
        Some(d) if !(1..=5).contains(&d) => Err(WordBankError::InvalidDifficulty(d)),
        _ => Ok(()),
    }
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_bank() -> WordBank {
        WordBank::new(WordsPayload {
            version: 1,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            words: Vec::new(),
        })
    }

    fn seeded_bank() -> WordBank {
        let mut bank = empty_bank();
        bank.add_word(NewWord::spelled("ocean")).unwrap();
        bank.add_word(NewWord {
            word: "rhythm".to_string(),
            hint: Some("no vowels but y".to_string()),
            category: Some("Tricky".to_string()),
            difficulty: Some(4),
            active: None,
        })
        .unwrap();
        bank
    }

    #[test]
    fn test_add_word_trims_and_generates_id() {
        let mut bank = empty_bank();
        let id = bank.add_word(NewWord::spelled("  ocean  ")).unwrap();
        let word = bank.find(&id).unwrap();
        assert_eq!(word.word, "ocean");
        assert!(word.active);
    }

    #[test]
    fn test_add_rejects_empty_text() {
        let mut bank = empty_bank();
        assert_eq!(
            bank.add_word(NewWord::spelled("   ")),
            Err(WordBankError::EmptyWord)
        );
        assert!(bank.words().is_empty());
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut bank = seeded_bank();
        let err = bank.add_word(NewWord::spelled("OCEAN")).unwrap_err();
        assert!(matches!(err, WordBankError::DuplicateWord(_)));
        assert_eq!(bank.counts().total, 2);
    }

    #[test]
    fn test_add_rejects_out_of_range_difficulty() {
        let mut bank = empty_bank();
        let err = bank
            .add_word(NewWord {
                word: "ocean".to_string(),
                difficulty: Some(6),
                ..NewWord::default()
            })
            .unwrap_err();
        assert_eq!(err, WordBankError::InvalidDifficulty(6));
    }

    #[test]
    fn test_update_excludes_self_from_duplicate_check() {
        let mut bank = seeded_bank();
        let id = bank.words()[0].id.clone();
        // Re-saving the same spelling (different case) is not a duplicate.
        bank.update_word(&id, NewWord::spelled("Ocean")).unwrap();
        assert_eq!(bank.words()[0].word, "Ocean");
        // Colliding with another word is.
        let err = bank.update_word(&id, NewWord::spelled("rhythm")).unwrap_err();
        assert!(matches!(err, WordBankError::DuplicateWord(_)));
    }

    #[test]
    fn test_update_keeps_id_and_rejects_unknown() {
        let mut bank = seeded_bank();
        let id = bank.words()[0].id.clone();
        bank.update_word(&id, NewWord::spelled("harbor")).unwrap();
        assert_eq!(bank.words()[0].id, id);
        assert_eq!(
            bank.update_word("missing", NewWord::spelled("harbor2")),
            Err(WordBankError::UnknownWord("missing".to_string()))
        );
    }

    #[test]
    fn test_delete_and_toggle() {
        let mut bank = seeded_bank();
        let id = bank.words()[0].id.clone();
        assert!(!bank.toggle_active(&id).unwrap());
        assert_eq!(bank.counts().active, 1);
        bank.delete_word(&id).unwrap();
        assert_eq!(bank.counts().total, 1);
        assert_eq!(
            bank.delete_word(&id),
            Err(WordBankError::UnknownWord(id))
        );
    }

    #[test]
    fn test_active_words_filtering() {
        let mut bank = empty_bank();
        bank.add_word(NewWord {
            word: "ocean".to_string(),
            category: Some("Nature".to_string()),
            difficulty: Some(2),
            ..NewWord::default()
        })
        .unwrap();
        bank.add_word(NewWord {
            word: "rhythm".to_string(),
            category: Some("Tricky".to_string()),
            difficulty: Some(4),
            ..NewWord::default()
        })
        .unwrap();
        bank.add_word(NewWord {
            word: "harbor".to_string(),
            category: Some("nature".to_string()),
            ..NewWord::default()
        })
        .unwrap();
        let inactive = bank.add_word(NewWord::spelled("hidden")).unwrap();
        bank.toggle_active(&inactive).unwrap();

        let all = bank.active_words(&WordFilters::default());
        assert_eq!(all.len(), 3);

        let nature = bank.active_words(&WordFilters {
            category: Some("NATURE".to_string()),
            difficulty: None,
        });
        assert_eq!(nature.len(), 2);

        // Words without a difficulty pass any difficulty filter.
        let level2 = bank.active_words(&WordFilters {
            category: None,
            difficulty: Some(2),
        });
        let spelled: Vec<_> = level2.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(spelled, ["ocean", "harbor"]);
    }

    #[test]
    fn test_import_sanitizes_entries() {
        let mut bank = empty_bank();
        let imported = bank
            .import_json(
                r#"{
                    "words": [
                        {"word": "  ocean  "},
                        {"id": "w-7", "word": "rhythm", "active": false, "difficulty": 9},
                        {"word": "   "}
                    ]
                }"#,
            )
            .unwrap();
        assert_eq!(imported, 2);
        assert_eq!(bank.payload().version, 1);
        assert_eq!(bank.words()[0].word, "ocean");
        assert!(!bank.words()[0].id.is_empty());
        assert_eq!(bank.words()[1].id, "w-7");
        assert!(!bank.words()[1].active);
        // Out-of-range difficulty is dropped rather than kept.
        assert_eq!(bank.words()[1].difficulty, None);
    }

    #[test]
    fn test_import_rejections_leave_bank_untouched() {
        let mut bank = seeded_bank();
        let before = bank.payload().clone();

        assert_eq!(
            bank.import_json("not json at all"),
            Err(WordBankError::InvalidJson)
        );
        assert_eq!(
            bank.import_json(r#"{"words": "not-a-list"}"#),
            Err(WordBankError::InvalidStructure)
        );
        assert_eq!(
            bank.import_json(r#"{"version": 2}"#),
            Err(WordBankError::InvalidStructure)
        );
        assert_eq!(bank.payload(), &before);
    }

    #[test]
    fn test_export_round_trips() {
        let bank = seeded_bank();
        let json = bank.export_json().unwrap();
        let parsed: WordsPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, bank.payload());
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let mut bank = seeded_bank();
        bank.add_word(NewWord {
            word: "harbor".to_string(),
            category: Some("Nature".to_string()),
            ..NewWord::default()
        })
        .unwrap();
        bank.add_word(NewWord {
            word: "cliff".to_string(),
            category: Some("Nature".to_string()),
            ..NewWord::default()
        })
        .unwrap();
        assert_eq!(bank.categories(), ["Nature", "Tricky"]);
    }
}
