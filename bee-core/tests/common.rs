use bee_core::{PlaySession, SessionEvent, SessionEventHandler, WordBank};
use bee_types::{GameSettings, NewWord, SelectionMode, Word, WordsPayload};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

/// Creates a bank pre-loaded with a known set of words.
pub fn create_test_bank() -> WordBank {
    let mut bank = WordBank::new(WordsPayload {
        version: 1,
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        words: Vec::new(),
    });
    for (word, category, difficulty) in [
        ("ocean", "Nature", 1),
        ("harbor", "Nature", 2),
        ("rhythm", "Tricky", 4),
        ("necessary", "Tricky", 3),
        ("separate", "Tricky", 3),
        ("new york", "Places", 2),
    ] {
        bank.add_word(NewWord {
            word: word.to_string(),
            hint: Some(format!("hint: {word}")),
            category: Some(category.to_string()),
            difficulty: Some(difficulty),
            active: None,
        })
        .expect("seeding test bank");
    }
    bank
}

/// Creates a session in the given mode with default settings otherwise.
pub fn create_session(mode: SelectionMode) -> PlaySession {
    PlaySession::new(GameSettings {
        selection_mode: mode,
        ..GameSettings::default()
    })
}

/// Deterministic RNG for selection tests.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

/// Finds a word by its spelling in an active list.
pub fn word_by_text<'a>(words: &'a [Word], text: &str) -> &'a Word {
    words
        .iter()
        .find(|w| w.word == text)
        .expect("word present in test bank")
}

/// Event collector for asserting on session event emissions.
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn has_event(&self, check: impl Fn(&SessionEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check)
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
