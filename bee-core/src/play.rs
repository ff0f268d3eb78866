use anyhow::{Result, anyhow};
use bee_types::{AttemptRecord, GameSettings, SelectionMode, SessionStats, Team, TeamScore, Word};
use rand::Rng;
use std::collections::HashMap;
use uuid::Uuid;

use crate::events::{SessionEvent, SessionEventBus};
use crate::selection::{SelectionState, select_next};
use crate::session;
use crate::spelling::is_correct;

/// One live play session: the selection cursor, the capped attempt log, and
/// the team roster. Owned and driven by a single host loop; every operation
/// completes synchronously.
pub struct PlaySession {
    settings: GameSettings,
    selection: SelectionState,
    current_word_id: Option<String>,
    attempts: Vec<AttemptRecord>,
    teams: Vec<Team>,
    current_team_id: Option<String>,
    pub event_bus: SessionEventBus,
}

impl PlaySession {
    /// Starts a session with the default two-team roster and the first team
    /// up, matching the play screen's starting state.
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            selection: SelectionState::default(),
            current_word_id: None,
            attempts: Vec::new(),
            teams: vec![
                Team {
                    id: "team-1".to_string(),
                    name: "Team A".to_string(),
                },
                Team {
                    id: "team-2".to_string(),
                    name: "Team B".to_string(),
                },
            ],
            current_team_id: Some("team-1".to_string()),
            event_bus: SessionEventBus::new(),
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn current_word_id(&self) -> Option<&str> {
        self.current_word_id.as_deref()
    }

    /// The word being presented, resolved against the caller's active list.
    pub fn current_word<'a>(&self, active: &'a [Word]) -> Option<&'a Word> {
        let id = self.current_word_id.as_deref()?;
        active.iter().find(|w| w.id == id)
    }

    pub fn current_team(&self) -> Option<&Team> {
        let id = self.current_team_id.as_deref()?;
        self.teams.iter().find(|t| t.id == id)
    }

    /// Advances to the next word under the configured selection mode.
    /// Returns `None` when the active list is empty; submission must stay
    /// disabled until a word is presented.
    pub fn next_word<'a, R: Rng + ?Sized>(
        &mut self,
        active: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let (id, next_state) = select_next(
            active,
            self.settings.selection_mode,
            self.selection.clone(),
            rng,
        );
        self.selection = next_state;
        self.current_word_id = id;
        let word = self.current_word(active);
        if let Some(word) = word {
            self.event_bus.publish(SessionEvent::WordPresented {
                word_id: word.id.clone(),
            });
        }
        word
    }

    /// Scores a raw submission against the word being presented, stamps a
    /// record with the current team, and appends it to the capped log.
    pub fn submit_attempt(&mut self, active: &[Word], raw: &str) -> Result<AttemptRecord> {
        let word = self
            .current_word(active)
            .ok_or_else(|| anyhow!("no word is being presented"))?;

        let team = self.current_team();
        let record = AttemptRecord {
            id: Uuid::new_v4().to_string(),
            word_id: word.id.clone(),
            expected: word.word.clone(),
            attempt: raw.to_string(),
            correct: is_correct(raw, &word.word),
            at: chrono::Utc::now().timestamp_millis(),
            hint: word.hint.clone(),
            team_id: team.map(|t| t.id.clone()),
            team_name: team.map(|t| t.name.clone()),
        };

        self.attempts = session::record_attempt(&self.attempts, record.clone());
        self.event_bus.publish(SessionEvent::AttemptScored {
            record: record.clone(),
        });
        Ok(record)
    }

    /// Switches selection policy. A changed mode discards the cursor so the
    /// new policy starts fresh.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if self.settings.selection_mode == mode {
            return;
        }
        self.settings.selection_mode = mode;
        self.reset_selection();
    }

    pub fn update_settings(&mut self, settings: GameSettings) {
        let reset = settings.selection_mode != self.settings.selection_mode
            || settings.filters != self.settings.filters;
        self.settings = settings;
        if reset {
            self.reset_selection();
        }
    }

    /// Must be called whenever the active word set changes; a stale cursor
    /// or queue referencing removed words is never interpreted.
    pub fn note_active_words_changed(&mut self) {
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selection.reset();
        self.current_word_id = None;
        self.event_bus.publish(SessionEvent::SelectionReset);
    }

    /// Adds a team with a generated id. The first team ever added while no
    /// team is up becomes the current one.
    pub fn add_team(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("team name cannot be empty"));
        }
        let id = Uuid::new_v4().to_string();
        self.teams.push(Team {
            id: id.clone(),
            name: name.to_string(),
        });
        if self.current_team_id.is_none() {
            self.current_team_id = Some(id.clone());
        }
        self.event_bus.publish(SessionEvent::TeamAdded {
            team_id: id.clone(),
            name: name.to_string(),
        });
        Ok(id)
    }

    /// Chooses who is up; `None` plays solo.
    pub fn select_team(&mut self, team_id: Option<&str>) -> Result<()> {
        match team_id {
            None => {
                self.current_team_id = None;
                Ok(())
            }
            Some(id) => {
                if self.teams.iter().any(|t| t.id == id) {
                    self.current_team_id = Some(id.to_string());
                    Ok(())
                } else {
                    Err(anyhow!("unknown team: {}", id))
                }
            }
        }
    }

    pub fn stats(&self) -> SessionStats {
        session::stats(&self.attempts)
    }

    pub fn team_stats(&self) -> HashMap<String, TeamScore> {
        session::team_stats(&self.attempts, &self.teams)
    }

    pub fn clear_history(&mut self) {
        self.attempts.clear();
        self.event_bus.publish(SessionEvent::HistoryCleared);
    }
}
