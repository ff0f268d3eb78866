use bee_types::{AttemptRecord, SessionStats, Team, TeamScore};
use std::collections::HashMap;

/// Most-recent-first cap on the in-memory attempt log.
pub const MAX_ATTEMPT_HISTORY: usize = 50;

/// Prepends `attempt` to the log and evicts the oldest entries past the
/// cap. The input log is left untouched.
pub fn record_attempt(log: &[AttemptRecord], attempt: AttemptRecord) -> Vec<AttemptRecord> {
    let keep = log.len().min(MAX_ATTEMPT_HISTORY - 1);
    let mut next = Vec::with_capacity(keep + 1);
    next.push(attempt);
    next.extend_from_slice(&log[..keep]);
    next
}

/// Global tally over the attempt log.
pub fn stats(log: &[AttemptRecord]) -> SessionStats {
    let attempted = log.len() as u32;
    let correct = log.iter().filter(|a| a.correct).count() as u32;
    let accuracy = if attempted > 0 {
        ((f64::from(correct) / f64::from(attempted)) * 100.0).round() as u32
    } else {
        0
    };
    SessionStats {
        attempted,
        correct,
        accuracy,
    }
}

/// Per-team tallies, zero-initialized for every known team. Attempts with
/// an absent or unknown team reference are skipped here; they still count
/// toward the global stats.
pub fn team_stats(log: &[AttemptRecord], teams: &[Team]) -> HashMap<String, TeamScore> {
    let mut scores: HashMap<String, TeamScore> = teams
        .iter()
        .map(|team| (team.id.clone(), TeamScore::default()))
        .collect();
    for attempt in log {
        let Some(team_id) = attempt.team_id.as_deref() else {
            continue;
        };
        let Some(score) = scores.get_mut(team_id) else {
            continue;
        };
        score.attempted += 1;
        if attempt.correct {
            score.correct += 1;
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(n: u32, correct: bool, team_id: Option<&str>) -> AttemptRecord {
        AttemptRecord {
            id: format!("attempt-{n}"),
            word_id: format!("word-{n}"),
            expected: "ocean".to_string(),
            attempt: "ocean".to_string(),
            correct,
            at: i64::from(n),
            hint: None,
            team_id: team_id.map(str::to_string),
            team_name: team_id.map(str::to_string),
        }
    }

    fn team(id: &str) -> Team {
        Team {
            id: id.to_string(),
            name: id.to_uppercase(),
        }
    }

    #[test]
    fn test_record_prepends_most_recent_first() {
        let log = record_attempt(&[], attempt(1, true, None));
        let log = record_attempt(&log, attempt(2, false, None));
        assert_eq!(log[0].id, "attempt-2");
        assert_eq!(log[1].id, "attempt-1");
    }

    #[test]
    fn test_log_is_capped_at_fifty() {
        let mut log = Vec::new();
        for n in 1..=51 {
            log = record_attempt(&log, attempt(n, true, None));
        }
        assert_eq!(log.len(), MAX_ATTEMPT_HISTORY);
        assert_eq!(log[0].id, "attempt-51");
        assert!(log.iter().all(|a| a.id != "attempt-1"));
    }

    #[test]
    fn test_stats_on_empty_log() {
        assert_eq!(
            stats(&[]),
            SessionStats {
                attempted: 0,
                correct: 0,
                accuracy: 0
            }
        );
    }

    #[test]
    fn test_stats_rounds_accuracy() {
        let log = vec![
            attempt(1, true, None),
            attempt(2, true, None),
            attempt(3, false, None),
        ];
        assert_eq!(
            stats(&log),
            SessionStats {
                attempted: 3,
                correct: 2,
                accuracy: 67
            }
        );
    }

    #[test]
    fn test_team_stats_attributes_alternating_attempts() {
        let teams = vec![team("red"), team("blue")];
        let log = vec![
            attempt(1, true, Some("red")),
            attempt(2, false, Some("blue")),
            attempt(3, true, Some("red")),
            attempt(4, true, Some("blue")),
        ];
        let scores = team_stats(&log, &teams);
        assert_eq!(
            scores["red"],
            TeamScore {
                attempted: 2,
                correct: 2
            }
        );
        assert_eq!(
            scores["blue"],
            TeamScore {
                attempted: 2,
                correct: 1
            }
        );
    }

    #[test]
    fn test_team_stats_ignores_solo_and_unknown_teams() {
        let teams = vec![team("red")];
        let log = vec![
            attempt(1, true, None),
            attempt(2, true, Some("disbanded")),
            attempt(3, false, Some("red")),
        ];
        let scores = team_stats(&log, &teams);
        assert_eq!(scores.len(), 1);
        assert_eq!(
            scores["red"],
            TeamScore {
                attempted: 1,
                correct: 0
            }
        );
        // Solo and unknown attempts still count globally.
        assert_eq!(stats(&log).attempted, 3);
    }

    #[test]
    fn test_every_known_team_gets_an_entry() {
        let teams = vec![team("red"), team("blue")];
        let scores = team_stats(&[], &teams);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["blue"], TeamScore::default());
    }
}
