mod config;

use std::io::{BufRead, Write as _};

use anyhow::Result;
use bee_core::{
    NullSpeaker, PlaySession, SessionEvent, SessionEventHandler, Speaker, SpeechRequest, WordBank,
};
use bee_store::{JsonFileStore, SettingsStore, WordStore, load_or_seed};
use bee_types::{GameSettings, NewWord, SelectionMode, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use config::Config;

/// Mirrors session events into the log stream.
struct EventLogger;

impl SessionEventHandler for EventLogger {
    fn handle_event(&mut self, event: SessionEvent) {
        debug!(?event, "session event");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    info!("Starting spelling bee host...");

    let config = Config::new();
    let word_store = JsonFileStore::new(&config.words_path);
    let settings_store = SettingsStore::new(&config.settings_path);

    let payload = match load_or_seed(&word_store).await {
        Ok(payload) => payload,
        Err(error) => {
            // Degraded but non-crashing: an empty bank keeps the admin
            // commands (import, add) usable.
            warn!(%error, "unable to load words, starting with an empty bank");
            println!("Unable to load words right now; the bank starts empty.");
            bee_types::WordsPayload {
                version: 1,
                updated_at: String::new(),
                words: Vec::new(),
            }
        }
    };

    let settings = settings_store.load().await;
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut bank = WordBank::new(payload);
    let mut session = PlaySession::new(settings);
    session.event_bus.add_handler(Box::new(EventLogger));
    // Speech synthesis is a browser capability; the host runs without it
    // and falls back to revealing the word in text.
    let mut speaker = NullSpeaker;

    let counts = bank.counts();
    println!("Spelling Bee for Friends — terminal host");
    println!(
        "{} words loaded ({} active). Type :help for commands.",
        counts.total, counts.active
    );

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                warn!(%error, "failed to read input");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            if command == "quit" || command == "q" {
                break;
            }
            if let Err(error) = run_command(
                command,
                &mut bank,
                &mut session,
                &mut speaker,
                &mut rng,
                &word_store,
                &settings_store,
            )
            .await
            {
                println!("error: {error}");
            }
        } else {
            submit(line, &bank, &mut session);
        }
    }

    info!("Host shutting down.");
}

fn active_words(bank: &WordBank, session: &PlaySession) -> Vec<Word> {
    bank.active_words(&session.settings().filters)
}

fn submit(raw: &str, bank: &WordBank, session: &mut PlaySession) {
    let words = active_words(bank, session);
    if words.is_empty() {
        println!("No active words. Add some with :add or import a bank with :import.");
        return;
    }
    match session.submit_attempt(&words, raw) {
        Ok(record) => {
            if record.correct {
                println!("Correct! \"{}\"", record.expected);
            } else {
                println!("Incorrect. The spelling was \"{}\"", record.expected);
            }
        }
        Err(_) => println!("No word is up — use :next first."),
    }
}

fn announce(word: &Word, settings: &GameSettings, speaker: &mut dyn Speaker) {
    if speaker.is_supported() {
        speaker.speak(&SpeechRequest::from_settings(word.word.as_str(), settings));
        println!("Word spoken. Type the spelling, or :hear to repeat it.");
    } else {
        println!("(no speech synthesizer — revealing instead)");
        println!("The word is: {}", word.word);
        if let Some(hint) = &word.hint {
            println!("Hint: {hint}");
        }
    }
}

async fn save_words(store: &JsonFileStore, bank: &WordBank) {
    // Fire-and-forget: persistence failures are logged, never fatal.
    if let Err(error) = store.save(bank.payload()).await {
        warn!(%error, "failed to persist words");
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_command(
    command: &str,
    bank: &mut WordBank,
    session: &mut PlaySession,
    speaker: &mut dyn Speaker,
    rng: &mut StdRng,
    word_store: &JsonFileStore,
    settings_store: &SettingsStore,
) -> Result<()> {
    let (name, rest) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "help" => print_help(),
        "next" | "n" => {
            let words = active_words(bank, session);
            match session.next_word(&words, rng) {
                Some(word) => {
                    let word = word.clone();
                    announce(&word, session.settings(), speaker);
                }
                None => println!("No active words match the current filters."),
            }
        }
        "hear" => {
            let words = active_words(bank, session);
            match session.current_word(&words) {
                Some(word) => {
                    let word = word.clone();
                    announce(&word, session.settings(), speaker);
                }
                None => println!("No word is up — use :next first."),
            }
        }
        "reveal" => {
            let words = active_words(bank, session);
            match session.current_word(&words) {
                Some(word) => {
                    println!("The word is: {}", word.word);
                    if let Some(hint) = &word.hint {
                        println!("Hint: {hint}");
                    }
                }
                None => println!("No word is up — use :next first."),
            }
        }
        "mode" => {
            let mode = match rest {
                "random" => SelectionMode::Random,
                "sequential" => SelectionMode::Sequential,
                "no-repeats" => SelectionMode::NoRepeats,
                other => {
                    println!("Unknown mode {other:?}; expected random, sequential or no-repeats.");
                    return Ok(());
                }
            };
            session.set_selection_mode(mode);
            if let Err(error) = settings_store.save(session.settings()).await {
                warn!(%error, "failed to persist settings");
            }
            println!("Selection mode is now {rest}.");
        }
        "teams" => {
            let scores = session.team_stats();
            for team in session.teams() {
                let score = scores.get(&team.id).copied().unwrap_or_default();
                let marker = if session
                    .current_team()
                    .is_some_and(|current| current.id == team.id)
                {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{marker} {} [{}] {}/{} correct",
                    team.name, team.id, score.correct, score.attempted
                );
            }
            if session.current_team().is_none() {
                println!("* playing solo");
            }
        }
        "team" => match rest.strip_prefix("add ") {
            Some(team_name) => {
                session.add_team(team_name)?;
                println!("Team \"{}\" added.", team_name.trim());
            }
            None => {
                if rest.is_empty() {
                    println!("Usage: :team add <name> | :team <id> | :solo");
                } else {
                    session.select_team(Some(rest))?;
                    println!("Up next: {}", session.current_team().map(|t| t.name.as_str()).unwrap_or("solo"));
                }
            }
        },
        "solo" => {
            session.select_team(None)?;
            println!("Playing solo; attempts won't count toward any team.");
        }
        "stats" => {
            let stats = session.stats();
            println!(
                "{} attempted, {} correct, {}% accuracy",
                stats.attempted, stats.correct, stats.accuracy
            );
        }
        "history" => {
            if session.attempts().is_empty() {
                println!("No attempts yet. Start playing to see history.");
            }
            for attempt in session.attempts() {
                let verdict = if attempt.correct { "correct" } else { "miss" };
                let team = attempt.team_name.as_deref().unwrap_or("solo");
                println!(
                    "[{verdict:>7}] {:<20} attempt: {:<20} ({team})",
                    attempt.expected, attempt.attempt
                );
            }
        }
        "clear" => {
            session.clear_history();
            println!("History cleared.");
        }
        "list" => {
            for word in bank.words() {
                let flag = if word.active { " " } else { "-" };
                println!(
                    "{flag} {} [{}] {} {}",
                    word.word,
                    word.id,
                    word.category.as_deref().unwrap_or(""),
                    word.difficulty.map(|d| d.to_string()).unwrap_or_default()
                );
            }
            let counts = bank.counts();
            println!("{} total, {} active", counts.total, counts.active);
        }
        "add" => {
            let mut parts = rest.split('|').map(str::trim);
            let word = parts.next().unwrap_or_default().to_string();
            let input = NewWord {
                word,
                hint: parts.next().filter(|s| !s.is_empty()).map(str::to_string),
                category: parts.next().filter(|s| !s.is_empty()).map(str::to_string),
                difficulty: match parts.next().filter(|s| !s.is_empty()) {
                    Some(raw) => Some(raw.parse()?),
                    None => None,
                },
                active: None,
            };
            let id = bank.add_word(input)?;
            session.note_active_words_changed();
            save_words(word_store, bank).await;
            println!("Word saved with id {id}.");
        }
        "delete" => {
            bank.delete_word(rest)?;
            session.note_active_words_changed();
            save_words(word_store, bank).await;
            println!("Word removed.");
        }
        "toggle" => {
            let active = bank.toggle_active(rest)?;
            session.note_active_words_changed();
            save_words(word_store, bank).await;
            println!("Word is now {}.", if active { "active" } else { "inactive" });
        }
        "import" => {
            let text = tokio::fs::read_to_string(rest).await?;
            match bank.import_json(&text) {
                Ok(count) => {
                    session.note_active_words_changed();
                    save_words(word_store, bank).await;
                    println!("Import complete: {count} words.");
                }
                Err(error) => println!("{error}"),
            }
        }
        "export" => {
            let json = bank.export_json()?;
            tokio::fs::write(rest, json).await?;
            println!("Exported JSON to {rest}.");
        }
        "reset" => {
            bank.replace(bee_store::seed_payload()?);
            session.note_active_words_changed();
            save_words(word_store, bank).await;
            println!("Reset to seed applied.");
        }
        other => println!("Unknown command :{other}; type :help."),
    }
    Ok(())
}

fn print_help() {
    println!("Play:   :next  :hear  :reveal  <type a spelling to submit>");
    println!("Teams:  :teams  :team add <name>  :team <id>  :solo");
    println!("Score:  :stats  :history  :clear");
    println!("Admin:  :list  :add <word>|<hint>|<category>|<difficulty>");
    println!("        :delete <id>  :toggle <id>  :import <path>  :export <path>  :reset");
    println!("Setup:  :mode <random|sequential|no-repeats>  :quit");
}
