use bee_types::GameSettings;

/// A single utterance handed to the speech capability.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_uri: Option<String>,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    pub fn from_settings(text: impl Into<String>, settings: &GameSettings) -> Self {
        Self {
            text: text.into(),
            voice_uri: settings.voice_uri.clone(),
            rate: settings.rate,
            pitch: settings.pitch,
        }
    }
}

/// Best-effort speech synthesis boundary. A new request replaces any
/// utterance still in flight. Hosts where the capability is absent must
/// fall back to a textual reveal.
pub trait Speaker {
    fn is_supported(&self) -> bool {
        true
    }

    fn speak(&mut self, request: &SpeechRequest);
}

/// Stand-in used when no synthesizer is available.
#[derive(Debug, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&mut self, _request: &SpeechRequest) {}
}
