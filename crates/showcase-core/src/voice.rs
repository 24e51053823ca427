//! Keyword matching for spoken commands ("open the cube", "show the building").

use crate::pickable::ObjectKind;

const ACTION_KEYWORDS: [&str; 4] = ["show", "open", "click", "select"];

// Scan order decides ties when a phrase names two objects.
const OBJECT_KEYWORDS: [(&str, ObjectKind); 4] = [
    ("cube", ObjectKind::Cube),
    ("sphere", ObjectKind::Sphere),
    ("cylinder", ObjectKind::Cylinder),
    ("building", ObjectKind::Building),
];

pub const VOICE_HINT: &str = "Try \"open the cube\" or \"show the building\".";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceCommand {
    /// Every action keyword maps to a click on the named object.
    Click(ObjectKind),
}

/// Match a recognised transcript. Case and surrounding whitespace are
/// ignored; keywords match anywhere in the phrase.
pub fn parse_command(transcript: &str) -> Option<VoiceCommand> {
    let command = transcript.trim().to_lowercase();
    if command.is_empty() {
        return None;
    }
    let has_action = ACTION_KEYWORDS.iter().any(|k| command.contains(k));
    let target = OBJECT_KEYWORDS
        .iter()
        .find(|(word, _)| command.contains(word))
        .map(|(_, kind)| *kind);
    match (has_action, target) {
        (true, Some(kind)) => Some(VoiceCommand::Click(kind)),
        _ => None,
    }
}
