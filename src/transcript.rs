//! Transcript parsing and flattening
//!
//! Converts the trigger's Transcribe-style JSON payload into the plain text
//! transcript the extraction prompt embeds. For example -
//! AGENT: Hi!
//! CUSTOMER: Hello, I am calling about my credit card

use crate::models::{TranscriptEvent, Turn};
use crate::{Error, Result};

/// Parse a raw trigger event into a typed [`TranscriptEvent`].
///
/// Any shape violation (missing role or text, unknown role value) is
/// reported as [`Error::MalformedInput`].
pub fn parse_event(raw: &str) -> Result<TranscriptEvent> {
    serde_json::from_str(raw)
        .map_err(|e| Error::MalformedInput(format!("Invalid transcript event: {}", e)))
}

/// Flatten ordered turns into one `"<ROLE>: <text>\n"` line per turn.
///
/// Pure function; the same input always yields the same output.
pub fn flatten_transcript(turns: &[Turn]) -> String {
    let mut op = String::new();
    for turn in turns {
        op.push_str(&format!("{}: {}\n", turn.role, turn.content));
    }
    op
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantRole;

    fn sample_turns() -> Vec<Turn> {
        vec![
            Turn {
                role: ParticipantRole::Agent,
                content: "Hi!".to_string(),
            },
            Turn {
                role: ParticipantRole::Customer,
                content: "Hello, I am calling about my credit card".to_string(),
            },
        ]
    }

    #[test]
    fn test_flatten_produces_one_line_per_turn() {
        let flattened = flatten_transcript(&sample_turns());
        assert_eq!(flattened.lines().count(), 2);
        assert!(flattened.lines().next().unwrap().starts_with("AGENT: "));
        assert!(flattened.lines().nth(1).unwrap().starts_with("CUSTOMER: "));
    }

    #[test]
    fn test_flatten_exact_output() {
        assert_eq!(
            flatten_transcript(&sample_turns()),
            "AGENT: Hi!\nCUSTOMER: Hello, I am calling about my credit card\n"
        );
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let turns = sample_turns();
        assert_eq!(flatten_transcript(&turns), flatten_transcript(&turns));
    }

    #[test]
    fn test_flatten_empty_transcript() {
        assert_eq!(flatten_transcript(&[]), "");
    }

    #[test]
    fn test_parse_event_valid() {
        let raw = r#"{
            "JobName": "job-123",
            "Transcript": [
                {"ParticipantRole": "AGENT", "Content": "Hi!"},
                {"ParticipantRole": "CUSTOMER", "Content": "Hello"}
            ]
        }"#;

        let event = parse_event(raw).unwrap();
        assert_eq!(event.job_name, "job-123");
        assert_eq!(event.transcript.len(), 2);
    }

    #[test]
    fn test_parse_event_missing_content_is_malformed() {
        let raw = r#"{
            "JobName": "job-123",
            "Transcript": [{"ParticipantRole": "AGENT"}]
        }"#;

        let err = parse_event(raw).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_parse_event_unknown_role_is_malformed() {
        let raw = r#"{
            "JobName": "job-123",
            "Transcript": [{"ParticipantRole": "SUPERVISOR", "Content": "Hi"}]
        }"#;

        let err = parse_event(raw).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_parse_event_missing_job_name_is_malformed() {
        let raw = r#"{"Transcript": []}"#;
        assert!(matches!(
            parse_event(raw).unwrap_err(),
            Error::MalformedInput(_)
        ));
    }
}
