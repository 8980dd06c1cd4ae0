use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::panel::{LevelSelect, Severity, SplashMode, ToolbarButton};

/// Returns the path to the Unix socket the proof engine listens on.
#[must_use]
pub fn socket_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("proof-panel/proof-panel.sock")
}

/// Messages sent from the proof engine to the panel, one JSON object per
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Replace the goal pane.
    Goals { content: String },
    SystemNotification { message: String },
    Splash {
        #[serde(default)]
        version_info: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        mode: SplashMode,
    },
    Log {
        text: String,
        level: Severity,
        /// Session id of the sentence that produced the message.
        #[serde(default)]
        sid: Option<String>,
    },
    Packages { lines: Vec<String> },
    ToolbarOn,
    ToolbarOff,
    Show,
    Hide,
    Toggle,
    /// Minimum displayed severity, by rank or by name.
    Filter { level: LevelSelect },
}

/// Commands sent from the panel to the proof engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Action { button: ToolbarButton },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_log_message() {
        let line = r#"{"type":"Log","text":"foo is defined","level":"Notice","sid":"4"}"#;
        let msg: Message = serde_json::from_str(line).unwrap();
        assert_eq!(
            msg,
            Message::Log {
                text: "foo is defined".to_string(),
                level: Severity::Notice,
                sid: Some("4".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_filter_by_rank_or_name() {
        let by_rank: Message = serde_json::from_str(r#"{"type":"Filter","level":1}"#).unwrap();
        let by_name: Message =
            serde_json::from_str(r#"{"type":"Filter","level":"Warning"}"#).unwrap();

        for msg in [by_rank, by_name] {
            let Message::Filter { level } = msg else {
                panic!("expected filter message");
            };
            assert_eq!(level.resolve().unwrap(), Severity::Warning);
        }
    }

    #[test]
    fn test_decode_splash_defaults() {
        let msg: Message = serde_json::from_str(r#"{"type":"Splash"}"#).unwrap();
        assert_eq!(
            msg,
            Message::Splash {
                version_info: None,
                message: None,
                mode: SplashMode::Wait,
            }
        );
    }

    #[test]
    fn test_encode_action_command() {
        let cmd = Command::Action {
            button: ToolbarButton::ToCursor,
        };
        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"Action","button":"to-cursor"}"#
        );
    }
}
