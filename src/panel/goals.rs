//! Content of the goal pane.

use serde::{Deserialize, Serialize};

use crate::options::Asset;

/// Startup phase shown by the splash animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplashMode {
    #[default]
    Wait,
    Ready,
}

impl SplashMode {
    #[must_use]
    pub const fn asset(self) -> Asset {
        match self {
            Self::Wait => Asset::Wait,
            Self::Ready => Asset::Ready,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wait => "wait",
            Self::Ready => "ready",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Splash {
    pub version_info: String,
    pub message: String,
    pub mode: SplashMode,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalBlock {
    /// Goal text as produced by the engine.
    Markup(String),
    /// Important notice, e.g. during startup.
    System(String),
    Splash(Splash),
}

#[derive(Debug, Default)]
pub struct GoalRegion {
    blocks: Vec<GoalBlock>,
}

impl GoalRegion {
    /// Replace everything. No diffing, no history.
    pub fn replace(&mut self, markup: String) {
        self.blocks = vec![GoalBlock::Markup(markup)];
    }

    pub fn push_system(&mut self, message: String) {
        self.blocks.push(GoalBlock::System(message));
    }

    /// Update the splash in place, or replace the region with a fresh one.
    pub fn splash(
        &mut self,
        version_info: Option<&str>,
        message: Option<&str>,
        mode: SplashMode,
        image_url: String,
    ) {
        let has_splash = self.blocks.iter().any(|b| matches!(b, GoalBlock::Splash(_)));
        if !has_splash {
            self.blocks = vec![GoalBlock::Splash(Splash::default())];
        }

        let Some(splash) = self.blocks.iter_mut().find_map(|b| match b {
            GoalBlock::Splash(splash) => Some(splash),
            _ => None,
        }) else {
            return;
        };

        if let Some(version_info) = version_info {
            splash.version_info = version_info.to_string();
        }
        if let Some(message) = message {
            splash.message = message.to_string();
        }
        splash.mode = mode;
        if splash.image_url != image_url {
            splash.image_url = image_url;
        }
    }

    #[must_use]
    pub fn blocks(&self) -> &[GoalBlock] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
