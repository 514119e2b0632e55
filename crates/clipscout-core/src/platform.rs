use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Short-video platforms clipscout knows how to search and validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Kuaishou,
    Douyin,
    Bilibili,
    Youtube,
    Xiaohongshu,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Kuaishou,
        Platform::Douyin,
        Platform::Bilibili,
        Platform::Youtube,
        Platform::Xiaohongshu,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Kuaishou => "kuaishou",
            Platform::Douyin => "douyin",
            Platform::Bilibili => "bilibili",
            Platform::Youtube => "youtube",
            Platform::Xiaohongshu => "xiaohongshu",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("unsupported platform: {0}")]
    Unsupported(String),
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| PlatformError::Unsupported(s.to_string()))
    }
}
