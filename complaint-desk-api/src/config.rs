use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{DeskError, DeskResult};

pub const TEAMS_ENV: &str = "COMPLAINT_DESK_TEAMS";
pub const PAGE_SIZE_ENV: &str = "COMPLAINT_DESK_PAGE_SIZE";

/// Workflow configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Assignment targets offered to staff
    pub teams: Vec<String>,

    /// Page size used when a listing request does not give one
    pub default_page_size: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            teams: vec![
                "Support Team A".to_string(),
                "Support Team B".to_string(),
                "Billing Team".to_string(),
                "Technical Team".to_string(),
                "Management".to_string(),
            ],
            default_page_size: 20,
        }
    }
}

impl DeskConfig {
    /// Defaults overridden by `COMPLAINT_DESK_TEAMS` (comma-separated) and
    /// `COMPLAINT_DESK_PAGE_SIZE`
    pub fn from_env() -> DeskResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(TEAMS_ENV) {
            let teams: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|team| !team.is_empty())
                .map(String::from)
                .collect();
            if !teams.is_empty() {
                config.teams = teams;
            }
        }

        if let Ok(raw) = env::var(PAGE_SIZE_ENV) {
            config.default_page_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(DeskError::InternalError(format!(
                        "{PAGE_SIZE_ENV} must be a positive integer, got {raw:?}"
                    )))
                }
            };
        }

        Ok(config)
    }
}
