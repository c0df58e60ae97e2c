use chrono::{NaiveDateTime, TimeDelta};

use super::game_service::GameService;
use crate::dao::models::GameDocument;
use crate::error::SettingsError;

/// Wall-clock format used by the settings block, `DD/MM/YYYY - HH:MM`.
pub const SETTINGS_TIME_FORMAT: &str = "%d/%m/%Y - %H:%M";

/// Read-only typed view over a game document's settings block.
///
/// Built from a [`GameService`] whose document is already loaded; parsing
/// happens once at construction and fails explicitly on missing or malformed
/// settings.
#[derive(Debug)]
pub struct SettingsService {
    data: GameDocument,
    start_time: NaiveDateTime,
    current_time: NaiveDateTime,
    players: Vec<String>,
}

impl SettingsService {
    /// Copy the service's loaded document and parse its settings block.
    pub fn from_service(service: &GameService) -> Result<Self, SettingsError> {
        let data = service.data().cloned().ok_or(SettingsError::NoGameLoaded)?;
        let settings = data
            .settings
            .as_ref()
            .ok_or_else(|| SettingsError::MissingSettings {
                name: data.name.clone(),
            })?;

        let start_time = parse_settings_time(&settings.start_time, "start_time")?;
        let current_time = parse_settings_time(&settings.current_time, "current_time")?;
        let players = settings.players.clone();

        Ok(Self {
            data,
            start_time,
            current_time,
            players,
        })
    }

    /// The copied game document this view was built from.
    pub fn data(&self) -> &GameDocument {
        &self.data
    }

    /// Parsed session start instant.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Parsed current in-game instant.
    pub fn current_time(&self) -> NaiveDateTime {
        self.current_time
    }

    /// Player roster, in stored order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// In-game time elapsed, `current_time - start_time`.
    pub fn elapsed(&self) -> TimeDelta {
        self.current_time - self.start_time
    }
}

fn parse_settings_time(value: &str, field: &'static str) -> Result<NaiveDateTime, SettingsError> {
    NaiveDateTime::parse_from_str(value, SETTINGS_TIME_FORMAT)
        .map_err(|source| SettingsError::InvalidTimestamp { field, source })
}
