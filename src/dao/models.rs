use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The single persisted entity: current game state plus optional table
/// settings. Stored in the `games` collection, identified by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDocument {
    /// Backend-assigned identity; present only once the document has been
    /// persisted. Skipped on serialization so inserts never send a null id.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Name of the game/save this document represents.
    pub name: String,
    /// Opaque numeric payload holding the game state proper.
    pub game: i64,
    /// Table settings, when the document carries them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<GameSettings>,
}

impl GameDocument {
    /// Convenience constructor for a fresh, never-persisted document.
    pub fn new(name: impl Into<String>, game: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            game,
            settings: None,
        }
    }
}

/// Nested settings block: in-game wall-clock bookkeeping and the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Session start instant, formatted `DD/MM/YYYY - HH:MM`.
    pub start_time: String,
    /// Current in-game instant, same format.
    pub current_time: String,
    /// Ordered player roster.
    pub players: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::{json, to_value};

    use super::*;

    #[test]
    fn unset_id_is_omitted_from_the_serialized_document() {
        let value = to_value(GameDocument::new("kornettoh", 1)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("settings"));
        assert_eq!(object.get("name"), Some(&json!("kornettoh")));
        assert_eq!(object.get("game"), Some(&json!(1)));
    }

    #[test]
    fn persisted_id_survives_serialization_under_its_wire_name() {
        let game = GameDocument {
            id: Some(ObjectId::new()),
            ..GameDocument::new("kornettoh", 2)
        };
        let value = to_value(game).unwrap();
        assert!(value.as_object().unwrap().contains_key("_id"));
    }

    #[test]
    fn settings_block_round_trips_with_roster_order_preserved() {
        let raw = json!({
            "name": "kornettoh",
            "game": 1,
            "settings": {
                "start_time": "01/01/2018 - 01:01",
                "current_time": "02/01/2018 - 02:02",
                "players": ["John Doe", "Jane Doe", "Chuck Norris"]
            }
        });
        let document: GameDocument = serde_json::from_value(raw).unwrap();
        assert_eq!(document.id, None);
        let settings = document.settings.unwrap();
        assert_eq!(settings.players, ["John Doe", "Jane Doe", "Chuck Norris"]);
    }

    #[test]
    fn document_without_game_payload_is_rejected() {
        let raw = json!({ "name": "kornettoh" });
        assert!(serde_json::from_value::<GameDocument>(raw).is_err());
    }
}
