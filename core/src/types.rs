//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single hero record returned by the API.
///
/// The `id` is unique and server-assigned; this crate never generates one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: i64,
    pub name: String,
}

/// Request payload for creating a new hero. The server assigns the id, so
/// the payload carries only the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 11,
            name: "Mr. Nice".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 11);
        assert_eq!(json["name"], "Mr. Nice");
    }

    #[test]
    fn hero_roundtrips_through_json() {
        let hero = Hero {
            id: 12,
            name: "Narco".to_string(),
        };
        let json = serde_json::to_string(&hero).unwrap();
        let back: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hero);
    }

    #[test]
    fn hero_rejects_missing_name() {
        let result: Result<Hero, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_hero_carries_no_id() {
        let json = serde_json::to_value(NewHero::new("Bombasto")).unwrap();
        assert_eq!(json["name"], "Bombasto");
        assert!(json.get("id").is_none());
    }
}
