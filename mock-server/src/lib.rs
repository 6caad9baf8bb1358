use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: i64,
    pub name: String,
}

/// Creation payload. Any id the client sends is ignored; the server
/// assigns the next one.
#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
struct ListParams {
    name: Option<String>,
}

pub struct AppState {
    heroes: RwLock<HashMap<i64, Hero>>,
    next_id: AtomicI64,
}

pub fn app() -> Router {
    let state = Arc::new(AppState {
        heroes: RwLock::new(HashMap::new()),
        next_id: AtomicI64::new(1),
    });
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(add_hero).put(update_hero),
        )
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// List the collection, optionally filtered by a case-insensitive name
/// substring (`?name=term`). Sorted by id for deterministic output.
async fn list_heroes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Hero>> {
    let heroes = state.heroes.read().await;
    let mut result: Vec<Hero> = match params.name.as_deref() {
        Some(term) => {
            let term = term.to_lowercase();
            heroes
                .values()
                .filter(|hero| hero.name.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        None => heroes.values().cloned().collect(),
    };
    result.sort_by_key(|hero| hero.id);
    Json(result)
}

async fn add_hero(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let hero = Hero {
        id: state.next_id.fetch_add(1, Ordering::Relaxed),
        name: input.name,
    };
    state.heroes.write().await.insert(hero.id, hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Hero>, StatusCode> {
    let heroes = state.heroes.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Whole-record replace keyed by the id in the body.
async fn update_hero(
    State(state): State<Arc<AppState>>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = state.heroes.write().await;
    match heroes.get_mut(&input.id) {
        Some(existing) => {
            *existing = input.clone();
            Ok(Json(input))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete returns the removed record so clients can report what went away.
async fn delete_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = state.heroes.write().await;
    heroes.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 1,
            name: "Windstorm".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Windstorm");
    }

    #[test]
    fn hero_roundtrips_through_json() {
        let hero = Hero {
            id: 14,
            name: "Celeritas".to_string(),
        };
        let json = serde_json::to_string(&hero).unwrap();
        let back: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hero);
    }

    #[test]
    fn new_hero_ignores_client_sent_id() {
        let input: NewHero = serde_json::from_str(r#"{"id":999,"name":"Tornado"}"#).unwrap();
        assert_eq!(input.name, "Tornado");
    }

    #[test]
    fn new_hero_rejects_missing_name() {
        let result: Result<NewHero, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }
}
