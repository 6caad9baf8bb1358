//! The `HeroClient` facade over the hero REST collection.
//!
//! # Design
//! `HeroClient` holds only a base URL, the injected [`Transport`], and the
//! two output sinks; it carries no mutable state between calls. Each
//! operation is one round-trip: a `build_*` method produces an
//! `HttpRequest`, the transport executes it, a `parse_*` method consumes
//! the `HttpResponse`.
//!
//! Failures never escape. Every error — transport, non-2xx status, bad
//! JSON — is recorded on the diagnostic sink, logged to the notifier as
//! `"<operation> failed: <error>"`, and replaced by a fallback value
//! (empty list or `None`). Callers cannot tell a swallowed failure apart
//! from "legitimately no data"; that trade-off is the contract.

use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::notify::{DiagnosticSink, Notifier};
use crate::types::{Hero, NewHero};

/// Asynchronous client for the hero collection at `<base_url>/api/heroes`.
///
/// All six operations resolve with a value or a fallback, never an error.
/// No retries, no client-side timeouts; timeout policy belongs to the
/// transport.
pub struct HeroClient<T: Transport> {
    base_url: String,
    transport: T,
    notifier: Arc<dyn Notifier>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<T: Transport> HeroClient<T> {
    pub fn new(
        base_url: &str,
        transport: T,
        notifier: Arc<dyn Notifier>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            notifier,
            diagnostics,
        }
    }

    /// Fetch the whole collection. Falls back to an empty list.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        let outcome = async {
            let response = self.transport.execute(self.build_list_heroes()).await?;
            parse_hero_list(response)
        }
        .await;

        match outcome {
            Ok(heroes) => {
                self.log("Fetched heroes");
                heroes
            }
            Err(err) => self.recover("list_heroes", err, Vec::new()),
        }
    }

    /// Fetch a single hero by id. Falls back to `None`.
    pub async fn get_hero(&self, id: i64) -> Option<Hero> {
        let outcome = async {
            let response = self.transport.execute(self.build_get_hero(id)).await?;
            parse_hero(response)
        }
        .await;

        match outcome {
            Ok(hero) => {
                self.log(&format!("Fetched hero id={id}"));
                Some(hero)
            }
            Err(err) => self.recover("get_hero", err, None),
        }
    }

    /// Create a hero; the server assigns the id. Falls back to `None`.
    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        let outcome = async {
            let request = self.build_add_hero(&hero)?;
            let response = self.transport.execute(request).await?;
            parse_hero(response)
        }
        .await;

        match outcome {
            Ok(created) => {
                self.log(&format!("Added hero with id={}", created.id));
                Some(created)
            }
            Err(err) => self.recover("add_hero", err, None),
        }
    }

    /// Replace a hero record wholesale. The server's response body is an
    /// opaque ack; success resolves to `Some(())`, failure to `None`.
    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        let outcome = async {
            let request = self.build_update_hero(hero)?;
            let response = self.transport.execute(request).await?;
            parse_ack(response)
        }
        .await;

        match outcome {
            Ok(()) => {
                self.log(&format!("Updated hero id={}", hero.id));
                Some(())
            }
            Err(err) => self.recover("update_hero", err, None),
        }
    }

    /// Delete a hero by id. Resolves to the deleted record when the server
    /// echoes it back; falls back to `None`.
    pub async fn delete_hero(&self, id: i64) -> Option<Hero> {
        let outcome = async {
            let response = self.transport.execute(self.build_delete_hero(id)).await?;
            parse_hero(response)
        }
        .await;

        match outcome {
            Ok(deleted) => {
                self.log(&format!("Deleted hero with id={id}"));
                Some(deleted)
            }
            Err(err) => self.recover("delete_hero", err, None),
        }
    }

    /// Search by name substring. An empty or whitespace-only term
    /// short-circuits: no request, no log line, empty result. Falls back
    /// to an empty list.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        let outcome = async {
            let response = self.transport.execute(self.build_search_heroes(term)).await?;
            parse_hero_list(response)
        }
        .await;

        match outcome {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(&format!("No heroes matching '{term}'"));
                } else {
                    self.log(&format!("Found heroes matching '{term}'"));
                }
                heroes
            }
            Err(err) => self.recover("search_heroes", err, Vec::new()),
        }
    }

    fn heroes_url(&self) -> String {
        format!("{}/api/heroes", self.base_url)
    }

    fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.heroes_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn build_get_hero(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.heroes_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.heroes_url(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.heroes_url(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    fn build_delete_hero(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url()),
            headers: json_headers(),
            body: None,
        }
    }

    fn build_search_heroes(&self, term: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}?name={}", self.heroes_url(), urlencoding::encode(term)),
            headers: Vec::new(),
            body: None,
        }
    }

    fn log(&self, message: &str) {
        self.notifier.append(&format!("HeroClient: {message}"));
    }

    /// Record the error on both channels and substitute the fallback.
    fn recover<V>(&self, operation: &str, error: ApiError, fallback: V) -> V {
        self.diagnostics.record(&error);
        self.log(&format!("{operation} failed: {error}"));
        fallback
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_hero(response: HttpResponse) -> Result<Hero, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn parse_hero_list(response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn parse_ack(response: HttpResponse) -> Result<(), ApiError> {
    check_status(&response)
}
