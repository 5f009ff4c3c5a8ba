//! Shared fixtures for the Scryfall search integration tests.
//!
//! Provides card builders and a `ScriptedSource` page transport that serves
//! canned replies by URL and counts every fetch.

#![allow(dead_code)]

use scryfall_search::{Page, PageSource, Result, ScryfallError, ScryfallSearch};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE: &str = "https://api.test";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- Cards ------------------------------------------------------------------

pub fn card_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "layout": "normal",
        "type_line": "Creature — Elf",
        "rarity": "common",
        "color_identity": ["G"],
        "image_uris": { "normal": format!("https://img.test/{id}.jpg") }
    })
}

pub fn page(ids: &[&str], total: u32, next: Option<&str>) -> Page {
    let data: Vec<Value> = ids.iter().map(|id| card_json(id, &format!("Card {id}"))).collect();
    Page::from_value(json!({
        "object": "list",
        "total_cards": total,
        "has_more": next.is_some(),
        "next_page": next,
        "data": data
    }))
    .unwrap()
}

pub fn search_url(query: &str) -> String {
    format!("{BASE}/cards/search?q={query}")
}

pub fn page_url(query: &str, page: usize) -> String {
    format!("{BASE}/cards/search?q={query}&page={page}")
}

// -- ScriptedSource ----------------------------------------------------------

#[derive(Clone)]
pub enum Reply {
    Page(Page),
    NotFound,
    Status(u16),
    Malformed,
}

/// Serves scripted replies keyed by exact URL and records every request.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
    fetches: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, url: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(url.to_string(), reply);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageSource for ScriptedSource {
    fn fetch_page(&self, url: &str) -> Result<Page> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(url.to_string());
        let reply = self.replies.lock().unwrap().get(url).cloned();
        match reply {
            Some(Reply::Page(page)) => Ok(page),
            Some(Reply::NotFound) | None => Err(ScryfallError::NotFound(url.to_string())),
            Some(Reply::Status(code)) => Err(ScryfallError::HttpStatus(
                reqwest::StatusCode::from_u16(code).unwrap(),
            )),
            Some(Reply::Malformed) => Page::from_json(r#"{"unexpected":true}"#),
        }
    }
}

/// Build an SDK on top of `source` with no inter-page delay.
pub fn sdk_with(source: &ScriptedSource) -> ScryfallSearch {
    init_logger();
    ScryfallSearch::builder()
        .base_url(BASE)
        .page_delay(Duration::ZERO)
        .source(source.clone())
        .build()
        .unwrap()
}

/// Three pages of an "elf" search: a1 a2 | b1 b2 | c1.
pub fn three_page_source() -> ScriptedSource {
    let p2 = page_url("elf", 2);
    let p3 = page_url("elf", 3);
    ScriptedSource::new()
        .reply(&search_url("elf"), Reply::Page(page(&["a1", "a2"], 5, Some(&p2))))
        .reply(&p2, Reply::Page(page(&["b1", "b2"], 5, Some(&p3))))
        .reply(&p3, Reply::Page(page(&["c1"], 5, None)))
}
