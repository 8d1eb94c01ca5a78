//! Session state of the interactive front end.
//!
//! All mutation goes through [`AppState::apply`]. The REPL owns exactly one
//! `AppState`; nothing here is shared or global.

use crate::core::{briefing, responder};
use crate::data::{GREETING, OCEANS};
use crate::errors::{AppError, AppResult};
use crate::models::chat::ChatMessage;
use crate::models::ocean::Ocean;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Watchlist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Send(String),
    FreshChat,
    ToggleWatch(String),
    SelectTab(Tab),
    Search(String),
}

/// What an action produced, for the caller to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Blank input, nothing happened.
    Ignored,
    Reply(ChatMessage),
    Reset,
    Watch { id: String, watched: bool },
    Updated,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub watchlist: BTreeSet<String>,
    pub active_tab: Tab,
    pub search: String,
    next_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Greeting only, default watchlist from the static rows.
    pub fn new() -> Self {
        let watchlist = OCEANS
            .iter()
            .filter(|o| o.watchlisted)
            .map(|o| o.id.to_string())
            .collect();

        Self::with_watchlist(watchlist)
    }

    /// Watchlist built from ocean names (as stored in the config file).
    /// Unknown names are skipped with a warning.
    pub fn from_names(names: &[String]) -> Self {
        let watchlist = names
            .iter()
            .filter_map(|name| match briefing::find_ocean(name) {
                Ok(ocean) => Some(ocean.id.to_string()),
                Err(e) => {
                    log::warn!("watchlist entry skipped: {}", e);
                    None
                }
            })
            .collect();

        Self::with_watchlist(watchlist)
    }

    fn with_watchlist(watchlist: BTreeSet<String>) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            watchlist,
            active_tab: Tab::All,
            search: String::new(),
            next_id: 1,
        };
        state.reset_messages();
        state
    }

    pub fn apply(&mut self, action: Action) -> AppResult<Outcome> {
        match action {
            Action::Send(text) => Ok(self.send(&text)),
            Action::FreshChat => {
                self.reset_messages();
                Ok(Outcome::Reset)
            }
            Action::ToggleWatch(id) => self.toggle_watch(id),
            Action::SelectTab(tab) => {
                self.active_tab = tab;
                Ok(Outcome::Updated)
            }
            Action::Search(term) => {
                self.search = term;
                Ok(Outcome::Updated)
            }
        }
    }

    fn send(&mut self, text: &str) -> Outcome {
        let text = text.trim();
        if text.is_empty() {
            return Outcome::Ignored;
        }

        let id = self.take_id();
        self.messages.push(ChatMessage::user(id, text));

        let reply = responder::respond(text);
        let id = self.take_id();
        let message = ChatMessage::assistant(id, reply.narrative, reply.query);
        self.messages.push(message.clone());

        Outcome::Reply(message)
    }

    fn toggle_watch(&mut self, id: String) -> AppResult<Outcome> {
        if briefing::find_by_id(&id).is_none() {
            return Err(AppError::UnknownOcean(id));
        }

        let watched = if self.watchlist.remove(&id) {
            false
        } else {
            self.watchlist.insert(id.clone());
            true
        };

        Ok(Outcome::Watch { id, watched })
    }

    fn reset_messages(&mut self) {
        self.messages.clear();
        let id = self.take_id();
        self.messages.push(ChatMessage::assistant(id, GREETING, None));
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_watched(&self, ocean: &Ocean) -> bool {
        self.watchlist.contains(ocean.id)
    }

    /// Search filter first, then the tab filter, in dashboard order.
    pub fn visible_oceans(&self) -> Vec<&'static Ocean> {
        briefing::search(OCEANS, &self.search)
            .into_iter()
            .filter(|o| self.active_tab == Tab::All || self.is_watched(o))
            .collect()
    }
}
