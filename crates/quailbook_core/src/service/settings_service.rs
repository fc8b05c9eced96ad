//! External assistant settings.
//!
//! # Responsibility
//! - Read and write the assistant API key and the enable toggle.
//!
//! # Invariants
//! - A blank key is never stored; saving one removes the stored key.
//! - The toggle defaults to enabled when absent.

use crate::repo::kv_repo::{KeyValueStore, RepoResult};
use log::info;

/// Storage key of the assistant API key.
pub const API_KEY_KEY: &str = "openai_api_key";
/// Storage key of the assistant toggle (`"true"`/`"false"`).
pub const USE_ASSISTANT_KEY: &str = "use_chatgpt";

/// Current assistant settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    pub api_key: Option<String>,
    pub use_assistant: bool,
}

/// Settings facade over a key-value store.
pub struct SettingsService<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> SettingsService<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn load(&self) -> RepoResult<AssistantSettings> {
        let api_key = self.kv.get(API_KEY_KEY)?;
        let use_assistant = self.kv.get(USE_ASSISTANT_KEY)?.as_deref() != Some("false");
        Ok(AssistantSettings {
            api_key,
            use_assistant,
        })
    }

    /// Stores the trimmed key (or removes it when blank) and the toggle.
    pub fn save(&self, api_key_input: &str, use_assistant: bool) -> RepoResult<AssistantSettings> {
        let api_key = api_key_input.trim();
        if api_key.is_empty() {
            self.kv.remove(API_KEY_KEY)?;
        } else {
            self.kv.set(API_KEY_KEY, api_key)?;
        }
        self.kv
            .set(USE_ASSISTANT_KEY, if use_assistant { "true" } else { "false" })?;

        info!(
            "event=settings_save module=service status=ok api_key_set={} use_assistant={}",
            !api_key.is_empty(),
            use_assistant
        );
        self.load()
    }
}
