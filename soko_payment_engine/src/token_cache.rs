//! Process-wide access-token cache.
//!
//! The aggregator token is granted and refreshed by an external job; this cache is the
//! hand-over point. Anything holding a clone may [`set`](InMemoryTokenCache::set) a fresh
//! value, and the payout/payment flows read the entry named by the configured cache key
//! through the [`TokenProvider`] seam.
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use spg_common::Secret;

use crate::traits::{TokenError, TokenProvider};

#[derive(Clone, Debug, Default)]
pub struct InMemoryTokenCache {
    key: String,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTokenCache {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into(), entries: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub fn with_initial_token<S: Into<String>>(key: S, token: String) -> Self {
        let cache = Self::new(key);
        let initial_key = cache.key.clone();
        cache.set(&initial_key, token);
        cache
    }

    pub fn set(&self, key: &str, token: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), token);
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok().and_then(|entries| entries.get(key).cloned())
    }
}

impl TokenProvider for InMemoryTokenCache {
    // A poisoned lock is indistinguishable from a missing entry for callers: no usable token.
    fn access_token(&self) -> Result<Secret<String>, TokenError> {
        self.get(&self.key).map(Secret::new).ok_or_else(|| TokenError::NotCached(self.key.clone()))
    }
}
