//! State storage implementation
//!
//! In-process storage for per-conversation state, keyed by chat id.
//! Nothing is persisted: conversation state is advisory and losing it on
//! restart only means a pending bug report has to be restarted.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::routing::ChatState;

/// In-memory per-chat state store. Cheap to clone; clones share the map.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    chats: Arc<RwLock<HashMap<i64, ChatState>>>,
}

impl StateStore {
    /// Create an empty state store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a chat; chats start out idle.
    pub fn load(&self, chat_id: i64) -> ChatState {
        self.chats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&chat_id)
            .copied()
            .unwrap_or_default()
    }

    /// Record the state produced by the router. Idle entries are removed so
    /// the map only holds chats that are mid-conversation.
    pub fn store(&self, chat_id: i64, state: ChatState) {
        let mut chats = self.chats.write().unwrap_or_else(PoisonError::into_inner);
        match state {
            ChatState::Idle => {
                chats.remove(&chat_id);
            }
            ChatState::AwaitingBugReport => {
                chats.insert(chat_id, state);
            }
        }
        debug!(chat_id = chat_id, state = ?state, "Stored chat state");
    }

    /// Number of chats currently holding non-idle state.
    pub fn tracked_chats(&self) -> usize {
        self.chats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
