//! Message storage seam for the console.
//!
//! The admin UI holds its campaign history in mutable in-process state; this
//! module models that as an injected [`MessageRepository`] so the pricing
//! and metering functions stay pure and backend-agnostic.

pub mod fixtures;

use std::collections::BTreeMap;

use crate::domain::{Message, MessageId, MessageRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("message not found: {}", id.value())]
    NotFound { id: MessageId },
}

/// Storage seam over the console's message history.
pub trait MessageRepository {
    /// All records in insertion order.
    fn list(&self) -> Vec<MessageRecord>;

    /// Store a message and return its assigned id.
    fn create(&mut self, message: Message) -> MessageId;

    /// Replace the message stored under `id`.
    fn update(&mut self, id: MessageId, message: Message) -> Result<(), StoreError>;

    /// The stored messages without their ids, for the aggregate price
    /// functions in [`pricing`](crate::pricing).
    fn messages(&self) -> Vec<Message> {
        self.list()
            .into_iter()
            .map(|record| record.message)
            .collect()
    }
}

#[derive(Debug, Default)]
/// In-memory [`MessageRepository`] with sequential ids.
pub struct InMemoryMessageRepository {
    next_id: u64,
    records: BTreeMap<MessageId, Message>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `messages`.
    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        let mut repository = Self::new();
        for message in messages {
            repository.create(message);
        }
        repository
    }
}

impl MessageRepository for InMemoryMessageRepository {
    fn list(&self) -> Vec<MessageRecord> {
        self.records
            .iter()
            .map(|(id, message)| MessageRecord {
                id: *id,
                message: message.clone(),
            })
            .collect()
    }

    fn create(&mut self, message: Message) -> MessageId {
        self.next_id += 1;
        let id = MessageId::new(self.next_id);
        tracing::debug!(id = id.value(), "storing message");
        self.records.insert(id, message);
        id
    }

    fn update(&mut self, id: MessageId, message: Message) -> Result<(), StoreError> {
        match self.records.get_mut(&id) {
            Some(stored) => {
                tracing::debug!(id = id.value(), "updating message");
                *stored = message;
                Ok(())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }
}
