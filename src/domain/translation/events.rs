use tokio::sync::broadcast;

use super::model::TranslationRecord;

const CHANNEL_CAPACITY: usize = 256;

/// In-process change feed for newly stored translations
#[derive(Clone)]
pub struct TranslationEvents {
    sender: broadcast::Sender<TranslationRecord>,
}

impl TranslationEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Returns how many subscribers received the record
    pub fn publish(&self, record: TranslationRecord) -> usize {
        // send only fails when there are no receivers
        self.sender.send(record).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TranslationRecord> {
        self.sender.subscribe()
    }
}

impl Default for TranslationEvents {
    fn default() -> Self {
        Self::new()
    }
}
