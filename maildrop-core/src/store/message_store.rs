/*
 * Copyright (c) 2024. Maildrop Contributors
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use static_assertions::assert_impl_all;
use tracing::{instrument, trace};

use crate::common::{BatchCallback, Subscription, CONFIG};
use crate::message::{MailboxError, MessageRecord, WILDCARD_RECIPIENT};
use crate::notify::Notifier;
use crate::traits::{ChannelProvider, DurableStore, ScanVerdict};

/// Options for a single [`MessageStore::pop_messages`] scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopOptions {
    /// Leave matched records in the collection instead of deleting them.
    pub keep_message: bool,
}

/// A handle to a named durable message queue.
///
/// Handles are cheap to clone. Clones share one collection identity and one
/// cursor watermark, so components holding clones of the same handle observe
/// each other's scans; a handle opened fresh starts with its watermark at the
/// origin.
#[derive(Debug, Clone)]
pub struct MessageStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    name: String,
    collection: String,
    engine: Arc<dyn DurableStore>,
    watermark: AtomicU64,
    notifier: Notifier,
}

assert_impl_all!(MessageStore: Send, Sync, Clone);

impl MessageStore {
    /// Idempotently opens (creating if absent) the named queue's backing
    /// collection and probes the notification substrate once to select the
    /// wake-up strategy.
    ///
    /// Concurrent opens of the same name through the same engine converge on
    /// one collection. Fails with [`MailboxError::StorageUnavailable`] when
    /// the engine rejects the open.
    #[instrument(skip(engine, channels))]
    pub async fn open(
        name: &str,
        engine: Arc<dyn DurableStore>,
        channels: Arc<dyn ChannelProvider>,
    ) -> Result<Self, MailboxError> {
        let collection = format!("{}.{}", CONFIG.defaults.collection_prefix, name);
        engine.open(&collection).await?;
        let notifier = Notifier::select(channels.as_ref(), name);
        trace!(queue = name, mode = notifier.mode(), "message store opened");
        Ok(Self {
            inner: Arc::new(StoreInner {
                name: name.to_string(),
                collection,
                engine,
                watermark: AtomicU64::new(0),
                notifier,
            }),
        })
    }

    /// Name of the queue this handle is bound to.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Resets this handle's cursor watermark to the origin.
    ///
    /// Stored data is untouched; the next scan observes the collection from
    /// the beginning. Clones of the handle share the watermark, so a reset by
    /// one caller affects all of them.
    pub fn reset_cursor(&self) {
        self.inner.watermark.store(0, Ordering::Release);
    }

    /// Scans records newer than the watermark and returns those addressed to
    /// `recipient` (or all of them, for the `"*"` filter) in ascending
    /// sequence order.
    ///
    /// Matched records are deleted within the scan's transaction unless
    /// `options.keep_message` is set. Every scanned record, matched or not,
    /// advances the watermark, so a later scan with a different recipient
    /// filter on the same handle will not observe records this scan passed
    /// over. Fails with [`MailboxError::TransactionFailed`] on a storage
    /// error.
    #[instrument(skip(self), fields(queue = %self.inner.name))]
    pub async fn pop_messages(
        &self,
        recipient: &str,
        options: PopOptions,
    ) -> Result<Vec<MessageRecord>, MailboxError> {
        let after = self.inner.watermark.load(Ordering::Acquire);
        let mut matched = Vec::new();
        let mut last_seen = after;
        self.inner
            .engine
            .scan(&self.inner.collection, after, &mut |key, record| {
                last_seen = key;
                if record.recipient == recipient || recipient == WILDCARD_RECIPIENT {
                    matched.push(record.clone());
                    if options.keep_message {
                        ScanVerdict::Keep
                    } else {
                        ScanVerdict::Remove
                    }
                } else {
                    ScanVerdict::Keep
                }
            })
            .await?;
        // Clones share the watermark; fetch_max keeps it monotonic when scans race.
        self.inner.watermark.fetch_max(last_seen, Ordering::AcqRel);
        trace!(recipient, matched = matched.len(), last_seen, "scan complete");
        Ok(matched)
    }

    /// Appends a message and, once the commit is durable, announces it on the
    /// notification substrate.
    ///
    /// Fails with [`MailboxError::ReservedRecipient`] before any transaction
    /// begins when the destination is the wildcard name, and with
    /// [`MailboxError::TransactionFailed`] when the append transaction
    /// errors.
    #[instrument(skip(self, record), fields(queue = %self.inner.name, recipient = %record.recipient))]
    pub async fn push_message(&self, record: MessageRecord) -> Result<(), MailboxError> {
        if record.recipient == WILDCARD_RECIPIENT {
            return Err(MailboxError::ReservedRecipient);
        }
        let recipient = record.recipient.clone();
        let key = self
            .inner
            .engine
            .append(&self.inner.collection, record)
            .await?;
        trace!(recipient, key, "message committed");
        self.inner.notifier.announce(&recipient).await;
        Ok(())
    }

    /// Subscribes `callback` to non-empty batches of messages for
    /// `recipient`, using the wake-up strategy selected when the handle was
    /// opened. The returned [`Subscription`] is the teardown.
    pub fn subscribe(&self, recipient: &str, callback: BatchCallback) -> Subscription {
        self.inner
            .notifier
            .subscribe(self.clone(), recipient.to_string(), callback)
    }
}
