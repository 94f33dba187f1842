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
use serde::Serialize;

use maildrop_core::prelude::*;

/// Sender factory for one named mailbox, returned by
/// [`Mailroom::lookup`](crate::common::Mailroom::lookup).
///
/// Carries no state beyond the queue handle and the recipient name; the
/// two-level currying (`lookup` then [`Outbox::sender`]) exists purely for
/// call-site ergonomics.
#[derive(Debug, Clone)]
pub struct Outbox {
    store: MessageStore,
    recipient: String,
}

impl Outbox {
    pub(crate) fn new(store: MessageStore, recipient: String) -> Self {
        Self { store, recipient }
    }

    /// A sender bound to one handler label on this mailbox.
    pub fn sender(&self, handler: &str) -> MessageSender {
        MessageSender {
            store: self.store.clone(),
            recipient: self.recipient.clone(),
            handler: handler.to_string(),
        }
    }
}

/// Enqueues payloads for one `(recipient, handler)` pair.
#[derive(Debug, Clone)]
pub struct MessageSender {
    store: MessageStore,
    recipient: String,
    handler: String,
}

impl MessageSender {
    /// Serializes `detail` and appends it to the recipient's queue.
    ///
    /// Resolves once the commit is durable and the notifier has been
    /// triggered; fails on a storage error or when the payload does not
    /// serialize.
    pub async fn send<T: Serialize>(&self, detail: T) -> anyhow::Result<()> {
        let detail = serde_json::to_value(detail)?;
        self.store
            .push_message(MessageRecord::new(
                self.recipient.clone(),
                self.handler.clone(),
                detail,
            ))
            .await?;
        Ok(())
    }
}
