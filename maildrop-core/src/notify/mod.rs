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
//! Cross-context wake-up signaling for the durable queue.
//!
//! Two interchangeable strategies sit behind [`Notifier`]: a broadcast
//! channel when the host provides one, and a self-rescheduling polling timer
//! otherwise. The strategy is picked once, when the queue handle is opened;
//! everything above the queue is agnostic to which one is active.
pub use local::{LocalChannels, NoChannels};

use tracing::{error, trace};

use crate::common::{BatchCallback, Subscription, CONFIG};
use crate::store::{MessageStore, PopOptions};
use crate::traits::ChannelProvider;

use self::broadcast::BroadcastNotifier;
use self::polling::PollingNotifier;

mod broadcast;
mod local;
mod polling;

/// The wake-up strategy attached to one queue handle.
#[derive(Debug)]
pub(crate) enum Notifier {
    /// Channel-driven: a ping posted after each durable commit triggers a
    /// drain.
    Broadcast(BroadcastNotifier),
    /// Timer-driven fallback for hosts without a broadcast primitive.
    Polling(PollingNotifier),
}

impl Notifier {
    /// Probes the channel provider once and selects the strategy.
    pub(crate) fn select(provider: &dyn ChannelProvider, channel_name: &str) -> Self {
        match provider.open(channel_name) {
            Some(channel) => Notifier::Broadcast(BroadcastNotifier::new(channel)),
            None => Notifier::Polling(PollingNotifier::new(CONFIG.polling_interval())),
        }
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self {
            Notifier::Broadcast(_) => "broadcast",
            Notifier::Polling(_) => "polling",
        }
    }

    /// Announces that `recipient` has a newly committed message. A no-op in
    /// polling mode, where subscribers discover commits on their own clock.
    pub(crate) async fn announce(&self, recipient: &str) {
        if let Notifier::Broadcast(notifier) = self {
            notifier.announce(recipient).await;
        }
    }

    /// Spawns the delivery task for one subscriber.
    pub(crate) fn subscribe(
        &self,
        queue: MessageStore,
        recipient: String,
        callback: BatchCallback,
    ) -> Subscription {
        match self {
            Notifier::Broadcast(notifier) => notifier.subscribe(queue, recipient, callback),
            Notifier::Polling(notifier) => notifier.subscribe(queue, recipient, callback),
        }
    }
}

/// One drain-and-deliver pass: pop everything queued for `recipient` and,
/// when the batch is non-empty, hand it to the callback. A pop failure is
/// logged and does not kill the delivery task; the next wake-up retries.
pub(crate) async fn deliver(queue: &MessageStore, recipient: &str, callback: &mut BatchCallback) {
    match queue.pop_messages(recipient, PopOptions::default()).await {
        Ok(batch) if batch.is_empty() => {}
        Ok(batch) => {
            trace!(recipient, batch = batch.len(), "delivering batch");
            callback(batch).await;
        }
        Err(err) => error!(recipient, %err, "queue drain failed during delivery"),
    }
}
