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
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::trace;

use crate::common::{BatchCallback, Subscription};
use crate::message::NotifyPing;
use crate::store::MessageStore;
use crate::traits::MessageChannel;

/// Push-notification strategy: a cross-context channel wakes subscribers the
/// moment a durable commit lands.
#[derive(Debug)]
pub(crate) struct BroadcastNotifier {
    channel: Box<dyn MessageChannel>,
}

impl BroadcastNotifier {
    pub(crate) fn new(channel: Box<dyn MessageChannel>) -> Self {
        Self { channel }
    }

    pub(crate) async fn announce(&self, recipient: &str) {
        self.channel.post(NotifyPing::new(recipient.to_string())).await;
    }

    pub(crate) fn subscribe(
        &self,
        queue: MessageStore,
        recipient: String,
        mut callback: BatchCallback,
    ) -> Subscription {
        let mut listener = self.channel.listen();
        let token = CancellationToken::new();
        let tracker = TaskTracker::new();
        let cancel = token.clone();
        tracker.spawn(async move {
            // Catch up on messages enqueued before this subscription existed.
            super::deliver(&queue, &recipient, &mut callback).await;
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    ping = listener.recv() => match ping {
                        Some(ping) if ping.recipient == recipient => {
                            super::deliver(&queue, &recipient, &mut callback).await;
                        }
                        Some(_) => {}
                        None => break,
                    },
                }
            }
            trace!(recipient, "broadcast subscription closed");
        });
        tracker.close();
        Subscription::new(token, tracker)
    }
}
