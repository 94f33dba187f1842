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
use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::trace;

use crate::common::CONFIG;
use crate::message::NotifyPing;
use crate::traits::{ChannelListener, ChannelProvider, MessageChannel};

/// In-process [`ChannelProvider`] fanning pings out over named
/// `tokio::sync::broadcast` channels.
///
/// Execution contexts that should hear each other share one provider
/// (typically via `Arc`); every `open` of a name joins the same channel.
#[derive(Debug, Default)]
pub struct LocalChannels {
    channels: DashMap<String, broadcast::Sender<NotifyPing>>,
}

impl ChannelProvider for LocalChannels {
    fn open(&self, name: &str) -> Option<Box<dyn MessageChannel>> {
        let sender = self
            .channels
            .entry(name.to_string())
            .or_insert_with(|| broadcast::channel(CONFIG.limits.channel_capacity).0)
            .clone();
        Some(Box::new(LocalChannel { sender }))
    }
}

/// The "primitive absent" provider: every `open` reports the broadcast
/// capability as unavailable, forcing queues onto the polling fallback.
#[derive(Debug, Default)]
pub struct NoChannels;

impl ChannelProvider for NoChannels {
    fn open(&self, _name: &str) -> Option<Box<dyn MessageChannel>> {
        None
    }
}

#[derive(Debug)]
struct LocalChannel {
    sender: broadcast::Sender<NotifyPing>,
}

#[async_trait]
impl MessageChannel for LocalChannel {
    async fn post(&self, ping: NotifyPing) {
        // A post with no live listeners is not an error for a wake-up hint.
        let _ = self.sender.send(ping);
    }

    fn listen(&self) -> Box<dyn ChannelListener> {
        Box::new(LocalListener {
            receiver: self.sender.subscribe(),
        })
    }
}

struct LocalListener {
    receiver: broadcast::Receiver<NotifyPing>,
}

#[async_trait]
impl ChannelListener for LocalListener {
    async fn recv(&mut self) -> Option<NotifyPing> {
        loop {
            match self.receiver.recv().await {
                Ok(ping) => return Some(ping),
                // A lagged listener lost wake-up hints, not messages; the
                // next ping or drain still observes the queue.
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    trace!(skipped, "notification listener lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
