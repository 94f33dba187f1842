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
use std::fmt::Debug;

use async_trait::async_trait;

use crate::message::NotifyPing;

/// Factory for named cross-context notification channels.
///
/// `open` doubles as the capability probe: on a host without a broadcast
/// primitive the provider returns `None` and the queue falls back to polling.
/// The probe happens once, when the queue handle is opened.
pub trait ChannelProvider: Debug + Send + Sync + 'static {
    /// Opens the named channel, or `None` when the primitive is unavailable.
    fn open(&self, name: &str) -> Option<Box<dyn MessageChannel>>;
}

/// A named channel that fans small payloads out to every listener of the
/// same name.
#[async_trait]
pub trait MessageChannel: Debug + Send + Sync {
    /// Posts a ping to all current listeners of this channel's name.
    async fn post(&self, ping: NotifyPing);

    /// Creates a listener that receives pings posted after this call.
    fn listen(&self) -> Box<dyn ChannelListener>;
}

/// Receiving side of a [`MessageChannel`]. Dropping it closes the listener.
#[async_trait]
pub trait ChannelListener: Send {
    /// Waits for the next ping; `None` once the channel is closed.
    async fn recv(&mut self) -> Option<NotifyPing>;
}
