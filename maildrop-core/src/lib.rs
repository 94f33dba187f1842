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

#![forbid(unsafe_code)]
// #![warn(missing_docs)]
//! Maildrop Core Library
//!
//! This library provides the building blocks for the Maildrop durable mailbox
//! system: the durable message queue, the dual-mode change notifier, the
//! collaborator seams (storage engine, cross-context channel, behavior), and
//! prelude exports.

/// Common utilities and structures used throughout the Maildrop system.
pub(crate) mod common;

pub(crate) mod message;
pub(crate) mod notify;
pub(crate) mod store;
/// Trait definitions used in the Maildrop system.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the `common`, `message`,
/// `notify`, `store`, and `traits` modules, as well as the `async_trait`
/// macro.
pub mod prelude {
    pub use async_trait::async_trait;
    pub use serde_json::Value;

    pub use crate::common::{BatchCallback, MaildropConfig, Subscription, CONFIG};
    pub use crate::message::{
        MailboxError, MessageRecord, NotifyPing, SequenceId, WILDCARD_RECIPIENT,
    };
    pub use crate::notify::{LocalChannels, NoChannels};
    pub use crate::store::{MemoryStore, MessageStore, PopOptions};
    pub use crate::traits::{
        Behavior, ChannelListener, ChannelProvider, DurableStore, MessageChannel, ScanVerdict,
        ScanVisitor,
    };
}
