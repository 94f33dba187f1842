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
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Sequence id assigned by the durable store when a record is appended.
///
/// Ids increase strictly per collection and the first assigned id is 1, so a
/// cursor watermark of 0 means "nothing scanned yet".
pub type SequenceId = u64;

/// Reserved recipient name.
///
/// Legal only as the match-all filter of a pop scan; pushing a message
/// addressed to it fails with [`MailboxError`](super::MailboxError)`::ReservedRecipient`.
pub const WILDCARD_RECIPIENT: &str = "*";

/// A single queued mailbox message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct MessageRecord {
    /// Name of the mailbox this record is addressed to.
    pub recipient: String,
    /// Handler label the receiving behavior dispatches on.
    pub handler: String,
    /// Opaque payload handed to the handler on delivery.
    pub detail: serde_json::Value,
}
