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

/// Payload posted on the cross-context channel after a durable commit.
///
/// A ping carries only the recipient name. It is a wake-up hint, not a
/// delivery mechanism: the durable queue stays the source of truth, so a
/// lost ping delays a drain but cannot lose a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct NotifyPing {
    /// Mailbox that has new messages queued.
    pub recipient: String,
}
