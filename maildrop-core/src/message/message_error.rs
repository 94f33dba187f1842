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
/// Represents errors raised by mailbox storage and delivery operations.
#[derive(Debug)]
pub enum MailboxError {
    /// The durable store could not open the backing collection.
    StorageUnavailable(String),
    /// A scan, append, or delete transaction failed in the durable store.
    TransactionFailed(String),
    /// A message was addressed to the reserved wildcard recipient.
    ReservedRecipient,
    /// A dispatched message handler returned an error.
    HandlerFailure(String),
}

impl std::fmt::Display for MailboxError {
    /// Formats the `MailboxError` for display.
    ///
    /// # Parameters
    /// - `f`: The formatter used for writing formatted output.
    ///
    /// # Returns
    /// A result indicating whether the formatting was successful.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MailboxError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            MailboxError::TransactionFailed(msg) => write!(f, "Transaction failed: {msg}"),
            MailboxError::ReservedRecipient => {
                write!(f, "Can't send a message to reserved name \"*\"")
            }
            MailboxError::HandlerFailure(msg) => write!(f, "Message handler failed: {msg}"),
        }
    }
}

impl std::error::Error for MailboxError {}
