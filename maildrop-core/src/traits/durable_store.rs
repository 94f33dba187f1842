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

use crate::message::{MailboxError, MessageRecord, SequenceId};

/// Verdict returned by a scan visitor for each record it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanVerdict {
    /// Leave the record in the collection.
    Keep,
    /// Delete the record at the cursor's position, within the scan's
    /// transaction.
    Remove,
}

/// Per-record visitor driven by [`DurableStore::scan`].
pub type ScanVisitor<'a> = &'a mut (dyn FnMut(SequenceId, &MessageRecord) -> ScanVerdict + Send);

/// Durable ordered storage engine the mailbox queue is built on.
///
/// Implementations provide named, ordered collections with auto-assigned
/// increasing keys and transactional cursor scans. The queue never
/// reimplements storage; everything durable goes through this seam.
#[async_trait]
pub trait DurableStore: Debug + Send + Sync + 'static {
    /// Idempotently opens the named collection, creating it if absent.
    ///
    /// Concurrent opens of the same name through one engine must converge on
    /// the same underlying collection. Fails with
    /// [`MailboxError::StorageUnavailable`] when the engine rejects the open.
    async fn open(&self, collection: &str) -> Result<(), MailboxError>;

    /// Appends a record, returning the auto-assigned sequence id.
    ///
    /// Fails with [`MailboxError::TransactionFailed`] when the append
    /// transaction errors; the record is not persisted in that case.
    async fn append(
        &self,
        collection: &str,
        record: MessageRecord,
    ) -> Result<SequenceId, MailboxError>;

    /// Scans records with keys strictly greater than `after`, in ascending
    /// key order, within a single transaction.
    ///
    /// The visitor is shown every record in range and decides per record
    /// whether it stays or is deleted in place. Fails with
    /// [`MailboxError::TransactionFailed`] when the scan or a delete errors.
    async fn scan(
        &self,
        collection: &str,
        after: SequenceId,
        visit: ScanVisitor<'_>,
    ) -> Result<(), MailboxError>;
}
