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
use maildrop::prelude::*;

/// Engine whose open always fails, as when the host storage is unavailable.
#[derive(Debug, Default)]
pub struct RejectingStore;

#[async_trait]
impl DurableStore for RejectingStore {
    async fn open(&self, collection: &str) -> Result<(), MailboxError> {
        Err(MailboxError::StorageUnavailable(format!(
            "cannot open {collection}"
        )))
    }

    async fn append(
        &self,
        _collection: &str,
        _record: MessageRecord,
    ) -> Result<SequenceId, MailboxError> {
        Err(MailboxError::TransactionFailed("engine is closed".to_string()))
    }

    async fn scan(
        &self,
        _collection: &str,
        _after: SequenceId,
        _visit: ScanVisitor<'_>,
    ) -> Result<(), MailboxError> {
        Err(MailboxError::TransactionFailed("engine is closed".to_string()))
    }
}

/// Engine that opens fine but fails every transaction afterwards.
#[derive(Debug, Default)]
pub struct BrokenStore;

#[async_trait]
impl DurableStore for BrokenStore {
    async fn open(&self, _collection: &str) -> Result<(), MailboxError> {
        Ok(())
    }

    async fn append(
        &self,
        _collection: &str,
        _record: MessageRecord,
    ) -> Result<SequenceId, MailboxError> {
        Err(MailboxError::TransactionFailed(
            "simulated append failure".to_string(),
        ))
    }

    async fn scan(
        &self,
        _collection: &str,
        _after: SequenceId,
        _visit: ScanVisitor<'_>,
    ) -> Result<(), MailboxError> {
        Err(MailboxError::TransactionFailed(
            "simulated scan failure".to_string(),
        ))
    }
}
