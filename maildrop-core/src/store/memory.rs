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
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::message::{MailboxError, MessageRecord, SequenceId};
use crate::traits::{DurableStore, ScanVerdict, ScanVisitor};

/// In-process [`DurableStore`] engine backed by ordered in-memory
/// collections.
///
/// Collections live for the lifetime of the engine value, so execution
/// contexts that must see one queue share one `MemoryStore` (typically via
/// `Arc`). Keys auto-increment from 1, matching the watermark origin of 0.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Arc<Collection>>,
}

#[derive(Debug, Default)]
struct Collection {
    state: Mutex<CollectionState>,
}

#[derive(Debug, Default)]
struct CollectionState {
    last_key: SequenceId,
    records: BTreeMap<SequenceId, MessageRecord>,
}

impl MemoryStore {
    fn collection(&self, name: &str) -> Arc<Collection> {
        self.collections.entry(name.to_string()).or_default().clone()
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn open(&self, collection: &str) -> Result<(), MailboxError> {
        self.collection(collection);
        Ok(())
    }

    async fn append(
        &self,
        collection: &str,
        record: MessageRecord,
    ) -> Result<SequenceId, MailboxError> {
        let collection = self.collection(collection);
        let mut state = collection
            .state
            .lock()
            .map_err(|_| MailboxError::TransactionFailed("collection lock poisoned".to_string()))?;
        state.last_key += 1;
        let key = state.last_key;
        state.records.insert(key, record);
        Ok(key)
    }

    async fn scan(
        &self,
        collection: &str,
        after: SequenceId,
        visit: ScanVisitor<'_>,
    ) -> Result<(), MailboxError> {
        let collection = self.collection(collection);
        let mut state = collection
            .state
            .lock()
            .map_err(|_| MailboxError::TransactionFailed("collection lock poisoned".to_string()))?;
        let mut removals = Vec::new();
        for (key, record) in state.records.range((Bound::Excluded(after), Bound::Unbounded)) {
            if visit(*key, record) == ScanVerdict::Remove {
                removals.push(*key);
            }
        }
        for key in removals {
            state.records.remove(&key);
        }
        Ok(())
    }
}
