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
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::trace;

use crate::common::{BatchCallback, Subscription};
use crate::store::MessageStore;

/// Fallback strategy for hosts without a broadcast primitive: a
/// self-rescheduling timer drains the queue on a fixed interval.
///
/// The next interval starts after a drain completes, so drain duration is
/// not subtracted from the wait. Cancellation takes effect at the next timer
/// edge at the latest.
#[derive(Debug)]
pub(crate) struct PollingNotifier {
    interval: Duration,
}

impl PollingNotifier {
    pub(crate) fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub(crate) fn subscribe(
        &self,
        queue: MessageStore,
        recipient: String,
        mut callback: BatchCallback,
    ) -> Subscription {
        let interval = self.interval;
        let token = CancellationToken::new();
        let tracker = TaskTracker::new();
        let cancel = token.clone();
        tracker.spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {
                        super::deliver(&queue, &recipient, &mut callback).await;
                    }
                }
            }
            trace!(recipient, "polling subscription closed");
        });
        tracker.close();
        Subscription::new(token, tracker)
    }
}
