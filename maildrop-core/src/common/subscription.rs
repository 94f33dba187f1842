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
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Teardown handle for an active queue subscription.
///
/// Returned by `MessageStore::subscribe`; holds the cancellation token and
/// task tracker of the delivery task. An in-flight callback invocation is not
/// interrupted, but [`Subscription::cancel`] resolves only once the task has
/// exited, so no callback fires after it returns.
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    tracker: TaskTracker,
}

impl Subscription {
    pub(crate) fn new(token: CancellationToken, tracker: TaskTracker) -> Self {
        Self { token, tracker }
    }

    /// Stops the delivery task and waits for it to finish.
    pub async fn cancel(self) {
        self.token.cancel();
        self.tracker.wait().await;
    }
}
