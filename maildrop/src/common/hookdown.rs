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
use tracing::{instrument, warn};

use maildrop_core::prelude::*;

/// Teardown handle returned by
/// [`Mailroom::hookup`](crate::common::Mailroom::hookup).
///
/// Detaching first cancels the subscription, so no handler runs after
/// [`Hookdown::detach`] resolves, and then makes one best-effort drain of
/// whatever is still queued for the actor, so a later hookup does not replay
/// stale traffic. The drain is cleanup, not a guarantee: a storage failure
/// at that point is logged and swallowed.
#[derive(Debug)]
pub struct Hookdown {
    subscription: Subscription,
    store: MessageStore,
    recipient: String,
}

impl Hookdown {
    pub(crate) fn new(subscription: Subscription, store: MessageStore, recipient: String) -> Self {
        Self {
            subscription,
            store,
            recipient,
        }
    }

    /// Unsubscribes and discards whatever is still queued for the actor.
    #[instrument(skip(self), fields(actor = %self.recipient))]
    pub async fn detach(self) {
        self.subscription.cancel().await;
        if let Err(err) = self
            .store
            .pop_messages(&self.recipient, PopOptions::default())
            .await
        {
            warn!(%err, "cleanup drain failed on detach");
        }
    }
}
