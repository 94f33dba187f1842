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
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, instrument, trace};

use maildrop_core::prelude::*;

use crate::common::{Hookdown, Outbox};

/// Entry point for the mailbox runtime.
///
/// [`Maildrop::launch`] wires the default in-process engines;
/// [`Maildrop::launch_with`] accepts the host's durable store and
/// notification substrate. Execution contexts that must see one queue share
/// the same engine values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Maildrop;

impl Maildrop {
    /// Opens the default queue over fresh in-process engines.
    pub async fn launch() -> Result<Mailroom, MailboxError> {
        Self::launch_with(
            Arc::new(MemoryStore::default()),
            Arc::new(LocalChannels::default()),
        )
        .await
    }

    /// Opens the default queue over the given collaborators.
    ///
    /// Fails with [`MailboxError::StorageUnavailable`] when the engine
    /// rejects the open.
    pub async fn launch_with(
        engine: Arc<dyn DurableStore>,
        channels: Arc<dyn ChannelProvider>,
    ) -> Result<Mailroom, MailboxError> {
        let store = MessageStore::open(&CONFIG.defaults.queue_name, engine, channels).await?;
        Ok(Mailroom { store })
    }
}

/// Options for [`Mailroom::hookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HookupOptions {
    /// Drain and discard messages already queued for the actor before
    /// subscribing, preventing replay of traffic accumulated while it was
    /// detached.
    pub purge_existing_messages: bool,
}

/// The hookup/lookup orchestrator over one shared queue handle.
///
/// Every actor hooked up through one `Mailroom` shares the handle's cursor
/// watermark, and `hookup` resets that watermark so the new actor's first
/// scan starts from the origin rather than wherever a previous hookup left
/// it. The coupling is inherited from the single-handle design; hosting
/// unrelated actors on one mailroom makes their scans interleave.
#[derive(Debug, Clone)]
pub struct Mailroom {
    store: MessageStore,
}

impl Mailroom {
    /// A clone of the shared queue handle.
    pub fn store(&self) -> MessageStore {
        self.store.clone()
    }

    /// Attaches `behavior` to the named mailbox.
    ///
    /// Awaits the behavior's `init` before anything else; delivery cannot
    /// begin until it resolves, and an `init` failure aborts the hookup.
    /// Each delivered batch is dispatched one message at a time, in enqueue
    /// order, to the handler named in the record; a failed handler is logged
    /// and the rest of the batch still runs.
    ///
    /// The returned [`Hookdown`] detaches the actor again.
    #[instrument(skip(self, behavior, options))]
    pub async fn hookup<B: Behavior>(
        &self,
        actor_name: &str,
        mut behavior: B,
        options: HookupOptions,
    ) -> anyhow::Result<Hookdown> {
        behavior.init().await?;
        // Many actors may share this process-wide handle; resetting makes
        // this actor's first scan start from the origin rather than wherever
        // a previous hookup left the watermark.
        self.store.reset_cursor();
        if options.purge_existing_messages {
            self.store
                .pop_messages(actor_name, PopOptions::default())
                .await?;
        }
        let behavior = Arc::new(Mutex::new(behavior));
        let dispatch_name = actor_name.to_string();
        let callback: BatchCallback = Box::new(move |batch| {
            let behavior = Arc::clone(&behavior);
            let actor = dispatch_name.clone();
            Box::pin(async move {
                let mut behavior = behavior.lock().await;
                for record in batch {
                    let MessageRecord { handler, detail, .. } = record;
                    trace!(actor = %actor, handler = %handler, "dispatching message");
                    if let Err(err) = behavior.on_message(&handler, detail).await {
                        let failure = MailboxError::HandlerFailure(err.to_string());
                        // One failed handler must not stall the rest of the batch.
                        error!(actor = %actor, handler = %handler, %failure, "handler failed");
                    }
                }
            })
        });
        let subscription = self.store.subscribe(actor_name, callback);
        Ok(Hookdown::new(
            subscription,
            self.store.clone(),
            actor_name.to_string(),
        ))
    }

    /// Returns a sender factory for the named mailbox, usable from any
    /// context that shares the queue's engines.
    pub fn lookup(&self, actor_name: &str) -> Outbox {
        Outbox::new(self.store.clone(), actor_name.to_string())
    }

    /// Cold-start reset: drains every queued message for every recipient.
    #[instrument(skip(self))]
    pub async fn initialize_queues(&self) -> Result<(), MailboxError> {
        self.store
            .pop_messages(WILDCARD_RECIPIENT, PopOptions::default())
            .await?;
        Ok(())
    }
}
