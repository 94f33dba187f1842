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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Maildrop
//!
//! This crate provides durable local mailboxes for actors spread across
//! independent execution contexts of one application. Messages are committed
//! to a durable queue before anything is signaled, survive context restarts,
//! and are delivered at most once per recipient.
//!
//! ## Key Concepts
//!
//! - **Mailroom**: the orchestrator over one shared queue handle; hooks
//!   behaviors up to their mailboxes and hands out senders.
//! - **Behavior**: a trait implementing an actor's initialization and
//!   label-addressed message handlers.
//! - **Hookup**: attaching a `Behavior` to its named mailbox; delivery starts
//!   only after the behavior's `init` resolves. The returned [`Hookdown`]
//!   detaches it again.
//! - **Lookup**: obtaining an [`Outbox`] whose senders enqueue payloads for a
//!   `(recipient, handler)` pair from any context.
//! - **Notification**: receivers wake on a cross-context broadcast channel
//!   when the host has one, or on a polling timer when it does not; the
//!   strategy is probed once per queue handle.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use maildrop::prelude::*;
//!
//! struct Greeter;
//!
//! #[async_trait]
//! impl Behavior for Greeter {
//!     async fn on_message(&mut self, handler: &str, detail: Value) -> anyhow::Result<()> {
//!         match handler {
//!             "greet" => Ok(println!("hello, {detail}")),
//!             other => Ok(self.unhandled(other)),
//!         }
//!     }
//! }
//!
//! let room = Maildrop::launch().await?;
//! let hookdown = room.hookup("greeter", Greeter, HookupOptions::default()).await?;
//! room.lookup("greeter").sender("greet").send("world").await?;
//! ```

/// Orchestration surface: the mailroom, sender factories, and teardown.
pub(crate) mod common;

/// A prelude module for conveniently importing the most commonly used items.
///
/// Re-exports the core building blocks (queue handle, records, errors,
/// collaborator seams, in-process engines) together with this crate's
/// orchestration surface.
pub mod prelude {
    pub use maildrop_core::prelude::*;

    pub use crate::common::{Hookdown, HookupOptions, Maildrop, Mailroom, MessageSender, Outbox};
}
