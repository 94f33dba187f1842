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
//! Collaborator seams of the mailbox system.
//!
//! The durable storage engine, the cross-context notification primitive, and
//! the actor behavior are external to the core protocol; each is reached
//! through one of the traits defined here.
pub use behavior::Behavior;
pub use channel::{ChannelListener, ChannelProvider, MessageChannel};
pub use durable_store::{DurableStore, ScanVerdict, ScanVisitor};

mod behavior;
mod channel;
mod durable_store;
