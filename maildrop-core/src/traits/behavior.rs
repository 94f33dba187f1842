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
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

/// A mailbox actor's dispatch surface.
///
/// `init` runs exactly once per hookup and must resolve before any message is
/// delivered; the default resolves immediately. `on_message` receives one
/// handler label and payload per queued record, in enqueue order.
/// Implementations match on the label and route labels they do not recognize
/// through [`Behavior::unhandled`], the one fallback left for genuinely
/// dynamic extension points.
#[async_trait]
pub trait Behavior: Send + 'static {
    /// One-time initialization hook, awaited before delivery begins.
    async fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handles one message addressed to `handler` with its payload.
    ///
    /// An error return is caught at the dispatch boundary, logged, and does
    /// not stop delivery of the remaining messages in the batch or of future
    /// batches.
    async fn on_message(&mut self, handler: &str, detail: Value) -> anyhow::Result<()>;

    /// Fallback for labels the behavior does not recognize. Reported to the
    /// operator log; never fatal.
    fn unhandled(&self, handler: &str) {
        warn!(handler, "message not handled");
    }
}
