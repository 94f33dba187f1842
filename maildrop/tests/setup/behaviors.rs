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
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use maildrop::prelude::*;
use tokio::sync::mpsc;

/// Records every recognized (handler, detail) pair it receives.
pub struct Recorder {
    events: mpsc::UnboundedSender<(String, Value)>,
    init_runs: Arc<AtomicUsize>,
}

impl Recorder {
    pub fn new() -> (
        Self,
        mpsc::UnboundedReceiver<(String, Value)>,
        Arc<AtomicUsize>,
    ) {
        let (events, delivered) = mpsc::unbounded_channel();
        let init_runs = Arc::new(AtomicUsize::new(0));
        (
            Self {
                events,
                init_runs: init_runs.clone(),
            },
            delivered,
            init_runs,
        )
    }
}

#[async_trait]
impl Behavior for Recorder {
    async fn init(&mut self) -> anyhow::Result<()> {
        self.init_runs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn on_message(&mut self, handler: &str, detail: Value) -> anyhow::Result<()> {
        match handler {
            "greet" | "note" | "poke" => {
                let _ = self.events.send((handler.to_string(), detail));
                Ok(())
            }
            other => {
                self.unhandled(other);
                Ok(())
            }
        }
    }
}

/// Adds up "add" payloads and reports each one; "boom" always fails.
pub struct Tally {
    events: mpsc::UnboundedSender<u64>,
}

impl Tally {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<u64>) {
        let (events, delivered) = mpsc::unbounded_channel();
        (Self { events }, delivered)
    }
}

#[async_trait]
impl Behavior for Tally {
    async fn on_message(&mut self, handler: &str, detail: Value) -> anyhow::Result<()> {
        match handler {
            "add" => {
                let amount = detail.as_u64().unwrap_or(0);
                let _ = self.events.send(amount);
                Ok(())
            }
            "boom" => anyhow::bail!("boom requested"),
            other => {
                self.unhandled(other);
                Ok(())
            }
        }
    }
}

/// Opens a gate in `init`; every delivery reports whether the gate was open.
pub struct GatedGreeter {
    ready: bool,
    events: mpsc::UnboundedSender<bool>,
}

impl GatedGreeter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<bool>) {
        let (events, delivered) = mpsc::unbounded_channel();
        (
            Self {
                ready: false,
                events,
            },
            delivered,
        )
    }
}

#[async_trait]
impl Behavior for GatedGreeter {
    async fn init(&mut self) -> anyhow::Result<()> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.ready = true;
        Ok(())
    }

    async fn on_message(&mut self, handler: &str, _detail: Value) -> anyhow::Result<()> {
        match handler {
            "greet" => {
                let _ = self.events.send(self.ready);
                Ok(())
            }
            other => {
                self.unhandled(other);
                Ok(())
            }
        }
    }
}
