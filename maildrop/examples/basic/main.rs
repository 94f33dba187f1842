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

use maildrop::prelude::*;

// behaviors are plain structs; state stays private to the actor
#[derive(Debug, Default)]
struct Greeter {
    greeted: usize,
}

#[async_trait]
impl Behavior for Greeter {
    // runs once per hookup, before any message is delivered
    async fn init(&mut self) -> anyhow::Result<()> {
        println!("Greeter is ready.");
        Ok(())
    }

    async fn on_message(&mut self, handler: &str, detail: Value) -> anyhow::Result<()> {
        match handler {
            "greet" => {
                self.greeted += 1;
                println!("Hello, {detail}!");
                Ok(())
            }
            "farewell" => {
                println!("Goodbye after {} greetings.", self.greeted);
                Ok(())
            }
            // anything else is reported to the log and dropped
            other => {
                self.unhandled(other);
                Ok(())
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let room = Maildrop::launch().await?;

    // messages survive in the queue until a subscriber drains them,
    // so sending before the hookup is fine
    room.lookup("greeter").sender("greet").send("world").await?;

    let hookdown = room
        .hookup("greeter", Greeter::default(), HookupOptions::default())
        .await?;

    // senders work from any context that shares the queue's engines
    let outbox = room.lookup("greeter");
    outbox.sender("greet").send("again").await?;
    outbox.sender("farewell").send(Value::Null).await?;

    // give the broadcast deliveries a moment before tearing down
    tokio::time::sleep(Duration::from_millis(100)).await;

    // detach unsubscribes and drains whatever is still queued
    hookdown.detach().await;
    Ok(())
}
