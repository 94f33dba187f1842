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

use maildrop::prelude::*;
use tokio::sync::mpsc;

use crate::setup::{assert_silent, initialize_tracing, recv_within};

mod setup;

fn collector() -> (BatchCallback, mpsc::UnboundedReceiver<Vec<MessageRecord>>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: BatchCallback = Box::new(move |batch| {
        let tx = tx.clone();
        Box::pin(async move {
            let _ = tx.send(batch);
        })
    });
    (callback, rx)
}

fn record(recipient: &str, detail: &str) -> MessageRecord {
    MessageRecord::new(
        recipient.to_string(),
        "note".to_string(),
        Value::String(detail.to_string()),
    )
}

#[tokio::test]
async fn broadcast_drains_messages_pushed_before_subscription() {
    initialize_tracing();
    let store = MessageStore::open(
        "NOTIFY-QUEUE",
        Arc::new(MemoryStore::default()),
        Arc::new(LocalChannels::default()),
    )
    .await
    .unwrap();
    store.push_message(record("A", "early")).await.unwrap();

    let (callback, mut rx) = collector();
    let subscription = store.subscribe("A", callback);

    let batch = recv_within(&mut rx, 500).await.expect("catch-up batch");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].detail, Value::String("early".to_string()));
    subscription.cancel().await;
}

#[tokio::test]
async fn broadcast_wakes_a_subscriber_on_another_handle() {
    initialize_tracing();
    let engine: Arc<dyn DurableStore> = Arc::new(MemoryStore::default());
    let channels: Arc<dyn ChannelProvider> = Arc::new(LocalChannels::default());

    let receiving = MessageStore::open("NOTIFY-QUEUE", engine.clone(), channels.clone())
        .await
        .unwrap();
    let sending = MessageStore::open("NOTIFY-QUEUE", engine, channels)
        .await
        .unwrap();

    let (callback, mut rx) = collector();
    let subscription = receiving.subscribe("A", callback);

    sending.push_message(record("A", "hello")).await.unwrap();

    let batch = recv_within(&mut rx, 500).await.expect("pushed batch");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].detail, Value::String("hello".to_string()));
    subscription.cancel().await;
}

#[tokio::test]
async fn polling_mode_delivers_without_a_channel() {
    initialize_tracing();
    let store = MessageStore::open(
        "NOTIFY-QUEUE",
        Arc::new(MemoryStore::default()),
        Arc::new(NoChannels),
    )
    .await
    .unwrap();

    let (callback, mut rx) = collector();
    let subscription = store.subscribe("A", callback);

    store.push_message(record("A", "polled")).await.unwrap();

    let batch = recv_within(&mut rx, 1_000).await.expect("polled batch");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].detail, Value::String("polled".to_string()));
    subscription.cancel().await;
}

#[tokio::test]
async fn batches_preserve_enqueue_order() {
    initialize_tracing();
    let store = MessageStore::open(
        "NOTIFY-QUEUE",
        Arc::new(MemoryStore::default()),
        Arc::new(LocalChannels::default()),
    )
    .await
    .unwrap();
    for detail in ["one", "two", "three"] {
        store.push_message(record("A", detail)).await.unwrap();
    }

    let (callback, mut rx) = collector();
    let subscription = store.subscribe("A", callback);

    let batch = recv_within(&mut rx, 500).await.expect("catch-up batch");
    let details: Vec<_> = batch.iter().map(|m| m.detail.clone()).collect();
    assert_eq!(
        details,
        vec![
            Value::String("one".to_string()),
            Value::String("two".to_string()),
            Value::String("three".to_string()),
        ]
    );
    subscription.cancel().await;
}

#[tokio::test]
async fn empty_scans_never_invoke_the_callback() {
    initialize_tracing();
    let store = MessageStore::open(
        "NOTIFY-QUEUE",
        Arc::new(MemoryStore::default()),
        Arc::new(LocalChannels::default()),
    )
    .await
    .unwrap();

    let (callback, mut rx) = collector();
    let subscription = store.subscribe("A", callback);

    // Traffic for another mailbox must not wake this subscriber.
    store.push_message(record("B", "unrelated")).await.unwrap();

    assert_silent(&mut rx, 200).await;
    subscription.cancel().await;
}

#[tokio::test]
async fn cancelled_subscription_stops_delivery() {
    initialize_tracing();
    let store = MessageStore::open(
        "NOTIFY-QUEUE",
        Arc::new(MemoryStore::default()),
        Arc::new(LocalChannels::default()),
    )
    .await
    .unwrap();

    let (callback, mut rx) = collector();
    let subscription = store.subscribe("A", callback);
    subscription.cancel().await;

    store.push_message(record("A", "too late")).await.unwrap();

    assert_silent(&mut rx, 200).await;
}
