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
use futures::future::BoxFuture;

use crate::message::MessageRecord;

/// Callback invoked by a subscription with each non-empty batch of matched
/// messages, in the scan order of the pop that produced it.
///
/// The callback owns whatever state it needs across invocations; the future
/// it returns is awaited before the next batch is delivered.
pub type BatchCallback = Box<dyn FnMut(Vec<MessageRecord>) -> BoxFuture<'static, ()> + Send>;
