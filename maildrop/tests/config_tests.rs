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
use maildrop::prelude::*;

#[test]
fn default_configuration_matches_protocol_constants() {
    let config = MaildropConfig::default();
    assert_eq!(config.timing.polling_interval_ms, 50);
    assert_eq!(config.limits.channel_capacity, 64);
    assert_eq!(config.defaults.queue_name, "ACTOR-MESSAGES");
    assert_eq!(config.defaults.collection_prefix, "ACTOR-DATABASE");
}

#[test]
fn global_config_is_available() {
    // Loaded from XDG locations, falling back to defaults when no file exists.
    assert!(!CONFIG.defaults.queue_name.is_empty());
    assert!(CONFIG.timing.polling_interval_ms > 0);
}
