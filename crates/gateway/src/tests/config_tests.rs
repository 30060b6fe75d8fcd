// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GatewayConfig, LatencyConfig, RequestCalendar};

#[test]
fn test_default_latencies() {
    let config: GatewayConfig = GatewayConfig::default();

    assert_eq!(config.latency_ms.sign_in, 650);
    assert_eq!(config.latency_ms.sign_up, 900);
    assert_eq!(config.latency_ms.save_project, 700);
    assert_eq!(config.latency_ms.update_status, 300);
    assert_eq!(config.latency_ms.share_folder, 320);
    assert_eq!(config.latency_ms.fetch_messenger, 450);
}

#[test]
fn test_instant_zeroes_every_latency() {
    let config: GatewayConfig = GatewayConfig::instant();

    assert_eq!(config.latency_ms, LatencyConfig::zero());
    assert_eq!(config.request_calendar, RequestCalendar::default());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: GatewayConfig =
        GatewayConfig::from_json(r#"{"latencyMs": {"signIn": 5}, "requestCalendar": {"month": 10}}"#)
            .unwrap();

    assert_eq!(config.latency_ms.sign_in, 5);
    assert_eq!(config.latency_ms.sign_up, 900);
    assert_eq!(config.request_calendar.month, 10);
    assert_eq!(config.request_calendar.year, 2020);
}

#[test]
fn test_empty_json_is_default() {
    let config: GatewayConfig = GatewayConfig::from_json("{}").unwrap();

    assert_eq!(config, GatewayConfig::default());
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(GatewayConfig::from_json(r#"{"latencyMs": {"signIn": "fast"}}"#).is_err());
}
