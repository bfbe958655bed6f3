// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::new().expect("defaults should load without any environment");

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.llm.api_base_url, "https://api.openai.com/v1");
    assert_eq!(settings.crawler.settle_delay_ms, 2000);
    assert_eq!(settings.crawler.request_timeout_secs, 30);
    assert_eq!(settings.crawler.max_text_bytes, 2_000_000);
}
