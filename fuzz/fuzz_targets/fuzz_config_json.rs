#![no_main]

use beatkit_spec::hash::is_valid_render_id;
use beatkit_spec::RenderConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = RenderConfig::from_json_str(text) {
            assert!(config.validate().is_ok());
            assert!(is_valid_render_id(&config.id_prefix));
        }
    }
});
