#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing, including unknown-key warnings, must never panic
        if let Ok((config, _warnings)) = shaderbake::config::parse_with_warnings(content, Path::new("shaderbake.toml")) {
            let _ = config.formats();
            let _ = config.entry_points();
            let _ = config.source_dir();
        }
    }
});
