#![no_main]

use libfuzzer_sys::fuzz_target;
use shaderbake::domain::services::parse_directives;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let lines = content.lines().count();
        for marker in ["#include", "import"] {
            for directive in parse_directives(content, marker) {
                assert!(directive.line >= 1 && directive.line <= lines);
                assert!(!directive.fragment.is_empty());
            }
        }
    }
});
