#![no_main]

use std::path::PathBuf;

use libfuzzer_sys::fuzz_target;
use shaderbake::domain::services::{OutputMapper, OutputNaming};
use shaderbake::domain::value_objects::{EntryPoint, OutputFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(relative) = std::str::from_utf8(data) {
        let mapper = OutputMapper::new("/src", "/out", OutputNaming::EntryPointSuffix);
        let source = PathBuf::from("/src").join(relative);
        let entry = EntryPoint::new("vert_main");
        // Escaping paths are rejected; everything else maps to a flat name
        if let Ok(name) = mapper.output_file_name(&source, Some(&entry), &OutputFormat::spirv()) {
            assert!(!name.contains('/'));
        }
    }
});
