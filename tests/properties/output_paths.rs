//! Property tests for output path derivation.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use shaderbake::domain::services::{OutputMapper, OutputNaming};
use shaderbake::domain::value_objects::OutputFormat;

fn segment() -> impl Strategy<Value = String> {
    // Separator and escape characters are over-represented on purpose.
    proptest::string::string_regex("[a-z_~]{1,4}").unwrap()
}

fn relative_source() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=4)
}

fn source_path(segments: &[String]) -> PathBuf {
    let mut path = PathBuf::from("/src");
    for segment in segments {
        path.push(segment);
    }
    path.set_extension("vert");
    path
}

fn mapper() -> OutputMapper {
    OutputMapper::new("/src", "/out", OutputNaming::SourceExtension)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: mapping the same source twice yields the same path.
    #[test]
    fn property_mapping_is_pure(segments in relative_source()) {
        let source = source_path(&segments);
        let spv = OutputFormat::spirv();

        let first = mapper().map_output(&source, None, &spv).unwrap();
        let second = mapper().map_output(&source, None, &spv).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.parent(), Some(std::path::Path::new("/out")));
    }

    /// PROPERTY: distinct sources never share an output.
    #[test]
    fn property_distinct_sources_never_collide(
        sources in proptest::collection::btree_set(relative_source(), 1..24)
    ) {
        let spv = OutputFormat::spirv();
        let mapper = mapper();

        let outputs: HashSet<PathBuf> = sources
            .iter()
            .map(|segments| mapper.map_output(&source_path(segments), None, &spv).unwrap())
            .collect();

        prop_assert_eq!(outputs.len(), sources.len());
    }

    /// PROPERTY: flattened names never contain a path separator.
    #[test]
    fn property_output_is_flat(segments in relative_source()) {
        let name = mapper()
            .output_file_name(&source_path(&segments), None, &OutputFormat::spirv())
            .unwrap();
        prop_assert!(!name.contains('/'));
        prop_assert!(name.ends_with("_vert.spv"));
    }
}
