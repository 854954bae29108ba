//! Property tests for include/import directive scanning.

use proptest::prelude::*;

use shaderbake::domain::services::parse_directives;

fn marker() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("#include".to_string()),
        Just("import".to_string()),
        "(?s).{0,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,512}", marker in marker()) {
        let _ = parse_directives(&content, &marker);
    }

    /// PROPERTY: reported lines exist and fragments are trimmed and non-empty.
    #[test]
    fn property_directives_are_well_formed(
        content in "(?s).{0,512}",
        marker in marker()
    ) {
        let line_count = content.lines().count();
        for directive in parse_directives(&content, &marker) {
            prop_assert!(directive.line >= 1);
            prop_assert!(directive.line <= line_count);
            prop_assert!(!directive.fragment.is_empty());
            prop_assert_eq!(directive.fragment.trim(), directive.fragment.as_str());
        }
    }

    /// PROPERTY: every generated include line is found, in order.
    #[test]
    fn property_generated_includes_are_found(
        names in proptest::collection::vec("[a-z][a-z0-9_/]{0,12}", 0..8)
    ) {
        let content: String = names
            .iter()
            .map(|name| format!("#include \"{name}.glsl\"\nvoid f() {{}}\n"))
            .collect();

        let directives = parse_directives(&content, "#include");

        prop_assert_eq!(directives.len(), names.len());
        for (i, (directive, name)) in directives.iter().zip(&names).enumerate() {
            prop_assert_eq!(directive.line, i * 2 + 1);
            prop_assert_eq!(&directive.fragment, &format!("{name}.glsl"));
        }
    }
}
