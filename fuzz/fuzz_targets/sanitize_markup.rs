#![no_main]

use html::sanitize::DEFAULT_ALLOWED_TAGS;
use html::traverse::element_names;
use html::{SanitizePolicy, parse_fragment, sanitize, serialize, text_content};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(markup) = std::str::from_utf8(data) else {
        return;
    };
    let policy = SanitizePolicy::default();
    let fragment = parse_fragment(markup);
    let clean = sanitize(&fragment, &policy);

    for name in element_names(&clean) {
        assert!(DEFAULT_ALLOWED_TAGS.contains(&name), "<{name}> survived");
    }
    assert_eq!(text_content(&clean), text_content(&fragment));
    // Compared as markup: the serializer walks iteratively, derived `PartialEq` does not.
    assert_eq!(serialize(&sanitize(&clean, &policy)), serialize(&clean));
});
