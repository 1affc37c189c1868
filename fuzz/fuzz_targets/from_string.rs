#![no_main]

use libfuzzer_sys::fuzz_target;
use uripath::{SchemeType, URI};

/// Shapes that parse but are known not to survive a render and reparse.
fn renders_lossily(uri: &URI) -> bool {
    uri.scheme().is_empty()
        || (uri.address().is_empty() && uri.scheme_type() == SchemeType::Other)
        || uri.host().contains('@')
        || uri
            .queries()
            .iter()
            .any(|(key, value)| key.contains('#') || value.contains('#'))
}

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(uri) = URI::from_string(text) {
            if renders_lossily(&uri) {
                return;
            }

            let rendered = uri.to_string();
            assert_eq!(URI::from_string(&rendered).as_ref(), Ok(&uri), "{}", text);
        }
    }
});
