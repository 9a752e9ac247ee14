#![no_main]

use dom::Document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let doc = Document::parse(text);
    let html = doc.inner_html(doc.root());
    let reparsed = Document::parse(&html);
    let _ = reparsed.text_content(reparsed.root());
});
