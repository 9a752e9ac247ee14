#![no_main]

use autocomplete::dom::{Document, Id};
use autocomplete::{
    Callbacks, Config, CoreOptions, InputEvent, KeyEvent, ResultClick, Search, SearchCore, Widget,
};
use libfuzzer_sys::fuzz_target;

struct Passive {
    callbacks: Callbacks<String>,
}

impl SearchCore<String> for Passive {
    fn handle_input(&mut self, _event: &InputEvent) {}
    fn handle_keydown(&mut self, _event: &KeyEvent) {}
    fn handle_result_click(&mut self, _event: &ResultClick) {}
    fn hide_results(&mut self) {}
}

fn style(doc: &Document, results: Id) -> (Option<&str>, Option<&str>) {
    (doc.style(results, "visibility"), doc.style(results, "pointer-events"))
}

// Any interleaving of callbacks keeps visibility and interactivity coupled.
fuzz_target!(|data: &[u8]| {
    let mut doc = Document::parse(r#"<div id="search"><input><ul></ul></div>"#);
    let config = Config::new(|_| Search::Ready(Vec::new()));
    let Ok(mut widget) = Widget::new(&mut doc, "#search", config, |options: CoreOptions<String>| {
        Passive {
            callbacks: options.callbacks,
        }
    }) else {
        return;
    };
    let results = *widget.results();

    for chunk in data.chunks(8) {
        let callbacks = widget.core().callbacks.clone();
        for &op in chunk {
            match op % 6 {
                0 => callbacks.show(),
                1 => callbacks.hide(),
                2 => callbacks.loading(),
                3 => callbacks.loaded(),
                4 => callbacks.update(
                    (0..usize::from(op >> 4)).map(|i| i.to_string()).collect(),
                    ((op & 8) != 0).then_some(0),
                ),
                _ => callbacks.set_value(None),
            }
        }
        widget.pump(&mut doc);

        let expected = if widget.state().expanded() {
            (Some("visible"), Some("auto"))
        } else {
            (Some("hidden"), Some("none"))
        };
        assert_eq!(style(&doc, results), expected);
    }
});
