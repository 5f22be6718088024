#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeahead_core::dom::{DisplaySurface, InputElement};
use typeahead_core::event::Event;
use typeahead_harness::dom::{MemoryDisplay, MemoryInput};
use typeahead_widgets::{Autocomplete, Options};

#[derive(Arbitrary, Debug)]
enum Step {
    Type(String),
    Key(u8),
    Click(u8),
    Focus,
}

#[derive(Arbitrary, Debug)]
struct Input {
    records: Vec<String>,
    min_char: u8,
    fuzzy: bool,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    let query = if input.fuzzy { "fuzzy" } else { "strict" };
    let options = Options::new()
        .data(input.records)
        .min_char(usize::from(input.min_char % 8))
        .query(typeahead_text::Query::by_name(query).unwrap_or_default())
        .show_warnings(false);
    let text = MemoryInput::new();
    let display = MemoryDisplay::new();
    let mut widget = Autocomplete::new(text.clone(), display.clone(), options);

    for step in input.steps {
        let event = match step {
            Step::Type(s) => {
                text.set_value(&s);
                Event::Input
            }
            // Bias toward the navigation codes.
            Step::Key(k) => Event::key(match k % 5 {
                0 => 40,
                1 => 38,
                2 => 9,
                3 => 13,
                _ => u32::from(k),
            }),
            Step::Click(i) => Event::ItemClick(usize::from(i)),
            Step::Focus => Event::Focus,
        };
        widget.handle(event);

        let marked = display.selected_indices();
        assert!(marked.len() <= 1);
        assert_eq!(marked.first().copied(), widget.selection().index());
        if let Some(i) = widget.selection().index() {
            assert!(i < display.item_count());
        }
    }
});
