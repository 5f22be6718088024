#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeahead_core::record::Record;
use typeahead_text::{Query, filter, fuzzy, strict};

#[derive(Arbitrary, Debug)]
struct Input {
    records: Vec<String>,
    text: String,
}

fuzz_target!(|input: Input| {
    let data: Vec<Record> = input.records.iter().map(|s| Record::from(s.as_str())).collect();

    for record in &data {
        // Successful fuzzy scans hand back the record text unchanged.
        if let Some(rebuilt) = fuzzy(record, &input.text) {
            assert_eq!(rebuilt, record.text());
        }
        let _ = strict(record, &input.text);
    }

    for query in [Query::Strict, Query::Fuzzy] {
        let hits = filter(&data, &input.text, &query);
        assert!(hits.len() <= data.len());
    }
});
