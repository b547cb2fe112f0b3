#![no_main]

use launch_kiiroo::{Event, Events, MAX_VALUE};
use libfuzzer_sys::fuzz_target;

/// Past this, f64 seconds can no longer hold every centisecond
const EXACT_MILLIS: u64 = 1 << 40;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(event) = Event::decode(text) {
        assert!(event.value() <= MAX_VALUE);
        let encoded = event.encode().expect("valid event encodes");
        if event.millis() < EXACT_MILLIS {
            let again = Event::decode(&encoded).expect("encoded event decodes");
            assert_eq!(again.value(), event.value());
        }
    }

    if let Ok(events) = Events::decode(text) {
        assert!(!events.is_empty());
        let encoded = events.encode().expect("valid events encode");
        if events.duration().as_millis() < u128::from(EXACT_MILLIS) {
            let again = Events::decode(&encoded).expect("encoded events decode");
            assert_eq!(again.len(), events.len());
        }

        let sorted = events.sorted();
        assert!(sorted.is_sorted());
    }
});
