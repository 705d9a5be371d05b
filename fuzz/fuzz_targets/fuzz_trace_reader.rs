#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Malformed trace files must produce an error, never a panic
    if let Ok(trace) = radiostat::trace::Trace::from_reader(Cursor::new(data)) {
        // Whatever parsed must also survive the analyzer
        let _ = radiostat::analysis::Analyzer::new().analyze_trace(&trace);
    }
});
