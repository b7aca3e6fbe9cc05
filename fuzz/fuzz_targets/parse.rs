#![no_main]

use exprcheck_syntax::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(tokens) = lexer::scan(line) {
        // Exactly one END, and it is last.
        let ends = tokens.iter().filter(|t| t.kind.is_end()).count();
        assert_eq!(ends, 1);
        assert!(tokens.last().is_some_and(|t| t.kind.is_end()));

        let plain = parser::parse(&tokens);
        let (traced, _trace) = parser::parse_traced(&tokens);
        assert_eq!(plain, traced);
    }
});
