//! Fuzz target for line redaction.
//!
//! Log lines routinely contain bytes that are not valid UTF-8, so the
//! redactor must handle arbitrary byte input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ls_redact::{RedactionPolicy, Redactor};
use std::sync::OnceLock;

static REDACTOR: OnceLock<Redactor> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let redactor = REDACTOR.get_or_init(|| Redactor::new(RedactionPolicy::default()));
    // Must never panic, whatever the input bytes.
    let _ = redactor.redact_line(data);
});
