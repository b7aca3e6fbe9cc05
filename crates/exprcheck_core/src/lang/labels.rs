//! Diagnostic labels for token kinds that carry variable text.
//!
//! Fixed tokens take their label from their registry entry; these constants cover the rest so
//! that every token kind prints the same way in traces and error messages.

pub const NUMBER: &str = "NUMBER";
pub const STRING: &str = "STRING";
pub const IDENT: &str = "ID";
/// Label of the synthetic end-of-input marker.
pub const END: &str = "END";
