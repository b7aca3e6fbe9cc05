//! Canonical token vocabulary for the exprcheck front end.
//!
//! This crate is intentionally small and dependency-free. It records, for every fixed token the
//! scanner can produce, a stable identifier, its source spelling and the label used when the
//! token kind appears in a diagnostic.
//!
//! ## Notes
//!
//! - **No IO**, no global state, and no scanner/recognizer types live here.
//! - Variable tokens (numbers, strings, identifiers) are not registered; only their labels are
//!   exposed through [`lang::labels`].

pub mod lang;
