//! Structured diagnostics for the lexer and parser.
//!
//! Both front-end phases collect every error they can find in one pass
//! instead of aborting on the first, so a diagnostic is a plain record
//! (phase, line, optional offending token, message) that callers
//! accumulate into a `Vec` and render at the end.
//!
//! Runtime errors are a different animal — exactly one aborts an
//! `interpret` call — and live in `nbl_eval`, not here.

mod diagnostic;

pub use diagnostic::{Diagnostic, Phase, Severity};

/// Render a batch of diagnostics, one per line, in source order.
pub fn render_all(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&diagnostic.render());
        out.push('\n');
    }
    out
}
