//! Configurable destination for `print` and prompt output.
//!
//! Enum dispatch rather than a trait object: there are exactly two
//! destinations and `print` sits on a hot path.

use std::io::Write;

use crate::shared::Shared;

/// Where interpreter output goes.
#[derive(Clone, Debug)]
pub enum PrintHandler {
    /// Process stdout (the default).
    Stdout,
    /// An in-memory buffer, for tests and embedders that capture.
    Buffer(Shared<String>),
}

impl PrintHandler {
    pub fn stdout() -> Self {
        PrintHandler::Stdout
    }

    pub fn buffer() -> Self {
        PrintHandler::Buffer(Shared::default())
    }

    /// Write `text` followed by a newline.
    pub fn println(&self, text: &str) {
        match self {
            PrintHandler::Stdout => println!("{text}"),
            PrintHandler::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.push_str(text);
                buffer.push('\n');
            }
        }
    }

    /// Write `text` with no newline, flushed so prompts appear before
    /// the following read blocks.
    pub fn print(&self, text: &str) {
        match self {
            PrintHandler::Stdout => {
                print!("{text}");
                let _ = std::io::stdout().flush();
            }
            PrintHandler::Buffer(buffer) => buffer.borrow_mut().push_str(text),
        }
    }

    /// Captured output; empty for the stdout handler.
    pub fn captured(&self) -> String {
        match self {
            PrintHandler::Stdout => String::new(),
            PrintHandler::Buffer(buffer) => buffer.borrow().clone(),
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        PrintHandler::stdout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_in_order() {
        let handler = PrintHandler::buffer();
        handler.print("> ");
        handler.println("one");
        handler.println("two");
        assert_eq!(handler.captured(), "> one\ntwo\n");
    }

    #[test]
    fn stdout_captures_nothing() {
        assert_eq!(PrintHandler::stdout().captured(), "");
    }

    #[test]
    fn clones_share_the_buffer() {
        let handler = PrintHandler::buffer();
        let clone = handler.clone();
        clone.println("via clone");
        assert_eq!(handler.captured(), "via clone\n");
    }
}
