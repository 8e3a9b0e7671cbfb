use std::{
    cell::RefCell,
    io::{self, Write},
};

pub trait Writer {
    fn write(&self, content: &str) -> io::Result<()>;
}

#[derive(Clone, Default)]
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        StdoutWriter
    }
}

impl Writer for StdoutWriter {
    fn write(&self, content: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        writeln!(stdout, "{}", content)?;
        stdout.flush()
    }
}

/// Keeps lines in memory instead of printing them.
#[derive(Default)]
pub struct BufferedWriter {
    lines: RefCell<Vec<String>>,
}

impl BufferedWriter {
    pub fn new() -> Self {
        BufferedWriter {
            lines: RefCell::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Writer for BufferedWriter {
    fn write(&self, content: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(content.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_keeps_order() {
        let writer = BufferedWriter::new();
        writer.write("first").unwrap();
        writer.write("second").unwrap();
        assert_eq!(vec!["first", "second"], writer.lines());
    }
}
