use std::{collections::VecDeque, fs, io};

/// Routes every host effect of a running script to a destination.
///
/// The interpreter is single-threaded, so buffered destinations are plain
/// collections with no locking. Enum dispatch keeps the print path free of
/// trait objects.
///
/// File operations always reach the real filesystem; only line input and
/// printed output can be redirected to a buffer.
pub enum Io {
    /// Reads from standard input and writes to standard output.
    Stdio,
    /// Reads from and writes to in-memory buffers.
    Buffer(BufferIo),
}

/// In-memory input and output used by tests and embedders.
pub struct BufferIo {
    input:  VecDeque<String>,
    output: String,
}

impl Io {
    /// Creates an adapter backed by standard input and standard output.
    #[must_use]
    pub const fn stdio() -> Self {
        Self::Stdio
    }

    /// Creates an adapter that captures output and has no input lines.
    #[must_use]
    pub fn buffer() -> Self {
        Self::Buffer(BufferIo { input:  VecDeque::new(),
                                output: String::new(), })
    }

    /// Creates an adapter that captures output and serves `lines` as input,
    /// one line per read.
    ///
    /// # Example
    /// ```
    /// use skit::interpreter::io::Io;
    ///
    /// let mut io = Io::buffer_with_input(["alice"]);
    ///
    /// assert_eq!(io.read_line().unwrap(), Some("alice".to_string()));
    /// assert_eq!(io.read_line().unwrap(), None);
    /// ```
    #[must_use]
    pub fn buffer_with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let input = lines.into_iter().map(Into::into).collect();
        Self::Buffer(BufferIo { input,
                                output: String::new(), })
    }

    /// Writes `text` and a trailing newline to the output destination.
    pub fn print_line(&mut self, text: &str) {
        match self {
            Self::Stdio => println!("{text}"),
            Self::Buffer(buffer) => {
                buffer.output.push_str(text);
                buffer.output.push('\n');
            },
        }
    }

    /// Reads the next input line, without its line terminator.
    ///
    /// # Returns
    /// `Ok(None)` once the input source is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        match self {
            Self::Stdio => {
                let mut raw = String::new();
                if io::stdin().read_line(&mut raw)? == 0 {
                    return Ok(None);
                }
                if raw.ends_with('\n') {
                    raw.pop();
                    if raw.ends_with('\r') {
                        raw.pop();
                    }
                }
                Ok(Some(raw))
            },
            Self::Buffer(buffer) => Ok(buffer.input.pop_front()),
        }
    }

    /// Reads the entire file at `path` as text.
    pub fn read_file(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Writes `contents` to the file at `path`, replacing any previous
    /// contents.
    pub fn write_file(&self, path: &str, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    /// Returns everything printed so far, or the empty string when output
    /// goes to standard output.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            Self::Stdio => "",
            Self::Buffer(buffer) => &buffer.output,
        }
    }
}
