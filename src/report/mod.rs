//! Sinks for the trace line `add` emits after every successful addition.

/// Receives trace lines such as `INT: 5` or `FLOAT: 5.500000`.
pub trait Reporter {
    fn report(&mut self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, line: &str) {
        println!("{line}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _line: &str) {}
}

/// Keeps every line in order of arrival.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    lines: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the recorded lines, leaving the reporter empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Adapts a closure into a [`Reporter`].
pub struct FnReporter<F> {
    inner: F,
}

impl<F> FnReporter<F>
where
    F: FnMut(&str),
{
    pub fn new(f: F) -> Self {
        FnReporter { inner: f }
    }
}

impl<F> Reporter for FnReporter<F>
where
    F: FnMut(&str),
{
    fn report(&mut self, line: &str) {
        (self.inner)(line)
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: &str) {
        (**self).report(line)
    }
}
