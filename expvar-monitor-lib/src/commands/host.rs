use core::fmt::Display;
use std::io::Write;

/// The process surroundings a command runs in.
///
/// Data points and command results go to [`output`](Host::output), diagnostics to
/// [`error`](Host::error). Both streams may be pipes read line by line, so every
/// report is written as whole lines.
pub trait Host: Send + Sync {
    fn output(&mut self) -> impl Write;

    fn error(&mut self) -> impl Write;

    /// End the process with `code`. Test hosts record the code and return.
    fn exit(&mut self, code: i32);

    /// Report a problem that leaves the command running.
    fn warn(&mut self, message: impl Display) {
        let _ = writeln!(self.error(), "warning: {message}");
    }

    /// Report a failed operation.
    fn fail(&mut self, message: impl Display) {
        let _ = writeln!(self.error(), "❌ {message}");
    }
}

/// In-memory host recording both streams and the requested exit code
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_go_to_error_stream() {
        let mut host = TestHost::default();
        host.warn("metric 'a' is not numeric");
        host.fail(format_args!("fetching '{}' failed", "http://localhost:6060/debug/vars"));

        assert!(host.output_str().is_empty());
        assert_eq!(
            host.error_str(),
            "warning: metric 'a' is not numeric\n❌ fetching 'http://localhost:6060/debug/vars' failed\n"
        );
        assert_eq!(host.exit_code, None);
    }
}
