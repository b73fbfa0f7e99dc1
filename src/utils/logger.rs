use std::io::Write;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

// Logger writes operator status lines. Each line carries a severity prefix.
pub struct Logger;

impl Logger {
    pub fn log_info<W: Write>(out: &mut W, message: &str) -> LibraryResult<()> {
        Self::log(out, "INFO", message)
    }

    pub fn log_error<W: Write>(out: &mut W, message: &str) -> LibraryResult<()> {
        Self::log(out, "ERROR", message)
    }

    pub fn log_success<W: Write>(out: &mut W, message: &str) -> LibraryResult<()> {
        Self::log(out, "SUCCESS", message)
    }

    fn log<W: Write>(out: &mut W, severity: &str, message: &str) -> LibraryResult<()> {
        writeln!(out, "[{}] {}", severity, message)?;
        Ok(())
    }
}

// Diagnostics go to stderr so they never interleave with the menu on stdout.
pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(std::io::stderr)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Write;
    use crate::core::library::LibraryError;
    use crate::utils::logger::Logger;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_should_prefix_severity() {
        let mut out = Vec::new();
        Logger::log_info(&mut out, "System shutting down...").expect("should log");
        Logger::log_error(&mut out, "Item not found.").expect("should log");
        Logger::log_success(&mut out, "Book added.").expect("should log");
        assert_eq!("[INFO] System shutting down...\n[ERROR] Item not found.\n[SUCCESS] Book added.\n",
                   String::from_utf8(out).expect("utf8"));
    }

    #[test]
    fn test_should_surface_write_failure() {
        let res = Logger::log_info(&mut ClosedPipe, "lost");
        assert!(matches!(res, Err(LibraryError::Io { .. })));
    }
}
