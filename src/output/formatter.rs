use colored::*;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Format a user-facing error message
pub fn format_error(message: &str, colored: bool) -> String {
    if colored {
        message.red().to_string()
    } else {
        message.to_string()
    }
}

/// Write one line to the shared output, one write per line
pub fn write_output<W: Write>(output: &Mutex<W>, line: &str) {
    let mut writer = output.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
        eprintln!("Error writing output: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_plain() {
        assert_eq!(
            format_error("Missing required API key.", false),
            "Missing required API key."
        );
    }

    #[test]
    fn test_write_output_appends_lines() {
        let output = Mutex::new(Vec::new());
        write_output(&output, "{\"total\": 0}");
        write_output(&output, "second");
        let written = String::from_utf8(output.into_inner().unwrap()).unwrap();
        assert_eq!(written, "{\"total\": 0}\nsecond\n");
    }

    #[test]
    fn test_format_error_colored_keeps_text() {
        let formatted = format_error("Missing required API key.", true);
        assert!(formatted.contains("Missing required API key."));
    }
}
