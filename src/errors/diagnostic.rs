//! Pretty error reporting using ariadne
//!
//! Provides colorful, user-friendly error messages with source context.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::errors::TuskError;

/// Print an error with source context
pub fn print_error(source: &str, error: &TuskError) {
    let (message, span) = match error {
        TuskError::Lexer { message, span } => (message.as_str(), *span),
        TuskError::Io(e) => {
            eprintln!("IO error: {}", e);
            return;
        }
    };

    Report::build(ReportKind::Error, span.start..span.end)
        .with_message("Lexer error")
        .with_label(
            Label::new(span.start..span.end)
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint(Source::from(source))
        .expect("failed to print error report");
}

/// Print multiple errors
pub fn print_errors(source: &str, errors: &[TuskError]) {
    for error in errors {
        print_error(source, error);
    }
}

/// Format an error as a plain string (for testing)
pub fn format_error(source: &str, error: &TuskError) -> String {
    let (message, span) = match error {
        TuskError::Lexer { message, span } => (message.as_str(), *span),
        TuskError::Io(e) => return format!("IO error: {}", e),
    };

    let mut output = Vec::new();

    Report::build(ReportKind::Error, span.start..span.end)
        .with_config(Config::default().with_color(false))
        .with_message("Lexer error")
        .with_label(Label::new(span.start..span.end).with_message(message))
        .finish()
        .write(Source::from(source), &mut output)
        .expect("failed to write error report");

    String::from_utf8(output).expect("error report should be valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SourceSpan;

    #[test]
    fn test_format_error_names_the_problem() {
        let source = "let x = @;";
        let error = TuskError::lexer("unrecognized character '@'", SourceSpan::new(8, 9));

        let report = format_error(source, &error);
        assert!(report.contains("Lexer error"));
        assert!(report.contains("unrecognized character '@'"));
    }

    #[test]
    fn test_format_io_error() {
        let error = TuskError::from(std::io::Error::other("disk on fire"));
        assert_eq!(format_error("", &error), "IO error: disk on fire");
    }
}
