//! Human-readable output shared by the command handlers.

use slideprompt::SlideRecord;
use std::io::{self, Write};

/// `Slide N: Title`, or `Slide N` when the slide has no title.
pub fn slide_heading(slide: &SlideRecord) -> String {
    if slide.title().is_empty() {
        format!("Slide {}", slide.slide_number())
    } else {
        format!("Slide {}: {}", slide.slide_number(), slide.title())
    }
}

/// Write each slide with its heading, then the total.
pub fn write_slides<W: Write>(out: &mut W, slides: &[SlideRecord]) -> io::Result<()> {
    for slide in slides {
        writeln!(out, "{}", slide_heading(slide))?;
        writeln!(out, "{}", slide.prompt_body())?;
        writeln!(out, "{:-<80}", "")?;
    }
    writeln!(out, "Total: {} slides", slides.len())
}

/// Print slides to stdout.
pub fn print_slides(slides: &[SlideRecord]) -> io::Result<()> {
    write_slides(&mut io::stdout().lock(), slides)
}

/// Write one streamed fragment and flush so it shows up immediately.
pub fn echo_fragment<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unflushable;

    impl Write for Unflushable {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_untitled_slide_has_no_trailing_colon() {
        let slides = vec![
            SlideRecord::new(1, "Cover", "A glowing title"),
            SlideRecord::new(2, "", "Untitled body"),
        ];
        let mut out = Vec::new();
        write_slides(&mut out, &slides).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Slide 1: Cover");
        assert_eq!(lines[1], "A glowing title");
        assert_eq!(lines[3], "Slide 2");
        assert_eq!(lines[4], "Untitled body");
        assert_eq!(lines.last(), Some(&"Total: 2 slides"));
    }

    #[test]
    fn test_echo_reports_flush_failure() {
        let err = echo_fragment(&mut Unflushable, "fragment").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut out = Vec::new();
        echo_fragment(&mut out, "fragment").unwrap();
        assert_eq!(out, b"fragment");
    }
}
