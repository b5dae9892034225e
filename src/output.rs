//! CLI output formatting for conversion runs.
//!
//! Every entry gets a two-level display: a header line with its positional
//! index and logical name (the identity users will pass to `load_image`),
//! and an indented `Source:` context line tracing it back to the file it
//! came from.
//!
//! ```text
//! 001 dawn.png (12.4 KB payload)
//!     Source: photos/dawn.png
//! 002 logo.gif (2.1 KB payload)
//!     Source: icons/logo.gif
//!
//! Packed 2 images → images.py (capable mode)
//! ```
//!
//! Format functions are pure (return `Vec<String>`, no I/O) so they are unit
//! testable; `print_*` wrappers write to stdout.

use crate::pack::PackReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable payload size: bytes below 1 KB, one decimal above.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Render the report for one conversion run.
pub fn format_pack_report(report: &PackReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, entry) in report.entries.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} payload)",
            format_index(i + 1),
            entry.logical_name,
            format_size(entry.payload_bytes)
        ));
        lines.push(format!("    Source: {}", entry.source_path.display()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Packed {} {} → {} ({} mode)",
        report.entries.len(),
        if report.entries.len() == 1 { "image" } else { "images" },
        report.output.display(),
        report.mode
    ));
    lines
}

pub fn print_pack_report(report: &PackReport) {
    for line in format_pack_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::PackedEntry;
    use std::path::PathBuf;

    fn sample_report() -> PackReport {
        PackReport {
            output: PathBuf::from("images.py"),
            mode: "raw",
            entries: vec![
                PackedEntry {
                    logical_name: "dawn.png".to_string(),
                    source_path: PathBuf::from("photos/dawn.png"),
                    payload_bytes: 12700,
                },
                PackedEntry {
                    logical_name: "logo.gif".to_string(),
                    source_path: PathBuf::from("logo.gif"),
                    payload_bytes: 512,
                },
            ],
        }
    }

    #[test]
    fn entries_show_index_name_and_source() {
        let lines = format_pack_report(&sample_report());
        assert_eq!(lines[0], "001 dawn.png (12.4 KB payload)");
        assert_eq!(lines[1], "    Source: photos/dawn.png");
        assert_eq!(lines[2], "002 logo.gif (512 B payload)");
        assert_eq!(lines[3], "    Source: logo.gif");
    }

    #[test]
    fn footer_names_output_and_mode() {
        let lines = format_pack_report(&sample_report());
        assert_eq!(
            lines.last().unwrap(),
            "Packed 2 images → images.py (raw mode)"
        );
    }

    #[test]
    fn singular_footer_for_one_entry() {
        let mut report = sample_report();
        report.entries.truncate(1);
        let lines = format_pack_report(&report);
        assert_eq!(
            lines.last().unwrap(),
            "Packed 1 image → images.py (raw mode)"
        );
    }

    #[test]
    fn size_formatting_switches_at_one_kilobyte() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(12700), "12.4 KB");
    }
}
