//! Help listing layout.
//!
//! ```text
//! |<---- column width ---->|
//! |<-- heading -->|         description
//!                           description (continued)
//! |<------- long heading ------->|
//!                           description
//! ```
//!
//! The column width is the longest heading plus a two-space separator,
//! capped at [`MAX_HEADING_WIDTH`] and rounded up to a multiple of
//! [`INDENT_UNIT`]. A heading too wide for the column gets a line of its own.

use crate::spec::OptionSpec;

/// Minimum gap between a heading and its description.
pub const HEADING_SEPARATOR: usize = 2;

/// Upper bound of the heading column before rounding.
pub const MAX_HEADING_WIDTH: usize = 32;

/// The column width is a multiple of this.
pub const INDENT_UNIT: usize = 4;

pub(crate) fn render(specs: &[OptionSpec]) -> Vec<String> {
    let mut sorted: Vec<&OptionSpec> = specs.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));

    let entries: Vec<(&OptionSpec, String)> = sorted
        .into_iter()
        .map(|spec| (spec, spec.help_heading()))
        .collect();

    let Some(longest) = entries.iter().map(|(_, heading)| width(heading)).max() else {
        return Vec::new();
    };
    let column = (longest + HEADING_SEPARATOR)
        .min(MAX_HEADING_WIDTH)
        .next_multiple_of(INDENT_UNIT);
    let indent = " ".repeat(column);

    let mut lines = Vec::with_capacity(entries.len());
    for (spec, heading) in &entries {
        let mut description = spec.description().split('\n');
        let first = description.next().unwrap_or_default();

        if width(heading) + HEADING_SEPARATOR > column {
            lines.push(heading.clone());
            lines.push(format!("{indent}{first}"));
        } else {
            lines.push(format!("{heading:<column$}{first}"));
        }
        lines.extend(description.map(|line| format!("{indent}{line}")));
    }
    lines
}

fn width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use crate::OptionSchema;

    #[test]
    fn test_single_flag() {
        let schema = OptionSchema::new()
            .add("help", Some('h'), "Show help message")
            .unwrap();
        assert_eq!(schema.help_message(), ["-h, --help  Show help message"]);
    }

    #[test]
    fn test_long_heading_gets_own_line() {
        let schema = OptionSchema::new()
            .add_required(
                "very-very-long-name-option",
                Some('v'),
                "ARGUMENT",
                "Specify an argument",
            )
            .unwrap();

        assert_eq!(
            schema.help_message(),
            [
                "-v, --very-very-long-name-option ARGUMENT",
                "                                Specify an argument",
            ]
        );
    }

    #[test]
    fn test_multiline_description() {
        let schema = OptionSchema::new()
            .add_required(
                "file",
                Some('f'),
                "FILE",
                "Specify input file\nExample: -f foo.txt, --file=foo.txt",
            )
            .unwrap();

        assert_eq!(
            schema.help_message(),
            [
                "-f, --file FILE     Specify input file",
                "                    Example: -f foo.txt, --file=foo.txt",
            ]
        );
    }

    #[test]
    fn test_sorted_by_name() {
        let schema = OptionSchema::new()
            .add_required("file", Some('f'), "FILE", "Specify input file")
            .unwrap()
            .add_required("dir", Some('d'), "DIR", "Change the current directory")
            .unwrap();

        assert_eq!(
            schema.help_message(),
            [
                "-d, --dir DIR       Change the current directory",
                "-f, --file FILE     Specify input file",
            ]
        );
    }

    #[test]
    fn test_sort_is_ordinal() {
        let schema = OptionSchema::new()
            .add("beta", None, "b")
            .unwrap()
            .add("Zeta", None, "Z")
            .unwrap()
            .add("alpha", None, "a")
            .unwrap();

        let lines = schema.help_message();
        assert!(lines[0].starts_with("    --Zeta"));
        assert!(lines[1].starts_with("    --alpha"));
        assert!(lines[2].starts_with("    --beta"));
    }

    #[test]
    fn test_missing_short_name_is_indented() {
        let schema = OptionSchema::new()
            .add("verbose", None, "Be verbose")
            .unwrap()
            .add("debug", Some('d'), "Be debug mode")
            .unwrap();

        assert_eq!(
            schema.help_message(),
            ["-d, --debug     Be debug mode", "    --verbose   Be verbose"]
        );
    }

    #[test]
    fn test_long_and_short_headings_mixed() {
        let schema = OptionSchema::new()
            .add("all", Some('a'), "Everything")
            .unwrap()
            .add_required("extremely-long-option-name", None, "VALUE", "Long one")
            .unwrap();

        let expected_indent = " ".repeat(32);
        assert_eq!(
            schema.help_message(),
            [
                format!("{:<32}Everything", "-a, --all"),
                "    --extremely-long-option-name VALUE".to_string(),
                format!("{expected_indent}Long one"),
            ]
        );
    }

    #[test]
    fn test_empty_description() {
        let schema = OptionSchema::new().add("quiet", Some('q'), "").unwrap();
        assert_eq!(schema.help_message(), ["-q, --quiet     "]);
    }
}
