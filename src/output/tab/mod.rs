use clap::ValueEnum;

use crate::types::Report;

mod guide;
mod stats;
mod style;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabStyle {
    Rounded,
    Modern,
    ModernRounded,
    Ascii,
    AsciiRounded,
    Psql,
    Markdown,
    Extended,
    Sharp,
    Dots,
    ReStructuredText,
    Blank,
    Empty,
}

/// Render every report section as its own table, in text report order.
#[must_use]
pub fn format_tab(report: &Report, style: TabStyle) -> String {
    let mut sections = stats::render(&report.stats, style);
    sections.push(guide::render_commands(&report.commands, style));
    sections.push(guide::render_doc_index(style));
    sections.extend(guide::render_workflows(
        &report.stats.testing.e2e_coverage,
        style,
    ));
    sections.push(guide::render_next_steps(style));
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tab_covers_every_section_in_order() {
        let output = format_tab(&Report::default(), TabStyle::Ascii);
        let titles = [
            " Project ",
            " Codebase ",
            " Testing ",
            " Security ",
            " Documentation ",
            " Valuation ",
            " Today's Additions ",
            " Quick Start ",
            " Documentation Index ",
            " ADMIN (12 tests) ",
            " CLIENT (13 tests) ",
            " MECHANIC (15 tests) ",
            " Next Steps ",
        ];
        let mut last = 0;
        for title in titles {
            let pos = output[last..]
                .find(title)
                .unwrap_or_else(|| panic!("missing {title} after offset {last}"));
            last += pos + title.len();
        }
    }

    #[test]
    fn every_style_keeps_section_titles() {
        let titles = [
            "Project",
            "Codebase",
            "Testing",
            "Security",
            "Documentation",
            "Valuation",
            "Today's Additions",
            "Quick Start",
            "Documentation Index",
            "ADMIN (12 tests)",
            "CLIENT (13 tests)",
            "MECHANIC (15 tests)",
            "Next Steps",
        ];
        for style in TabStyle::value_variants() {
            let output = format_tab(&Report::default(), *style);
            let mut last = 0;
            for title in titles {
                let pos = output[last..]
                    .find(title)
                    .unwrap_or_else(|| panic!("{style:?}: missing {title} after offset {last}"));
                last += pos + title.len();
            }
        }
    }

    #[test]
    fn borderless_styles_put_title_above_table() {
        for style in [TabStyle::Empty, TabStyle::Blank, TabStyle::Markdown, TabStyle::Psql] {
            let output = format_tab(&Report::default(), style);
            assert!(output.starts_with("Project\n"), "{style:?}:\n{output}");
            assert!(output.contains("\nCodebase\n"), "{style:?}:\n{output}");
        }
    }

    #[test]
    fn format_tab_groups_line_counts() {
        let output = format_tab(&Report::default(), TabStyle::Empty);
        assert!(output.contains("12,262"));
        assert!(output.contains("2,750"));
        assert!(output.contains("E2E_IMPLEMENTATION_SUMMARY.md"));
        assert!(output.contains("npm run e2e:mechanic (5-7 min)"));
    }

    #[test]
    fn format_tab_shows_disabled_flags() {
        let mut report = Report::default();
        report.stats.security.jwt_auth = false;
        let output = format_tab(&report, TabStyle::Psql);
        assert!(output.contains("yes (bcryptjs (10 rounds))"));
        assert!(!output.contains("8-hour tokens"));
    }
}
