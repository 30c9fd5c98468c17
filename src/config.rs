use std::path::Path;

use tracing::debug;

use crate::error::ReportError;
use crate::types::Report;

/// Load a report from a TOML override file. Fields missing from the file keep
/// their built-in values.
///
/// # Errors
/// Returns an error when the file cannot be read or parsed, or when the merged
/// figures contradict each other.
pub fn load_config(path: &Path) -> Result<Report, ReportError> {
    let config_text = std::fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_config(&config_text).map_err(|source| ReportError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    check_consistency(&report)?;
    debug!(path = %path.display(), project = %report.stats.project, "loaded report config");
    Ok(report)
}

pub(crate) fn parse_config(text: &str) -> Result<Report, toml::de::Error> {
    toml::from_str(text)
}

/// Totals must match the sum of their parts.
///
/// # Errors
/// Returns [`ReportError::InvalidConfig`] naming the first total that does not add up.
pub fn check_consistency(report: &Report) -> Result<(), ReportError> {
    let stats = &report.stats;
    let coverage = &stats.testing.e2e_coverage;
    let role_sum = coverage.total().ok_or_else(|| overflow("admin + client + mechanic"))?;
    if role_sum != stats.testing.e2e_tests {
        return Err(ReportError::InvalidConfig {
            message: format!(
                "e2e_tests is {} but admin + client + mechanic is {} + {} + {} = {role_sum}",
                stats.testing.e2e_tests, coverage.admin, coverage.client, coverage.mechanic,
            ),
        });
    }

    let code = &stats.codebase;
    let line_sum = code
        .backend_lines
        .checked_add(code.frontend_lines)
        .ok_or_else(|| overflow("backend_lines + frontend_lines"))?;
    if line_sum != code.total_lines {
        return Err(ReportError::InvalidConfig {
            message: format!(
                "codebase total_lines is {} but backend + frontend is {line_sum}",
                code.total_lines
            ),
        });
    }

    let added = &stats.files_added_today;
    let added_sum = added
        .test_files
        .checked_add(added.config_files)
        .and_then(|n| n.checked_add(added.documentation_files))
        .ok_or_else(|| overflow("test + config + documentation files"))?;
    if added_sum != added.total_new_files {
        return Err(ReportError::InvalidConfig {
            message: format!(
                "total_new_files is {} but test + config + documentation files is {added_sum}",
                added.total_new_files
            ),
        });
    }
    Ok(())
}

fn overflow(what: &str) -> ReportError {
    ReportError::InvalidConfig {
        message: format!("{what} overflows"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::types::{CommandsRecord, StatsRecord};

    #[test]
    fn empty_config_yields_builtin_report() {
        let report = parse_config("").expect("parse");
        assert_eq!(report, Report::default());
    }

    #[test]
    fn partial_override_keeps_remaining_fields() {
        let report = parse_config(
            "[stats]\nproject = \"TallerPro\"\n\n[stats.value]\nincrease_percentage = 55\n\n[commands.setup]\ninstall = \"pnpm install\"\n",
        )
        .expect("parse");

        assert_eq!(report.stats.project, "TallerPro");
        assert_eq!(report.stats.value.increase_percentage, 55);
        assert_eq!(report.stats.value.current_valuation, "$48-50k USD");
        assert_eq!(report.stats.codebase, StatsRecord::default().codebase);
        assert_eq!(report.commands.setup.install, "pnpm install");
        assert_eq!(report.commands.run, CommandsRecord::default().run);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config("[stats]\nprojct = \"typo\"\n").expect_err("unknown field");
        assert!(err.to_string().contains("projct"), "{err}");
    }

    #[test]
    fn last_update_parses_from_iso_date() {
        let report = parse_config("[stats]\nlast_update = \"2026-01-05\"\n").expect("parse");
        assert_eq!(report.stats.last_update.to_string(), "2026-01-05");
    }

    #[test]
    fn mismatched_role_counts_fail_validation() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("report.toml");
        fs::write(&path, "[stats.testing.e2e_coverage]\nadmin = 20\n").expect("write config");

        let err = load_config(&path).expect_err("inconsistent");
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
        assert!(err.to_string().contains("20 + 13 + 15 = 48"), "{err}");
    }

    #[test]
    fn consistent_override_loads() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("report.toml");
        fs::write(
            &path,
            "[stats.testing]\ne2e_tests = 45\n\n[stats.testing.e2e_coverage]\nadmin = 17\n",
        )
        .expect("write config");

        let report = load_config(&path).expect("load");
        assert_eq!(report.stats.testing.e2e_tests, 45);
        assert_eq!(report.stats.testing.e2e_coverage.total(), Some(45));
    }

    #[test]
    fn overflowing_role_counts_fail_validation() {
        let report = parse_config(
            "[stats.testing]\ne2e_tests = 0\n\n[stats.testing.e2e_coverage]\nadmin = 9223372036854775807\nclient = 9223372036854775807\nmechanic = 2\n",
        )
        .expect("parse");

        let err = check_consistency(&report).expect_err("overflow");
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
        assert!(
            err.to_string().contains("admin + client + mechanic overflows"),
            "{err}"
        );
    }

    #[test]
    fn overflowing_line_and_file_counts_fail_validation() {
        let mut report = Report::default();
        report.stats.codebase.backend_lines = u64::MAX;
        let err = check_consistency(&report).expect_err("line overflow");
        assert!(err.to_string().contains("backend_lines + frontend_lines overflows"), "{err}");

        let mut report = Report::default();
        report.stats.files_added_today.documentation_files = u64::MAX;
        let err = check_consistency(&report).expect_err("file overflow");
        assert!(err.to_string().contains("documentation files overflows"), "{err}");
    }

    #[test]
    fn line_totals_must_add_up() {
        let mut report = Report::default();
        report.stats.codebase.frontend_lines += 1;
        let err = check_consistency(&report).expect_err("line totals");
        assert!(err.to_string().contains("total_lines is 12262"), "{err}");
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("absent.toml");
        let err = load_config(&path).expect_err("missing");
        assert!(matches!(err, ReportError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
