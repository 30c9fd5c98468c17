use crate::data::{JWT_POLICY, PASSWORD_POLICY, RATE_LIMIT_POLICY, VALIDATION_POLICY};
use crate::report::group_thousands;
use crate::types::StatsRecord;

use super::{TabStyle, style::titled_table};

const HEADER: [&str; 2] = ["Metric", "Value"];

fn row(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

fn flag(enabled: bool, detail: &str) -> String {
    if enabled {
        format!("yes ({detail})")
    } else {
        "no".to_string()
    }
}

pub(crate) fn render(stats: &StatsRecord, style: TabStyle) -> Vec<String> {
    let code = &stats.codebase;
    let testing = &stats.testing;
    let security = &stats.security;
    let docs = &stats.documentation;
    let value = &stats.value;
    let added = &stats.files_added_today;

    vec![
        titled_table(
            "Project",
            HEADER,
            [
                row("Project", &stats.project),
                row("Type", &stats.kind),
                row("Dev Time", &stats.development_time),
                row("Developer", &stats.developer_level),
                row("Status", &stats.current_status),
                row("Last Update", stats.last_update.format("%B %-d, %Y")),
            ],
            style,
        ),
        titled_table(
            "Codebase",
            HEADER,
            [
                row("Total Lines", group_thousands(code.total_lines)),
                row("Backend", group_thousands(code.backend_lines)),
                row("Frontend", group_thousands(code.frontend_lines)),
                row("Stack", code.technologies.join(", ")),
            ],
            style,
        ),
        titled_table(
            "Testing",
            HEADER,
            [
                row("Unit Tests", testing.unit_tests),
                row("E2E Tests", testing.e2e_tests),
                row("Admin", testing.e2e_coverage.admin),
                row("Client", testing.e2e_coverage.client),
                row("Mechanic", testing.e2e_coverage.mechanic),
                row("Coverage", &testing.code_coverage),
                row("Framework", &testing.test_framework),
                row("Time", &testing.execution_time),
            ],
            style,
        ),
        titled_table(
            "Security",
            HEADER,
            [
                row("Helmet", format!("{} HTTP security headers", security.helmet_headers)),
                row("Rate Limit", flag(security.rate_limiting, RATE_LIMIT_POLICY)),
                row("JWT Auth", flag(security.jwt_auth, JWT_POLICY)),
                row("Password", flag(security.password_hashing, PASSWORD_POLICY)),
                row("Validation", flag(security.input_validation, VALIDATION_POLICY)),
            ],
            style,
        ),
        titled_table(
            "Documentation",
            HEADER,
            [
                row("Total Files", docs.total_files),
                row("Total Lines", group_thousands(docs.total_lines)),
                row("Coverage", &docs.coverage),
            ],
            style,
        ),
        titled_table(
            "Valuation",
            HEADER,
            [
                row("Before", &value.initial_valuation),
                row("After", &value.current_valuation),
                row("Added Value", &value.value_added),
                row("Increase", format!("+{}%", value.increase_percentage)),
            ],
            style,
        ),
        titled_table(
            "Today's Additions",
            HEADER,
            [
                row("Test Files", added.test_files),
                row("Config Files", added.config_files),
                row("Docs", added.documentation_files),
                row("Total New", added.total_new_files),
                row("Lines Added", group_thousands(added.total_lines_added)),
            ],
            style,
        ),
    ]
}
