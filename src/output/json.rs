use serde::Serialize;

use crate::data::{DOCUMENTATION_INDEX, NEXT_STEPS, WORKFLOWS};
use crate::error::ReportError;
use crate::types::{CommandsRecord, DocEntry, Report, Role, StatsRecord};

#[derive(Serialize)]
struct JsonReport<'a> {
    stats: &'a StatsRecord,
    commands: &'a CommandsRecord,
    documentation_index: &'a [DocEntry],
    workflows: Vec<JsonWorkflow>,
    next_steps: &'a [&'a str],
}

#[derive(Serialize)]
struct JsonWorkflow {
    role: Role,
    tests: u64,
    steps: &'static [&'static str],
}

/// Serialize the report, including the fixed index and checklists, as pretty JSON.
///
/// # Errors
/// Returns [`ReportError::Json`] if serialization fails.
pub fn to_json(report: &Report) -> Result<String, ReportError> {
    let coverage = &report.stats.testing.e2e_coverage;
    let doc = JsonReport {
        stats: &report.stats,
        commands: &report.commands,
        documentation_index: &DOCUMENTATION_INDEX,
        workflows: WORKFLOWS
            .iter()
            .map(|w| JsonWorkflow {
                role: w.role,
                tests: coverage.for_role(w.role),
                steps: w.steps,
            })
            .collect(),
        next_steps: &NEXT_STEPS,
    };
    serde_json::to_string_pretty(&doc).map_err(|source| ReportError::Json { source })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn parsed() -> Value {
        let text = to_json(&Report::default()).expect("json");
        serde_json::from_str(&text).expect("valid json")
    }

    #[test]
    fn json_keeps_record_structure() {
        let v = parsed();
        assert_eq!(v["stats"]["project"], "ServiCollantas");
        assert_eq!(v["stats"]["type"], "Full-Stack SaaS - Automotive Workshop Management");
        assert_eq!(v["stats"]["last_update"], "2025-12-18");
        assert_eq!(v["stats"]["testing"]["e2e_coverage"]["mechanic"], 15);
        assert_eq!(v["stats"]["security"]["jwt_auth"], true);
        assert_eq!(v["commands"]["run"]["admin_only"], "npm run e2e:admin (3-5 min)");
    }

    #[test]
    fn json_lists_fixed_sections() {
        let v = parsed();
        let docs = v["documentation_index"].as_array().expect("docs array");
        assert_eq!(docs.len(), 7);
        assert_eq!(docs[0]["filename"], "E2E_FIRST_TIME_SETUP.md");

        let workflows = v["workflows"].as_array().expect("workflows array");
        let roles: Vec<&str> = workflows
            .iter()
            .map(|w| w["role"].as_str().expect("role"))
            .collect();
        assert_eq!(roles, ["admin", "client", "mechanic"]);
        let tests: u64 = workflows
            .iter()
            .map(|w| w["tests"].as_u64().expect("tests"))
            .sum();
        assert_eq!(tests, 40);

        assert_eq!(v["next_steps"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn json_output_round_trips_into_report() {
        let v = parsed();
        let report = Report {
            stats: serde_json::from_value(v["stats"].clone()).expect("stats"),
            commands: serde_json::from_value(v["commands"].clone()).expect("commands"),
        };
        assert_eq!(report, Report::default());
    }
}
