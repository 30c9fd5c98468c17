use crate::data::{DOCUMENTATION_INDEX, NEXT_STEPS, WORKFLOWS};
use crate::types::{CommandsRecord, E2eCoverage};

use super::{TabStyle, style::titled_table};

pub(crate) fn render_commands(commands: &CommandsRecord, style: TabStyle) -> String {
    let rows = [
        ("install", &commands.setup.install),
        ("verify", &commands.setup.verify),
        ("interactive", &commands.run.interactive),
        ("all tests", &commands.run.all_tests),
        ("admin only", &commands.run.admin_only),
        ("client only", &commands.run.client_only),
        ("mechanic only", &commands.run.mechanic_only),
        ("first time", &commands.documentation.first_time),
        ("quick reference", &commands.documentation.quick_ref),
        ("full guide", &commands.documentation.full_guide),
        ("implementation", &commands.documentation.implementation),
        ("all files", &commands.documentation.all_files_index),
    ];
    titled_table(
        "Quick Start",
        ["Step", "Command"],
        rows.into_iter()
            .map(|(step, cmd)| (step.to_string(), cmd.clone())),
        style,
    )
}

pub(crate) fn render_doc_index(style: TabStyle) -> String {
    titled_table(
        "Documentation Index",
        ["File", "Description"],
        DOCUMENTATION_INDEX
            .iter()
            .map(|d| (d.filename.to_string(), d.description.to_string())),
        style,
    )
}

pub(crate) fn render_workflows(coverage: &E2eCoverage, style: TabStyle) -> Vec<String> {
    WORKFLOWS
        .iter()
        .map(|w| {
            let title = format!("{} ({} tests)", w.role.label(), coverage.for_role(w.role));
            titled_table(
                &title,
                ["#", "Workflow"],
                w.steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| ((i + 1).to_string(), (*step).to_string())),
                style,
            )
        })
        .collect()
}

pub(crate) fn render_next_steps(style: TabStyle) -> String {
    titled_table(
        "Next Steps",
        ["#", "Step"],
        NEXT_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| ((i + 1).to_string(), (*step).to_string())),
        style,
    )
}
