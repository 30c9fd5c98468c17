use std::io::{self, Write};

use crate::data::{
    DOCUMENTATION_INDEX, JWT_POLICY, NEXT_STEPS, PASSWORD_POLICY, RATE_LIMIT_POLICY,
    VALIDATION_POLICY, WORKFLOWS,
};
use crate::types::{CommandsRecord, Report, StatsRecord};

use super::humanize::group_thousands;

pub const RULE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 15;
const BOX_WIDTH: usize = 74;

/// Render the full text report. Sections always appear in the same order and
/// nothing depends on the clock or environment.
///
/// # Errors
/// Returns the first error from `out`; everything written before it stays written.
pub fn write_report<W: Write + ?Sized>(out: &mut W, report: &Report) -> io::Result<()> {
    let stats = &report.stats;
    write_banner(out, stats)?;
    write_identity(out, stats)?;
    write_codebase(out, stats)?;
    write_testing(out, stats)?;
    write_security(out, stats)?;
    write_documentation(out, stats)?;
    write_valuation(out, stats)?;
    write_additions(out, stats)?;
    write_quick_start(out, &report.commands)?;
    write_doc_index(out)?;
    write_workflows(out, stats)?;
    write_next_steps(out)?;
    write_closing(out, stats)
}

fn write_banner<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let edge = "═".repeat(BOX_WIDTH);
    let blank = " ".repeat(BOX_WIDTH);
    let title = format!("{} - E2E TESTING", stats.project.to_uppercase());
    let completed = format!(
        "Implementation Complete - {}",
        stats.last_update.format("%b %-d")
    );
    writeln!(out)?;
    writeln!(out, "╔{edge}╗")?;
    writeln!(out, "║                      {title:<51}║")?;
    writeln!(out, "║                      {completed:<52}║")?;
    writeln!(out, "║{blank}║")?;
    for status in stats.current_status.split(" - ") {
        writeln!(out, "║                         ✅ {:<45}║", status.to_uppercase())?;
    }
    writeln!(out, "║{blank}║")?;
    writeln!(out, "╚{edge}╝")?;
    writeln!(out)
}

fn header<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn field<W: Write + ?Sized>(
    out: &mut W,
    label: &str,
    value: impl std::fmt::Display,
) -> io::Result<()> {
    writeln!(out, "{label:<LABEL_WIDTH$}{value}")
}

fn mark(flag: bool) -> &'static str {
    if flag { "✅" } else { "❌" }
}

fn write_identity<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    header(out, "📊 PROJECT STATISTICS")?;
    field(out, "Project:", &stats.project)?;
    field(out, "Type:", &stats.kind)?;
    field(out, "Dev Time:", &stats.development_time)?;
    field(out, "Status:", &stats.current_status)?;
    writeln!(out)
}

fn write_codebase<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let code = &stats.codebase;
    header(out, "💻 CODEBASE")?;
    field(out, "Total Lines:", group_thousands(code.total_lines))?;
    field(out, "Backend:", format!("{} lines", group_thousands(code.backend_lines)))?;
    field(out, "Frontend:", format!("{} lines", group_thousands(code.frontend_lines)))?;
    field(out, "Stack:", code.technologies.join(", "))?;
    writeln!(out)
}

fn write_testing<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let testing = &stats.testing;
    let coverage = &testing.e2e_coverage;
    header(out, "🧪 TESTING")?;
    field(out, "Unit Tests:", format!("{} (Jest)", testing.unit_tests))?;
    field(out, "E2E Tests:", format!("{} (Cypress)", testing.e2e_tests))?;
    field(out, "├─ Admin:", format!("{} tests", coverage.admin))?;
    field(out, "├─ Client:", format!("{} tests", coverage.client))?;
    field(out, "└─ Mechanic:", format!("{} tests", coverage.mechanic))?;
    field(out, "Coverage:", &testing.code_coverage)?;
    field(out, "Time:", &testing.execution_time)?;
    writeln!(out)
}

fn write_security<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let security = &stats.security;
    header(out, "🔒 SECURITY")?;
    field(
        out,
        "Helmet:",
        format!(
            "{} {} HTTP security headers",
            mark(!security.helmet_headers.is_empty()),
            security.helmet_headers
        ),
    )?;
    field(
        out,
        "Rate Limit:",
        format!("{} {RATE_LIMIT_POLICY}", mark(security.rate_limiting)),
    )?;
    field(out, "JWT Auth:", format!("{} {JWT_POLICY}", mark(security.jwt_auth)))?;
    field(
        out,
        "Password:",
        format!("{} {PASSWORD_POLICY}", mark(security.password_hashing)),
    )?;
    field(
        out,
        "Validation:",
        format!("{} {VALIDATION_POLICY}", mark(security.input_validation)),
    )?;
    writeln!(out)
}

fn write_documentation<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let docs = &stats.documentation;
    header(out, "📚 DOCUMENTATION")?;
    field(out, "Total Files:", docs.total_files)?;
    field(out, "Total Lines:", group_thousands(docs.total_lines))?;
    field(out, "Coverage:", &docs.coverage)?;
    writeln!(out)
}

fn write_valuation<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let value = &stats.value;
    header(out, "💰 VALUATION")?;
    field(out, "Before:", &value.initial_valuation)?;
    field(out, "After:", &value.current_valuation)?;
    field(out, "Added Value:", &value.value_added)?;
    field(out, "Increase:", format!("+{}%", value.increase_percentage))?;
    writeln!(out)
}

fn write_additions<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let added = &stats.files_added_today;
    header(out, "📦 TODAY'S ADDITIONS")?;
    field(out, "Test Files:", added.test_files)?;
    field(out, "Config Files:", added.config_files)?;
    field(out, "Docs:", added.documentation_files)?;
    field(out, "Total New:", format!("{} files", added.total_new_files))?;
    field(
        out,
        "Lines Added:",
        format!("{} lines", group_thousands(added.total_lines_added)),
    )?;
    writeln!(out)
}

fn write_quick_start<W: Write + ?Sized>(
    out: &mut W,
    commands: &CommandsRecord,
) -> io::Result<()> {
    header(out, "🚀 QUICK START")?;
    writeln!(out)?;
    writeln!(out, "1. INSTALL:")?;
    writeln!(out, "   {}", commands.setup.install)?;
    writeln!(out)?;
    writeln!(out, "2. VERIFY:")?;
    writeln!(out, "   {}", commands.setup.verify)?;
    writeln!(out)?;
    writeln!(out, "3. RUN TESTS:")?;
    writeln!(out, "   {}         (interactive UI)", commands.run.interactive)?;
    writeln!(out, "   {}              (headless)", commands.run.all_tests)?;
    writeln!(out)?;
    writeln!(out, "4. READ DOCS:")?;
    for doc in [
        &commands.documentation.first_time,
        &commands.documentation.quick_ref,
        &commands.documentation.full_guide,
    ] {
        writeln!(out, "   - {doc}")?;
    }
    writeln!(out)
}

fn write_doc_index<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    header(out, "📖 DOCUMENTATION INDEX")?;
    for doc in &DOCUMENTATION_INDEX {
        writeln!(out, "  📄 {}", doc.filename)?;
        writeln!(out, "     └─ {}", doc.description)?;
    }
    writeln!(out)
}

fn write_workflows<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    header(out, "✨ TEST WORKFLOWS COVERED")?;
    writeln!(out)?;
    for workflow in &WORKFLOWS {
        let role = workflow.role;
        writeln!(
            out,
            "{} {} ({} tests)",
            role.icon(),
            role.label(),
            stats.testing.e2e_coverage.for_role(role)
        )?;
        for step in workflow.steps {
            writeln!(out, "  ✓ {step}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_next_steps<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    header(out, "🎯 NEXT STEPS")?;
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        writeln!(out, "{}. {step}", i + 1)?;
    }
    writeln!(out)
}

fn write_closing<W: Write + ?Sized>(out: &mut W, stats: &StatsRecord) -> io::Result<()> {
    let rule = "═".repeat(RULE_WIDTH);
    let initial = stats.value.initial_valuation.trim_end_matches(" USD");
    writeln!(out, "{rule}")?;
    writeln!(out, "Status: ✅ {}", stats.current_status.to_uppercase())?;
    writeln!(
        out,
        "Valuation: {} (up from {initial})",
        stats.value.current_valuation
    )?;
    writeln!(out, "Last Update: {}", stats.last_update.format("%B %-d, %Y"))?;
    writeln!(out, "{rule}")
}
