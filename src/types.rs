use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsRecord {
    pub project: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub development_time: String,
    pub developer_level: String,
    pub current_status: String,
    pub last_update: NaiveDate,
    pub codebase: Codebase,
    pub testing: Testing,
    pub security: Security,
    pub documentation: Documentation,
    pub value: Valuation,
    pub files_added_today: Additions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Codebase {
    pub total_lines: u64,
    pub backend_lines: u64,
    pub frontend_lines: u64,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Testing {
    pub unit_tests: u64,
    pub e2e_tests: u64,
    pub e2e_coverage: E2eCoverage,
    pub code_coverage: String,
    pub test_framework: String,
    pub execution_time: String,
}

/// E2E test counts per user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct E2eCoverage {
    pub admin: u64,
    pub client: u64,
    pub mechanic: u64,
}

impl E2eCoverage {
    /// Sum of all roles, `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.admin
            .checked_add(self.client)?
            .checked_add(self.mechanic)
    }

    #[must_use]
    pub fn for_role(&self, role: Role) -> u64 {
        match role {
            Role::Admin => self.admin,
            Role::Client => self.client,
            Role::Mechanic => self.mechanic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Security {
    pub helmet_headers: String,
    pub rate_limiting: bool,
    pub jwt_auth: bool,
    pub password_hashing: bool,
    pub input_validation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Documentation {
    pub total_files: u64,
    pub total_lines: u64,
    pub coverage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Valuation {
    pub initial_valuation: String,
    pub current_valuation: String,
    pub value_added: String,
    pub increase_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Additions {
    pub test_files: u64,
    pub config_files: u64,
    pub documentation_files: u64,
    pub total_new_files: u64,
    pub total_lines_added: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandsRecord {
    pub setup: SetupCommands,
    pub run: RunCommands,
    pub documentation: DocCommands,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupCommands {
    pub install: String,
    pub verify: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunCommands {
    pub interactive: String,
    pub all_tests: String,
    pub admin_only: String,
    pub client_only: String,
    pub mechanic_only: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocCommands {
    pub first_time: String,
    pub quick_ref: String,
    pub full_guide: String,
    pub implementation: String,
    pub all_files_index: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Mechanic,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Client, Role::Mechanic];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Client => "CLIENT",
            Role::Mechanic => "MECHANIC",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Role::Admin => "\u{1f468}\u{200d}\u{1f4bc}",
            Role::Client => "\u{1f464}",
            Role::Mechanic => "\u{1f527}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocEntry {
    pub filename: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub role: Role,
    pub steps: &'static [&'static str],
}

/// Everything one report run renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Report {
    pub stats: StatsRecord,
    pub commands: CommandsRecord,
}
