use chrono::NaiveDate;

use crate::types::{
    Additions, Codebase, DocCommands, DocEntry, Documentation, E2eCoverage,
    Role, RunCommands, Security, SetupCommands, StatsRecord, Testing, Valuation, Workflow,
};

pub const DOCUMENTATION_INDEX: [DocEntry; 7] = [
    DocEntry {
        filename: "E2E_FIRST_TIME_SETUP.md",
        description: "Start here! Complete setup guide",
    },
    DocEntry {
        filename: "E2E_QUICK_REFERENCE.md",
        description: "Cheat sheet with all commands",
    },
    DocEntry {
        filename: "E2E_TESTING.md",
        description: "Complete testing guide (400+ lines)",
    },
    DocEntry {
        filename: "E2E_TESTING_SUMMARY.md",
        description: "Implementation summary",
    },
    DocEntry {
        filename: "E2E_IMPLEMENTATION_SUMMARY.md",
        description: "What was added and why",
    },
    DocEntry {
        filename: "PROJECT_COMPLETE_SUMMARY.md",
        description: "Complete project overview",
    },
    DocEntry {
        filename: "DOCUMENTATION_INDEX.md",
        description: "Master index of all docs",
    },
];

pub const WORKFLOWS: [Workflow; 3] = [
    Workflow {
        role: Role::Admin,
        steps: &[
            "Login/Logout",
            "Dashboard with metrics",
            "Client management",
            "Mechanic management",
            "Reports and filtering",
            "Service management",
        ],
    },
    Workflow {
        role: Role::Client,
        steps: &[
            "Login/Logout",
            "Personal dashboard",
            "Vehicle management",
            "Appointment booking",
            "Invoice download (PDF)",
            "Service ratings",
            "Profile editing",
        ],
    },
    Workflow {
        role: Role::Mechanic,
        steps: &[
            "Login/Logout",
            "Dashboard with stats",
            "Assigned appointments",
            "Work management (start/complete)",
            "Earnings tracking",
            "Customer ratings",
            "Profile & availability",
        ],
    },
];

pub const NEXT_STEPS: [&str; 5] = [
    "cd frontend && npm install",
    "npm run e2e:admin  (test first)",
    "npm run e2e:run    (run all)",
    "Read E2E_FIRST_TIME_SETUP.md for detailed guide",
    "Contact customers with COMMERCIAL_PROPOSAL.md",
];

// Fixed security policy details shown next to the flags.
pub(crate) const RATE_LIMIT_POLICY: &str = "Global 100/15min + Login 5/15min";
pub(crate) const JWT_POLICY: &str = "8-hour tokens";
pub(crate) const PASSWORD_POLICY: &str = "bcryptjs (10 rounds)";
pub(crate) const VALIDATION_POLICY: &str = "Input validation middleware";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for StatsRecord {
    fn default() -> Self {
        Self {
            project: "ServiCollantas".to_string(),
            kind: "Full-Stack SaaS - Automotive Workshop Management".to_string(),
            development_time: "3 months".to_string(),
            developer_level: "Junior".to_string(),
            current_status: "Production Ready - Ready to Sell".to_string(),
            last_update: NaiveDate::from_ymd_opt(2025, 12, 18).unwrap_or_default(),
            codebase: Codebase::default(),
            testing: Testing::default(),
            security: Security::default(),
            documentation: Documentation::default(),
            value: Valuation::default(),
            files_added_today: Additions::default(),
        }
    }
}

impl Default for Codebase {
    fn default() -> Self {
        Self {
            total_lines: 12_262,
            backend_lines: 5_029,
            frontend_lines: 7_233,
            technologies: strings(&[
                "React 18",
                "TypeScript",
                "Node.js",
                "Express.js",
                "PostgreSQL",
            ]),
        }
    }
}

impl Default for Testing {
    fn default() -> Self {
        Self {
            unit_tests: 10,
            e2e_tests: 40,
            e2e_coverage: E2eCoverage::default(),
            code_coverage: "~70%".to_string(),
            test_framework: "Jest (unit) + Cypress (E2E)".to_string(),
            execution_time: "12-18 minutes".to_string(),
        }
    }
}

impl Default for E2eCoverage {
    fn default() -> Self {
        Self {
            admin: 12,
            client: 13,
            mechanic: 15,
        }
    }
}

impl Default for Security {
    fn default() -> Self {
        Self {
            helmet_headers: "15+".to_string(),
            rate_limiting: true,
            jwt_auth: true,
            password_hashing: true,
            input_validation: true,
        }
    }
}

impl Default for Documentation {
    fn default() -> Self {
        Self {
            total_files: 16,
            total_lines: 8_000,
            coverage: "100% (API, Setup, Testing, Security, Commercial)".to_string(),
        }
    }
}

impl Default for Valuation {
    fn default() -> Self {
        Self {
            initial_valuation: "$35-42k USD".to_string(),
            current_valuation: "$48-50k USD".to_string(),
            value_added: "$13k USD".to_string(),
            increase_percentage: 40,
        }
    }
}

impl Default for Additions {
    fn default() -> Self {
        Self {
            test_files: 3,
            config_files: 2,
            documentation_files: 5,
            total_new_files: 10,
            total_lines_added: 2_750,
        }
    }
}

impl Default for SetupCommands {
    fn default() -> Self {
        Self {
            install: "cd frontend && npm install".to_string(),
            verify: "npx cypress --version".to_string(),
        }
    }
}

impl Default for RunCommands {
    fn default() -> Self {
        Self {
            interactive: "npm run e2e".to_string(),
            all_tests: "npm run e2e:run".to_string(),
            admin_only: "npm run e2e:admin (3-5 min)".to_string(),
            client_only: "npm run e2e:client (4-6 min)".to_string(),
            mechanic_only: "npm run e2e:mechanic (5-7 min)".to_string(),
        }
    }
}

impl Default for DocCommands {
    fn default() -> Self {
        Self {
            first_time: "Read: E2E_FIRST_TIME_SETUP.md (5 min)".to_string(),
            quick_ref: "Read: E2E_QUICK_REFERENCE.md (5 min)".to_string(),
            full_guide: "Read: E2E_TESTING.md (20 min)".to_string(),
            implementation: "Read: E2E_IMPLEMENTATION_SUMMARY.md (10 min)".to_string(),
            all_files_index: "Read: DOCUMENTATION_INDEX.md".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::check_consistency;
    use crate::types::Report;

    #[test]
    fn builtin_role_counts_sum_to_e2e_total() {
        let stats = StatsRecord::default();
        assert_eq!(stats.testing.e2e_coverage.total(), Some(40));
        assert_eq!(stats.testing.e2e_tests, 40);
    }

    #[test]
    fn builtin_report_passes_consistency_checks() {
        assert!(check_consistency(&Report::default()).is_ok());
    }

    #[test]
    fn documentation_index_has_seven_markdown_files() {
        assert_eq!(DOCUMENTATION_INDEX.len(), 7);
        assert!(DOCUMENTATION_INDEX.iter().all(|d| d.filename.ends_with(".md")));
        assert_eq!(DOCUMENTATION_INDEX[0].filename, "E2E_FIRST_TIME_SETUP.md");
        assert_eq!(DOCUMENTATION_INDEX[6].filename, "DOCUMENTATION_INDEX.md");
    }

    #[test]
    fn workflows_start_with_login_and_have_no_duplicates() {
        let roles: Vec<Role> = WORKFLOWS.iter().map(|w| w.role).collect();
        assert_eq!(roles, Role::ALL);
        for workflow in &WORKFLOWS {
            assert_eq!(workflow.steps[0], "Login/Logout");
            let unique: HashSet<&str> = workflow.steps.iter().copied().collect();
            assert_eq!(unique.len(), workflow.steps.len(), "{:?}", workflow.role);
        }
    }
}
