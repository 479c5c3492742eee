// 👤 Role - User job-function identifier
//
// Determines which destinations are permitted. Unlike BusinessType there is
// no fallback: an unrecognized role string at the boundary is an error,
// because defaulting a role would silently grant or strip privileges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ROLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Business owner, full access
    Proprietor,

    /// System administrator, full access
    Admin,

    /// Day-to-day operations lead
    Manager,

    /// Till operator
    Cashier,

    /// Floor/forecourt staff - currently shares Cashier's privileges
    Attendant,

    /// Education vertical: teaching staff
    Teacher,

    /// Education vertical: non-teaching staff
    NonTeaching,

    /// Education vertical: student advisor
    StudentAdvisor,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::Proprietor,
        Role::Admin,
        Role::Manager,
        Role::Cashier,
        Role::Attendant,
        Role::Teacher,
        Role::NonTeaching,
        Role::StudentAdvisor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Proprietor => "Proprietor",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Cashier => "Cashier",
            Role::Attendant => "Attendant",
            Role::Teacher => "Teacher",
            Role::NonTeaching => "Non-Teaching",
            Role::StudentAdvisor => "Student Advisor",
        }
    }

    /// Proprietor and Admin hold the full destination enumeration.
    pub fn is_superuser(&self) -> bool {
        matches!(self, Role::Proprietor | Role::Admin)
    }

    /// Next role in the cycle (used by the TUI preview).
    pub fn next(&self) -> Role {
        match self {
            Role::Proprietor => Role::Admin,
            Role::Admin => Role::Manager,
            Role::Manager => Role::Cashier,
            Role::Cashier => Role::Attendant,
            Role::Attendant => Role::Teacher,
            Role::Teacher => Role::NonTeaching,
            Role::NonTeaching => Role::StudentAdvisor,
            Role::StudentAdvisor => Role::Proprietor,
        }
    }
}

// ============================================================================
// BOUNDARY PARSING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError {
    pub input: String,
}

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {:?}", self.input)
    }
}

impl std::error::Error for RoleParseError {}

impl FromStr for Role {
    type Err = RoleParseError;

    /// Accepts the display name or the kebab/snake identifier,
    /// case-insensitively ("Non-Teaching", "non_teaching", "nonteaching").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "proprietor" => Ok(Role::Proprietor),
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "cashier" => Ok(Role::Cashier),
            "attendant" => Ok(Role::Attendant),
            "teacher" => Ok(Role::Teacher),
            "nonteaching" => Ok(Role::NonTeaching),
            "studentadvisor" => Ok(Role::StudentAdvisor),
            _ => Err(RoleParseError {
                input: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_and_identifier_forms() {
        assert_eq!("Proprietor".parse::<Role>(), Ok(Role::Proprietor));
        assert_eq!("non-teaching".parse::<Role>(), Ok(Role::NonTeaching));
        assert_eq!("Non-Teaching".parse::<Role>(), Ok(Role::NonTeaching));
        assert_eq!("student_advisor".parse::<Role>(), Ok(Role::StudentAdvisor));
        assert_eq!("CASHIER".parse::<Role>(), Ok(Role::Cashier));
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        let err = "janitor".parse::<Role>().unwrap_err();
        assert_eq!(err.input, "janitor");
    }

    #[test]
    fn test_only_proprietor_and_admin_are_superusers() {
        for role in Role::ALL {
            let expected = matches!(role, Role::Proprietor | Role::Admin);
            assert_eq!(role.is_superuser(), expected, "role {:?}", role);
        }
    }

    #[test]
    fn test_next_cycles_through_all_roles() {
        let mut current = Role::Proprietor;
        let mut seen = vec![current];
        for _ in 0..Role::ALL.len() - 1 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen, Role::ALL.to_vec());
        assert_eq!(current.next(), Role::Proprietor);
    }
}
