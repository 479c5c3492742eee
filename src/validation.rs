// 📐 Configuration Audit - Startup validation of the static tables
//
// Resolution itself has no error path, so every configuration defect must be
// caught before the shell serves anything: a catalog group missing from its
// vertical's display order would silently vanish, a destination no role can
// reach is dead weight, and a role set exceeding the superusers breaks the
// privilege model. Both binaries run `validate_all` at startup and refuse to
// continue on failure.

use crate::catalog::{
    catalog_for, effective_common_entries, group_order_for, NavigationEntry, GROUP_SYSTEM,
};
use crate::model::{BusinessType, Destination, Role};
use crate::permissions::PermissionTable;
use std::collections::HashSet;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// CATALOG SOURCE
// ============================================================================

/// Where the validator reads its navigation tables from.
///
/// Production code audits the shipped tables; tests hand in broken fixtures
/// to prove each audit actually fires.
pub trait CatalogSource {
    fn catalog(&self, business: BusinessType) -> &[NavigationEntry];
    fn common_entries(&self, business: BusinessType) -> &[NavigationEntry];
    fn group_order(&self, business: BusinessType) -> &[&'static str];
}

/// The compiled-in tables from `crate::catalog`.
pub struct ShippedTables;

impl CatalogSource for ShippedTables {
    fn catalog(&self, business: BusinessType) -> &[NavigationEntry] {
        catalog_for(business)
    }

    fn common_entries(&self, business: BusinessType) -> &[NavigationEntry] {
        effective_common_entries(business)
    }

    fn group_order(&self, business: BusinessType) -> &[&'static str] {
        group_order_for(business)
    }
}

// ============================================================================
// CONFIG VALIDATOR
// ============================================================================

pub struct ConfigValidator<'a> {
    permissions: &'a PermissionTable,
    tables: &'a dyn CatalogSource,
}

impl<'a> ConfigValidator<'a> {
    /// Validator over the shipped navigation tables.
    pub fn new(permissions: &'a PermissionTable) -> Self {
        ConfigValidator {
            permissions,
            tables: &ShippedTables,
        }
    }

    /// Validator over an explicit table source.
    pub fn with_tables(permissions: &'a PermissionTable, tables: &'a dyn CatalogSource) -> Self {
        ConfigValidator {
            permissions,
            tables,
        }
    }

    /// One vertical's full working sequence: catalog then common entries.
    fn working_sequence(
        &self,
        business: BusinessType,
    ) -> impl Iterator<Item = &NavigationEntry> {
        self.tables
            .catalog(business)
            .iter()
            .chain(self.tables.common_entries(business))
    }

    /// Every group tag used by a vertical's working sequence must appear in
    /// that vertical's group order, the order must include "System", and
    /// the order must not name a group that cannot occur.
    pub fn validate_group_coverage(&self) -> ValidationResult {
        let mut errors = Vec::new();

        for business in BusinessType::ALL {
            let order: Vec<&str> = self.tables.group_order(business).to_vec();
            let used: HashSet<&str> = self.working_sequence(business).map(|e| e.group).collect();

            for e in self.working_sequence(business) {
                if !order.contains(&e.group) {
                    errors.push(ValidationError {
                        field: e.group.to_string(),
                        message: format!(
                            "group used by {:?} is absent from the group order",
                            e.destination
                        ),
                        context: business.as_str().to_string(),
                    });
                }
            }

            if !order.contains(&GROUP_SYSTEM) {
                errors.push(ValidationError {
                    field: GROUP_SYSTEM.to_string(),
                    message: "group order must include the System group".to_string(),
                    context: business.as_str().to_string(),
                });
            }

            for group in &order {
                if !used.contains(group) {
                    errors.push(ValidationError {
                        field: (*group).to_string(),
                        message: "group order names a group no entry uses".to_string(),
                        context: business.as_str().to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Every destination reachable through any catalog must be permitted to
    /// at least one role, and every role's set must be non-empty and
    /// contain Home.
    pub fn validate_permission_coverage(&self) -> ValidationResult {
        let mut errors = Vec::new();

        let mut reachable: HashSet<Destination> = HashSet::new();
        for business in BusinessType::ALL {
            for e in self.working_sequence(business) {
                reachable.insert(e.destination);
            }
        }

        for destination in reachable {
            let permitted_somewhere = Role::ALL
                .iter()
                .any(|role| self.permissions.permissions_for(*role).contains(&destination));
            if !permitted_somewhere {
                errors.push(ValidationError {
                    field: destination.as_str().to_string(),
                    message: "catalog destination permitted to no role (dead entry)".to_string(),
                    context: "PermissionTable".to_string(),
                });
            }
        }

        for role in Role::ALL {
            let views = self.permissions.permissions_for(role);
            if views.is_empty() {
                errors.push(ValidationError {
                    field: role.as_str().to_string(),
                    message: "permission set is empty".to_string(),
                    context: "PermissionTable".to_string(),
                });
            }
            if !views.contains(&Destination::Home) {
                errors.push(ValidationError {
                    field: role.as_str().to_string(),
                    message: "permission set is missing Home".to_string(),
                    context: "PermissionTable".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Proprietor and Admin must be supersets of every other role's set.
    pub fn validate_superuser_invariant(&self) -> ValidationResult {
        let mut errors = Vec::new();

        for superuser in [Role::Proprietor, Role::Admin] {
            let full = self.permissions.permissions_for(superuser);
            for role in Role::ALL {
                if role.is_superuser() {
                    continue;
                }
                let views = self.permissions.permissions_for(role);
                if !views.is_subset(full) {
                    errors.push(ValidationError {
                        field: role.as_str().to_string(),
                        message: format!(
                            "permission set exceeds {}",
                            superuser.as_str()
                        ),
                        context: "PermissionTable".to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Home and ChangePassword hold fixed positions in the shell and must
    /// never appear in a catalog or the common list.
    pub fn validate_fixed_entries(&self) -> ValidationResult {
        let mut errors = Vec::new();

        for business in BusinessType::ALL {
            for e in self.working_sequence(business) {
                if matches!(
                    e.destination,
                    Destination::Home | Destination::ChangePassword
                ) {
                    errors.push(ValidationError {
                        field: e.destination.as_str().to_string(),
                        message: "fixed-position entry listed in a catalog".to_string(),
                        context: business.as_str().to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Run every audit, accumulating all errors.
    pub fn validate_all(&self) -> ValidationResult {
        let mut errors = Vec::new();

        for result in [
            self.validate_group_coverage(),
            self.validate_permission_coverage(),
            self.validate_superuser_invariant(),
            self.validate_fixed_entries(),
        ] {
            if let Err(mut batch) = result {
                errors.append(&mut batch);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
