// 🔐 Permission Table - Role → permitted destinations
//
// One named set per role, so "a role with no permission entry" is
// unrepresentable: `permissions_for` is an exhaustive match over the closed
// Role enumeration and there is no missing-entry runtime path.
//
// Composition rules the table must preserve:
// - Proprietor/Admin are computed from `Destination::ALL`, never a literal.
// - Manager and Teacher are base list + AddTimetableEntry via explicit
//   union, so the extra screen can't drift out of sync with the base.
// - Cashier and Attendant share one canonical list today but live in
//   separate fields; either can be overridden without touching the other.

use crate::model::{Destination, Role};
use std::collections::HashSet;

// ============================================================================
// PERMISSION TABLE
// ============================================================================

pub struct PermissionTable {
    proprietor: HashSet<Destination>,
    admin: HashSet<Destination>,
    manager: HashSet<Destination>,
    cashier: HashSet<Destination>,
    attendant: HashSet<Destination>,
    teacher: HashSet<Destination>,
    non_teaching: HashSet<Destination>,
    student_advisor: HashSet<Destination>,
}

impl PermissionTable {
    /// Build the table with the shipped role privileges.
    pub fn new() -> Self {
        let mut manager = manager_views();
        manager.insert(Destination::AddTimetableEntry);

        let mut teacher = teacher_views();
        teacher.insert(Destination::AddTimetableEntry);

        PermissionTable {
            proprietor: all_destinations(),
            admin: all_destinations(),
            manager,
            cashier: till_views(),
            // Attendant is a distinct job title that currently shares the
            // till privileges; kept as its own entry so the two can diverge.
            attendant: till_views(),
            teacher,
            non_teaching: non_teaching_views(),
            student_advisor: student_advisor_views(),
        }
    }

    /// The fixed set of destinations this role may access.
    pub fn permissions_for(&self, role: Role) -> &HashSet<Destination> {
        match role {
            Role::Proprietor => &self.proprietor,
            Role::Admin => &self.admin,
            Role::Manager => &self.manager,
            Role::Cashier => &self.cashier,
            Role::Attendant => &self.attendant,
            Role::Teacher => &self.teacher,
            Role::NonTeaching => &self.non_teaching,
            Role::StudentAdvisor => &self.student_advisor,
        }
    }

    /// Replace one role's set without touching any other role.
    pub fn override_role(&mut self, role: Role, views: HashSet<Destination>) {
        match role {
            Role::Proprietor => self.proprietor = views,
            Role::Admin => self.admin = views,
            Role::Manager => self.manager = views,
            Role::Cashier => self.cashier = views,
            Role::Attendant => self.attendant = views,
            Role::Teacher => self.teacher = views,
            Role::NonTeaching => self.non_teaching = views,
            Role::StudentAdvisor => self.student_advisor = views,
        }
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ROLE VIEW LISTS
// ============================================================================

/// Every member of the Destination enumeration, computed at construction so
/// newly added screens reach Proprietor/Admin without a code change.
fn all_destinations() -> HashSet<Destination> {
    Destination::ALL.iter().copied().collect()
}

/// Manager base list: everything an operations lead runs day to day.
/// Excludes Security and Settings (owner/admin only); AddTimetableEntry is
/// joined in by `PermissionTable::new`, not listed here.
fn manager_views() -> HashSet<Destination> {
    [
        Destination::Home,
        Destination::PointOfSale,
        Destination::DailySales,
        Destination::Receipts,
        Destination::Inventory,
        Destination::Expenses,
        Destination::Reports,
        Destination::Suppliers,
        Destination::Customers,
        Destination::Appointments,
        Destination::Patients,
        Destination::LabResults,
        Destination::CylinderInventory,
        Destination::BulkSupplyLog,
        Destination::SafetyChecklists,
        Destination::StockTransfers,
        Destination::PriceBook,
        Destination::Promotions,
        Destination::Classes,
        Destination::Timetable,
        Destination::StudentRecords,
        Destination::FeesBilling,
        Destination::StaffManagement,
        Destination::Properties,
        Destination::Tenants,
        Destination::Leases,
        Destination::MaintenanceRequests,
        Destination::UserAccounts,
        Destination::ChangePassword,
    ]
    .into_iter()
    .collect()
}

/// Canonical till list, shared by Cashier and Attendant.
fn till_views() -> HashSet<Destination> {
    [
        Destination::Home,
        Destination::PointOfSale,
        Destination::DailySales,
        Destination::Receipts,
        Destination::Inventory,
        Destination::ChangePassword,
    ]
    .into_iter()
    .collect()
}

/// Teacher base list; AddTimetableEntry is joined in by
/// `PermissionTable::new`.
fn teacher_views() -> HashSet<Destination> {
    [
        Destination::Home,
        Destination::Classes,
        Destination::Timetable,
        Destination::StudentRecords,
        Destination::ChangePassword,
    ]
    .into_iter()
    .collect()
}

/// Non-teaching staff get the bare minimum: home plus self-service.
fn non_teaching_views() -> HashSet<Destination> {
    [Destination::Home, Destination::ChangePassword]
        .into_iter()
        .collect()
}

fn student_advisor_views() -> HashSet<Destination> {
    [
        Destination::Home,
        Destination::Classes,
        Destination::Timetable,
        Destination::StudentRecords,
        Destination::Appointments,
        Destination::ChangePassword,
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_home_and_is_non_empty() {
        let table = PermissionTable::new();
        for role in Role::ALL {
            let views = table.permissions_for(role);
            assert!(!views.is_empty(), "{:?} has an empty set", role);
            assert!(
                views.contains(&Destination::Home),
                "{:?} is missing Home",
                role
            );
        }
    }

    #[test]
    fn test_superusers_hold_the_full_enumeration() {
        let table = PermissionTable::new();
        for role in [Role::Proprietor, Role::Admin] {
            assert_eq!(table.permissions_for(role).len(), Destination::ALL.len());
        }
    }

    #[test]
    fn test_non_superusers_are_subsets_of_proprietor() {
        let table = PermissionTable::new();
        let proprietor = table.permissions_for(Role::Proprietor);
        for role in Role::ALL {
            if role.is_superuser() {
                continue;
            }
            assert!(
                table.permissions_for(role).is_subset(proprietor),
                "{:?} exceeds Proprietor",
                role
            );
        }
    }

    #[test]
    fn test_cashier_and_attendant_currently_match() {
        let table = PermissionTable::new();
        assert_eq!(
            table.permissions_for(Role::Cashier),
            table.permissions_for(Role::Attendant)
        );
    }

    #[test]
    fn test_attendant_override_leaves_cashier_untouched() {
        let mut table = PermissionTable::new();
        let before = table.permissions_for(Role::Cashier).clone();

        table.override_role(
            Role::Attendant,
            [Destination::Home, Destination::ChangePassword]
                .into_iter()
                .collect(),
        );

        assert_eq!(table.permissions_for(Role::Cashier), &before);
        assert_eq!(table.permissions_for(Role::Attendant).len(), 2);
    }

    #[test]
    fn test_manager_and_teacher_gain_add_timetable_entry() {
        let table = PermissionTable::new();
        assert!(table
            .permissions_for(Role::Manager)
            .contains(&Destination::AddTimetableEntry));
        assert!(table
            .permissions_for(Role::Teacher)
            .contains(&Destination::AddTimetableEntry));
        assert!(!manager_views().contains(&Destination::AddTimetableEntry));
        assert!(!teacher_views().contains(&Destination::AddTimetableEntry));
    }

    #[test]
    fn test_manager_lacks_owner_only_screens() {
        let table = PermissionTable::new();
        let manager = table.permissions_for(Role::Manager);
        assert!(!manager.contains(&Destination::Security));
        assert!(!manager.contains(&Destination::Settings));
    }

    #[test]
    fn test_till_views_match_the_documented_set() {
        let expected: HashSet<Destination> = [
            Destination::Home,
            Destination::PointOfSale,
            Destination::DailySales,
            Destination::Receipts,
            Destination::Inventory,
            Destination::ChangePassword,
        ]
        .into_iter()
        .collect();
        assert_eq!(till_views(), expected);
    }
}
