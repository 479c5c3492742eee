// 🗂️ Navigation Catalog - Per-vertical tables as data
//
// One declarative table per business type, a shared "System" block, and the
// per-vertical group ordering. Nothing here filters by role - the catalog
// answers "what could this vertical show", the resolver answers "what may
// this user see".
//
// Two screens are deliberately absent from every table: Home (the resolver's
// fixed leading entry) and ChangePassword (its fixed trailing block). The
// configuration audit enforces that.

use crate::model::{BusinessType, Destination};
use serde::Serialize;

// ============================================================================
// GROUP NAMES
// ============================================================================

pub const GROUP_SALES: &str = "Sales";
pub const GROUP_GENERAL: &str = "General";
pub const GROUP_CLINICAL: &str = "Clinical";
pub const GROUP_LPG_OPERATIONS: &str = "LPG Operations";
pub const GROUP_STORE_OPERATIONS: &str = "Store Operations";
pub const GROUP_ACADEMICS: &str = "Academics";
pub const GROUP_ADMINISTRATION: &str = "Administration";
pub const GROUP_PORTFOLIO: &str = "Portfolio";
pub const GROUP_SYSTEM: &str = "System";

// ============================================================================
// NAVIGATION ENTRY
// ============================================================================

/// One clickable destination in the shell: what it opens, how it reads,
/// which icon the renderer draws, and which display group it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub destination: Destination,
    pub label: &'static str,
    pub icon: &'static str,
    pub group: &'static str,
}

const fn entry(
    destination: Destination,
    label: &'static str,
    icon: &'static str,
    group: &'static str,
) -> NavigationEntry {
    NavigationEntry {
        destination,
        label,
        icon,
        group,
    }
}

/// Fixed leading entry, always first, never filtered.
/// The group tag is never consulted; Home sits outside the grouped sections.
pub const HOME_ENTRY: NavigationEntry = entry(Destination::Home, "Home", "home", "");

/// Fixed trailing entry, rendered in the trailing nav block,
/// never part of any group-order-driven section.
pub const CHANGE_PASSWORD_ENTRY: NavigationEntry =
    entry(Destination::ChangePassword, "Change Password", "key", "");

// ============================================================================
// PER-VERTICAL CATALOGS
// ============================================================================

const GENERAL_CATALOG: &[NavigationEntry] = &[
    entry(Destination::PointOfSale, "Point of Sale", "cart", GROUP_SALES),
    entry(Destination::DailySales, "Daily Sales", "chart-line", GROUP_SALES),
    entry(Destination::Receipts, "Receipts", "receipt", GROUP_SALES),
    entry(Destination::Inventory, "Inventory", "boxes", GROUP_GENERAL),
    entry(Destination::Expenses, "Expenses", "wallet", GROUP_GENERAL),
    entry(Destination::Reports, "Reports", "file-chart", GROUP_GENERAL),
    entry(Destination::Suppliers, "Suppliers", "truck", GROUP_GENERAL),
    entry(Destination::Customers, "Customers", "users", GROUP_GENERAL),
];

const HOSPITAL_CATALOG: &[NavigationEntry] = &[
    entry(Destination::Appointments, "Appointments", "calendar", GROUP_CLINICAL),
    entry(Destination::Patients, "Patients", "bed", GROUP_CLINICAL),
    entry(Destination::LabResults, "Lab Results", "flask", GROUP_CLINICAL),
    entry(Destination::PointOfSale, "Billing Desk", "cart", GROUP_SALES),
    entry(Destination::DailySales, "Daily Sales", "chart-line", GROUP_SALES),
    entry(Destination::Receipts, "Receipts", "receipt", GROUP_SALES),
    entry(Destination::Inventory, "Inventory", "boxes", GROUP_GENERAL),
    entry(Destination::Expenses, "Expenses", "wallet", GROUP_GENERAL),
    entry(Destination::Reports, "Reports", "file-chart", GROUP_GENERAL),
];

const LPG_STATION_CATALOG: &[NavigationEntry] = &[
    entry(Destination::PointOfSale, "Point of Sale", "cart", GROUP_SALES),
    entry(Destination::DailySales, "Daily Sales", "chart-line", GROUP_SALES),
    entry(
        Destination::CylinderInventory,
        "Cylinder Inventory",
        "cylinder",
        GROUP_LPG_OPERATIONS,
    ),
    entry(
        Destination::BulkSupplyLog,
        "Bulk Supply Log",
        "clipboard",
        GROUP_LPG_OPERATIONS,
    ),
    entry(
        Destination::SafetyChecklists,
        "Safety Checklists",
        "shield-check",
        GROUP_LPG_OPERATIONS,
    ),
    entry(Destination::Inventory, "Inventory", "boxes", GROUP_GENERAL),
    entry(Destination::Expenses, "Expenses", "wallet", GROUP_GENERAL),
];

const SUPERMARKET_CATALOG: &[NavigationEntry] = &[
    entry(Destination::PointOfSale, "Point of Sale", "cart", GROUP_SALES),
    entry(Destination::DailySales, "Daily Sales", "chart-line", GROUP_SALES),
    entry(Destination::Receipts, "Receipts", "receipt", GROUP_SALES),
    entry(
        Destination::StockTransfers,
        "Stock Transfers",
        "transfer",
        GROUP_STORE_OPERATIONS,
    ),
    entry(Destination::PriceBook, "Price Book", "tag", GROUP_STORE_OPERATIONS),
    entry(Destination::Promotions, "Promotions", "percent", GROUP_STORE_OPERATIONS),
    entry(Destination::Inventory, "Inventory", "boxes", GROUP_GENERAL),
    entry(Destination::Expenses, "Expenses", "wallet", GROUP_GENERAL),
    entry(Destination::Reports, "Reports", "file-chart", GROUP_GENERAL),
    entry(Destination::Suppliers, "Suppliers", "truck", GROUP_GENERAL),
];

const EDUCATION_CATALOG: &[NavigationEntry] = &[
    entry(Destination::Classes, "Classes", "chalkboard", GROUP_ACADEMICS),
    entry(Destination::Timetable, "Timetable", "table", GROUP_ACADEMICS),
    entry(
        Destination::AddTimetableEntry,
        "Add Timetable Entry",
        "table-plus",
        GROUP_ACADEMICS,
    ),
    entry(
        Destination::StudentRecords,
        "Student Records",
        "id-card",
        GROUP_ACADEMICS,
    ),
    entry(Destination::FeesBilling, "Fees & Billing", "invoice", GROUP_ADMINISTRATION),
    entry(
        Destination::StaffManagement,
        "Staff Management",
        "briefcase",
        GROUP_ADMINISTRATION,
    ),
    entry(Destination::Expenses, "Expenses", "wallet", GROUP_ADMINISTRATION),
    entry(Destination::Reports, "Reports", "file-chart", GROUP_ADMINISTRATION),
];

const REAL_ESTATE_CATALOG: &[NavigationEntry] = &[
    entry(Destination::Properties, "Properties", "building", GROUP_PORTFOLIO),
    entry(Destination::Tenants, "Tenants", "user-group", GROUP_PORTFOLIO),
    entry(Destination::Leases, "Leases", "file-contract", GROUP_PORTFOLIO),
    entry(
        Destination::MaintenanceRequests,
        "Maintenance Requests",
        "wrench",
        GROUP_GENERAL,
    ),
    entry(Destination::Expenses, "Expenses", "wallet", GROUP_GENERAL),
    entry(Destination::Reports, "Reports", "file-chart", GROUP_GENERAL),
];

/// The vertical's own entries, in display tie-break order.
/// Total over the closed BusinessType enumeration, so it never fails;
/// the General fallback for unmapped input lives at the string boundary
/// (`BusinessType::from_param`).
pub fn catalog_for(business: BusinessType) -> &'static [NavigationEntry] {
    match business {
        BusinessType::General => GENERAL_CATALOG,
        BusinessType::Hospital => HOSPITAL_CATALOG,
        BusinessType::LpgStation => LPG_STATION_CATALOG,
        BusinessType::Supermarket => SUPERMARKET_CATALOG,
        BusinessType::Education => EDUCATION_CATALOG,
        BusinessType::RealEstate => REAL_ESTATE_CATALOG,
    }
}

// ============================================================================
// COMMON ENTRIES
// ============================================================================

const COMMON_ENTRIES: &[NavigationEntry] = &[
    entry(Destination::Security, "Security", "shield", GROUP_SYSTEM),
    entry(Destination::UserAccounts, "User Accounts", "user-cog", GROUP_SYSTEM),
    entry(Destination::Settings, "Settings", "cog", GROUP_SYSTEM),
];

/// Common list with UserAccounts removed - see `effective_common_entries`.
const EDUCATION_COMMON_ENTRIES: &[NavigationEntry] = &[
    entry(Destination::Security, "Security", "shield", GROUP_SYSTEM),
    entry(Destination::Settings, "Settings", "cog", GROUP_SYSTEM),
];

/// Education substitution rule: the Education vertical carries its own
/// StaffManagement screen for account administration, so the common
/// UserAccounts entry is excluded for Education and only for Education.
pub fn effective_common_entries(business: BusinessType) -> &'static [NavigationEntry] {
    match business {
        BusinessType::Education => EDUCATION_COMMON_ENTRIES,
        _ => COMMON_ENTRIES,
    }
}

// ============================================================================
// GROUP ORDER
// ============================================================================

/// Display sequence of groups for a vertical. Must enumerate every group
/// used by that vertical's catalog plus "System" (audited at startup).
pub fn group_order_for(business: BusinessType) -> &'static [&'static str] {
    match business {
        BusinessType::General => &[GROUP_SALES, GROUP_GENERAL, GROUP_SYSTEM],
        BusinessType::Hospital => &[GROUP_CLINICAL, GROUP_SALES, GROUP_GENERAL, GROUP_SYSTEM],
        BusinessType::LpgStation => &[
            GROUP_SALES,
            GROUP_LPG_OPERATIONS,
            GROUP_GENERAL,
            GROUP_SYSTEM,
        ],
        BusinessType::Supermarket => &[
            GROUP_SALES,
            GROUP_STORE_OPERATIONS,
            GROUP_GENERAL,
            GROUP_SYSTEM,
        ],
        BusinessType::Education => &[GROUP_ACADEMICS, GROUP_ADMINISTRATION, GROUP_SYSTEM],
        BusinessType::RealEstate => &[GROUP_PORTFOLIO, GROUP_GENERAL, GROUP_SYSTEM],
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_catalog_group_appears_in_its_group_order() {
        for business in BusinessType::ALL {
            let order: HashSet<&str> = group_order_for(business).iter().copied().collect();
            for e in catalog_for(business) {
                assert!(
                    order.contains(e.group),
                    "{:?}: group {:?} missing from group order",
                    business,
                    e.group
                );
            }
        }
    }

    #[test]
    fn test_group_order_always_ends_with_system() {
        for business in BusinessType::ALL {
            assert_eq!(group_order_for(business).last(), Some(&GROUP_SYSTEM));
        }
    }

    #[test]
    fn test_education_substitution_drops_user_accounts_only_there() {
        let education: Vec<Destination> = effective_common_entries(BusinessType::Education)
            .iter()
            .map(|e| e.destination)
            .collect();
        assert!(!education.contains(&Destination::UserAccounts));
        assert!(education.contains(&Destination::Security));
        assert!(education.contains(&Destination::Settings));

        for business in BusinessType::ALL {
            if business == BusinessType::Education {
                continue;
            }
            let destinations: Vec<Destination> = effective_common_entries(business)
                .iter()
                .map(|e| e.destination)
                .collect();
            assert!(
                destinations.contains(&Destination::UserAccounts),
                "{:?} lost UserAccounts",
                business
            );
        }
    }

    #[test]
    fn test_fixed_entries_never_appear_in_any_table() {
        for business in BusinessType::ALL {
            for e in catalog_for(business)
                .iter()
                .chain(effective_common_entries(business))
            {
                assert_ne!(e.destination, Destination::Home, "{:?}", business);
                assert_ne!(e.destination, Destination::ChangePassword, "{:?}", business);
            }
        }
    }

    #[test]
    fn test_lpg_station_catalog_matches_the_documented_layout() {
        let catalog = catalog_for(BusinessType::LpgStation);
        let sales: Vec<Destination> = catalog
            .iter()
            .filter(|e| e.group == GROUP_SALES)
            .map(|e| e.destination)
            .collect();
        let operations: Vec<Destination> = catalog
            .iter()
            .filter(|e| e.group == GROUP_LPG_OPERATIONS)
            .map(|e| e.destination)
            .collect();
        let general: Vec<Destination> = catalog
            .iter()
            .filter(|e| e.group == GROUP_GENERAL)
            .map(|e| e.destination)
            .collect();

        assert_eq!(sales, vec![Destination::PointOfSale, Destination::DailySales]);
        assert_eq!(
            operations,
            vec![
                Destination::CylinderInventory,
                Destination::BulkSupplyLog,
                Destination::SafetyChecklists
            ]
        );
        assert_eq!(general, vec![Destination::Inventory, Destination::Expenses]);
    }
}
