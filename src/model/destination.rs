// 🧭 Destination - Closed enumeration of navigable screens
//
// A Destination names a screen/view a user can navigate to. It is defined
// once, copied by value everywhere, and never constructed at runtime.
// `Destination::ALL` is the single source of truth for "every screen that
// exists" - superuser permission sets are derived from it so a newly added
// variant is automatically reachable for Proprietor/Admin.

use serde::{Deserialize, Serialize};

// ============================================================================
// DESTINATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Landing screen, always visible to any authenticated user
    Home,

    // ------------------------------------------------------------------
    // Sales & money movement
    // ------------------------------------------------------------------
    PointOfSale,
    DailySales,
    Receipts,

    // ------------------------------------------------------------------
    // Stock & back office (shared across verticals)
    // ------------------------------------------------------------------
    Inventory,
    Expenses,
    Reports,
    Suppliers,
    Customers,

    // ------------------------------------------------------------------
    // Hospital vertical
    // ------------------------------------------------------------------
    Appointments,
    Patients,
    LabResults,

    // ------------------------------------------------------------------
    // LPG station vertical
    // ------------------------------------------------------------------
    CylinderInventory,
    BulkSupplyLog,
    SafetyChecklists,

    // ------------------------------------------------------------------
    // Supermarket vertical
    // ------------------------------------------------------------------
    StockTransfers,
    PriceBook,
    Promotions,

    // ------------------------------------------------------------------
    // Education vertical
    // ------------------------------------------------------------------
    Classes,
    Timetable,
    AddTimetableEntry,
    StudentRecords,
    FeesBilling,
    /// Education's replacement for the common UserAccounts screen
    StaffManagement,

    // ------------------------------------------------------------------
    // Real estate vertical
    // ------------------------------------------------------------------
    Properties,
    Tenants,
    Leases,
    MaintenanceRequests,

    // ------------------------------------------------------------------
    // System screens (common to every vertical)
    // ------------------------------------------------------------------
    Security,
    UserAccounts,
    Settings,
    /// Account self-service, rendered in the fixed trailing block
    ChangePassword,
}

impl Destination {
    /// Every member of the enumeration, in declaration order.
    ///
    /// Superuser permission sets and the dead-destination audit iterate this
    /// slice instead of hand-maintained literals.
    pub const ALL: [Destination; 32] = [
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
        Destination::AddTimetableEntry,
        Destination::StudentRecords,
        Destination::FeesBilling,
        Destination::StaffManagement,
        Destination::Properties,
        Destination::Tenants,
        Destination::Leases,
        Destination::MaintenanceRequests,
        Destination::Security,
        Destination::UserAccounts,
        Destination::Settings,
        Destination::ChangePassword,
    ];

    /// Stable identifier used by the CLI and the REST API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::PointOfSale => "point-of-sale",
            Destination::DailySales => "daily-sales",
            Destination::Receipts => "receipts",
            Destination::Inventory => "inventory",
            Destination::Expenses => "expenses",
            Destination::Reports => "reports",
            Destination::Suppliers => "suppliers",
            Destination::Customers => "customers",
            Destination::Appointments => "appointments",
            Destination::Patients => "patients",
            Destination::LabResults => "lab-results",
            Destination::CylinderInventory => "cylinder-inventory",
            Destination::BulkSupplyLog => "bulk-supply-log",
            Destination::SafetyChecklists => "safety-checklists",
            Destination::StockTransfers => "stock-transfers",
            Destination::PriceBook => "price-book",
            Destination::Promotions => "promotions",
            Destination::Classes => "classes",
            Destination::Timetable => "timetable",
            Destination::AddTimetableEntry => "add-timetable-entry",
            Destination::StudentRecords => "student-records",
            Destination::FeesBilling => "fees-billing",
            Destination::StaffManagement => "staff-management",
            Destination::Properties => "properties",
            Destination::Tenants => "tenants",
            Destination::Leases => "leases",
            Destination::MaintenanceRequests => "maintenance-requests",
            Destination::Security => "security",
            Destination::UserAccounts => "user-accounts",
            Destination::Settings => "settings",
            Destination::ChangePassword => "change-password",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
