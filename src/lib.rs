// POS Navigation Shell - Core Library
// Role/business-type access control and navigation resolution for the
// multi-industry point-of-sale suite. Exposes all modules for use in the
// CLI, the API server, and tests.

pub mod catalog;
pub mod model;
pub mod permissions;
pub mod resolver;
pub mod validation;

// Only compiled when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use catalog::{
    catalog_for, effective_common_entries, group_order_for, NavigationEntry,
    CHANGE_PASSWORD_ENTRY, HOME_ENTRY,
};
pub use model::{BusinessType, Destination, Role, RoleParseError};
pub use permissions::PermissionTable;
pub use resolver::{NavSection, NavigationResolver, ResolvedNavigation};
pub use validation::{
    CatalogSource, ConfigValidator, ShippedTables, ValidationError, ValidationResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
