// 🧮 Navigation Resolver - The one runtime computation
//
// resolve(business, role) merges the vertical's catalog with the effective
// common entries, filters by the role's permission set, stable-partitions by
// group, and emits groups in the vertical's display order. Pure given its
// inputs: it reads only the immutable tables and returns a fresh value each
// call, so repeated and concurrent invocation need no coordination.

use crate::catalog::{
    catalog_for, effective_common_entries, group_order_for, NavigationEntry,
    CHANGE_PASSWORD_ENTRY, HOME_ENTRY,
};
use crate::model::{BusinessType, Destination, Role};
use crate::permissions::PermissionTable;
use serde::Serialize;

// ============================================================================
// RESOLVED OUTPUT
// ============================================================================

/// One labeled section of the shell. Exists only when non-empty: the
/// resolver never constructs a section without members, so a group whose
/// entries were all filtered out simply has no header to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub group: &'static str,
    pub entries: Vec<NavigationEntry>,
}

/// The grouped, ordered, permission-filtered navigation structure handed to
/// the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNavigation {
    /// Always present, always first, regardless of permission filtering.
    pub home: NavigationEntry,

    /// Sections in the vertical's group order; empty groups omitted.
    pub sections: Vec<NavSection>,

    /// Fixed trailing block (account self-service), outside the
    /// group-order-driven sections.
    pub trailing: Vec<NavigationEntry>,
}

// ============================================================================
// RESOLVER
// ============================================================================

pub struct NavigationResolver {
    permissions: PermissionTable,
}

impl NavigationResolver {
    /// Resolver over the shipped permission table.
    pub fn new() -> Self {
        Self::with_permissions(PermissionTable::new())
    }

    pub fn with_permissions(permissions: PermissionTable) -> Self {
        NavigationResolver { permissions }
    }

    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }

    /// Compute the navigation shell for one (vertical, role) pair.
    pub fn resolve(&self, business: BusinessType, role: Role) -> ResolvedNavigation {
        let permitted = self.permissions.permissions_for(role);

        // Working sequence: vertical catalog then effective common entries,
        // source order preserved. Entries the role may not reach are
        // silently dropped.
        let filtered: Vec<NavigationEntry> = catalog_for(business)
            .iter()
            .chain(effective_common_entries(business))
            .filter(|e| permitted.contains(&e.destination))
            .copied()
            .collect();

        // Stable partition: one pass per group in display order keeps each
        // group's entries in first-seen working-sequence order.
        let mut sections = Vec::new();
        for &group in group_order_for(business) {
            let entries: Vec<NavigationEntry> = filtered
                .iter()
                .filter(|e| e.group == group)
                .copied()
                .collect();
            if !entries.is_empty() {
                sections.push(NavSection { group, entries });
            }
        }

        let mut trailing = Vec::new();
        if permitted.contains(&Destination::ChangePassword) {
            trailing.push(CHANGE_PASSWORD_ENTRY);
        }

        ResolvedNavigation {
            home: HOME_ENTRY,
            sections,
            trailing,
        }
    }
}

impl Default for NavigationResolver {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GROUP_CLINICAL, GROUP_GENERAL, GROUP_SALES, GROUP_SYSTEM};

    fn destinations(section: &NavSection) -> Vec<Destination> {
        section.entries.iter().map(|e| e.destination).collect()
    }

    #[test]
    fn test_home_is_first_for_every_pair() {
        let resolver = NavigationResolver::new();
        for business in BusinessType::ALL {
            for role in Role::ALL {
                let nav = resolver.resolve(business, role);
                assert_eq!(
                    nav.home.destination,
                    Destination::Home,
                    "{:?}/{:?}",
                    business,
                    role
                );
            }
        }
    }

    #[test]
    fn test_most_restrictive_role_still_gets_home() {
        let resolver = NavigationResolver::new();
        let nav = resolver.resolve(BusinessType::Education, Role::NonTeaching);
        assert_eq!(nav.home.destination, Destination::Home);
        assert!(nav.sections.is_empty());
        assert_eq!(nav.trailing, vec![CHANGE_PASSWORD_ENTRY]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = NavigationResolver::new();
        for business in BusinessType::ALL {
            for role in Role::ALL {
                assert_eq!(
                    resolver.resolve(business, role),
                    resolver.resolve(business, role),
                    "{:?}/{:?}",
                    business,
                    role
                );
            }
        }
    }

    #[test]
    fn test_sections_are_never_empty() {
        let resolver = NavigationResolver::new();
        for business in BusinessType::ALL {
            for role in Role::ALL {
                for section in resolver.resolve(business, role).sections {
                    assert!(
                        !section.entries.is_empty(),
                        "{:?}/{:?} emitted empty group {:?}",
                        business,
                        role,
                        section.group
                    );
                }
            }
        }
    }

    #[test]
    fn test_sections_follow_the_vertical_group_order() {
        let resolver = NavigationResolver::new();
        for business in BusinessType::ALL {
            let order = group_order_for(business);
            for role in Role::ALL {
                let nav = resolver.resolve(business, role);
                let positions: Vec<usize> = nav
                    .sections
                    .iter()
                    .map(|s| order.iter().position(|g| *g == s.group).unwrap())
                    .collect();
                let mut sorted = positions.clone();
                sorted.sort_unstable();
                assert_eq!(positions, sorted, "{:?}/{:?}", business, role);
            }
        }
    }

    #[test]
    fn test_education_manager_gets_staff_management_not_user_accounts() {
        let resolver = NavigationResolver::new();
        let nav = resolver.resolve(BusinessType::Education, Role::Manager);
        let all: Vec<Destination> = nav
            .sections
            .iter()
            .flat_map(|s| s.entries.iter().map(|e| e.destination))
            .collect();
        assert!(all.contains(&Destination::StaffManagement));
        assert!(!all.contains(&Destination::UserAccounts));
    }

    #[test]
    fn test_general_manager_gets_user_accounts_not_staff_management() {
        let resolver = NavigationResolver::new();
        let nav = resolver.resolve(BusinessType::General, Role::Manager);
        let all: Vec<Destination> = nav
            .sections
            .iter()
            .flat_map(|s| s.entries.iter().map(|e| e.destination))
            .collect();
        assert!(all.contains(&Destination::UserAccounts));
        assert!(!all.contains(&Destination::StaffManagement));

        // Manager lacks Security/Settings, so System holds UserAccounts alone.
        let system = nav
            .sections
            .iter()
            .find(|s| s.group == GROUP_SYSTEM)
            .expect("System section");
        assert_eq!(destinations(system), vec![Destination::UserAccounts]);
    }

    #[test]
    fn test_hospital_cashier_has_no_clinical_header() {
        let resolver = NavigationResolver::new();
        let nav = resolver.resolve(BusinessType::Hospital, Role::Cashier);
        assert!(
            nav.sections.iter().all(|s| s.group != GROUP_CLINICAL),
            "Clinical header rendered for a role with no clinical access"
        );
    }

    #[test]
    fn test_lpg_station_attendant_scenario() {
        let resolver = NavigationResolver::new();
        let nav = resolver.resolve(BusinessType::LpgStation, Role::Attendant);

        // Home alone up front.
        assert_eq!(nav.home.destination, Destination::Home);

        // Sales: [PointOfSale, DailySales], then General: [Inventory]
        // (Expenses filtered out). No LPG Operations, no System.
        assert_eq!(nav.sections.len(), 2);
        assert_eq!(nav.sections[0].group, GROUP_SALES);
        assert_eq!(
            destinations(&nav.sections[0]),
            vec![Destination::PointOfSale, Destination::DailySales]
        );
        assert_eq!(nav.sections[1].group, GROUP_GENERAL);
        assert_eq!(destinations(&nav.sections[1]), vec![Destination::Inventory]);

        // ChangePassword lives in the fixed trailing block, never in a
        // group-order-driven section.
        assert_eq!(nav.trailing, vec![CHANGE_PASSWORD_ENTRY]);
        assert!(nav
            .sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .all(|e| e.destination != Destination::ChangePassword));
    }

    #[test]
    fn test_superuser_sees_every_catalog_entry() {
        let resolver = NavigationResolver::new();
        for business in BusinessType::ALL {
            let nav = resolver.resolve(business, Role::Proprietor);
            let shown: usize = nav.sections.iter().map(|s| s.entries.len()).sum();
            let expected =
                catalog_for(business).len() + effective_common_entries(business).len();
            assert_eq!(shown, expected, "{:?}", business);
        }
    }
}
