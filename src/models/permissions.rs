//! Role-to-capability resolution for staff accounts.

use serde::{Deserialize, Serialize};

/// Dashboard role stored on the settings profile.
///
/// Unrecognized values deserialize to [`Role::Member`], the least-privileged
/// tier, so a bad stored value can never widen access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[serde(other)]
    Member,
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

/// Capability flags derived from a role and the primary-admin marker.
///
/// Derived, never stored: recomputed fresh on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub can_add_members: bool,
    pub can_edit_members: bool,
    pub can_remove_members: bool,
    pub can_edit_settings: bool,
    pub can_change_roles: bool,
    pub is_primary_admin: bool,
}

impl Capabilities {
    /// Resolve the capability set for a role.
    ///
    /// Total function: every role maps to a fixed row of the table, and
    /// `is_primary` passes through independently of role.
    pub fn resolve(role: Role, is_primary: bool) -> Self {
        match role {
            Role::Admin => Self {
                can_add_members: true,
                can_edit_members: true,
                can_remove_members: true,
                can_edit_settings: true,
                can_change_roles: true,
                is_primary_admin: is_primary,
            },
            Role::Manager => Self {
                can_add_members: true,
                can_edit_members: true,
                can_remove_members: false,
                can_edit_settings: true,
                can_change_roles: false,
                is_primary_admin: is_primary,
            },
            Role::Member => Self {
                can_add_members: false,
                can_edit_members: false,
                can_remove_members: false,
                can_edit_settings: false,
                can_change_roles: false,
                is_primary_admin: is_primary,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_everything() {
        let caps = Capabilities::resolve(Role::Admin, true);
        assert!(caps.can_add_members);
        assert!(caps.can_edit_members);
        assert!(caps.can_remove_members);
        assert!(caps.can_edit_settings);
        assert!(caps.can_change_roles);
        assert!(caps.is_primary_admin);
    }

    #[test]
    fn manager_row() {
        let caps = Capabilities::resolve(Role::Manager, false);
        assert!(caps.can_add_members);
        assert!(caps.can_edit_members);
        assert!(caps.can_edit_settings);
        assert!(!caps.can_remove_members);
        assert!(!caps.can_change_roles);
        assert!(!caps.is_primary_admin);
    }

    #[test]
    fn member_gets_nothing() {
        let caps = Capabilities::resolve(Role::Member, false);
        assert_eq!(
            caps,
            Capabilities {
                can_add_members: false,
                can_edit_members: false,
                can_remove_members: false,
                can_edit_settings: false,
                can_change_roles: false,
                is_primary_admin: false,
            }
        );
    }

    #[test]
    fn primary_flag_is_independent_of_role() {
        assert!(Capabilities::resolve(Role::Member, true).is_primary_admin);
        assert!(!Capabilities::resolve(Role::Admin, false).is_primary_admin);
    }

    #[test]
    fn unrecognized_role_falls_back_to_member() {
        let role: Role = serde_json::from_str("\"superuser\"").unwrap();
        assert_eq!(role, Role::Member);
        let caps = Capabilities::resolve(role, false);
        assert!(!caps.can_add_members);
    }

    #[test]
    fn role_round_trip() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn capabilities_serialize_camel_case() {
        let json = serde_json::to_value(Capabilities::resolve(Role::Manager, false)).unwrap();
        assert_eq!(json["canAddMembers"], true);
        assert_eq!(json["canRemoveMembers"], false);
        assert_eq!(json["isPrimaryAdmin"], false);
    }
}
