use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Whether a permission is being handed out or taken away.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum PermissionAction {
    Grant,
    Deny,
}

/// An `(action, code)` pair such as `Grant MANAGE_USERS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Permission {
    pub action: PermissionAction,
    pub code: String,
}

impl Permission {
    pub fn new(action: PermissionAction, code: impl Into<String>) -> Self {
        Self {
            action,
            code: code.into(),
        }
    }

    pub fn grant(code: impl Into<String>) -> Self {
        Self::new(PermissionAction::Grant, code)
    }

    pub fn deny(code: impl Into<String>) -> Self {
        Self::new(PermissionAction::Deny, code)
    }
}

/// How a group is referred to. A group is addressed either by its name or by
/// its id, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupIdentifier {
    Name(String),
    Id(String),
}

/// A user's membership in one group together with the permissions granted
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPermissions {
    identifier: GroupIdentifier,
    permissions: Vec<Permission>,
}

impl GroupPermissions {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            identifier: GroupIdentifier::Name(name.into()),
            permissions: Vec::new(),
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            identifier: GroupIdentifier::Id(id.into()),
            permissions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.push(permission);
        self
    }

    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions.extend(permissions);
        self
    }

    /// Address the group by name, dropping any id.
    pub fn set_group_name(&mut self, name: impl Into<String>) {
        self.identifier = GroupIdentifier::Name(name.into());
    }

    /// Address the group by id, dropping any name.
    pub fn set_group_id(&mut self, id: impl Into<String>) {
        self.identifier = GroupIdentifier::Id(id.into());
    }

    pub fn identifier(&self) -> &GroupIdentifier {
        &self.identifier
    }

    pub fn group_name(&self) -> Option<&str> {
        match &self.identifier {
            GroupIdentifier::Name(name) => Some(name.as_str()),
            GroupIdentifier::Id(_) => None,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match &self.identifier {
            GroupIdentifier::Id(id) => Some(id.as_str()),
            GroupIdentifier::Name(_) => None,
        }
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn set_permissions(&mut self, permissions: Vec<Permission>) {
        self.permissions = permissions;
    }
}
