use serde::{Deserialize, Serialize};

use super::FromInfo;
use crate::{SmarterURequestError, xml::XmlNode};

/// One group a user belongs to, as returned by `getUserGroups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserGroup {
    pub name: String,
    pub identifier: String,
    pub is_home_group: bool,
    /// Permission codes the user holds in this group.
    pub permissions: Vec<String>,
}

impl UserGroup {
    fn read(group: XmlNode<'_, '_>) -> Self {
        Self {
            name: group.child_text("Name"),
            identifier: group.child_text("Identifier"),
            is_home_group: group.child_flag("IsHomeGroup"),
            permissions: group
                .child("Permissions")
                .map(|p| p.elements().iter().map(XmlNode::text).collect())
                .unwrap_or_default(),
        }
    }
}

impl FromInfo for Vec<UserGroup> {
    fn from_info(info: Option<XmlNode<'_, '_>>) -> Result<Self, SmarterURequestError> {
        Ok(info
            .and_then(|info| info.child("UserGroups"))
            .map(|groups| groups.children("Group").into_iter().map(UserGroup::read).collect())
            .unwrap_or_default())
    }
}
