//! Domain records exchanged with the SmarterU API.

pub mod group;
pub mod learning;
pub mod permission;
pub mod user;

pub use group::Group;
pub use learning::{LearningModule, SubscriptionVariant};
pub use permission::{GroupIdentifier, GroupPermissions, Permission, PermissionAction};
pub use user::{AuthenticationType, CustomField, SendEmailTo, SendMailTo, User};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Lifecycle state shared by users and groups.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmarterURequestError;

    #[test]
    fn status_accepts_only_the_two_wire_values() {
        assert_eq!("Active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!("Inactive".parse::<Status>().unwrap(), Status::Inactive);

        let err: SmarterURequestError = "ACTIVE".parse::<Status>().unwrap_err().into();
        assert!(matches!(err, SmarterURequestError::InvalidArgument(_)));
    }
}
