use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LearningModule, Status, SubscriptionVariant};
use crate::SmarterURequestError;

/// A SmarterU group: a set of users sharing learning modules and
/// subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub group_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub home_group_message: Option<String>,
    #[builder(default)]
    pub notification_emails: Vec<String>,
    pub user_help_override_default: Option<bool>,
    pub user_help_enabled: Option<bool>,
    #[builder(default)]
    pub user_help_email: Vec<String>,
    #[builder(into)]
    pub user_help_text: Option<String>,
    #[builder(default)]
    pub tags: Vec<String>,
    pub user_limit_enabled: Option<bool>,
    pub user_limit_amount: Option<u32>,
    #[builder(default)]
    pub learning_module_count: u32,
    #[builder(default)]
    pub user_count: u32,
    #[builder(default)]
    pub status: Status,
    #[builder(default)]
    pub users: Vec<String>,
    #[builder(default)]
    pub learning_modules: Vec<LearningModule>,
    #[builder(default)]
    pub subscription_variants: Vec<SubscriptionVariant>,
    #[builder(into)]
    pub dashboard_set_id: Option<String>,
}

impl Group {
    /// Set the module count from an untrusted signed value.
    pub fn set_learning_module_count(&mut self, count: i64) -> Result<(), SmarterURequestError> {
        self.learning_module_count = non_negative("learning module count", count)?;
        Ok(())
    }

    /// Set the user count from an untrusted signed value.
    pub fn set_user_count(&mut self, count: i64) -> Result<(), SmarterURequestError> {
        self.user_count = non_negative("user count", count)?;
        Ok(())
    }
}

fn non_negative(what: &str, count: i64) -> Result<u32, SmarterURequestError> {
    u32::try_from(count).map_err(|_| {
        SmarterURequestError::InvalidArgument(format!("{what} must be >= 0, got {count}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_reject_negative_values() {
        let mut group = Group::builder().name("My Group").build();

        group.set_user_count(12).unwrap();
        assert_eq!(group.user_count, 12);

        let err = group.set_learning_module_count(-1).unwrap_err();
        assert_eq!(
            err,
            SmarterURequestError::InvalidArgument(
                "learning module count must be >= 0, got -1".into()
            )
        );
        assert_eq!(group.learning_module_count, 0);
    }

    #[test]
    fn containers_start_empty() {
        let group = Group::builder()
            .name("My Group")
            .learning_modules(vec![LearningModule::builder().id("m1").auto_enroll(true).build()])
            .build();

        assert_eq!(group.status, Status::Active);
        assert!(group.users.is_empty());
        assert!(group.subscription_variants.is_empty());
        assert!(group.learning_modules[0].auto_enroll);
        assert!(!group.learning_modules[0].allow_self_enroll);
    }
}
