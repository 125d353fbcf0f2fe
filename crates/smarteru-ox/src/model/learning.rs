use bon::Builder;
use serde::{Deserialize, Serialize};

/// A course offered to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LearningModule {
    #[builder(into)]
    pub id: String,
    #[builder(default)]
    pub allow_self_enroll: bool,
    #[builder(default)]
    pub auto_enroll: bool,
}

/// A subscription plan attached to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionVariant {
    #[builder(into)]
    pub id: String,
    #[builder(default)]
    pub requires_credits: bool,
}
