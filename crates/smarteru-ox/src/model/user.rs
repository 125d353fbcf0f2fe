use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::{GroupPermissions, Status};

/// Who receives the user's email notifications.
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
pub enum SendEmailTo {
    Supervisor,
    /// The user's own address.
    #[strum(serialize = "Self")]
    #[serde(rename = "Self")]
    SelfAddress,
    /// The user's alternate email address.
    Alternate,
}

/// Which postal address physical mail goes to.
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
pub enum SendMailTo {
    Personal,
    Organization,
}

/// How the user signs in.
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
pub enum AuthenticationType {
    SmarterU,
    External,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

/// A SmarterU learner account.
///
/// Either `email` or `employee_id` has to be present for the server to
/// identify the account. `custom_fields`, `roles`, `venues` and `wages` are
/// held but never sent: the request writer leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[builder(into)]
    pub id: Option<String>,
    #[builder(into)]
    pub email: Option<String>,
    #[builder(into)]
    pub employee_id: Option<String>,
    #[builder(into)]
    pub given_name: Option<String>,
    #[builder(into)]
    pub surname: Option<String>,
    #[builder(into)]
    pub password: Option<String>,
    #[builder(into)]
    pub timezone: Option<String>,
    #[builder(default)]
    pub learner_notifications: bool,
    #[builder(default)]
    pub supervisor_notifications: bool,
    pub send_email_to: Option<SendEmailTo>,
    #[builder(into)]
    pub alternate_email: Option<String>,
    pub authentication_type: Option<AuthenticationType>,

    #[builder(default)]
    pub supervisors: Vec<String>,
    #[builder(into)]
    pub organization: Option<String>,
    #[builder(default)]
    pub teams: Vec<String>,
    #[builder(default)]
    pub custom_fields: Vec<CustomField>,
    #[builder(into)]
    pub language: Option<String>,
    #[builder(default)]
    pub status: Status,
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub division: Option<String>,
    #[builder(default)]
    pub allow_feedback: bool,
    #[builder(into)]
    pub phone_primary: Option<String>,
    #[builder(into)]
    pub phone_alternate: Option<String>,
    #[builder(into)]
    pub phone_mobile: Option<String>,
    #[builder(into)]
    pub fax: Option<String>,
    #[builder(into)]
    pub website: Option<String>,
    #[builder(into)]
    pub address1: Option<String>,
    #[builder(into)]
    pub address2: Option<String>,
    #[builder(into)]
    pub city: Option<String>,
    #[builder(into)]
    pub province: Option<String>,
    #[builder(into)]
    pub country: Option<String>,
    #[builder(into)]
    pub postal_code: Option<String>,
    pub send_mail_to: Option<SendMailTo>,
    #[builder(default)]
    pub roles: Vec<String>,
    #[builder(default = true)]
    pub receive_notifications: bool,
    #[builder(into)]
    pub home_group: Option<String>,

    #[builder(default)]
    pub groups: Vec<GroupPermissions>,
    #[builder(default)]
    pub venues: Vec<String>,
    #[builder(default)]
    pub wages: Vec<String>,
}
