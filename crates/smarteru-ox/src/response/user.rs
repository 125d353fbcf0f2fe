use serde::{Deserialize, Serialize};

use super::{FromInfo, vocabulary};
use crate::{
    SmarterURequestError,
    model::{AuthenticationType, CustomField, SendEmailTo, SendMailTo, Status},
    xml::XmlNode,
};

/// What `createUser` and `updateUser` echo back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserIdentity {
    pub email: String,
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
}

impl FromInfo for UserIdentity {
    fn from_info(info: Option<XmlNode<'_, '_>>) -> Result<Self, SmarterURequestError> {
        Ok(info
            .map(|info| Self {
                email: info.child_text("Email"),
                employee_id: info.child_text("EmployeeID"),
            })
            .unwrap_or_default())
    }
}

/// A user as returned by `getUser`.
///
/// Supervisors, roles, custom fields, venues and wages are not read from the
/// response and are always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    #[serde(rename = "ID")]
    pub id: String,
    pub email: String,
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    pub created_date: String,
    pub modified_date: String,
    pub given_name: String,
    pub surname: String,
    pub language: String,
    pub allow_feedback: bool,
    pub status: Option<Status>,
    pub authentication_type: Option<AuthenticationType>,
    pub timezone: String,
    pub alternate_email: String,
    pub home_group: String,
    pub organization: String,
    pub title: String,
    pub division: String,
    pub supervisors: Vec<String>,
    pub phone_primary: String,
    pub phone_alternate: String,
    pub phone_mobile: String,
    pub send_mail_to: Option<SendMailTo>,
    pub send_email_to: Option<SendEmailTo>,
    pub fax: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub postal_code: String,
    pub province: String,
    pub country: String,
    /// Read from `<SendWeeklyTaskReminder>`.
    pub learner_notifications: bool,
    /// Read from `<SendWeeklyProgressSummary>`.
    pub supervisor_notifications: bool,
    pub teams: Vec<String>,
    pub roles: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub venues: Vec<String>,
    pub wages: Vec<String>,
    pub receive_notifications: bool,
}

impl FromInfo for UserRecord {
    fn from_info(info: Option<XmlNode<'_, '_>>) -> Result<Self, SmarterURequestError> {
        let user = info.and_then(|info| info.child("User")).ok_or_else(|| {
            SmarterURequestError::UnexpectedResponse("getUser response has no <Info><User>".into())
        })?;

        Ok(Self {
            id: user.child_text("ID"),
            email: user.child_text("Email"),
            employee_id: user.child_text("EmployeeID"),
            created_date: user.child_text("CreatedDate"),
            modified_date: user.child_text("ModifiedDate"),
            given_name: user.child_text("GivenName"),
            surname: user.child_text("Surname"),
            language: user.child_text("Language"),
            allow_feedback: user.child_flag("AllowFeedback"),
            status: vocabulary(user, "Status"),
            authentication_type: vocabulary(user, "AuthenticationType"),
            timezone: user.child_text("Timezone"),
            alternate_email: user.child_text("AlternateEmail"),
            home_group: user.child_text("HomeGroup"),
            organization: user.child_text("Organization"),
            title: user.child_text("Title"),
            division: user.child_text("Division"),
            supervisors: Vec::new(),
            phone_primary: user.child_text("PhonePrimary"),
            phone_alternate: user.child_text("PhoneAlternate"),
            phone_mobile: user.child_text("PhoneMobile"),
            send_mail_to: vocabulary(user, "SendMailTo"),
            send_email_to: vocabulary(user, "SendEmailTo"),
            fax: user.child_text("Fax"),
            address1: user.child_text("Address1"),
            address2: user.child_text("Address2"),
            city: user.child_text("City"),
            postal_code: user.child_text("PostalCode"),
            province: user.child_text("Province"),
            country: user.child_text("Country"),
            learner_notifications: user.child_flag("SendWeeklyTaskReminder"),
            supervisor_notifications: user.child_flag("SendWeeklyProgressSummary"),
            teams: user.child_list("Teams", "Team"),
            roles: Vec::new(),
            custom_fields: Vec::new(),
            venues: Vec::new(),
            wages: Vec::new(),
            receive_notifications: user.child_flag("ReceiveNotifications"),
        })
    }
}

/// One row of a `listUsers` page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummary {
    #[serde(rename = "ID")]
    pub id: String,
    pub email: String,
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    pub given_name: String,
    pub surname: String,
    /// `"{given_name} {surname}"`.
    pub name: String,
    pub status: Option<Status>,
    pub title: String,
    pub division: String,
    pub home_group: String,
    pub created_date: String,
    pub modified_date: String,
    pub teams: Vec<String>,
}

impl UserSummary {
    fn read(user: XmlNode<'_, '_>) -> Self {
        let given_name = user.child_text("GivenName");
        let surname = user.child_text("Surname");
        Self {
            id: user.child_text("ID"),
            email: user.child_text("Email"),
            employee_id: user.child_text("EmployeeID"),
            name: format!("{given_name} {surname}"),
            given_name,
            surname,
            status: vocabulary(user, "Status"),
            title: user.child_text("Title"),
            division: user.child_text("Division"),
            home_group: user.child_text("HomeGroup"),
            created_date: user.child_text("CreatedDate"),
            modified_date: user.child_text("ModifiedDate"),
            teams: user.child_list("Teams", "Team"),
        }
    }
}

impl FromInfo for Vec<UserSummary> {
    fn from_info(info: Option<XmlNode<'_, '_>>) -> Result<Self, SmarterURequestError> {
        Ok(info
            .and_then(|info| info.child("Users"))
            .map(|users| users.elements().into_iter().map(UserSummary::read).collect())
            .unwrap_or_default())
    }
}
