//! `createUser` / `updateUser` payloads.
//!
//! `<Parameters><User>` always holds `Info`, `Profile`, `Groups`, `Venues`
//! and `Wages`, in that order. `Info` fields are always written; `Profile`
//! fields are written only when they carry a value.

use super::{Credentials, Method, write_package};
use crate::{
    SmarterURequestError,
    model::{GroupIdentifier, GroupPermissions, User},
    xml::{XmlWriter, flag},
};

/// One entry of the `<Profile>` table.
enum ProfileValue<'a> {
    Text(Option<&'a str>),
    Flag(bool),
    List { item: &'static str, values: &'a [String] },
}

impl ProfileValue<'_> {
    fn is_present(&self) -> bool {
        match self {
            Self::Text(value) => value.is_some_and(|v| !v.is_empty()),
            Self::Flag(value) => *value,
            Self::List { values, .. } => !values.is_empty(),
        }
    }

    fn write(&self, w: &mut XmlWriter, tag: &str) -> Result<(), SmarterURequestError> {
        match self {
            Self::Text(value) => {
                w.element(tag, value.unwrap_or_default())?;
            }
            Self::Flag(value) => {
                w.element(tag, flag(*value))?;
            }
            Self::List { item, values } => {
                w.list(tag, item, *values)?;
            }
        }
        Ok(())
    }
}

/// `<Profile>` children in wire order. Custom fields and roles are not part
/// of the table and are never sent.
fn profile_fields(user: &User) -> [(&'static str, ProfileValue<'_>); 22] {
    use ProfileValue::{Flag, List, Text};

    [
        ("Supervisors", List { item: "Supervisor", values: &user.supervisors }),
        ("Organization", Text(user.organization.as_deref())),
        ("Teams", List { item: "Team", values: &user.teams }),
        ("Language", Text(user.language.as_deref())),
        ("Status", Text(Some(<&str>::from(user.status)))),
        ("Title", Text(user.title.as_deref())),
        ("Division", Text(user.division.as_deref())),
        ("AllowFeedback", Flag(user.allow_feedback)),
        ("PhonePrimary", Text(user.phone_primary.as_deref())),
        ("PhoneAlternate", Text(user.phone_alternate.as_deref())),
        ("PhoneMobile", Text(user.phone_mobile.as_deref())),
        ("Fax", Text(user.fax.as_deref())),
        ("Website", Text(user.website.as_deref())),
        ("Address1", Text(user.address1.as_deref())),
        ("Address2", Text(user.address2.as_deref())),
        ("City", Text(user.city.as_deref())),
        ("Province", Text(user.province.as_deref())),
        ("Country", Text(user.country.as_deref())),
        ("PostalCode", Text(user.postal_code.as_deref())),
        ("SendMailTo", Text(user.send_mail_to.map(<&str>::from))),
        ("ReceiveNotifications", Flag(user.receive_notifications)),
        ("HomeGroup", Text(user.home_group.as_deref())),
    ]
}

fn write_info(user: &User, w: &mut XmlWriter) -> Result<(), SmarterURequestError> {
    let text = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

    w.element("Email", &text(&user.email))?;
    w.element("EmployeeID", &text(&user.employee_id))?;
    w.element("GivenName", &text(&user.given_name))?;
    w.element("Surname", &text(&user.surname))?;
    w.element("Password", &text(&user.password))?;
    if let Some(timezone) = user.timezone.as_deref().filter(|t| !t.is_empty()) {
        w.element("Timezone", timezone)?;
    }
    w.element("LearnerNotifications", flag(user.learner_notifications))?;
    w.element("SupervisorNotifications", flag(user.supervisor_notifications))?;
    w.element(
        "SendEmailTo",
        user.send_email_to.map(<&str>::from).unwrap_or_default(),
    )?;
    w.element("AlternateEmail", &text(&user.alternate_email))?;
    w.element(
        "AuthenticationType",
        user.authentication_type.map(<&str>::from).unwrap_or_default(),
    )?;
    Ok(())
}

fn write_profile(user: &User, w: &mut XmlWriter) -> Result<(), SmarterURequestError> {
    for (tag, value) in profile_fields(user) {
        if value.is_present() {
            value.write(w, tag)?;
        }
    }
    Ok(())
}

fn write_group(group: &GroupPermissions, w: &mut XmlWriter) -> Result<(), SmarterURequestError> {
    w.nested("Group", |w| {
        let (tag, value) = match group.identifier() {
            GroupIdentifier::Name(name) => ("GroupName", name),
            GroupIdentifier::Id(id) => ("GroupID", id),
        };
        if !value.is_empty() {
            w.element(tag, value)?;
        }
        for permission in group.permissions() {
            w.nested("Permission", |w| {
                w.element("Action", <&str>::from(permission.action))?;
                w.element("Code", &permission.code)?;
                Ok(())
            })?;
        }
        Ok(())
    })?;
    Ok(())
}

impl User {
    /// Render a `createUser` or `updateUser` package.
    ///
    /// Any other method is rejected with `InvalidArgument`.
    pub fn to_xml(
        &self,
        credentials: &Credentials,
        method: Method,
    ) -> Result<String, SmarterURequestError> {
        let no_fallback = Credentials::default();
        let keys = credentials.resolve(&no_fallback)?;
        if !matches!(method, Method::CreateUser | Method::UpdateUser) {
            return Err(SmarterURequestError::InvalidArgument(format!(
                "a User can only be sent with createUser or updateUser, not {method}"
            )));
        }
        write_package(keys, method, |w| {
            w.nested("User", |w| {
                w.nested("Info", |w| write_info(self, w))?;
                w.nested("Profile", |w| write_profile(self, w))?;
                w.nested("Groups", |w| {
                    for group in &self.groups {
                        write_group(group, w)?;
                    }
                    Ok(())
                })?;
                w.empty("Venues")?;
                w.empty("Wages")?;
                Ok(())
            })?;
            Ok(())
        })
    }
}
