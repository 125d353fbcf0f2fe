//! Single-user lookups: `getUser` and `getUserGroups`.

use serde::{Deserialize, Serialize};

use super::{Credentials, Method, Package};
use crate::{SmarterURequestError, xml::XmlWriter};

/// The one attribute a lookup identifies its user by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserIdentifier {
    Id(String),
    Email(String),
    EmployeeId(String),
}

impl UserIdentifier {
    fn tag(&self) -> &'static str {
        match self {
            Self::Id(_) => "ID",
            Self::Email(_) => "Email",
            Self::EmployeeId(_) => "EmployeeID",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Id(v) | Self::Email(v) | Self::EmployeeId(v) => v,
        }
    }
}

macro_rules! user_lookup_query {
    ($(#[$doc:meta])* $name:ident, $method:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            /// Keys sent with this query. Unset keys fall back to the client's.
            pub credentials: Credentials,
            identifier: Option<UserIdentifier>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn by_id(id: impl Into<String>) -> Self {
                Self::with_identifier(UserIdentifier::Id(id.into()))
            }

            pub fn by_email(email: impl Into<String>) -> Self {
                Self::with_identifier(UserIdentifier::Email(email.into()))
            }

            pub fn by_employee_id(employee_id: impl Into<String>) -> Self {
                Self::with_identifier(UserIdentifier::EmployeeId(employee_id.into()))
            }

            pub fn with_identifier(identifier: UserIdentifier) -> Self {
                Self {
                    credentials: Credentials::default(),
                    identifier: Some(identifier),
                }
            }

            #[must_use]
            pub fn with_credentials(mut self, credentials: Credentials) -> Self {
                self.credentials = credentials;
                self
            }

            /// Look the user up by id, replacing any email or employee id.
            pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
                self.identifier = Some(UserIdentifier::Id(id.into()));
                self
            }

            /// Look the user up by email, replacing any id or employee id.
            pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
                self.identifier = Some(UserIdentifier::Email(email.into()));
                self
            }

            /// Look the user up by employee id, replacing any id or email.
            pub fn set_employee_id(&mut self, employee_id: impl Into<String>) -> &mut Self {
                self.identifier = Some(UserIdentifier::EmployeeId(employee_id.into()));
                self
            }

            pub fn identifier(&self) -> Option<&UserIdentifier> {
                self.identifier.as_ref()
            }

            pub fn id(&self) -> Option<&str> {
                match &self.identifier {
                    Some(UserIdentifier::Id(v)) => Some(v.as_str()),
                    _ => None,
                }
            }

            pub fn email(&self) -> Option<&str> {
                match &self.identifier {
                    Some(UserIdentifier::Email(v)) => Some(v.as_str()),
                    _ => None,
                }
            }

            pub fn employee_id(&self) -> Option<&str> {
                match &self.identifier {
                    Some(UserIdentifier::EmployeeId(v)) => Some(v.as_str()),
                    _ => None,
                }
            }

            /// Render the package using only the keys on this query.
            pub fn to_xml(&self) -> Result<String, SmarterURequestError> {
                self.package(&Credentials::default())
            }
        }

        impl Package for $name {
            fn method(&self) -> Method {
                $method
            }

            fn credentials(&self) -> &Credentials {
                &self.credentials
            }

            fn validate(&self) -> Result<(), SmarterURequestError> {
                if self.identifier.is_none() {
                    return Err(SmarterURequestError::MissingValue(format!(
                        "User identifier must be specified when creating a {}.",
                        stringify!($name)
                    )));
                }
                Ok(())
            }

            fn write_parameters(&self, w: &mut XmlWriter) -> Result<(), SmarterURequestError> {
                w.nested("User", |w| {
                    if let Some(identifier) = &self.identifier {
                        w.element(identifier.tag(), identifier.value())?;
                    }
                    Ok(())
                })?;
                Ok(())
            }
        }
    };
}

user_lookup_query!(
    /// Fetch one user's full record.
    GetUserQuery,
    Method::GetUser
);

user_lookup_query!(
    /// Fetch the groups one user belongs to, with their permissions.
    GetUserGroupsQuery,
    Method::GetUserGroups
);
