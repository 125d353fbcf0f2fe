//! Request documents.
//!
//! Every request shares one envelope:
//!
//! ```xml
//! <SmarterU>
//!   <AccountAPI>..</AccountAPI>
//!   <UserAPI>..</UserAPI>
//!   <Method>..</Method>
//!   <Parameters>..</Parameters>
//! </SmarterU>
//! ```
//!
//! The operation-specific submodules only write what goes inside
//! `<Parameters>`.

pub mod list_users;
pub mod lookup;
pub mod tags;
pub mod user;

pub use list_users::{ListUsersQuery, MAX_PAGE_SIZE, SortField, SortOrder, UserStatusFilter};
pub use lookup::{GetUserGroupsQuery, GetUserQuery, UserIdentifier};
pub use tags::{DateRangeTag, MatchTag, MatchType, WIRE_DATE_FORMAT};

use core::fmt;

use strum::{Display, EnumString, IntoStaticStr};

use crate::{SmarterURequestError, xml::XmlWriter};

pub(crate) const ACCOUNT_KEY_MISSING: &str = "Account API key must be set before creating a query.";
pub(crate) const USER_KEY_MISSING: &str = "User API key must be set before creating a query.";

/// Remote procedure names. The spelling is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Method {
    CreateUser,
    GetUser,
    ListUsers,
    UpdateUser,
    GetUserGroups,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The two API keys carried in every request body.
///
/// Both are optional so a query can carry its own keys and fall back to the
/// client's: see [`Credentials::resolve`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    account_api: Option<String>,
    user_api: Option<String>,
}

impl Credentials {
    pub fn new(account_api: impl Into<String>, user_api: impl Into<String>) -> Self {
        Self {
            account_api: Some(account_api.into()),
            user_api: Some(user_api.into()),
        }
    }

    /// Keys that may each be absent; absent or empty keys fall back at
    /// resolution time.
    pub fn from_options(account_api: Option<String>, user_api: Option<String>) -> Self {
        Self {
            account_api,
            user_api,
        }
    }

    #[must_use]
    pub fn with_account_api(mut self, account_api: impl Into<String>) -> Self {
        self.account_api = Some(account_api.into());
        self
    }

    #[must_use]
    pub fn with_user_api(mut self, user_api: impl Into<String>) -> Self {
        self.user_api = Some(user_api.into());
        self
    }

    pub fn account_api(&self) -> Option<&str> {
        non_empty(self.account_api.as_deref())
    }

    pub fn user_api(&self) -> Option<&str> {
        non_empty(self.user_api.as_deref())
    }

    /// Pick the keys to send: ours when set and non-empty, otherwise
    /// `fallback`'s. The account key is checked before the user key.
    pub fn resolve<'a>(
        &'a self,
        fallback: &'a Credentials,
    ) -> Result<ApiKeys<'a>, SmarterURequestError> {
        let account = self
            .account_api()
            .or_else(|| fallback.account_api())
            .ok_or_else(|| SmarterURequestError::MissingValue(ACCOUNT_KEY_MISSING.to_string()))?;
        let user = self
            .user_api()
            .or_else(|| fallback.user_api())
            .ok_or_else(|| SmarterURequestError::MissingValue(USER_KEY_MISSING.to_string()))?;
        Ok(ApiKeys { account, user })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: Option<&str>| key.map(|_| "[REDACTED]");
        f.debug_struct("Credentials")
            .field("account_api", &redact(self.account_api()))
            .field("user_api", &redact(self.user_api()))
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Keys resolved for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKeys<'a> {
    pub account: &'a str,
    pub user: &'a str,
}

/// Write the envelope around whatever `parameters` puts in `<Parameters>`.
pub(crate) fn write_package<F>(
    keys: ApiKeys<'_>,
    method: Method,
    parameters: F,
) -> Result<String, SmarterURequestError>
where
    F: FnOnce(&mut XmlWriter) -> Result<(), SmarterURequestError>,
{
    let mut w = XmlWriter::new()?;
    w.nested("SmarterU", |w| {
        w.element("AccountAPI", keys.account)?;
        w.element("UserAPI", keys.user)?;
        w.element("Method", method.as_str())?;
        w.nested("Parameters", parameters)?;
        Ok(())
    })?;
    w.into_string()
}

/// A query that knows how to render itself as a complete package.
pub(crate) trait Package {
    fn method(&self) -> Method;

    fn credentials(&self) -> &Credentials;

    /// Check query-specific preconditions. Runs after the keys resolved.
    fn validate(&self) -> Result<(), SmarterURequestError> {
        Ok(())
    }

    fn write_parameters(&self, w: &mut XmlWriter) -> Result<(), SmarterURequestError>;

    fn package(&self, fallback: &Credentials) -> Result<String, SmarterURequestError> {
        let keys = self.credentials().resolve(fallback)?;
        self.validate()?;
        write_package(keys, self.method(), |w| self.write_parameters(w))
    }
}
