#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Client for the SmarterU learning-management API.
//!
//! Every call builds one XML package, posts it as the `package` form field
//! and classifies the `<SmarterU>` document that comes back:
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use smarteru_ox::{GetUserQuery, SmarterU};
//!
//! let client = SmarterU::new("account-key", "user-key");
//! let user = client.get_user(&GetUserQuery::by_email("learner@example.com")).await?;
//! println!("{} {}", user.response.given_name, user.response.surname);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod internal;
pub mod model;
pub mod request;
pub mod response;
pub mod transport;
mod xml;

pub use error::SmarterURequestError;
pub use model::{
    AuthenticationType, CustomField, Group, GroupIdentifier, GroupPermissions, LearningModule,
    Permission, PermissionAction, SendEmailTo, SendMailTo, Status, SubscriptionVariant, User,
};
pub use request::{
    Credentials, DateRangeTag, GetUserGroupsQuery, GetUserQuery, ListUsersQuery, MatchTag,
    MatchType, Method, SortField, SortOrder, UserIdentifier, UserStatusFilter,
};
pub use response::{ApiResponse, UserGroup, UserIdentity, UserRecord, UserSummary};
pub use transport::{HttpTransport, MockTransport, ReqwestTransport, SandboxTransport};

use bon::Builder;
use core::fmt;
#[cfg(feature = "leaky-bucket")]
use leaky_bucket::RateLimiter;
use std::sync::Arc;

use crate::{internal::SmarterURequestHelper, request::Package};

const BASE_URL: &str = "https://api.smarteru.com/apiv2/";

fn default_transport() -> Arc<dyn HttpTransport> {
    Arc::new(ReqwestTransport::default())
}

#[derive(Clone, Builder)]
pub struct SmarterU {
    #[builder(into)]
    pub(crate) account_api: Option<String>,
    #[builder(into)]
    pub(crate) user_api: Option<String>,
    #[builder(default = default_transport())]
    pub(crate) transport: Arc<dyn HttpTransport>,
    #[cfg(feature = "leaky-bucket")]
    pub(crate) leaky_bucket: Option<Arc<RateLimiter>>,
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
}

impl Default for SmarterU {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SmarterU {
    /// Create a client holding both API keys.
    pub fn new(account_api: impl Into<String>, user_api: impl Into<String>) -> Self {
        Self::builder()
            .account_api(account_api)
            .user_api(user_api)
            .build()
    }

    pub fn load_from_env() -> Result<Self, std::env::VarError> {
        let account_api = std::env::var("SMARTERU_ACCOUNT_API_KEY")?;
        let user_api = std::env::var("SMARTERU_USER_API_KEY")?;
        Ok(Self::new(account_api, user_api))
    }

    pub fn account_api(&self) -> Option<&str> {
        self.account_api.as_deref()
    }

    pub fn user_api(&self) -> Option<&str> {
        self.user_api.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Keys queries fall back to when they carry none of their own.
    pub fn credentials(&self) -> Credentials {
        Credentials::from_options(self.account_api.clone(), self.user_api.clone())
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> SmarterURequestHelper {
        let helper = SmarterURequestHelper::new(Arc::clone(&self.transport), &self.base_url);
        #[cfg(feature = "leaky-bucket")]
        let helper = helper.with_leaky_bucket(self.leaky_bucket.clone());
        helper
    }
}

impl SmarterU {
    /// Create a user. The response echoes the email and employee id the
    /// account was stored under.
    pub async fn create_user(
        &self,
        user: &User,
    ) -> Result<ApiResponse<UserIdentity>, SmarterURequestError> {
        let package = user.to_xml(&self.credentials(), Method::CreateUser)?;
        self.request_helper().call(Method::CreateUser, package).await
    }

    /// Fetch one user's full record.
    ///
    /// Keys on the query win over the client's.
    pub async fn get_user(
        &self,
        query: &GetUserQuery,
    ) -> Result<ApiResponse<UserRecord>, SmarterURequestError> {
        let package = query.package(&self.credentials())?;
        self.request_helper().call(Method::GetUser, package).await
    }

    /// Fetch one page of users matching the query's filters.
    pub async fn list_users(
        &self,
        query: &ListUsersQuery,
    ) -> Result<ApiResponse<Vec<UserSummary>>, SmarterURequestError> {
        let package = query.package(&self.credentials())?;
        self.request_helper().call(Method::ListUsers, package).await
    }

    /// Update an existing user, identified by its email or employee id.
    pub async fn update_user(
        &self,
        user: &User,
    ) -> Result<ApiResponse<UserIdentity>, SmarterURequestError> {
        let package = user.to_xml(&self.credentials(), Method::UpdateUser)?;
        self.request_helper().call(Method::UpdateUser, package).await
    }

    /// Fetch the groups a user belongs to, with the permissions held in each.
    pub async fn get_user_groups(
        &self,
        query: &GetUserGroupsQuery,
    ) -> Result<ApiResponse<Vec<UserGroup>>, SmarterURequestError> {
        let package = query.package(&self.credentials())?;
        self.request_helper().call(Method::GetUserGroups, package).await
    }
}

impl fmt::Debug for SmarterU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("SmarterU")
            .field("account_api", &redact(&self.account_api))
            .field("user_api", &redact(&self.user_api))
            .field("transport", &self.transport)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
