use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::{Credentials, DateRangeTag, MatchTag, Method, Package};
use crate::{SmarterURequestError, xml::XmlWriter};

/// Largest page the API will return.
pub const MAX_PAGE_SIZE: u32 = 1000;

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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    Name,
    EmployeeId,
}

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
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Which accounts a listing includes.
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
pub enum UserStatusFilter {
    Active,
    Inactive,
    #[default]
    All,
}

fn capped_page_size(page_size: Option<u32>) -> Option<u32> {
    page_size
        .filter(|size| *size > 0)
        .map(|size| size.min(MAX_PAGE_SIZE))
}

/// A paged, filtered `listUsers` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUsersQuery {
    credentials: Credentials,
    page: u32,
    page_size: Option<u32>,
    sort_field: Option<SortField>,
    sort_order: Option<SortOrder>,
    email: Option<MatchTag>,
    employee_id: Option<MatchTag>,
    name: Option<MatchTag>,
    group_name: Option<String>,
    user_status: UserStatusFilter,
    created_date: Option<DateRangeTag>,
    modified_date: Option<DateRangeTag>,
    teams: Vec<String>,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon::bon]
impl ListUsersQuery {
    /// Pages start at 1; a page of 0 is read as 1. Page sizes above
    /// [`MAX_PAGE_SIZE`] are capped and a page size of 0 is left unset.
    #[builder]
    pub fn new(
        #[builder(default)] credentials: Credentials,
        #[builder(default = 1)] page: u32,
        page_size: Option<u32>,
        sort_field: Option<SortField>,
        sort_order: Option<SortOrder>,
        email: Option<MatchTag>,
        employee_id: Option<MatchTag>,
        name: Option<MatchTag>,
        #[builder(into)] group_name: Option<String>,
        #[builder(default)] user_status: UserStatusFilter,
        created_date: Option<DateRangeTag>,
        modified_date: Option<DateRangeTag>,
        #[builder(default)] teams: Vec<String>,
    ) -> Self {
        Self {
            credentials,
            page: page.max(1),
            page_size: capped_page_size(page_size),
            sort_field,
            sort_order,
            email,
            employee_id,
            name,
            group_name,
            user_status,
            created_date,
            modified_date,
            teams,
        }
    }
}

impl ListUsersQuery {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Advance to the following page, keeping every filter.
    #[must_use]
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.set_page(self.page.saturating_add(1));
        next
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// A size of 0 clears the page size so the server default applies.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = capped_page_size(Some(page_size));
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_field
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    pub fn email(&self) -> Option<&MatchTag> {
        self.email.as_ref()
    }

    pub fn employee_id(&self) -> Option<&MatchTag> {
        self.employee_id.as_ref()
    }

    pub fn name(&self) -> Option<&MatchTag> {
        self.name.as_ref()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn user_status(&self) -> UserStatusFilter {
        self.user_status
    }

    pub fn created_date(&self) -> Option<&DateRangeTag> {
        self.created_date.as_ref()
    }

    pub fn modified_date(&self) -> Option<&DateRangeTag> {
        self.modified_date.as_ref()
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Render the package using only the keys on this query.
    pub fn to_xml(&self) -> Result<String, SmarterURequestError> {
        self.package(&Credentials::default())
    }

    fn has_user_identifier_filter(&self) -> bool {
        self.email.is_some() || self.employee_id.is_some() || self.name.is_some()
    }

    fn write_filters(&self, w: &mut XmlWriter) -> Result<(), SmarterURequestError> {
        if self.has_user_identifier_filter() {
            w.nested("Users", |w| {
                w.nested("UserIdentifier", |w| {
                    let filters = [
                        ("Email", &self.email),
                        ("EmployeeID", &self.employee_id),
                        ("Name", &self.name),
                    ];
                    for (tag, filter) in filters {
                        if let Some(filter) = filter {
                            filter.write(w, tag)?;
                        }
                    }
                    Ok(())
                })?;
                Ok(())
            })?;
        }
        if let Some(group_name) = self.group_name.as_deref().filter(|g| !g.is_empty()) {
            w.element("GroupName", group_name)?;
        }
        w.element("UserStatus", <&str>::from(self.user_status))?;
        if let Some(created) = &self.created_date {
            created.write(w, "Created")?;
        }
        if let Some(modified) = &self.modified_date {
            modified.write(w, "Modified")?;
        }
        if !self.teams.is_empty() {
            w.list("Teams", "TeamName", &self.teams)?;
        }
        Ok(())
    }
}

impl Package for ListUsersQuery {
    fn method(&self) -> Method {
        Method::ListUsers
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn write_parameters(&self, w: &mut XmlWriter) -> Result<(), SmarterURequestError> {
        w.nested("User", |w| {
            w.element("Page", &self.page.to_string())?;
            if let Some(page_size) = self.page_size {
                w.element("PageSize", &page_size.to_string())?;
            }
            if let Some(sort_field) = self.sort_field {
                w.element("SortField", <&str>::from(sort_field))?;
            }
            if let Some(sort_order) = self.sort_order {
                w.element("SortOrder", <&str>::from(sort_order))?;
            }
            w.nested("Filters", |w| self.write_filters(w))?;
            Ok(())
        })?;
        Ok(())
    }
}
