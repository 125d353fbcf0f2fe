use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{SmarterURequestError, xml::XmlWriter};

/// `dd/mm/yyyy`, the only date format the list filters accept.
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

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
pub enum MatchType {
    Exact,
    Contains,
}

/// A `(match type, value)` filter on one user attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchTag {
    pub match_type: MatchType,
    pub value: String,
}

impl MatchTag {
    pub fn new(match_type: MatchType, value: impl Into<String>) -> Self {
        Self {
            match_type,
            value: value.into(),
        }
    }

    pub fn exact(value: impl Into<String>) -> Self {
        Self::new(MatchType::Exact, value)
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(MatchType::Contains, value)
    }

    /// `<tag><MatchType>..</MatchType><Value>..</Value></tag>`
    pub(crate) fn write(&self, w: &mut XmlWriter, tag: &str) -> Result<(), SmarterURequestError> {
        w.nested(tag, |w| {
            w.element("MatchType", <&str>::from(self.match_type))?;
            w.element("Value", &self.value)?;
            Ok(())
        })?;
        Ok(())
    }
}

/// An inclusive date window used by the created/modified filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeTag {
    date_from: NaiveDate,
    date_to: NaiveDate,
}

impl DateRangeTag {
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self { date_from, date_to }
    }

    pub fn date_from(&self) -> NaiveDate {
        self.date_from
    }

    pub fn date_to(&self) -> NaiveDate {
        self.date_to
    }

    /// Start of the window in wire format.
    pub fn formatted_from(&self) -> String {
        self.date_from.format(WIRE_DATE_FORMAT).to_string()
    }

    /// End of the window in wire format.
    pub fn formatted_to(&self) -> String {
        self.date_to.format(WIRE_DATE_FORMAT).to_string()
    }

    /// `<{prefix}Date><{prefix}DateFrom/><{prefix}DateTo/></{prefix}Date>`
    pub(crate) fn write(
        &self,
        w: &mut XmlWriter,
        prefix: &str,
    ) -> Result<(), SmarterURequestError> {
        w.nested(&format!("{prefix}Date"), |w| {
            w.element(&format!("{prefix}DateFrom"), &self.formatted_from())?;
            w.element(&format!("{prefix}DateTo"), &self.formatted_to())?;
            Ok(())
        })?;
        Ok(())
    }
}
