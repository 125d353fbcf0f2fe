//! Response documents.
//!
//! Every response is a `<SmarterU>` document holding `<Result>`, `<Info>` and
//! `<Errors>`. [`parse_response`] classifies the result and hands `<Info>` to
//! the operation's [`FromInfo`] reader.

pub mod group;
pub mod user;

pub use group::UserGroup;
pub use user::{UserIdentity, UserRecord, UserSummary};

use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{SmarterURequestError, xml::XmlNode};

/// A successful call: the operation's payload plus any non-fatal errors the
/// API reported next to it, keyed by error id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    pub response: T,
    pub errors: BTreeMap<String, String>,
}

impl<T> ApiResponse<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_response(self) -> T {
        self.response
    }
}

/// Reads an operation's payload out of `<Info>`.
pub(crate) trait FromInfo: Sized {
    fn from_info(info: Option<XmlNode<'_, '_>>) -> Result<Self, SmarterURequestError>;
}

/// One `<Error>` entry, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ErrorEntry {
    id: String,
    message: String,
}

fn read_errors(root: XmlNode<'_, '_>) -> Vec<ErrorEntry> {
    root.child("Errors")
        .map(|errors| {
            errors
                .elements()
                .iter()
                .map(|error| ErrorEntry {
                    id: error.child_text("ErrorID"),
                    message: error.child_text("ErrorMessage"),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn fatal_message(errors: &[ErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.id, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and classify a response body.
///
/// `Failed` becomes [`SmarterURequestError::Api`]. Anything else is read as a
/// success and its errors are returned as data.
pub(crate) fn parse_response<T: FromInfo>(
    body: &str,
) -> Result<ApiResponse<T>, SmarterURequestError> {
    let doc = roxmltree::Document::parse(body)?;
    let root = XmlNode::from(doc.root_element());
    if root.name() != "SmarterU" {
        return Err(SmarterURequestError::Xml(format!(
            "expected a SmarterU root element, found <{}>",
            root.name()
        )));
    }

    let result = root.child_text("Result");
    let errors = read_errors(root);

    if result == "Failed" {
        log::debug!("SmarterU reported a failure with {} error(s)", errors.len());
        return Err(SmarterURequestError::Api(fatal_message(&errors)));
    }
    if result != "Success" {
        log::warn!("Unrecognised SmarterU result {result:?}, reading it as a success");
    }
    for error in &errors {
        log::warn!("SmarterU returned a non-fatal error {}: {}", error.id, error.message);
    }

    let response = T::from_info(root.child("Info"))?;
    Ok(ApiResponse {
        response,
        errors: errors.into_iter().map(|e| (e.id, e.message)).collect(),
    })
}

/// Parse a closed-vocabulary value. Empty text is `None`; so is anything
/// outside the vocabulary, with a warning.
pub(crate) fn vocabulary<T: FromStr>(node: XmlNode<'_, '_>, name: &str) -> Option<T> {
    let text = node.child_text(name);
    if text.is_empty() {
        return None;
    }
    let parsed = text.parse().ok();
    if parsed.is_none() {
        log::warn!("Ignoring unrecognised <{name}> value {text:?}");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects the `<Info>` child names, enough to see what was handed on.
    #[derive(Debug, PartialEq)]
    struct InfoTags(Vec<String>);

    impl FromInfo for InfoTags {
        fn from_info(info: Option<XmlNode<'_, '_>>) -> Result<Self, SmarterURequestError> {
            Ok(Self(
                info.map(|i| i.elements().iter().map(|e| e.name().to_string()).collect())
                    .unwrap_or_default(),
            ))
        }
    }

    const FAILED: &str = "<SmarterU><Result>Failed</Result><Info/><Errors>\
        <Error><ErrorID>Error1</ErrorID><ErrorMessage>Testing</ErrorMessage></Error>\
        <Error><ErrorID>Error2</ErrorID><ErrorMessage>123</ErrorMessage></Error>\
        </Errors></SmarterU>";

    #[test]
    fn failed_result_joins_errors_in_document_order() {
        let err = parse_response::<InfoTags>(FAILED).unwrap_err();
        assert_eq!(err, SmarterURequestError::Api("Error1: Testing, Error2: 123".into()));
        assert_eq!(err.to_string(), "Error1: Testing, Error2: 123");
    }

    #[test]
    fn failed_without_errors_is_still_fatal() {
        let body = "<SmarterU><Result>Failed</Result></SmarterU>";
        let err = parse_response::<InfoTags>(body).unwrap_err();
        assert_eq!(err, SmarterURequestError::Api(String::new()));
    }

    #[test]
    fn success_with_errors_returns_them_as_data() {
        let body = "<SmarterU><Result>Success</Result><Info><Email>a@b.c</Email></Info>\
            <Errors><Error><ErrorID>SU:99</ErrorID>\
            <ErrorMessage>Odd</ErrorMessage></Error></Errors>\
            </SmarterU>";
        let response = parse_response::<InfoTags>(body).unwrap();

        assert_eq!(response.response, InfoTags(vec!["Email".into()]));
        assert!(response.has_errors());
        assert_eq!(response.errors.get("SU:99").map(String::as_str), Some("Odd"));
    }

    #[test]
    fn success_without_errors_has_empty_map() {
        let body = "<SmarterU><Result>Success</Result><Info/><Errors></Errors></SmarterU>";
        let response = parse_response::<InfoTags>(body).unwrap();
        assert!(response.errors.is_empty());
    }

    #[test]
    fn malformed_bodies_are_xml_errors() {
        let err = parse_response::<InfoTags>("not xml at all").unwrap_err();
        assert!(matches!(err, SmarterURequestError::Xml(_)));

        let body = "<Other><Result>Success</Result></Other>";
        let err = parse_response::<InfoTags>(body).unwrap_err();
        assert!(matches!(err, SmarterURequestError::Xml(_)));
    }

    #[test]
    fn serializes_with_wire_keys() {
        let response = ApiResponse {
            response: 1,
            errors: BTreeMap::from([("E".to_string(), "m".to_string())]),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"Response": 1, "Errors": {"E": "m"}}));
    }
}
