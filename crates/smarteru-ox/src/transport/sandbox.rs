//! An in-process stand-in for the SmarterU endpoint.
//!
//! Packages are checked the way the live API checks them and rejected with
//! the same `SU:xx` error codes. Registered keys and methods decide what
//! passes; a passing package is answered with the `<Info>` registered for
//! its method.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::{
    SmarterURequestError,
    xml::{XmlNode, XmlWriter},
};

/// Rejection codes, as the live API reports them.
const NO_POST_DATA: (&str, &str) = ("SU:01", "No POST data detected");
const NO_PACKAGE: (&str, &str) = ("SU:02", "Package parameter not found");
const NOT_XML: (&str, &str) = ("SU:03", "Package data is not properly formatted XML");
const NO_ROOT: (&str, &str) = ("SU:04", "SmarterU root tag not found in Package data");
const NO_PARAMETERS_CONTENT: (&str, &str) = ("SU:09", "Parameters tag contains no information");
const INVALID_KEYS: (&str, &str) = ("SU:10", "User and Account API keys are invalid");
const UNKNOWN_METHOD: (&str, &str) = ("SU:11", "Requested method does not exist");

/// Envelope tags that must be present, with their codes.
const REQUIRED_TAGS: [(&str, &str); 4] = [
    ("AccountAPI", "SU:05"),
    ("UserAPI", "SU:06"),
    ("Method", "SU:07"),
    ("Parameters", "SU:08"),
];

#[derive(Debug, Clone, Default)]
pub struct SandboxTransport {
    account_api_keys: HashSet<String>,
    user_api_keys: HashSet<String>,
    /// Method name to the raw XML placed inside `<Info>`.
    methods: HashMap<String, String>,
}

impl SandboxTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_account_api_key(mut self, key: impl Into<String>) -> Self {
        self.account_api_keys.insert(key.into());
        self
    }

    #[must_use]
    pub fn with_user_api_key(mut self, key: impl Into<String>) -> Self {
        self.user_api_keys.insert(key.into());
        self
    }

    /// Accept `method` and answer it with `info` inside `<Info>`.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>, info: impl Into<String>) -> Self {
        self.methods.insert(method.into(), info.into());
        self
    }

    /// Check a request and build the body the live API would send back.
    pub fn answer(&self, request: &HttpRequest) -> Result<String, SmarterURequestError> {
        if request.form.is_empty() {
            return failed(NO_POST_DATA);
        }
        let Some(package) = request.package() else {
            return failed(NO_PACKAGE);
        };
        let Ok(doc) = roxmltree::Document::parse(package) else {
            return failed(NOT_XML);
        };
        let root = XmlNode::from(doc.root_element());
        if root.name() != "SmarterU" {
            return failed(NO_ROOT);
        }
        for (tag, code) in REQUIRED_TAGS {
            if !root.has_child(tag) {
                return failed((code, format!("{tag} tag not found in Package data").as_str()));
            }
        }
        let has_parameters = root
            .child("Parameters")
            .is_some_and(|parameters| !parameters.elements().is_empty());
        if !has_parameters {
            return failed(NO_PARAMETERS_CONTENT);
        }
        if !self.account_api_keys.contains(&root.child_text("AccountAPI"))
            || !self.user_api_keys.contains(&root.child_text("UserAPI"))
        {
            return failed(INVALID_KEYS);
        }
        let Some(info) = self.methods.get(&root.child_text("Method")) else {
            return failed(UNKNOWN_METHOD);
        };

        Ok(format!(
            "<SmarterU><Result>Success</Result><Info>{info}</Info><Errors></Errors></SmarterU>"
        ))
    }
}

/// A `Failed` envelope carrying one error.
fn failed((id, message): (&str, &str)) -> Result<String, SmarterURequestError> {
    let mut w = XmlWriter::new()?;
    w.nested("SmarterU", |w| {
        w.element("Result", "Failed")?;
        w.empty("Info")?;
        w.nested("Errors", |w| {
            w.nested("Error", |w| {
                w.element("ErrorID", id)?;
                w.element("ErrorMessage", message)?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    w.into_string()
}

#[async_trait]
impl HttpTransport for SandboxTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SmarterURequestError> {
        Ok(HttpResponse::ok(self.answer(&request)?))
    }
}
