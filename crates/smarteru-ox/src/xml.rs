//! Thin wrappers over the XML libraries.
//!
//! Writing goes through `quick-xml`, reading through `roxmltree`. Call sites
//! never see either library: the writer exposes tag/text helpers and the
//! reader always hands back repeated children as a `Vec`, whatever their
//! count, so nothing above this module has to care whether the server sent
//! one `<Group>` or twenty.

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::SmarterURequestError;

type Result<T> = std::result::Result<T, SmarterURequestError>;

fn write_error(err: impl std::fmt::Display) -> SmarterURequestError {
    SmarterURequestError::Xml(err.to_string())
}

/// Incremental writer for request documents.
pub(crate) struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Start a document with the `<?xml version="1.0"?>` declaration.
    pub(crate) fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
            .map_err(write_error)?;
        Ok(Self { writer })
    }

    pub(crate) fn start(&mut self, tag: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(write_error)?;
        Ok(self)
    }

    pub(crate) fn end(&mut self, tag: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(write_error)?;
        Ok(self)
    }

    /// `<tag>text</tag>`, with `text` escaped. An empty `text` still produces
    /// an open/close pair.
    pub(crate) fn element(&mut self, tag: &str, text: &str) -> Result<&mut Self> {
        self.start(tag)?;
        if !text.is_empty() {
            self.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)?;
        }
        self.end(tag)
    }

    /// `<tag/>`
    pub(crate) fn empty(&mut self, tag: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(tag)))
            .map_err(write_error)?;
        Ok(self)
    }

    /// Wrap whatever `body` writes in `<tag>...</tag>`.
    pub(crate) fn nested<F>(&mut self, tag: &str, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.start(tag)?;
        body(self)?;
        self.end(tag)
    }

    /// `<container><item>a</item><item>b</item></container>`
    pub(crate) fn list<S: AsRef<str>>(
        &mut self,
        container: &str,
        item: &str,
        values: &[S],
    ) -> Result<&mut Self> {
        self.nested(container, |w| {
            for value in values {
                w.element(item, value.as_ref())?;
            }
            Ok(())
        })
    }

    pub(crate) fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

/// Read-only view over one element of a parsed response.
#[derive(Clone, Copy)]
pub(crate) struct XmlNode<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> From<roxmltree::Node<'a, 'input>> for XmlNode<'a, 'input> {
    fn from(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }
}

impl<'a, 'input> XmlNode<'a, 'input> {
    pub(crate) fn name(&self) -> &str {
        self.node.tag_name().name()
    }

    /// First child element called `name`.
    pub(crate) fn child(&self, name: &str) -> Option<Self> {
        self.node
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == name)
            .map(Self::from)
    }

    pub(crate) fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Every child element called `name`, in document order.
    pub(crate) fn children(&self, name: &str) -> Vec<Self> {
        self.node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == name)
            .map(Self::from)
            .collect()
    }

    /// Every child element, in document order.
    pub(crate) fn elements(&self) -> Vec<Self> {
        self.node
            .children()
            .filter(roxmltree::Node::is_element)
            .map(Self::from)
            .collect()
    }

    /// Trimmed text content of this element.
    pub(crate) fn text(&self) -> String {
        self.node
            .children()
            .filter(roxmltree::Node::is_text)
            .filter_map(|n| n.text())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Text of the child called `name`, or an empty string when absent.
    pub(crate) fn child_text(&self, name: &str) -> String {
        self.child(name).map(|c| c.text()).unwrap_or_default()
    }

    /// Texts of `<container><item/>...</container>`. Empty when the
    /// container is absent.
    pub(crate) fn child_list(&self, container: &str, item: &str) -> Vec<String> {
        self.child(container)
            .map(|c| c.children(item).iter().map(XmlNode::text).collect())
            .unwrap_or_default()
    }

    /// Child text read as a SmarterU flag.
    pub(crate) fn child_flag(&self, name: &str) -> bool {
        parse_flag(&self.child_text(name))
    }
}

/// Wire form of a boolean: `"1"` or `"0"`.
pub(crate) fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Inverse of [`flag`], also accepting `true` in any case.
pub(crate) fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_escapes_text_and_keeps_order() {
        let mut w = XmlWriter::new().unwrap();
        w.nested("Root", |w| {
            w.element("A", "x & y")?;
            w.element("B", "")?;
            w.empty("C")?;
            w.list("Teams", "Team", &["t1", "t2"])?;
            Ok(())
        })
        .unwrap();
        let xml = w.into_string().unwrap();

        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?><Root><A>x &amp; y</A><B></B><C/>\
             <Teams><Team>t1</Team><Team>t2</Team></Teams></Root>"
        );
    }

    #[test]
    fn children_is_a_list_for_any_cardinality() {
        let one = roxmltree::Document::parse("<R><G>a</G></R>").unwrap();
        let three = roxmltree::Document::parse("<R><G>a</G><X/><G>b</G><G>c</G></R>").unwrap();
        let none = roxmltree::Document::parse("<R/>").unwrap();

        let texts = |doc: &roxmltree::Document| -> Vec<String> {
            XmlNode::from(doc.root_element())
                .children("G")
                .iter()
                .map(XmlNode::text)
                .collect()
        };

        assert_eq!(texts(&one), vec!["a"]);
        assert_eq!(texts(&three), vec!["a", "b", "c"]);
        assert!(texts(&none).is_empty());
    }

    #[test]
    fn missing_children_read_as_empty() {
        let doc = roxmltree::Document::parse("<R><Teams>\n</Teams></R>").unwrap();
        let root = XmlNode::from(doc.root_element());

        assert_eq!(root.child_text("Nope"), "");
        assert!(root.child_list("Teams", "Team").is_empty());
        assert!(root.child_list("Absent", "Team").is_empty());
        assert!(!root.child_flag("Nope"));
    }

    #[test]
    fn flags_round_trip() {
        assert_eq!(flag(true), "1");
        assert_eq!(flag(false), "0");
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
