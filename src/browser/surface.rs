//! DOM implementation of [`PanelSurface`].
//!
//! SVG markup comes from a remote module, so it is parsed inside an inert
//! document first and stripped of inline handlers before it is adopted into
//! the page.

use wasm_bindgen::JsCast;
use web_sys::{Document, DomParser, Element, HtmlElement, SupportedType};

use crate::browser::dom::create;
use crate::consts::{ERROR_NODE_CLASS, ERROR_NODE_TEXT};
use crate::error::WidgetError;
use crate::qr::PanelSurface;
use crate::svg::{ParserChain, is_event_handler_attr};

pub struct DomSurface<'a> {
    doc: &'a Document,
    qr: &'a HtmlElement,
    info: &'a HtmlElement,
}

impl<'a> DomSurface<'a> {
    #[must_use]
    pub fn new(doc: &'a Document, qr: &'a HtmlElement, info: &'a HtmlElement) -> Self {
        Self { doc, qr, info }
    }

    fn append_text_div(&self, parent: &HtmlElement, class: Option<&str>, text: &str) -> Result<(), WidgetError> {
        let div: HtmlElement = create(self.doc, "div")?;
        if let Some(class) = class {
            div.set_class_name(class);
        }
        div.set_text_content(Some(text));
        parent.append_child(&div)?;
        Ok(())
    }
}

/// `innerHTML` on a scratch element owned by an inert HTML document.
fn parse_fragment(markup: &str) -> Result<Element, WidgetError> {
    let page = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::MissingElement("document".to_owned()))?;
    let inert = page.implementation()?.create_html_document()?;
    let scratch = inert.create_element("div")?;
    scratch.set_inner_html(markup);
    scratch
        .query_selector("svg")?
        .ok_or_else(|| WidgetError::Parse("fragment contains no <svg>".to_owned()))
}

/// `DOMParser` with `image/svg+xml`.
fn parse_xml(markup: &str) -> Result<Element, WidgetError> {
    let parsed = DomParser::new()?.parse_from_string(markup, SupportedType::ImageSvgXml)?;
    if let Some(err) = parsed.query_selector("parsererror")? {
        let detail = err.text_content().unwrap_or_default();
        return Err(WidgetError::Parse(format!("xml parser error: {detail}")));
    }
    parsed
        .document_element()
        .ok_or_else(|| WidgetError::Parse("empty svg document".to_owned()))
}

fn strip_handlers(el: &Element) {
    let names = el.get_attribute_names();
    for name in names.iter().filter_map(|n| n.as_string()) {
        if is_event_handler_attr(&name) {
            if let Err(e) = el.remove_attribute(&name) {
                log::warn!("removing {name} failed: {e:?}");
            }
        }
    }
}

impl PanelSurface for DomSurface<'_> {
    type Node = Element;

    fn parse_svg(&self, markup: &str) -> Result<Element, WidgetError> {
        let node = ParserChain::new()
            .with("fragment", parse_fragment)
            .with("xml", parse_xml)
            .parse(markup)?;
        let tag = node.tag_name();
        if !tag.eq_ignore_ascii_case("svg") {
            return Err(WidgetError::Parse(format!("root element is <{tag}>, not <svg>")));
        }
        Ok(node)
    }

    fn strip_event_handlers(&self, node: &Element) {
        strip_handlers(node);
        let descendants = match node.query_selector_all("*") {
            Ok(list) => list,
            Err(e) => {
                log::warn!("listing svg descendants failed: {e:?}");
                return;
            }
        };
        for i in 0..descendants.length() {
            let Some(child) = descendants.item(i) else {
                continue;
            };
            if let Ok(child) = child.dyn_into::<Element>() {
                strip_handlers(&child);
            }
        }
    }

    fn replace_qr(&self, node: Element) -> Result<(), WidgetError> {
        self.qr.set_inner_html("");
        self.qr.append_child(&node)?;
        Ok(())
    }

    fn show_qr_error(&self) {
        self.qr.set_inner_html("");
        if let Err(e) = self.append_text_div(self.qr, Some(ERROR_NODE_CLASS), ERROR_NODE_TEXT) {
            log::error!("showing qr error indicator failed: {e}");
        }
    }

    fn show_info(&self, lines: &[String]) {
        self.info.set_inner_html("");
        for line in lines {
            if let Err(e) = self.append_text_div(self.info, None, line) {
                log::warn!("writing info line failed: {e}");
                return;
            }
        }
    }
}
