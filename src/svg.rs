//! SVG text post-processing: validation, view box rewrite, and parser fallback.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::error::WidgetError;

static VIEW_BOX: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r#"viewBox="0 0 [0-9]+ [0-9]+""#));

/// Reject encoder output that is blank.
///
/// # Errors
///
/// Returns [`WidgetError::Encode`] when `svg` is empty or whitespace only.
pub fn validate_svg_text(svg: &str) -> Result<&str, WidgetError> {
    if svg.trim().is_empty() {
        return Err(WidgetError::Encode("encoder returned empty svg".to_owned()));
    }
    Ok(svg)
}

/// Replace the first `viewBox="0 0 W H"` with a fixed `size`×`size` box.
///
/// `W` and `H` must be runs of ASCII digits. Input without a matching
/// attribute is returned unchanged.
#[must_use]
pub fn rewrite_view_box(svg: &str, size: u32) -> Cow<'_, str> {
    match &*VIEW_BOX {
        Ok(pattern) => {
            let fixed = format!("viewBox=\"0 0 {size} {size}\"");
            pattern.replace(svg, NoExpand(&fixed))
        }
        Err(e) => {
            log::error!("view box pattern failed to compile: {e}");
            Cow::Borrowed(svg)
        }
    }
}

/// Whether an attribute name is an inline event handler (`onload`, `onClick`, ...).
#[must_use]
pub fn is_event_handler_attr(name: &str) -> bool {
    name.len() > 2 && name.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

type Strategy<'a, T> = Box<dyn Fn(&str) -> Result<T, WidgetError> + 'a>;

/// Ordered list of parse strategies; the first success wins.
pub struct ParserChain<'a, T> {
    strategies: Vec<(&'static str, Strategy<'a, T>)>,
}

impl<T> Default for ParserChain<'_, T> {
    fn default() -> Self {
        Self { strategies: Vec::new() }
    }
}

impl<'a, T> ParserChain<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named strategy, tried after all earlier ones.
    #[must_use]
    pub fn with(mut self, name: &'static str, strategy: impl Fn(&str) -> Result<T, WidgetError> + 'a) -> Self {
        self.strategies.push((name, Box::new(strategy)));
        self
    }

    /// Run strategies in order until one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Parse`] listing every strategy's failure when
    /// none succeeds, or when the chain is empty.
    pub fn parse(&self, input: &str) -> Result<T, WidgetError> {
        let mut failures = Vec::new();
        for (name, strategy) in &self.strategies {
            match strategy(input) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("svg parser '{name}' failed: {e}");
                    failures.push(format!("{name}: {e}"));
                }
            }
        }
        if failures.is_empty() {
            return Err(WidgetError::Parse("no parser strategies".to_owned()));
        }
        Err(WidgetError::Parse(failures.join("; ")))
    }
}
