//! Reads the allocation form's input values from the live page.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::browser::dom::document;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::page_info::{Field, PageInfo};

/// Snapshot the four field values.
///
/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when the form is absent; missing
/// inputs inside it are substituted with placeholders instead.
pub fn read_page_info(config: &WidgetConfig) -> Result<PageInfo, WidgetError> {
    let doc = document()?;
    let form = doc
        .get_element_by_id(&config.form_id)
        .ok_or_else(|| WidgetError::MissingElement(format!("表单元素{}", config.form_id)))?;
    Ok(PageInfo::from_lookup(|field| input_value(&form, field)))
}

fn input_value(form: &Element, field: Field) -> Option<String> {
    let selector = format!("input[name=\"{}\"]", field.input_name());
    match form.query_selector(&selector) {
        Ok(Some(el)) => {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                Some(input.value())
            } else {
                log::warn!("{selector} is not an input element");
                None
            }
        }
        Ok(None) => {
            log::warn!("input named {} not found", field.input_name());
            None
        }
        Err(e) => {
            log::warn!("querying {selector} failed: {e:?}");
            None
        }
    }
}
