//! Field values scraped from the allocation form and the text encoded from them.
//!
//! The DOM lookup itself lives in `browser::fields`; this module owns the
//! placeholder rules and the content template so both are testable without
//! a browser.

#[cfg(test)]
#[path = "page_info_test.rs"]
mod page_info_test;

use crate::consts::{SUPPLIER_DISPLAY_CHARS, UNAVAILABLE_TEXT};

/// One of the four form fields the widget reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SupplierName,
    Sku,
    ProductionDate,
    Batch,
}

impl Field {
    /// All fields in template order.
    pub const ALL: [Self; 4] = [Self::SupplierName, Self::Sku, Self::ProductionDate, Self::Batch];

    /// `name` attribute of the field's `<input>`.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::SupplierName => "lotAtt04",
            Self::Sku => "sku",
            Self::ProductionDate => "lotAtt01",
            Self::Batch => "lotAtt05",
        }
    }

    /// Human label used in the encoded text and placeholders.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SupplierName => "供应商名称",
            Self::Sku => "物料编码",
            Self::ProductionDate => "生产日期",
            Self::Batch => "生产批次",
        }
    }

    /// Placeholder used when this field's input is missing or empty.
    #[must_use]
    pub fn placeholder(self) -> String {
        format!("无{}信息", self.label())
    }
}

/// Snapshot of the four field values at one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub supplier_name: String,
    pub sku: String,
    pub production_date: String,
    pub batch: String,
}

impl PageInfo {
    /// Build from a per-field lookup.
    ///
    /// `lookup` returns `None` when the input element is absent; an empty
    /// value is treated the same way. Either case yields that field's own
    /// placeholder while the other fields keep their values.
    pub fn from_lookup(mut lookup: impl FnMut(Field) -> Option<String>) -> Self {
        let mut read = |field: Field| match lookup(field) {
            Some(value) if !value.is_empty() => value,
            _ => field.placeholder(),
        };
        Self {
            supplier_name: read(Field::SupplierName),
            sku: read(Field::Sku),
            production_date: read(Field::ProductionDate),
            batch: read(Field::Batch),
        }
    }

    /// Uniform placeholder info used when the form itself is missing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            supplier_name: UNAVAILABLE_TEXT.to_owned(),
            sku: UNAVAILABLE_TEXT.to_owned(),
            production_date: UNAVAILABLE_TEXT.to_owned(),
            batch: UNAVAILABLE_TEXT.to_owned(),
        }
    }

    /// Value of a single field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SupplierName => &self.supplier_name,
            Field::Sku => &self.sku,
            Field::ProductionDate => &self.production_date,
            Field::Batch => &self.batch,
        }
    }

    /// Lines shown in the panel's info area.
    ///
    /// The supplier name is cut to its first 20 characters plus `...`.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        Field::ALL
            .iter()
            .map(|&field| {
                let value = match field {
                    Field::SupplierName => truncate_chars(&self.supplier_name, SUPPLIER_DISPLAY_CHARS),
                    _ => self.get(field).to_owned(),
                };
                format!("{}: {value}", field.label())
            })
            .collect()
    }
}

/// Text encoded into the QR code.
#[must_use]
pub fn format_content(info: &PageInfo) -> String {
    Field::ALL
        .iter()
        .map(|&field| format!("{}：{}", field.label(), info.get(field)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_owned(),
    }
}
