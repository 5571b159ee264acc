use super::*;

fn sample() -> PageInfo {
    PageInfo {
        supplier_name: "Acme Gas".to_owned(),
        sku: "SKU-001".to_owned(),
        production_date: "2024-05-01".to_owned(),
        batch: "B7".to_owned(),
    }
}

// =============================================================
// Field
// =============================================================

#[test]
fn input_names_match_form_contract() {
    let names: Vec<_> = Field::ALL.iter().map(|f| f.input_name()).collect();
    assert_eq!(names, ["lotAtt04", "sku", "lotAtt01", "lotAtt05"]);
}

#[test]
fn placeholders_are_unique_per_field() {
    let placeholders: Vec<_> = Field::ALL.iter().map(|f| f.placeholder()).collect();
    for (i, a) in placeholders.iter().enumerate() {
        for b in &placeholders[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(Field::Sku.placeholder(), "无物料编码信息");
}

// =============================================================
// from_lookup
// =============================================================

#[test]
fn all_present_fields_are_read_verbatim() {
    let info = PageInfo::from_lookup(|field| Some(sample().get(field).to_owned()));
    assert_eq!(info, sample());
}

#[test]
fn missing_field_gets_only_its_own_placeholder() {
    let info = PageInfo::from_lookup(|field| match field {
        Field::Sku => None,
        other => Some(sample().get(other).to_owned()),
    });
    assert_eq!(info.sku, "无物料编码信息");
    assert_eq!(info.supplier_name, "Acme Gas");
    assert_eq!(info.production_date, "2024-05-01");
    assert_eq!(info.batch, "B7");
}

#[test]
fn empty_value_is_treated_as_missing() {
    let info = PageInfo::from_lookup(|field| match field {
        Field::Batch => Some(String::new()),
        other => Some(sample().get(other).to_owned()),
    });
    assert_eq!(info.batch, "无生产批次信息");
}

#[test]
fn every_field_missing_never_faults() {
    let info = PageInfo::from_lookup(|_| None);
    for field in Field::ALL {
        assert_eq!(info.get(field), field.placeholder());
    }
}

#[test]
fn lookup_is_called_once_per_field() {
    let mut calls = Vec::new();
    let _info = PageInfo::from_lookup(|field| {
        calls.push(field);
        None
    });
    assert_eq!(calls, Field::ALL);
}

#[test]
fn unavailable_is_uniform() {
    let info = PageInfo::unavailable();
    for field in Field::ALL {
        assert_eq!(info.get(field), "暂无数据");
    }
}

// =============================================================
// format_content
// =============================================================

#[test]
fn content_follows_fixed_template() {
    assert_eq!(
        format_content(&sample()),
        "供应商名称：Acme Gas\n物料编码：SKU-001\n生产日期：2024-05-01\n生产批次：B7"
    );
}

#[test]
fn content_is_deterministic() {
    assert_eq!(format_content(&sample()), format_content(&sample()));
}

#[test]
fn content_has_no_trailing_newline() {
    assert!(!format_content(&sample()).ends_with('\n'));
    assert_eq!(format_content(&sample()).lines().count(), 4);
}

// =============================================================
// display_lines
// =============================================================

#[test]
fn display_lines_use_ascii_colon() {
    let lines = sample().display_lines();
    assert_eq!(lines[1], "物料编码: SKU-001");
    assert_eq!(lines.len(), 4);
}

#[test]
fn long_supplier_name_is_truncated_by_chars() {
    let mut info = sample();
    info.supplier_name = "中".repeat(25);
    let lines = info.display_lines();
    assert_eq!(lines[0], format!("供应商名称: {}...", "中".repeat(20)));
}

#[test]
fn supplier_name_of_exactly_twenty_chars_is_kept() {
    let mut info = sample();
    info.supplier_name = "x".repeat(20);
    assert_eq!(info.display_lines()[0], format!("供应商名称: {}", "x".repeat(20)));
}
