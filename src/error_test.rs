use super::*;

#[test]
fn display_names_the_failed_resource() {
    let err = WidgetError::ResourceLoad { resource: Resource::QrEncoder, reason: "404".to_owned() };
    assert_eq!(err.to_string(), "failed to load qr encoder: 404");
}

#[test]
fn display_missing_element() {
    let err = WidgetError::MissingElement("#form".to_owned());
    assert_eq!(err.to_string(), "element not found: #form");
}

#[test]
fn display_icon_font_failure() {
    let err = WidgetError::ResourceLoad { resource: Resource::IconFont, reason: "timeout".to_owned() };
    assert_eq!(err.to_string(), "failed to load icon font: timeout");
}
