#![allow(dead_code)]

pub mod fixtures;
pub mod font;

use fontfall::Stylesheet;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `(property, value)` pairs of every `@font-face` rule, in document order.
pub fn font_face_declarations(css: &str) -> Vec<Vec<(String, String)>> {
    let Ok(sheet) = Stylesheet::parse(css) else {
        panic!("output is not a valid style sheet:\n{}", css);
    };
    sheet
        .font_faces()
        .into_iter()
        .map(|(_, rule)| {
            rule.declarations()
                .map(|d| (d.property.clone(), d.value.clone()))
                .collect()
        })
        .collect()
}

/// The value of `property` in a declaration list.
pub fn value_of<'a>(declarations: &'a [(String, String)], property: &str) -> Option<&'a str> {
    declarations
        .iter()
        .find(|(p, _)| p == property)
        .map(|(_, v)| v.as_str())
}
