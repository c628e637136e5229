use std::collections::HashMap;
use blogful::rendering::{format_timestamp, render_markdown};
use rocket::response::content::RawHtml;
use serde::Serialize;
use tera::{Context, Filter, Tera, Value};
use crate::app_constants::DATE_FORMAT;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("entries.html", include_str!("../templates/entries.html")),
    ("entry.html", include_str!("../templates/entry.html")),
    ("add_entry.html", include_str!("../templates/add_entry.html")),
    ("edit_entry.html", include_str!("../templates/edit_entry.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Page templates compiled into the binary.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        tera.register_filter("markdown", MarkdownFilter);
        tera.register_filter("dateformat", DateFormatFilter);
        Ok(Templates { tera })
    }

    pub fn render(
        &self,
        name: &str,
        context: &impl Serialize,
    ) -> Result<RawHtml<String>, tera::Error> {
        let context = Context::from_serialize(context)?;
        Ok(RawHtml(self.tera.render(name, &context)?))
    }
}

struct MarkdownFilter;

impl Filter for MarkdownFilter {
    fn filter(
        &self,
        value: &Value,
        _args: &HashMap<String, Value>,
    ) -> tera::Result<Value> {
        let text = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("markdown filter expects a string"))?;
        Ok(Value::String(render_markdown(text)))
    }

    // the output has its raw html escaped already
    fn is_safe(&self) -> bool {
        true
    }
}

struct DateFormatFilter;

impl Filter for DateFormatFilter {
    fn filter(
        &self,
        value: &Value,
        args: &HashMap<String, Value>,
    ) -> tera::Result<Value> {
        let format = match args.get("format") {
            Some(format) => format
                .as_str()
                .ok_or_else(|| tera::Error::msg("date format must be a string"))?,
            None => DATE_FORMAT,
        };
        format_timestamp(value.as_str(), format)
            .map(Value::String)
            .map_err(|e| tera::Error::msg(e.to_string()))
    }
}
