use std::borrow::Cow;

/// Ordered set of placeholder values for one page.
///
/// Values are substituted in insertion order, so later keys see the
/// output of earlier substitutions.
#[derive(Debug, Default, Clone)]
pub struct TemplateVars {
    entries: Vec<(&'static str, String)>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a pre-escaped value, replacing an earlier one with the same key
    pub fn set<V: Into<String>>(&mut self, key: &'static str, value: V) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Escape `value` for HTML and set it
    pub fn set_escaped(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.set(key, escape(value))
    }
}

/// Literal `{{KEY}}` token for a placeholder name
pub fn placeholder(key: &str) -> String {
    format!("{{{{{}}}}}", key)
}

/// Replace every `{{KEY}}` occurrence for each key in `vars`.
///
/// No conditionals, loops or escaping happen here. Tokens without a
/// value are left untouched, and keys absent from the template are
/// ignored.
pub fn render(template: &str, vars: &TemplateVars) -> String {
    let mut out = template.to_string();
    for (key, value) in &vars.entries {
        let token = placeholder(key);
        if out.contains(&token) {
            out = out.replace(&token, value);
        }
    }
    out
}

/// Escape `& < > " '` for use in HTML text and quoted attributes
pub fn escape(value: &str) -> String {
    match html_escape::encode_quoted_attribute(value) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
