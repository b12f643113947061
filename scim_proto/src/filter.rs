use std::fmt;

use serde_json::Value;

/// A SCIM filter expression. Only attribute equality is ever constructed,
/// rendered as `attr eq "value"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    attr: String,
    value: String,
}

impl Filter {
    pub fn eq(attr: &str, value: &str) -> Self {
        Filter {
            attr: attr.to_string(),
            value: value.to_string(),
        }
    }

    pub fn attr(&self) -> &str {
        &self.attr
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Evaluate the filter against a decoded resource. Attribute names and
    /// string values compare case insensitively, the RFC 7643 default for
    /// attributes that aren't `caseExact`. A dotted attribute walks into
    /// complex attributes, so `name.givenName` works.
    pub fn matches(&self, resource: &Value) -> bool {
        let found = self
            .attr
            .split('.')
            .try_fold(resource, |v, part| match v {
                Value::Object(map) => map
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(part))
                    .map(|(_, v)| v),
                _ => None,
            });

        match found {
            Some(Value::String(s)) => s.to_lowercase() == self.value.to_lowercase(),
            Some(Value::Null) | None => false,
            Some(other) => other.to_string() == self.value,
        }
    }
}

// RFC 7644 section 3.4.2.2: string values are JSON strings, so quotes and
// backslashes inside the value must be escaped.
fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} eq \"{}\"", self.attr, escape_value(&self.value))
    }
}
