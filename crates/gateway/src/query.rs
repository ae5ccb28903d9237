//! Query-string serialization for filter structs
//!
//! Domain clients pass their filter structs through [`to_query`]; absent
//! (`None`) fields are omitted entirely, so `{search: None, limit: 10}`
//! renders as `?limit=10` and an all-`None` filter adds nothing.

use braingate_domain::{ClientError, Result};
use serde::Serialize;
use serde_json::Value;

/// Serialize a filter struct into a query string, `?` included.
///
/// Returns the empty string when every field is absent. Field order is
/// deterministic (lexicographic). Array values are joined with commas
/// (`tlds=com,io`); nested objects are rejected as a config error since
/// no backend route takes one in a query.
pub fn to_query<T: Serialize>(filter: &T) -> Result<String> {
    let value = serde_json::to_value(filter)
        .map_err(|err| ClientError::Config(format!("unserializable filter: {err}")))?;

    let Value::Object(fields) = value else {
        return Err(ClientError::Config("filter must serialize to an object".to_string()));
    };

    let mut pairs = Vec::new();
    for (key, value) in fields {
        let Some(rendered) = render(&key, &value)? else { continue };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(&rendered)
        ));
    }

    if pairs.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{}", pairs.join("&")))
    }
}

fn render(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(part) = render(key, item)? {
                    parts.push(part);
                }
            }
            if parts.is_empty() {
                Ok(None)
            } else {
                Ok(Some(parts.join(",")))
            }
        }
        Value::Object(_) => {
            Err(ClientError::Config(format!("filter field `{key}` is a nested object")))
        }
    }
}

#[cfg(test)]
mod tests {
    use braingate_domain::types::crm::ContactFilter;
    use braingate_domain::types::domains::DomainSearch;
    use serde::Serialize;

    use super::*;

    #[test]
    fn present_fields_appear_absent_fields_do_not() {
        let filter = ContactFilter {
            status: Some("active".to_string()),
            limit: Some(10),
            ..ContactFilter::default()
        };
        let query = to_query(&filter).unwrap();
        assert!(query.contains("status=active"));
        assert!(query.contains("limit=10"));
        assert!(!query.contains("search"));
        assert!(!query.contains("offset"));
    }

    #[test]
    fn empty_filter_renders_to_nothing() {
        assert_eq!(to_query(&ContactFilter::default()).unwrap(), "");
    }

    #[test]
    fn values_are_percent_encoded() {
        let filter = ContactFilter {
            search: Some("jane doe & co".to_string()),
            ..ContactFilter::default()
        };
        let query = to_query(&filter).unwrap();
        assert!(query.contains("search=jane%20doe%20%26%20co"));
    }

    #[test]
    fn arrays_join_with_commas() {
        let search = DomainSearch {
            query: Some("acme".to_string()),
            tlds: Some(vec!["com".to_string(), "io".to_string()]),
            limit: None,
        };
        let query = to_query(&search).unwrap();
        assert!(query.contains("tlds=com%2Cio"));
    }

    #[test]
    fn booleans_render_in_canonical_form() {
        #[derive(Serialize)]
        struct Flags {
            active: Option<bool>,
        }
        assert_eq!(to_query(&Flags { active: Some(true) }).unwrap(), "?active=true");
    }

    #[test]
    fn nested_objects_are_rejected() {
        #[derive(Serialize)]
        struct Bad {
            inner: std::collections::BTreeMap<String, String>,
        }
        let mut inner = std::collections::BTreeMap::new();
        inner.insert("a".to_string(), "b".to_string());
        assert!(to_query(&Bad { inner }).is_err());
    }
}
