//! Value predicates backing each [`RuleKind`](super::RuleKind).

use serde_json::Value;
use url::Url;
use uuid::{Uuid, Variant, Version};

const HYPHENATED_UUID_LEN: usize = 36;
const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Missing keys and JSON `null` both count as absent.
pub(super) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

pub(super) fn is_text(value: &Value) -> bool {
    value.is_string()
}

pub(super) fn is_uuid_v4(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };
    // Only the 8-4-4-4-12 form is accepted; braced, URN and simple forms are not.
    if text.len() != HYPHENATED_UUID_LEN {
        return false;
    }
    Uuid::try_parse(text).is_ok_and(|uuid| {
        uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122
    })
}

pub(super) fn is_absolute_url(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };
    Url::parse(text).is_ok_and(|url| URL_SCHEMES.contains(&url.scheme()) && url.has_host())
}

pub(super) fn is_finite_number(value: &Value) -> bool {
    value
        .as_number()
        .and_then(serde_json::Number::as_f64)
        .is_some_and(f64::is_finite)
}

/// Non-numbers pass so the numeric-type rule reports them exactly once.
pub(super) fn is_non_negative(value: &Value) -> bool {
    value.as_f64().is_none_or(|number| number >= 0.0)
}

pub(super) fn is_text_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}
