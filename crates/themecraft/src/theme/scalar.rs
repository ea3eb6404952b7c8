//! Lenient scalar deserialization for style values.
//!
//! Theme files are hand-written YAML, where `paddingTop: 4` parses as a
//! number. Style values are always strings downstream, so numbers and
//! booleans are accepted and stored in their display form.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::definition::StyleMap;

struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number or boolean style value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
                Ok(Scalar(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn into_style_map(raw: IndexMap<String, Scalar>) -> StyleMap {
    raw.into_iter().map(|(k, Scalar(v))| (k, v)).collect()
}

pub(super) fn optional_style_map<'de, D>(deserializer: D) -> Result<Option<StyleMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Scalar>> = Option::deserialize(deserializer)?;
    Ok(raw.map(into_style_map))
}

pub(super) fn optional_modifiers<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, StyleMap>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, IndexMap<String, Scalar>>> =
        Option::deserialize(deserializer)?;
    Ok(raw.map(|modifiers| {
        modifiers
            .into_iter()
            .map(|(name, styles)| (name, into_style_map(styles)))
            .collect()
    }))
}
