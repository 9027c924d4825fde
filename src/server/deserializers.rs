use serde::{Deserialize, Deserializer};

// the frontend sends ids and difficulty from <select> values, so they may come as
// strings. An empty string means the field was not filled in.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(v)) => Ok(Some(v)),
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(s)) => match s.trim().parse::<i64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(serde::de::Error::custom(format!(
                "Wrong value {s}, can not parse to i64"
            ))),
        },
    }
}

// an empty string counts as missing
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
