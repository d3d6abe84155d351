use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrInt {
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// OpenF1 reports flags such as `rainfall` as `0`/`1` rather than JSON booleans.
/// Accepts either form; any non-zero number is `true`.
pub fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => b,
        BoolOrInt::Int(i) => i != 0,
        BoolOrInt::Float(f) => f != 0.0,
    })
}
