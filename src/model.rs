use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog entry as it appears in `recipes.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(
        rename = "cookTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub recipe_type: Option<String>,
}

impl Recipe {
    /// Ingredients lowercased for case-insensitive matching
    pub fn lowercase_ingredients(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.to_lowercase()).collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdType {
    Number(i64),
    Float(f64),
    String(String),
}

// Data files written by hand sometimes quote their ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IdType::deserialize(deserializer)? {
        IdType::Number(id) => Ok(id),
        IdType::Float(id) => integral_id(id).ok_or_else(|| {
            serde::de::Error::custom(format!("recipe id must be an integer, got {}", id))
        }),
        IdType::String(id) => parse_id(&id).ok_or_else(|| {
            serde::de::Error::custom(format!("recipe id must be numeric, got {:?}", id))
        }),
    }
}

/// Parse an id the way a loose equality comparison would: surrounding
/// whitespace is ignored and integral decimals (`"2.0"`) are accepted.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }
    trimmed.parse::<f64>().ok().and_then(integral_id)
}

// `as` saturates, so out-of-range values must be rejected before the cast.
fn integral_id(id: f64) -> Option<i64> {
    if id.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&id) {
        Some(id as i64)
    } else {
        None
    }
}
