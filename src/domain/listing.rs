// src/domain/listing.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Canonical listing identifier.
///
/// The spreadsheet API hands ids back as numbers or strings depending on how
/// the cell was typed, and the detail page receives them as URL text. Every id
/// is normalized to a string at the deserialization boundary so lookups never
/// depend on the source type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tolerant comparison against a query-string value: `"102"`, `" 102 "`
    /// and `"102.0"` all match an id of `102`.
    pub fn loosely_matches(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if self.0 == candidate {
            return true;
        }

        match (self.0.parse::<f64>(), candidate.parse::<f64>()) {
            (Ok(a), Ok(b)) => a.is_finite() && a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ListingId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(s) => Ok(ListingId::new(s)),
            Value::Number(n) => Ok(ListingId(number_to_text(&n))),
            other => Err(serde::de::Error::custom(format!(
                "listing id must be a number or string, got {other}"
            ))),
        }
    }
}

/// One property as returned by the listings API.
///
/// A snapshot of a single fetch; never mutated after deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: ListingId,

    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,

    /// `None` means "price on request".
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<i64>,

    // Grid rows use `image`, the single-record endpoint uses `main_image`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub main_image: Option<String>,

    #[serde(default, deserialize_with = "lenient_gallery")]
    pub gallery: Vec<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub specs: Option<String>,
}

impl Listing {
    pub fn cover_image(&self) -> Option<&str> {
        self.image.as_deref().or(self.main_image.as_deref())
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Estate")
    }

    pub fn display_location(&self) -> &str {
        self.location.as_deref().unwrap_or("Private Location")
    }

    /// Pre-filled "interest" line for the contact form on the detail page.
    pub fn inquiry_line(&self) -> String {
        format!("Inquiry: {} (ID: {})", self.display_title(), self.id)
    }

    fn sample(id: i64, title: &str, location: &str, price: i64, image: &str) -> Self {
        Self {
            id: ListingId::from(id),
            title: Some(title.to_string()),
            location: Some(location.to_string()),
            price: Some(price),
            image: Some(image.to_string()),
            main_image: None,
            gallery: Vec::new(),
            description: None,
            specs: None,
        }
    }
}

/// Backup collection shown whenever the listings API is unreachable or empty.
pub fn fallback_listings() -> Vec<Listing> {
    vec![
        Listing::sample(
            101,
            "Villa Lago",
            "Lugano, Switzerland",
            12_500_000,
            "https://images.unsplash.com/photo-1600596542815-2a4d9f79fad3?w=800&q=80",
        ),
        Listing::sample(
            102,
            "Whistler Glass Estate",
            "Whistler, Canada",
            8_900_000,
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800&q=80",
        ),
        Listing::sample(
            103,
            "Xinyi Penthouse",
            "Taipei, Taiwan",
            15_500_000,
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80",
        ),
    ]
}

fn number_to_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

// Spreadsheet cells come back as whatever type the sheet guessed, so text
// fields accept numbers and booleans too. Blank cells are treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => number_to_text(&n),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    };

    Ok(Some(text).filter(|s| !s.is_empty()))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_price_text(&s),
        _ => None,
    };

    // Zero and negative amounts are rendered as "price on request".
    Ok(amount
        .filter(|a| a.is_finite() && *a >= 0.5)
        .map(|a| a.round() as i64))
}

/// Reads a spreadsheet price cell such as `$1,250,000` or `1.250.000`.
/// Anything carrying words or suffixes (`$1.2M`, `TBD`) is not a price.
fn parse_price_text(raw: &str) -> Option<f64> {
    let body: String = raw
        .trim()
        .trim_start_matches(['$', '€', '£', '¥'])
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    // Dots as thousands separators: every group after the first has three digits.
    let groups: Vec<&str> = body.split('.').collect();
    if groups.len() > 2 {
        let grouped = !groups[0].is_empty()
            && groups[1..].iter().all(|g| g.len() == 3);
        return grouped.then(|| groups.concat()).and_then(|d| d.parse().ok());
    }

    body.parse().ok()
}

fn lenient_gallery<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let urls = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .map(|s| s.trim().to_string())
            .collect(),
        Some(Value::String(cell)) => cell
            .split([',', '\n'])
            .map(|s| s.trim().to_string())
            .collect(),
        _ => Vec::new(),
    };

    Ok(urls.into_iter().filter(|s| !s.is_empty()).collect())
}
