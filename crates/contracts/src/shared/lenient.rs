//! Нестрогая десериализация полей, которые API отдаёт то числом, то строкой.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Число или числовая строка; `null`, пустая строка и мусор дают `0.0`
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

/// Строка или число как строка; `null` даёт пустую строку
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Text(s)) => s,
        Some(NumberOrText::Number(n)) if n.fract() == 0.0 => format!("{:.0}", n),
        Some(NumberOrText::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Amounts {
        #[serde(default, deserialize_with = "number_or_string")]
        amount: f64,
        #[serde(default, deserialize_with = "text_or_number")]
        code: String,
    }

    #[test]
    fn test_number_or_string() {
        let p: Amounts = serde_json::from_str(r#"{"amount": "1250.5", "code": 42}"#).unwrap();
        assert_eq!(p.amount, 1250.5);
        assert_eq!(p.code, "42");

        let p: Amounts = serde_json::from_str(r#"{"amount": null, "code": null}"#).unwrap();
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.code, "");

        let p: Amounts = serde_json::from_str("{}").unwrap();
        assert_eq!(p.amount, 0.0);
    }
}
