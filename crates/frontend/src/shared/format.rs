//! Форматирование денег, чисел и дат для таблиц

use chrono::{DateTime, Local, TimeZone};

/// Разделяет целую часть на группы по 3 цифры
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Песо без десятичных, разделитель тысяч точка: `$1.234.567`
pub fn format_clp(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits, '.'))
}

/// Итог продажи; пустое или нулевое значение показывается как "N/A"
pub fn format_total(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => format_clp(v),
        _ => "N/A".to_string(),
    }
}

/// Целое число с разделителем тысяч: `1.234`
pub fn format_int(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits, '.'))
}

/// Дата продажи в локальном времени: "2024-05-14 03:30 PM"
pub fn format_sale_date(value: Option<&str>) -> String {
    format_sale_date_in(value, &Local)
}

pub fn format_sale_date_in<Tz: TimeZone>(value: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return "N/A".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(tz)
            .format("%Y-%m-%d %I:%M %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_clp() {
        assert_eq!(format_clp(1234567.0), "$1.234.567");
        assert_eq!(format_clp(990.4), "$990");
        assert_eq!(format_clp(0.0), "$0");
        assert_eq!(format_clp(-15000.0), "-$15.000");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Some(15990.0)), "$15.990");
        assert_eq!(format_total(Some(0.0)), "N/A");
        assert_eq!(format_total(None), "N/A");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(24.0), "24");
        assert_eq!(format_int(12500.0), "12.500");
    }

    #[test]
    fn test_format_sale_date() {
        assert_eq!(
            format_sale_date_in(Some("2024-05-14T15:30:00.000Z"), &Utc),
            "2024-05-14 03:30 PM"
        );
        assert_eq!(
            format_sale_date_in(Some("2024-05-14T09:05:00Z"), &Utc),
            "2024-05-14 09:05 AM"
        );
        assert_eq!(format_sale_date_in(None, &Utc), "N/A");
        assert_eq!(format_sale_date_in(Some("invalid"), &Utc), "invalid");
    }
}
