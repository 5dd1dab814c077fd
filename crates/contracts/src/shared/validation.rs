//! Правила валидации полей формы

use std::collections::BTreeMap;

/// Ошибки по полям: ключ поля -> сообщение
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записывает только первую ошибку поля
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(value)` если ошибок нет
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Правила для одного поля
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Строго больше этого значения
    pub greater_than: Option<f64>,
    /// Сообщение для любого нарушения правила
    pub message: &'static str,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            greater_than: None,
            message: "",
        }
    }

    pub const fn required(message: &'static str) -> Self {
        Self {
            required: true,
            greater_than: None,
            message,
        }
    }

    /// Обязательное число строго больше нуля
    pub const fn positive(message: &'static str) -> Self {
        Self {
            required: true,
            greater_than: Some(0.0),
            message,
        }
    }

    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(self.message.to_string());
        }
        Ok(())
    }

    /// Разбор и проверка числа из текстового поля ввода
    pub fn parse_number(&self, raw: &str) -> Result<Option<f64>, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(self.message.to_string())
            } else {
                Ok(None)
            };
        }
        let value: f64 = trimmed
            .replace(',', ".")
            .parse()
            .map_err(|_| self.message.to_string())?;
        self.validate_number(value)?;
        Ok(Some(value))
    }

    pub fn validate_number(&self, value: f64) -> Result<(), String> {
        if !value.is_finite() {
            return Err(self.message.to_string());
        }
        if let Some(min) = self.greater_than {
            if value <= min {
                return Err(self.message.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required("Name is required");
        assert_eq!(rules.validate_string("  "), Err("Name is required".to_string()));
        assert!(rules.validate_string("Bebidas").is_ok());
        assert!(ValidationRules::none().validate_string("").is_ok());
    }

    #[test]
    fn test_positive_number() {
        let rules = ValidationRules::positive("Price is required");
        assert_eq!(rules.parse_number("0"), Err("Price is required".to_string()));
        assert_eq!(rules.parse_number("-3"), Err("Price is required".to_string()));
        assert_eq!(rules.parse_number("abc"), Err("Price is required".to_string()));
        assert_eq!(rules.parse_number(""), Err("Price is required".to_string()));
        assert_eq!(rules.parse_number("1500"), Ok(Some(1500.0)));
        assert_eq!(rules.parse_number("12,5"), Ok(Some(12.5)));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let rules = ValidationRules::positive("Stock is required");
        assert!(rules.parse_number("inf").is_err());
        assert!(rules.parse_number("NaN").is_err());
        assert_eq!(rules.parse_number("1e20"), Ok(Some(1e20)));
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("price", "first");
        errors.add("price", "second");
        errors.check("name", Ok(()));
        assert_eq!(errors.get("price"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result(()).is_err());
    }
}
