use std::fmt;
use std::str::FromStr;

use crate::constants::CNPJ_LEN;
use crate::error::ValidationError;

/// Проверенный CNPJ: ровно 14 ASCII-цифр, без маски.
///
/// Контрольные цифры не проверяются, только длина.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Нормализует ввод пользователя:
    /// - пустая строка -> `MissingInput`
    /// - всё, что не `0-9`, выбрасывается
    /// - осталось не 14 цифр -> `InvalidFormat`
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::MissingInput);
        }

        let digits = strip_non_digits(raw);
        if digits.len() != CNPJ_LEN {
            return Err(ValidationError::InvalidFormat {
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Только цифры, без маски
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Вид для показа: `11.222.333/0001-81`
    pub fn masked(&self) -> String {
        format_masked(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Оставляет только ASCII-цифры (аналог `replace(/\D/g, "")`).
pub fn strip_non_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Применяет маску `99.999.999/9999-99` к первым 14 цифрам ввода.
///
/// Разделитель ставится только если за ним есть цифра, поэтому
/// частичный ввод форматируется "на лету": `1122` -> `11.22`.
pub fn format_masked(raw: &str) -> String {
    let mut out = String::with_capacity(CNPJ_LEN + 4);

    for (i, ch) in raw.chars().filter(char::is_ascii_digit).take(CNPJ_LEN).enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(ch);
    }

    out
}
