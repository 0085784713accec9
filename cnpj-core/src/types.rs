use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::error::FetchError;

/// Профиль компании, как его отдаёт `/<cnpj>/perfil/`.
///
/// Лишние поля ответа игнорируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Юрлицо: razão social, porte, capital social
    pub empresa: Empresa,
    /// Заведение: nome fantasia
    pub estabelecimento: Estabelecimento,
    /// Natureza jurídica
    pub natureza: Natureza,
    /// Município
    pub municipio: Municipio,
    /// CNAE principal
    pub cnae_principal: CnaePrincipal,
}

/// Группа `empresa`: данные юрлица
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empresa {
    /// Razão social
    #[serde(default, deserialize_with = "null_as_empty")]
    pub razao_social: String,
    /// Porte (ME, EPP, DEMAIS, ...)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub porte: String,
    /// Capital social как текст: API отдаёт то строку, то число
    #[serde(default, deserialize_with = "string_or_number")]
    pub capital_social: String,
}

/// Группа `estabelecimento`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estabelecimento {
    /// Nome fantasia: может отсутствовать, быть `null` или пустым
    #[serde(default)]
    pub nome_fantasia: Option<String>,
}

/// Natureza jurídica
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Natureza {
    /// Описание формы собственности
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descricao: String,
}

/// Município
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipio {
    /// Название муниципалитета
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nome: String,
}

/// Основной вид деятельности (CNAE)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnaePrincipal {
    /// Описание вида деятельности
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descricao: String,
}

impl CompanyProfile {
    /// Разбор тела успешного ответа
    pub fn from_json(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Nome fantasia, если он реально заполнен
    pub fn trade_name(&self) -> Option<&str> {
        self.estabelecimento
            .nome_fantasia
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

/// `null` в текстовом поле показывается как пустая ячейка
fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Строка -> как есть, число -> исходный текст из JSON (без f64),
/// `null` -> пустая строка
fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Box<RawValue>>::deserialize(de)? else {
        return Ok(String::new());
    };

    let text = raw.get();
    match text.chars().next() {
        Some('"') => serde_json::from_str(text).map_err(D::Error::custom),
        Some(c) if c == '-' || c.is_ascii_digit() => Ok(text.to_string()),
        _ => Err(D::Error::custom(format!(
            "expected string or number, got {text}"
        ))),
    }
}
