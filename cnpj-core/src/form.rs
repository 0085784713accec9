use crate::cnpj::{Cnpj, format_masked};
use crate::error::ValidationError;

/// Форма поиска: сырой ввод + последний принятый ключ запроса.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    raw: String,
    query_key: Option<Cnpj>,
}

impl SearchForm {
    /// Пустая форма, ключа ещё нет
    pub fn new() -> Self {
        Self::default()
    }

    /// Сохраняет ввод как есть; маска на этот шаг не влияет.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.raw = text.into();
    }

    /// Валидирует текущий ввод и, если он корректен, обновляет ключ.
    ///
    /// При ошибке ключ не трогается: повторного запроса не будет,
    /// и ранее показанный результат остаётся на экране.
    pub fn on_submit(&mut self) -> Result<&Cnpj, ValidationError> {
        let key = Cnpj::parse(&self.raw)?;
        Ok(&*self.query_key.insert(key))
    }

    /// Ввод ровно в том виде, как его набрали
    pub fn raw_input(&self) -> &str {
        &self.raw
    }

    /// Ввод в виде `11.222.333/0001-81` (только для показа)
    pub fn masked_input(&self) -> String {
        format_masked(&self.raw)
    }

    /// Последний принятый ключ
    pub fn query_key(&self) -> Option<&Cnpj> {
        self.query_key.as_ref()
    }
}
