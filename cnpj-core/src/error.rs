use thiserror::Error;

use crate::constants::{MSG_INVALID_CNPJ, MSG_MISSING_INPUT};

/// Верхнеуровневый тип ошибок крейта
#[derive(Debug, Error)]
pub enum CnpjCoreError {
    /// Ошибки валидации ввода
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Ошибки загрузки профиля
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Ошибки валидации ввода (до сетевого запроса)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Поле ввода пустое
    #[error("missing input")]
    MissingInput,

    /// После удаления не-цифр осталось не 14 цифр
    #[error("invalid format: expected 14 digits, got {digits}")]
    InvalidFormat {
        /// Сколько цифр осталось
        digits: usize,
    },
}

impl ValidationError {
    /// Текст уведомления для пользователя
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingInput => MSG_MISSING_INPUT,
            ValidationError::InvalidFormat { .. } => MSG_INVALID_CNPJ,
        }
    }
}

/// Ошибки запроса профиля.
///
/// Пользователю все варианты показываются одним и тем же сообщением,
/// различие нужно только для логов.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Сервер ответил не-2xx статусом
    #[error("company not found (http status {status})")]
    NotFound {
        /// HTTP-статус ответа
        status: u16,
    },

    /// Сетевая ошибка (соединение, TLS, обрыв)
    #[error("transport error: {0}")]
    Transport(String),

    /// Тело ответа не разбирается как профиль
    #[error("malformed profile body: {0}")]
    Decode(#[from] serde_json::Error),
}
