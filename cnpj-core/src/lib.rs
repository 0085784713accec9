//! # cnpj-core
//!
//! Базовые типы и логика для клиента поиска компаний по CNPJ.
//!
//! Этот крейт содержит:
//!
//! - [`cnpj`] — нормализация ввода, проверка длины и маска `99.999.999/9999-99`
//! - [`form`] — форма поиска: сырой ввод и ключ запроса
//! - [`query`] — состояние запроса, дедупликация и отброс устаревших ответов
//! - [`view`] — что показывать для каждого состояния
//! - [`types`] — профиль компании (JSON-ответ API)
//! - [`error`] — типы ошибок
//!
//! ## Быстрый пример: форма поиска
//!
//! ```rust
//! use cnpj_core::{SearchForm, ValidationError};
//!
//! let mut form = SearchForm::new();
//! form.on_input_change("11.222.333/0001-0");
//! assert!(matches!(form.on_submit(), Err(ValidationError::InvalidFormat { digits: 13 })));
//!
//! form.on_input_change("11.222.333/0001-81");
//! assert_eq!(form.on_submit().unwrap().as_str(), "11222333000181");
//! ```
//!
//! ## Пример: запрос и отрисовка
//!
//! ```rust
//! use cnpj_core::{Cnpj, FetchError, ProfileQuery, View, render};
//!
//! let mut query = ProfileQuery::new();
//! let key = query.submit(Cnpj::parse("11222333000181").unwrap()).unwrap();
//! assert_eq!(render(query.state()), View::Loading { placeholders: 3 });
//!
//! query.resolve(&key, Err(FetchError::NotFound { status: 404 }));
//! assert!(matches!(render(query.state()), View::Error { .. }));
//! ```
//!
//! ## Дизайн
//!
//! Здесь нет ни сети, ни потоков: только чистые типы и переходы
//! состояний. HTTP, цикл событий и терминал живут в `cnpj-client`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Нормализация и маска CNPJ.
pub mod cnpj;

/// Форма поиска.
pub mod form;

/// Состояние запроса профиля.
pub mod query;

/// Состояние загрузки.
pub mod state;

/// Доменные типы (профиль компании).
pub mod types;

/// Отрисовка состояния в [`View`].
pub mod view;

/// Ошибки `cnpj-core`.
pub mod error;

/// Общие константы и тексты интерфейса.
pub mod constants;

// --- Re-exports (публичный фасад API) ---

pub use crate::cnpj::{Cnpj, format_masked, strip_non_digits};
pub use crate::error::{CnpjCoreError, FetchError, ValidationError};
pub use crate::form::SearchForm;
pub use crate::query::{ProfileQuery, Resolution};
pub use crate::state::FetchState;
pub use crate::types::CompanyProfile;
pub use crate::view::{Row, View, render};
