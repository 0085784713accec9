use crate::constants::{EMPTY_VALUE, LOADING_PLACEHOLDERS, MSG_FETCH_FAILED};
use crate::state::FetchState;
use crate::types::CompanyProfile;

/// Что показать под полем ввода. Не зависит от способа отрисовки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Поиска не было: только поле и кнопка
    Empty,
    /// Строки-заглушки, без данных
    Loading {
        /// Сколько строк-заглушек нарисовать
        placeholders: usize,
    },
    /// Одно общее сообщение, без подробностей
    Error {
        /// Текст для пользователя
        message: &'static str,
    },
    /// Таблица "Campo | Valor"
    Table(Vec<Row>),
}

/// Строка таблицы профиля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Название поля
    pub label: &'static str,
    /// Значение, готовое к показу
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Состояние загрузки -> что показать
pub fn render(state: &FetchState) -> View {
    match state {
        FetchState::Idle => View::Empty,
        FetchState::Loading => View::Loading {
            placeholders: LOADING_PLACEHOLDERS,
        },
        FetchState::Error => View::Error {
            message: MSG_FETCH_FAILED,
        },
        FetchState::Success(profile) => View::Table(profile_rows(profile)),
    }
}

/// Семь строк профиля в фиксированном порядке
pub fn profile_rows(p: &CompanyProfile) -> Vec<Row> {
    vec![
        Row::new("Razão Social", p.empresa.razao_social.as_str()),
        Row::new("Nome Fantasia", p.trade_name().unwrap_or(EMPTY_VALUE)),
        Row::new("Porte", p.empresa.porte.as_str()),
        Row::new("Capital Social", p.empresa.capital_social.as_str()),
        Row::new("Natureza", p.natureza.descricao.as_str()),
        Row::new("Município", p.municipio.nome.as_str()),
        Row::new("CNAE Principal", p.cnae_principal.descricao.as_str()),
    ]
}
