use crate::types::CompanyProfile;

/// Состояние загрузки профиля. Ровно одно из четырёх.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// Поиска ещё не было
    #[default]
    Idle,
    /// Запрос по текущему ключу в полёте
    Loading,
    /// Запрос завершился ошибкой (причина только в логах)
    Error,
    /// Профиль получен
    Success(CompanyProfile),
}

impl FetchState {
    /// `true` только для `Loading`
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Профиль, если он уже получен
    pub fn profile(&self) -> Option<&CompanyProfile> {
        match self {
            FetchState::Success(p) => Some(p),
            _ => None,
        }
    }
}
