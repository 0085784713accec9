use std::collections::HashSet;

use crate::cnpj::Cnpj;
use crate::error::FetchError;
use crate::state::FetchState;
use crate::types::CompanyProfile;

/// Чем закончилась обработка ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Ответ по текущему ключу, состояние обновлено
    Applied,
    /// Ответ по устаревшему ключу, выброшен
    Stale,
}

/// Состояние запроса профиля, привязанное к ключу.
///
/// Сам сеть не трогает: решает, нужно ли отправлять запрос,
/// и принимает/отбрасывает завершения по совпадению ключа.
#[derive(Debug, Default)]
pub struct ProfileQuery {
    key: Option<Cnpj>,
    state: FetchState,
    in_flight: HashSet<Cnpj>,
}

impl ProfileQuery {
    /// Без ключа, в состоянии `Idle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Новый ключ от формы. Состояние -> `Loading`, прежний профиль выброшен.
    ///
    /// Возвращает ключ, по которому надо отправить запрос, или `None`,
    /// если запрос с таким ключом уже в полёте.
    pub fn submit(&mut self, key: Cnpj) -> Option<Cnpj> {
        self.state = FetchState::Loading;
        self.key = Some(key.clone());

        if self.in_flight.insert(key.clone()) {
            Some(key)
        } else {
            None
        }
    }

    /// Завершение запроса по `key`.
    pub fn resolve(
        &mut self,
        key: &Cnpj,
        result: Result<CompanyProfile, FetchError>,
    ) -> Resolution {
        self.in_flight.remove(key);

        if self.key.as_ref() != Some(key) {
            return Resolution::Stale;
        }

        self.state = match result {
            Ok(profile) => FetchState::Success(profile),
            Err(_) => FetchState::Error,
        };
        Resolution::Applied
    }

    /// Текущее состояние загрузки
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Ключ, ответ по которому будет принят
    pub fn key(&self) -> Option<&Cnpj> {
        self.key.as_ref()
    }

    /// Идёт ли запрос по текущему ключу
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Сколько запросов ещё не вернулось (включая устаревшие)
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
