use std::time::Duration;

/// Базовый адрес API профилей
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.ianraphael.com.br/empresas";

/// Тик цикла событий, пока ждём ответы воркеров
pub(crate) const EVENT_TICK: Duration = Duration::from_millis(200);

/// Настройки клиента после разбора CLI
#[derive(Debug, Clone)]
pub(crate) struct ClientConfig {
    pub(crate) base_url: String,
    /// `None` = без таймаута: зависший запрос оставляет состояние `Loading`
    pub(crate) timeout: Option<Duration>,
}
