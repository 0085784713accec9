/// Количество цифр в CNPJ
pub const CNPJ_LEN: usize = 14;

/// Маска поля ввода (9 = цифра)
pub const CNPJ_MASK: &str = "99.999.999/9999-99";

/// Подсказка в пустом поле ввода
pub const CNPJ_PLACEHOLDER: &str = "00.000.000/0001-91";

/// Сколько строк-заглушек рисуем, пока идёт запрос
pub const LOADING_PLACEHOLDERS: usize = 3;

/// Заглушка для пустого nomeFantasia
pub const EMPTY_VALUE: &str = "-";

// --- тексты интерфейса ---

/// Заголовок страницы
pub const TITLE: &str = "Consulta de CNPJ";
/// Подпись кнопки поиска
pub const SUBMIT_LABEL: &str = "Buscar Empresa";
/// Подпись кнопки, пока запрос в полёте
pub const SUBMIT_BUSY_LABEL: &str = "Buscando...";

/// Уведомление: поле пустое
pub const MSG_MISSING_INPUT: &str = "Por favor, insira um CNPJ";
/// Уведомление: не 14 цифр
pub const MSG_INVALID_CNPJ: &str = "CNPJ inválido";
/// Общий текст ошибки загрузки
pub const MSG_FETCH_FAILED: &str = "Erro ao buscar dados da empresa";

/// Заголовок столбца с названием поля
pub const HEADER_FIELD: &str = "Campo";
/// Заголовок столбца со значением
pub const HEADER_VALUE: &str = "Valor";
