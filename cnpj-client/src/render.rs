use std::io::{self, Write};

use cnpj_core::constants::{
    CNPJ_PLACEHOLDER, HEADER_FIELD, HEADER_VALUE, SUBMIT_BUSY_LABEL, SUBMIT_LABEL, TITLE,
};
use cnpj_core::{Cnpj, Row, View};

const PLACEHOLDER_BAR: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";

/// Терминальная "страница": основной вывод + канал уведомлений (toast).
pub(crate) struct Screen<O, E> {
    pub(crate) out: O,
    pub(crate) err: E,
}

impl<O: Write, E: Write> Screen<O, E> {
    pub(crate) fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub(crate) fn title(&mut self) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{}", "=".repeat(TITLE.chars().count()))?;
        self.out.flush()
    }

    /// Подпись кнопки меняется, пока запрос в полёте
    pub(crate) fn prompt(&mut self, busy: bool) -> io::Result<()> {
        let label = if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL };
        write!(self.out, "[{label}] CNPJ ({CNPJ_PLACEHOLDER}): ")?;
        self.out.flush()
    }

    /// Уведомление об ошибке ввода; `input` - введённое в виде маски
    pub(crate) fn notice(&mut self, message: &str, input: &str) -> io::Result<()> {
        if input.is_empty() {
            writeln!(self.err, "! {message}")?;
        } else {
            writeln!(self.err, "! {message} ({input})")?;
        }
        self.err.flush()
    }

    pub(crate) fn searching(&mut self, cnpj: &Cnpj) -> io::Result<()> {
        writeln!(self.out, "CNPJ {}", cnpj.masked())
    }

    pub(crate) fn view(&mut self, view: &View) -> io::Result<()> {
        match view {
            View::Empty => {}
            View::Loading { placeholders } => {
                for _ in 0..*placeholders {
                    writeln!(self.out, "{PLACEHOLDER_BAR}")?;
                }
            }
            View::Error { message } => writeln!(self.out, "{message}")?,
            View::Table(rows) => write_table(&mut self.out, rows)?,
        }
        self.out.flush()
    }
}

fn write_table<W: Write>(w: &mut W, rows: &[Row]) -> io::Result<()> {
    // `{:<width$}` выравнивает по числу символов, не байтов
    let label_w = rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain([HEADER_FIELD.chars().count()])
        .max()
        .unwrap_or(0);
    let value_w = rows
        .iter()
        .map(|r| r.value.chars().count())
        .chain([HEADER_VALUE.chars().count()])
        .max()
        .unwrap_or(0);

    writeln!(w, "{HEADER_FIELD:<label_w$} | {HEADER_VALUE}")?;
    writeln!(w, "{}-+-{}", "-".repeat(label_w), "-".repeat(value_w))?;
    for row in rows {
        writeln!(w, "{:<label_w$} | {}", row.label, row.value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen<Vec<u8>, Vec<u8>> {
        Screen::new(Vec::new(), Vec::new())
    }

    fn out(s: &Screen<Vec<u8>, Vec<u8>>) -> String {
        String::from_utf8(s.out.clone()).unwrap()
    }

    #[test]
    fn empty_view_writes_nothing() {
        let mut s = screen();
        s.view(&View::Empty).unwrap();
        assert!(s.out.is_empty());
    }

    #[test]
    fn loading_view_writes_one_bar_per_placeholder() {
        let mut s = screen();
        s.view(&View::Loading { placeholders: 3 }).unwrap();
        assert_eq!(out(&s).lines().filter(|l| *l == PLACEHOLDER_BAR).count(), 3);
    }

    #[test]
    fn table_aligns_unicode_labels() {
        let mut s = screen();
        let rows = vec![
            Row {
                label: "Município",
                value: "São Paulo".into(),
            },
            Row {
                label: "Porte",
                value: "ME".into(),
            },
        ];
        s.view(&View::Table(rows)).unwrap();

        let text = out(&s);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Campo     | Valor");
        assert_eq!(lines[1], "----------+----------");
        assert_eq!(lines[2], "Município | São Paulo");
        assert_eq!(lines[3], "Porte     | ME");
    }

    #[test]
    fn notice_goes_to_error_stream() {
        let mut s = screen();
        s.notice("CNPJ inválido", "11.222.333/0001-0").unwrap();
        s.notice("Por favor, insira um CNPJ", "").unwrap();
        assert!(s.out.is_empty());
        assert_eq!(
            String::from_utf8(s.err).unwrap(),
            "! CNPJ inválido (11.222.333/0001-0)\n! Por favor, insira um CNPJ\n"
        );
    }

    #[test]
    fn prompt_switches_label_while_busy() {
        let mut s = screen();
        s.prompt(false).unwrap();
        assert!(out(&s).starts_with("[Buscar Empresa]"));

        let mut s = screen();
        s.prompt(true).unwrap();
        assert!(out(&s).starts_with("[Buscando...]"));
    }
}
