use std::io::Write;
use std::sync::Arc;

use cnpj_core::constants::MSG_FETCH_FAILED;
use cnpj_core::{
    Cnpj, CompanyProfile, FetchError, FetchState, ProfileQuery, Resolution, SearchForm,
    ValidationError, render,
};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, info};
use thiserror::Error;

use crate::config::EVENT_TICK;
use crate::fetcher::{Fetcher, ProfileSource};
use crate::render::Screen;

/// Всё, что может разбудить цикл событий
#[derive(Debug)]
pub(crate) enum Event {
    /// Строка из поля ввода = ввод + нажатие кнопки
    Input(String),
    /// stdin закрыт
    InputClosed,
    /// Ответ воркера по ключу `key`
    Fetched {
        key: Cnpj,
        result: Result<CompanyProfile, FetchError>,
    },
    /// Ctrl+C
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Итог нажатия кнопки
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Submitted {
    Rejected(ValidationError),
    Searching(Cnpj),
}

/// Ошибки одноразового режима (`--cnpj`)
#[derive(Debug, Error)]
pub(crate) enum LookupError {
    #[error("{}", .0.user_message())]
    Invalid(ValidationError),

    #[error("{}", MSG_FETCH_FAILED)]
    Failed,

    #[error("interrupted before the lookup finished")]
    Interrupted,
}

/// Форма поиска в терминале. Всё состояние живёт в одном потоке,
/// остальные потоки только шлют `Event`.
pub(crate) struct App<S, O, E> {
    form: SearchForm,
    query: ProfileQuery,
    fetcher: Fetcher<S>,
    screen: Screen<O, E>,
    interactive: bool,
    input_closed: bool,
}

impl<S, O, E> App<S, O, E>
where
    S: ProfileSource,
    O: Write,
    E: Write,
{
    pub(crate) fn new(
        source: Arc<S>,
        events: Sender<Event>,
        screen: Screen<O, E>,
        interactive: bool,
    ) -> Self {
        Self {
            form: SearchForm::new(),
            query: ProfileQuery::new(),
            fetcher: Fetcher::new(source, events),
            screen,
            interactive,
            input_closed: false,
        }
    }

    pub(crate) fn state(&self) -> &FetchState {
        self.query.state()
    }

    /// Интерактивный цикл: до EOF (с дожиданием ответа) или Ctrl+C.
    pub(crate) fn run(&mut self, events: &Receiver<Event>) -> anyhow::Result<()> {
        self.screen.title()?;
        self.screen.prompt(false)?;

        loop {
            match events.recv_timeout(EVENT_TICK) {
                Ok(ev) => {
                    if self.handle(ev)? == Flow::Exit {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => self.fetcher.reap_finished(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(())
    }

    /// Один поиск: отправить ввод и дождаться ответа по нему.
    pub(crate) fn run_once(&mut self, raw: String, events: &Receiver<Event>) -> anyhow::Result<()> {
        if let Submitted::Rejected(e) = self.submit(raw)? {
            return Err(LookupError::Invalid(e).into());
        }

        while self.query.is_loading() {
            match events.recv_timeout(EVENT_TICK) {
                Ok(Event::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                    return Err(LookupError::Interrupted.into());
                }
                Ok(ev) => {
                    self.handle(ev)?;
                }
                Err(RecvTimeoutError::Timeout) => self.fetcher.reap_finished(),
            }
        }

        match self.state() {
            FetchState::Error => Err(LookupError::Failed.into()),
            _ => Ok(()),
        }
    }

    pub(crate) fn handle(&mut self, ev: Event) -> anyhow::Result<Flow> {
        match ev {
            Event::Input(line) => {
                self.submit(line)?;
            }
            Event::InputClosed => {
                debug!("input closed");
                self.input_closed = true;
            }
            Event::Fetched { key, result } => match self.query.resolve(&key, result) {
                Resolution::Stale => debug!("discarding stale response for {key}"),
                Resolution::Applied => {
                    self.screen.view(&render(self.query.state()))?;
                    self.prompt()?;
                }
            },
            Event::Shutdown => return Ok(Flow::Exit),
        }

        // после EOF ждём только ответ по текущему ключу
        if self.input_closed && !self.query.is_loading() {
            return Ok(Flow::Exit);
        }
        Ok(Flow::Continue)
    }

    /// Нажатие "Buscar Empresa" с текстом `line` в поле.
    pub(crate) fn submit(&mut self, line: String) -> anyhow::Result<Submitted> {
        self.form.on_input_change(line);

        let key = match self.form.on_submit().cloned() {
            Ok(key) => key,
            Err(e) => {
                debug!("rejected input {:?}: {e}", self.form.raw_input());
                self.screen.notice(e.user_message(), &self.form.masked_input())?;
                self.prompt()?;
                return Ok(Submitted::Rejected(e));
            }
        };

        info!("searching {}", key.masked());
        if let Some(dispatch) = self.query.submit(key.clone()) {
            self.fetcher.dispatch(dispatch)?;
        } else {
            debug!("request for {key} already in flight");
        }

        self.screen.searching(&key)?;
        self.screen.view(&render(self.query.state()))?;
        self.prompt()?;
        Ok(Submitted::Searching(key))
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        if self.interactive {
            self.screen.prompt(self.query.is_loading())?;
        }
        Ok(())
    }
}
