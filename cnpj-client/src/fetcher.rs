use std::sync::Arc;
use std::thread;

use anyhow::Context;
use cnpj_core::{Cnpj, CompanyProfile, FetchError};
use crossbeam_channel::Sender;
use log::{debug, warn};

use crate::app::Event;

/// Источник профилей. В проде - HTTP, в тестах - заглушки.
pub(crate) trait ProfileSource: Send + Sync + 'static {
    fn fetch_profile(&self, cnpj: &Cnpj) -> Result<CompanyProfile, FetchError>;
}

/// Запускает запросы в отдельных потоках и возвращает результат
/// в цикл событий как `Event::Fetched`.
///
/// Один dispatch = ровно один запрос, без повторов и без отмены.
pub(crate) struct Fetcher<S> {
    source: Arc<S>,
    events: Sender<Event>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl<S: ProfileSource> Fetcher<S> {
    pub(crate) fn new(source: Arc<S>, events: Sender<Event>) -> Self {
        Self {
            source,
            events,
            workers: Vec::new(),
        }
    }

    pub(crate) fn dispatch(&mut self, key: Cnpj) -> anyhow::Result<()> {
        let source = self.source.clone();
        let events = self.events.clone();

        let h = thread::Builder::new()
            .name(format!("fetch-{key}"))
            .spawn(move || {
                let result = source.fetch_profile(&key);
                match &result {
                    Ok(_) => debug!("profile {key} fetched"),
                    Err(e) => warn!("profile {key} lookup failed: {e}"),
                }

                if events.send(Event::Fetched { key, result }).is_err() {
                    debug!("event loop is gone; dropping fetch result");
                }
            })
            .context("spawn fetch worker")?;

        self.workers.push(h);
        Ok(())
    }

    /// Собирает завершившиеся потоки; зависшие остаются в списке.
    pub(crate) fn reap_finished(&mut self) {
        let mut i = 0;
        while i < self.workers.len() {
            if self.workers[i].is_finished() {
                let h = self.workers.swap_remove(i);
                if let Err(panic) = h.join() {
                    warn!("fetch worker panicked: {:?}", panic);
                }
            } else {
                i += 1;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn workers(&self) -> usize {
        self.workers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    struct NotFoundSource {
        calls: AtomicUsize,
    }

    impl ProfileSource for NotFoundSource {
        fn fetch_profile(&self, _cnpj: &Cnpj) -> Result<CompanyProfile, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::NotFound { status: 404 })
        }
    }

    #[test]
    fn dispatch_sends_result_tagged_with_key() {
        let source = Arc::new(NotFoundSource {
            calls: AtomicUsize::new(0),
        });
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut fetcher = Fetcher::new(source.clone(), tx);

        let key = Cnpj::parse("11222333000181").unwrap();
        fetcher.dispatch(key.clone()).unwrap();

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Event::Fetched { key: got, result } => {
                assert_eq!(got, key);
                assert!(matches!(result, Err(FetchError::NotFound { status: 404 })));
            }
            _ => panic!("expected Fetched event"),
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reap_finished_joins_completed_workers() {
        let source = Arc::new(NotFoundSource {
            calls: AtomicUsize::new(0),
        });
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut fetcher = Fetcher::new(source, tx);

        fetcher.dispatch(Cnpj::parse("11222333000181").unwrap()).unwrap();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();

        // поток уже отправил событие, но мог ещё не завершиться
        let deadline = Instant::now() + Duration::from_secs(5);
        while fetcher.workers() > 0 && Instant::now() < deadline {
            fetcher.reap_finished();
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(fetcher.workers(), 0);
    }
}
