//! Точка входа `cnpj-lookup`.
//!
//! Жизненный цикл:
//! - парсинг CLI и сборка HTTP-клиента
//! - `--cnpj`: один поиск, вывод результата, код выхода по итогу
//! - иначе интерактивная форма: поток чтения stdin + цикл событий
//! - запросы уходят в отдельные потоки, ответы возвращаются событиями
//! - корректная остановка по `Ctrl+C` и EOF

mod app;
mod cli;
mod config;
mod fetcher;
mod http;
mod input;
mod render;

use std::io::{self, BufReader};
use std::sync::Arc;

use clap::Parser;
use log::info;

use crate::app::{App, Event};
use crate::render::Screen;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let cfg = args.client_config();
    info!(
        "Starting cnpj-lookup: base_url={}, timeout={:?}",
        cfg.base_url, cfg.timeout
    );

    let source = Arc::new(http::ProfileClient::new(&cfg)?);
    let (tx, rx) = crossbeam_channel::unbounded();

    // Ctrl+C => событие Shutdown в общий цикл
    {
        let tx = tx.clone();
        ctrlc::set_handler(move || {
            info!("shutting down...");
            let _ = tx.send(Event::Shutdown);
        })?;
    }

    let screen = Screen::new(io::stdout(), io::stderr());

    match args.cnpj {
        Some(raw) => {
            let mut app = App::new(source, tx, screen, false);
            app.run_once(raw, &rx)
        }
        None => {
            input::spawn_line_reader(BufReader::new(io::stdin()), tx.clone())?;
            let mut app = App::new(source, tx, screen, true);
            app.run(&rx)
        }
    }
}
