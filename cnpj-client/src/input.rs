use std::io::BufRead;
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, warn};

use crate::app::Event;

/// Поток чтения ввода: каждая строка -> `Event::Input`, в конце `InputClosed`.
pub(crate) fn spawn_line_reader<R>(reader: R, events: Sender<Event>) -> std::io::Result<thread::JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new().name("input".into()).spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if events.send(Event::Input(line)).is_err() {
                        debug!("event loop is gone; stop reading input");
                        return;
                    }
                }
                Err(e) => {
                    warn!("input read error: {e}");
                    break;
                }
            }
        }

        let _ = events.send(Event::InputClosed);
    })
}
