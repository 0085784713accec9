use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;

pub const PROFILE_BODY: &str = r#"{
    "empresa": { "razaoSocial": "ACME LTDA", "porte": "ME", "capitalSocial": "10000" },
    "estabelecimento": { "nomeFantasia": "" },
    "natureza": { "descricao": "Sociedade Empresária" },
    "municipio": { "nome": "São Paulo" },
    "cnaePrincipal": { "descricao": "Comércio varejista" }
}"#;

pub fn cmd() -> Command {
    cargo_bin_cmd!("cnpj-lookup")
}

/// Локальный API: отвечает на `requests` запросов одним и тем же.
/// join() отдаёт строки запросов.
pub struct FakeApi {
    pub base_url: String,
    handle: thread::JoinHandle<Vec<String>>,
}

impl FakeApi {
    pub fn serve(status: &str, body: &str, requests: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake api");
        let addr = listener.local_addr().expect("fake api addr");

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for _ in 0..requests {
                let (mut stream, _) = listener.accept().expect("accept");
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

                let mut request_line = String::new();
                reader.read_line(&mut request_line).expect("read request line");
                loop {
                    let mut line = String::new();
                    let n = reader.read_line(&mut line).expect("read header");
                    if n == 0 || line == "\r\n" {
                        break;
                    }
                }

                stream.write_all(response.as_bytes()).expect("write response");
                stream.flush().ok();
                seen.push(request_line.trim_end().to_string());
            }
            seen
        });

        Self {
            base_url: format!("http://{addr}/empresas"),
            handle,
        }
    }

    pub fn requests(self) -> Vec<String> {
        self.handle.join().expect("fake api thread")
    }
}
