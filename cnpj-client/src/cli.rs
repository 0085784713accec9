use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use crate::config::{self, ClientConfig};

/// Consulta de CNPJ - поиск компании по CNPJ через внешний API.
///
/// Без --cnpj запускается интерактивная форма: каждая строка ввода
/// считается нажатием "Buscar Empresa".
#[derive(Parser, Debug, Clone)]
#[command(name = "cnpj-lookup", version, about)]
pub(crate) struct Args {
    /// Один поиск и выход, например 11.222.333/0001-81
    #[arg(long)]
    pub(crate) cnpj: Option<String>,

    /// Базовый URL API, к нему добавляется /<cnpj>/perfil/
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    pub(crate) base_url: String,

    /// Таймаут HTTP-запроса в секундах (по умолчанию без таймаута)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) timeout_secs: Option<u64>,
}

impl Args {
    /// Валидация аргументов, которые clap сам не проверяет
    pub(crate) fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            bail!("--base-url is empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("--base-url must start with http:// or https:// (got: {})", self.base_url);
        }

        Ok(())
    }

    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.trim().to_string(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cnpj-lookup").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_point_to_public_api_without_timeout() {
        let args = parse(&[]);
        args.validate().unwrap();

        let cfg = args.client_config();
        assert_eq!(cfg.base_url, config::DEFAULT_BASE_URL);
        assert!(cfg.timeout.is_none());
        assert!(args.cnpj.is_none());
    }

    #[test]
    fn timeout_and_base_url_are_applied() {
        let args = parse(&["--base-url", " http://127.0.0.1:8080/api ", "--timeout-secs", "3"]);
        args.validate().unwrap();

        let cfg = args.client_config();
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let err = parse(&["--base-url", "ftp://example.com"]).validate().unwrap_err();
        assert!(err.to_string().contains("http://"));

        assert!(parse(&["--base-url", "  "]).validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected_by_clap() {
        let res = Args::try_parse_from(["cnpj-lookup", "--timeout-secs", "0"]);
        assert!(res.is_err());
    }
}
