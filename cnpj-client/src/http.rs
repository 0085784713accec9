use anyhow::Context;
use cnpj_core::{Cnpj, CompanyProfile, FetchError};
use log::debug;
use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::fetcher::ProfileSource;

/// HTTP-клиент эндпоинта профилей: `GET {base}/{cnpj}/perfil/`
pub(crate) struct ProfileClient {
    http: Client,
    base_url: String,
}

impl ProfileClient {
    pub(crate) fn new(cfg: &ClientConfig) -> anyhow::Result<Self> {
        // timeout(None) явно: у blocking-клиента по умолчанию 30 секунд
        let http = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn profile_url(&self, cnpj: &Cnpj) -> String {
        format!("{}/{}/perfil/", self.base_url, cnpj)
    }
}

impl ProfileSource for ProfileClient {
    fn fetch_profile(&self, cnpj: &Cnpj) -> Result<CompanyProfile, FetchError> {
        let url = self.profile_url(cnpj);
        debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // любой не-2xx статус = "не найдено"
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::NotFound {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        CompanyProfile::from_json(&body)
    }
}
