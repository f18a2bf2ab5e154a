use crate::{
    client::BackendClient,
    config::{DataSource, SiteConfig, BACKEND_URL_VAR},
    portfolio::{DataLoadError, PortfolioDocument, PORTFOLIO_PATH},
};

/// The one place the page document comes from.
#[derive(Debug, Clone)]
pub enum PortfolioProvider {
    Embedded,
    Remote(BackendClient),
    /// Remote source selected without a backend URL. Only fails when asked to
    /// load, so the rest of the site keeps serving.
    Unconfigured,
}

impl PortfolioProvider {
    pub fn from_config(config: &SiteConfig) -> Result<Self, DataLoadError> {
        match (config.source, &config.backend_url) {
            (DataSource::Embedded, _) => Ok(Self::Embedded),
            (DataSource::Remote, None) => Ok(Self::Unconfigured),
            (DataSource::Remote, Some(url)) => BackendClient::new(url.as_str(), config.backend_timeout)
                .map(Self::Remote)
                .map_err(|e| DataLoadError::Request {
                    url: format!("{url}{PORTFOLIO_PATH}"),
                    message: e.to_string(),
                }),
        }
    }

    pub async fn load(&self) -> Result<PortfolioDocument, DataLoadError> {
        let res = match self {
            Self::Embedded => PortfolioDocument::embedded(),
            Self::Remote(client) => client.fetch_portfolio().await,
            Self::Unconfigured => Err(DataLoadError::Unconfigured {
                variable: BACKEND_URL_VAR.to_string(),
            }),
        };
        if let Err(e) = &res {
            tracing::error!(target_url = e.target_url(), "portfolio load failed: {e}");
        }
        res
    }
}
