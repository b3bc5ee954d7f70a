use std::{io::Write, sync::Arc};

use error_stack::ResultExt;
use thiserror::Error;
use tracing::instrument;

use crate::{
    ports::{ApplicationService, PortfolioRequest},
    prettyprint::balance_table::render_balances,
};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to fetch balances")]
    PortfolioFailed,

    #[error("Failed to write the balance table")]
    OutputFailed,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to install the log subscriber")]
    LoggingSetupFailed,
}

pub struct CliAdapter {
    application_service: Arc<dyn ApplicationService>,
    btc_precision: u32,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("application_service", &"<ApplicationService>")
            .field("btc_precision", &self.btc_precision)
            .finish()
    }
}

impl CliAdapter {
    pub fn new(application_service: Arc<dyn ApplicationService>, btc_precision: u32) -> Self {
        Self {
            application_service,
            btc_precision,
        }
    }

    /// Fetches the portfolio and writes its table to `writer`. Nothing is written
    /// when the fetch fails.
    #[instrument(skip_all)]
    pub async fn run<W: Write>(
        &self,
        request: &PortfolioRequest,
        writer: &mut W,
    ) -> error_stack::Result<(), CliError> {
        let balances = self
            .application_service
            .portfolio(request)
            .await
            .change_context(CliError::PortfolioFailed)?;

        tracing::info!("✅ {} balances fetched", balances.len());

        render_balances(writer, &balances, self.btc_precision)
            .change_context(CliError::OutputFailed)
    }
}
