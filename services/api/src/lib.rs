mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use decision_dss::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
