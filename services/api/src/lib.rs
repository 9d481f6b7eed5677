mod cli;
mod infra;
mod routes;
mod score;
mod server;

use tci::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
