//! Backend Binary
//!
//! Loads the model artifact once and serves predictions.
//! Runs on BIND_ADDR (default 127.0.0.1:8000).

#[tokio::main]
async fn main() {
    iris_core::log();
    iris_core::kys();
    iris_server::run().await.unwrap();
}
