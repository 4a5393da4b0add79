#![forbid(unsafe_code)]

use chunk_stream::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env 不存在时忽略，环境变量优先
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("chunk-stream: {err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = chunk_stream::serve(cfg).await {
        eprintln!("chunk-stream: {err}");
        std::process::exit(1);
    }
}
