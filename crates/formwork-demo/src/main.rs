//! formwork-demo server
//!
//! Serves the single-page listbox form demo.
//! Run with: cargo run -p formwork-demo
//! Then visit: http://localhost:3000/

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use formwork_router::{parse_urlencoded, Method, Request, Router};

mod app;
mod page;

/// Single-page listbox form demo.
#[derive(Parser)]
#[command(name = "formwork-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(short, long, default_value = "127.0.0.1")]
    addr: String,

    /// Port to bind.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

async fn handle_request(
    req: HyperRequest<hyper::body::Incoming>,
    router: Arc<Router>,
) -> Result<HyperResponse<Full<Bytes>>, Infallible> {
    use http_body_util::BodyExt;

    let method = Method::parse(req.method().as_str()).unwrap_or(Method::Get);
    let path = req.uri().path().to_string();

    let mut request = Request::new(method, path);

    if let Some(query) = req.uri().query() {
        request.query = parse_urlencoded(query);
    }

    for (key, value) in req.headers() {
        if let Ok(v) = value.to_str() {
            request.headers.insert(key.to_string(), v.to_string());
        }
    }

    let body_bytes = req
        .collect()
        .await
        .map(|b| b.to_bytes())
        .unwrap_or_default();
    request.body = body_bytes.to_vec();

    let res = router.handle(request).await;

    let mut builder = HyperResponse::builder()
        .status(StatusCode::from_u16(res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in &res.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    let response = builder.body(Full::new(Bytes::from(res.body))).unwrap();

    Ok(response)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let addr: SocketAddr = format!("{}:{}", cli.addr, cli.port).parse()?;
    let router = Arc::new(app::build_router());

    let listener = TcpListener::bind(addr).await?;
    info!("Listbox demo running at http://{addr}/");

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let router = router.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let router = router.clone();
                handle_request(req, router)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!("error serving connection: {err:?}");
            }
        });
    }
}
