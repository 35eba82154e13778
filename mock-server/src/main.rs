use mock_server::{MockResponse, MockServer};
use tokio::net::TcpListener;

const TONE_FIXTURE: &str = include_str!("../../test-vectors/fixtures/tone.json");
const TONE_CHAT_FIXTURE: &str = include_str!("../../test-vectors/fixtures/tone_chat.json");

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");

    let server = MockServer::new();
    server.set_default("/v3/tone", MockResponse::raw_json(TONE_FIXTURE));
    server.set_default("/v3/tone_chat", MockResponse::raw_json(TONE_CHAT_FIXTURE));

    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, server).await
}
