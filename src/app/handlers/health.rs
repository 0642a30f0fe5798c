/// Liveness probe. Never touches the upstream.
pub async fn health() -> &'static str {
    "OK"
}
