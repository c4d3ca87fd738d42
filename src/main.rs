#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::server::SiteError> {
    use portfolio_site::server;

    server::init_tracing();
    server::serve().await.inspect_err(|e| tracing::error!("{e}"))
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
