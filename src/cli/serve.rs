use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, info, scheduler, server, types::PkceToken};

pub async fn serve() {
    let state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));

    info!("Server listening on {}", config::server_addr());
    tokio::select! {
        _ = server::start_api_server(Arc::clone(&state)) => {},
        _ = scheduler::run_daily_trigger() => {},
    }
}
