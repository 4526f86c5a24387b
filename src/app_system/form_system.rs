use tracing::{error, info};

use crate::clients::{ItemClient, OrderClient};
use crate::config::Config;
use crate::controller::FormSyncClient;
use crate::rest_framework::HttpActor;

/// Starts the HTTP actor and wires the clients and controller to it.
pub struct FormSystem {
    pub controller: FormSyncClient,
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    pub fn new(config: &Config) -> Self {
        info!(base_url = %config.base_url, buffer_size = config.buffer_size, "Starting form system");

        let (http_actor, rest_client) = HttpActor::new(config.buffer_size, config.base_url.clone());
        let handle = tokio::spawn(http_actor.run());

        let orders = OrderClient::new(rest_client.clone());
        let items = ItemClient::new(rest_client);

        Self {
            controller: FormSyncClient::new(orders, items),
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The actor exits once every client handle is gone.
        drop(self.controller);

        if let Err(e) = self.handle.await {
            error!("HTTP actor task failed: {:?}", e);
            return Err(format!("HTTP actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
