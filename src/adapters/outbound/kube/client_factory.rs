use http::Uri;
use kube::{Client, Config};
use secrecy::SecretString;

use crate::shared::error::AuditError;
use crate::shared::Result;

/// Connection options for the cluster client.
///
/// `server` and `token` must be provided together; with neither, the
/// client configuration is inferred from the environment (kubeconfig or
/// in-cluster service account).
#[derive(Debug, Clone, Default)]
pub struct ClusterConnectOptions {
    pub server: Option<String>,
    pub token: Option<String>,
}

/// Creates an authenticated Kubernetes client.
///
/// With explicit options the server certificate is not verified, matching
/// the ad-hoc token/server flow this tool is used with against lab
/// clusters. Inferred configuration keeps whatever trust settings the
/// kubeconfig declares.
pub async fn create_client(options: &ClusterConnectOptions) -> Result<Client> {
    let config = match (&options.server, &options.token) {
        (Some(server), Some(token)) => {
            let cluster_url: Uri =
                server
                    .parse()
                    .map_err(|e: http::uri::InvalidUri| AuditError::ClientConfig {
                        details: format!("invalid server URL {}: {}", server, e),
                    })?;
            let mut config = Config::new(cluster_url);
            config.auth_info.token = Some(SecretString::from(token.clone()));
            config.accept_invalid_certs = true;
            config
        }
        (None, None) => Config::infer().await.map_err(|e| AuditError::ClientConfig {
            details: e.to_string(),
        })?,
        _ => {
            return Err(AuditError::ClientConfig {
                details: "--server and --token must be provided together".to_string(),
            }
            .into());
        }
    };

    Client::try_from(config).map_err(|e| {
        AuditError::ClientConfig {
            details: e.to_string(),
        }
        .into()
    })
}
