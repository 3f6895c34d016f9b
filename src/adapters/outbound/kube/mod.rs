/// Cluster API adapters built on kube.
pub mod client_factory;
pub mod route_lister;
pub mod workload_lister;

pub use client_factory::{create_client, ClusterConnectOptions};
pub use route_lister::KubeRouteLister;
pub use workload_lister::KubeWorkloadLister;
