//! Cluster health formatter.

use es_client::{ClusterHealth, ClusterStatus};

/// Indicator emoji for a cluster status.
pub fn health_indicator(status: &ClusterStatus) -> &'static str {
    match status {
        ClusterStatus::Green => "🟢",
        ClusterStatus::Yellow => "🟡",
        ClusterStatus::Other(_) => "🔴",
    }
}

/// Format the cluster health summary followed by a blank line.
pub fn format_health(health: &ClusterHealth) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} Cluster: {}\n",
        health_indicator(&health.status),
        health.cluster_name
    ));
    output.push_str(&format!("   Status: {}\n", health.status));
    output.push_str(&format!("   Nodes: {}\n", health.number_of_nodes));
    output.push_str(&format!(
        "   Active Primary Shards: {}\n",
        health.active_primary_shards
    ));
    output.push('\n');
    output
}
