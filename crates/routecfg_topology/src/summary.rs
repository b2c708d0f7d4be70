//! Plain-text topology summary.

use crate::model::Topology;

/// Renders the per-switch connection counts and root tally.
pub fn render_summary(topology: &Topology) -> String {
    let mut out = String::new();
    out.push_str("=== Topology Summary ===\n");
    out.push_str(&format!("Switches: {}\n", topology.switches.len()));

    for sw in &topology.switches {
        out.push_str(&format!(
            "  Switch {} (Root: {}): {} connections\n",
            sw.id,
            if sw.is_root { "Yes" } else { "No" },
            sw.connections.len()
        ));
    }

    out.push_str(&format!(
        "Total connections: {}\n",
        topology.total_connections()
    ));
    out.push_str(&format!("Root switches: {}\n", topology.root_count()));
    out.push_str("======================\n");
    out
}
