//! Human-readable inspection report for a decoded configuration.
//!
//! Produces output like:
//! ```text
//! Magic: 0x46504741 (FPGA)
//! Version: 1
//! Total connections: 1
//! Timestamp: 0
//!
//! Connection 0:
//!   Switch ID: 5, Host ID: 10
//!   Local IP: 0xc0a80001 (192.168.0.1), Peer IP: 0xc0a80002 (192.168.0.2)
//!   Ports: local=1000, peer=2000
//!   QPs: local=1, peer=2
//! ```

use crate::config::RoutingConfig;
use crate::record::ConnectionRecord;

/// Options controlling the text report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append each record's reserved bytes as a hex string.
    pub show_reserved: bool,
}

/// Renders the header and every record as a multi-line text report.
pub fn render_text(config: &RoutingConfig, options: &ReportOptions) -> String {
    let header = &config.header;
    let mut out = String::new();

    out.push_str(&format!(
        "Magic: {:#010x} ({})\n",
        header.magic,
        header.magic_chars()
    ));
    out.push_str(&format!("Version: {}\n", header.version));
    out.push_str(&format!("Total connections: {}\n", header.total_connections));
    out.push_str(&format!("Timestamp: {}\n", header.timestamp));

    for (index, record) in config.records.iter().enumerate() {
        out.push('\n');
        render_record(&mut out, index, record, options);
    }

    out
}

fn render_record(out: &mut String, index: usize, rec: &ConnectionRecord, options: &ReportOptions) {
    out.push_str(&format!("Connection {index}:\n"));
    out.push_str(&format!(
        "  Switch ID: {}, Host ID: {}\n",
        rec.switch_id, rec.host_id
    ));
    out.push_str(&format!(
        "  Local IP: {:#010x} ({}), Peer IP: {:#010x} ({})\n",
        rec.local_ip,
        rec.local_addr(),
        rec.peer_ip,
        rec.peer_addr()
    ));
    out.push_str(&format!(
        "  Ports: local={}, peer={}\n",
        rec.local_port, rec.peer_port
    ));
    out.push_str(&format!(
        "  QPs: local={}, peer={}\n",
        rec.local_qp, rec.peer_qp
    ));

    if options.show_reserved {
        let hex: String = rec.reserved.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&format!("  Reserved: {hex}\n"));
    }
}
