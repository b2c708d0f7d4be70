//! `routecfg generate` — YAML topology to binary routing configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use routecfg_format::encode_config;
use routecfg_topology::{build_config, parse_topology, render_summary};
use tracing::info;

use crate::files::{read_input, write_output};
use crate::{GenerateArgs, GlobalArgs};

/// Runs the `routecfg generate` command.
///
/// With `--summary`, prints the topology summary to stdout and stops.
/// Otherwise the topology is validated, converted and written; nothing is
/// written if any step fails.
pub fn run(args: &GenerateArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let raw = read_input(&args.topology)?;
    let text = String::from_utf8(raw).map_err(|e| format!("{}: {e}", args.topology))?;
    let topology = parse_topology(&text).map_err(|e| format!("{}: {e}", args.topology))?;

    if args.summary {
        print!("{}", render_summary(&topology));
        return Ok(0);
    }

    let timestamp = args.timestamp.unwrap_or_else(now);
    let config =
        build_config(&topology, timestamp).map_err(|e| format!("{}: {e}", args.topology))?;
    let data = encode_config(&config);

    info!("input: {}", args.topology);
    info!(
        "{} switches, {} connections",
        topology.switches.len(),
        config.records.len()
    );
    write_output(&args.output, &data)?;
    info!("output: {} ({} bytes)", args.output, data.len());
    Ok(0)
}

/// Seconds since the epoch, truncated to the header's 32-bit field.
fn now() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use routecfg_format::decode_config;
    use routecfg_topology::CONFIG_MAGIC;
    use std::fs;
    use tempfile::TempDir;

    const TOPOLOGY: &str = "\
switches:
  - id: 3
    root: true
    connections:
      - host_id: 7
        my_ip: 192.168.1.1
        my_mac: \"02:00:00:00:00:01\"
        my_port: 1000
        my_qp: 1
        peer_ip: 192.168.1.2
        peer_mac: \"02:00:00:00:00:02\"
        peer_port: 2000
        peer_qp: 2
        up: true
";

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        }
    }

    fn args(dir: &TempDir, summary: bool) -> GenerateArgs {
        GenerateArgs {
            topology: dir.path().join("topology.yaml").to_str().unwrap().to_string(),
            output: dir.path().join("out.bin").to_str().unwrap().to_string(),
            summary,
            timestamp: Some(99),
        }
    }

    #[test]
    fn writes_decodable_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("topology.yaml"), TOPOLOGY).unwrap();
        let code = run(&args(&tmp, false), &global()).unwrap();
        assert_eq!(code, 0);

        let data = fs::read(tmp.path().join("out.bin")).unwrap();
        let config = decode_config(&data).unwrap();
        assert_eq!(config.header.magic, CONFIG_MAGIC);
        assert_eq!(config.header.timestamp, 99);
        assert_eq!(config.records.len(), 1);
        assert_eq!(config.records[0].switch_id, 3);
        assert_eq!(config.records[0].host_id, 7);
    }

    #[test]
    fn summary_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("topology.yaml"), TOPOLOGY).unwrap();
        run(&args(&tmp, true), &global()).unwrap();
        assert!(!tmp.path().join("out.bin").exists());
    }

    #[test]
    fn summary_skips_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("topology.yaml"), "switches: []\n").unwrap();
        assert_eq!(run(&args(&tmp, true), &global()).unwrap(), 0);
    }

    #[test]
    fn missing_root_fails_without_output() {
        let tmp = TempDir::new().unwrap();
        let yaml = TOPOLOGY.replace("root: true", "root: false");
        fs::write(tmp.path().join("topology.yaml"), yaml).unwrap();
        let err = run(&args(&tmp, false), &global()).unwrap_err();
        assert!(
            err.to_string()
                .contains("must have exactly one root switch (found 0)"),
            "{err}"
        );
        assert!(!tmp.path().join("out.bin").exists());
    }

    #[test]
    fn missing_topology_names_file() {
        let tmp = TempDir::new().unwrap();
        let err = run(&args(&tmp, false), &global()).unwrap_err();
        assert!(err.to_string().contains("topology.yaml"));
    }

    #[test]
    fn clock_is_after_2020() {
        assert!(now() > 1_577_836_800);
    }
}
