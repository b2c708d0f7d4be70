//! Topology YAML through to the on-disk layout and back.

use routecfg_format::{decode_config, encode_config, HEADER_SIZE, RECORD_SIZE};
use routecfg_topology::{build_config, parse_topology, TopologyError, CONFIG_MAGIC};

const LAB: &str = r#"
switches:
  - id: 1
    root: true
    connections:
      - host_id: 100
        my_ip: 10.1.0.1
        my_mac: "02:00:00:00:01:01"
        my_port: 4791
        my_qp: 17
        peer_ip: 10.1.0.2
        peer_mac: "02:00:00:00:01:02"
        peer_port: 4791
        peer_qp: 18
        up: true
  - id: 2
    connections:
      - host_id: 200
        my_ip: 10.2.0.1
        my_mac: "02:00:00:00:02:01"
        my_port: 4792
        my_qp: 33
        peer_ip: 10.2.0.2
        peer_mac: "02:00:00:00:02:02"
        peer_port: 4792
        peer_qp: 34
        up: false
"#;

#[test]
fn generated_file_decodes() {
    let topo = parse_topology(LAB).unwrap();
    let data = encode_config(&build_config(&topo, 42).unwrap());
    assert_eq!(data.len(), HEADER_SIZE + 2 * RECORD_SIZE);

    let config = decode_config(&data).unwrap();
    assert_eq!(config.header.magic, CONFIG_MAGIC);
    assert_eq!(config.header.total_connections, 2);
    assert_eq!(config.header.timestamp, 42);

    let second = &config.records[1];
    assert_eq!(second.switch_id, 2);
    assert_eq!(second.host_id, 200);
    assert_eq!(second.local_addr().to_string(), "10.2.0.1");
    assert_eq!(second.peer_addr().to_string(), "10.2.0.2");
    assert_eq!((second.local_port, second.peer_port), (4792, 4792));
    assert_eq!((second.local_qp, second.peer_qp), (33, 34));
}

#[test]
fn record_tail_layout() {
    let topo = parse_topology(LAB).unwrap();
    let data = encode_config(&build_config(&topo, 0).unwrap());

    let first = &data[HEADER_SIZE..HEADER_SIZE + RECORD_SIZE];
    assert_eq!(first[24], 1);
    assert_eq!(&first[25..31], &[0x02, 0, 0, 0, 0x01, 0x01]);
    assert_eq!(&first[31..37], &[0x02, 0, 0, 0, 0x01, 0x02]);
    assert_eq!(&first[37..42], &[0; 5]);

    let second = &data[HEADER_SIZE + RECORD_SIZE..];
    assert_eq!(second[24], 0);
}

#[test]
fn second_root_fails_before_encoding() {
    let yaml = LAB.replace("  - id: 2\n", "  - id: 2\n    root: true\n");
    let topo = parse_topology(&yaml).unwrap();
    assert_eq!(topo.root_count(), 2);
    assert!(matches!(
        build_config(&topo, 0),
        Err(TopologyError::RootCount { found: 2 })
    ));
}
