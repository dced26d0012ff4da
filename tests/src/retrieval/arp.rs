#![cfg(test)]
use std::collections::HashMap;

use async_trait::async_trait;
use netdiag_common::network::arp::ArpEntry;
use netdiag_common::session::{CommandSession, Vendor};
use netdiag_core::retriever::ArpRetriever;
use netdiag_protocols::arp_table;

/// Answers known commands from a transcript; anything else is an error, the
/// way a device rejects an unknown CLI command.
struct TranscriptSession {
    transcript: HashMap<&'static str, &'static str>,
    sent: Vec<String>,
}

impl TranscriptSession {
    fn new(transcript: &[(&'static str, &'static str)]) -> Self {
        Self {
            transcript: transcript.iter().copied().collect(),
            sent: Vec::new(),
        }
    }
}

#[async_trait]
impl CommandSession for TranscriptSession {
    async fn send_command(&mut self, command: &str) -> anyhow::Result<String> {
        self.sent.push(command.to_string());
        self.transcript
            .get(command)
            .map(|out| out.to_string())
            .ok_or_else(|| anyhow::anyhow!("% Invalid input detected at '^' marker."))
    }
}

const IOS_ARP: &str = "\
Protocol  Address          Age (min)  Hardware Addr   Type   Interface
Internet  10.0.0.1                -   0011.2233.4455  ARPA   GigabitEthernet0/0
Internet  10.0.0.20              12   aabb.ccdd.eeff  ARPA   GigabitEthernet0/1
Internet  10.0.0.21               0   Incomplete      ARPA
";

const EOS_ARP: &str = "\
Address         Age (sec)  Hardware Addr   Interface
172.16.1.1        0:00:14  001c.7300.0001  Vlan10, Ethernet1
172.16.1.2        0:01:02  001c.7300.0002  Vlan10, Ethernet2
";

#[tokio::test]
async fn cisco_ios_table_end_to_end() {
    let session = TranscriptSession::new(&[("show ip arp", IOS_ARP)]);
    let mut retriever = ArpRetriever::new(session, Vendor::CiscoIos);

    let entries = retriever.get_arp_table().await.unwrap();

    assert_eq!(
        entries,
        vec![
            ArpEntry::new("10.0.0.1", "0011.2233.4455", "GigabitEthernet0/0"),
            ArpEntry::new("10.0.0.20", "aabb.ccdd.eeff", "GigabitEthernet0/1"),
        ]
    );
    assert_eq!(retriever.into_session().sent, vec!["show ip arp"]);
}

#[tokio::test]
async fn arista_uses_its_own_command() {
    let session = TranscriptSession::new(&[("show arp", EOS_ARP)]);
    let mut retriever = ArpRetriever::new(session, Vendor::AristaEos);

    let entries = retriever.get_arp_table().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].ip, "172.16.1.1");
    assert_eq!(entries[0].interface, "Ethernet1");
    assert_eq!(entries[1].mac, "001c.7300.0002");
}

#[tokio::test]
async fn retriever_matches_direct_parse() {
    let session = TranscriptSession::new(&[("show ip arp", IOS_ARP)]);
    let mut retriever = ArpRetriever::new(session, "nxos".parse().unwrap());

    let entries = retriever.get_arp_table().await.unwrap();

    assert_eq!(entries, arp_table::parse(IOS_ARP));
}

#[tokio::test]
async fn rejected_command_names_command_and_vendor() {
    let session = TranscriptSession::new(&[("show ip arp", IOS_ARP)]);
    let mut retriever = ArpRetriever::new(session, Vendor::AristaEos);

    let err = retriever.get_arp_table().await.unwrap_err();
    let chain = format!("{err:#}");

    assert!(chain.contains("show arp"), "{chain}");
    assert!(chain.contains("arista_eos"), "{chain}");
    assert!(chain.contains("Invalid input"), "{chain}");
}

#[tokio::test]
async fn vendor_tags_round_trip_through_display() {
    for vendor in [Vendor::CiscoIos, Vendor::CiscoNxos, Vendor::AristaEos] {
        let parsed: Vendor = vendor.to_string().parse().unwrap();
        assert_eq!(parsed, vendor);
    }
}
