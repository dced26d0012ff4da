use colored::*;

use crate::mprint;
use crate::session::StdinSession;
use crate::terminal::{colors, print};
use netdiag_common::{
    config::Config, network::arp::ArpEntry, session::Vendor, vendors::VendorRepository,
};
use netdiag_core::{retriever::ArpRetriever, vendors::MacOuiRepo};

type Detail = (String, ColoredString);

pub async fn arp(vendor: Vendor, cfg: &Config) -> anyhow::Result<()> {
    let mut retriever = ArpRetriever::new(StdinSession, vendor);
    let entries: Vec<ArpEntry> = retriever.get_arp_table().await?;

    if entries.is_empty() {
        print::header("zero entries parsed", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    let vendor_repo = MacOuiRepo;
    for (idx, entry) in entries.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&entry.to_string()),
            _ => {
                print_entry_tree(entry, idx, &vendor_repo);
                if idx + 1 != entries.len() {
                    mprint!();
                }
            }
        }
    }

    if cfg.quiet < 2 {
        print::fat_separator();
        let count: ColoredString = format!("{} entries", entries.len()).bold().green();
        print::print_status(format!("ARP table parsed: {count}"));
    }
    Ok(())
}

fn print_entry_tree(entry: &ArpEntry, idx: usize, vendor_repo: &impl VendorRepository) {
    print::tree_head(idx, &entry.ip);
    let mut details: Vec<Detail> = vec![
        ("IPv4".to_string(), entry.ip.color(colors::IPV4_ADDR)),
        ("MAC".to_string(), entry.mac.color(colors::MAC_ADDR)),
        ("Interface".to_string(), entry.interface.color(colors::INTERFACE)),
    ];

    if let Some(vendor) = entry.mac_addr().and_then(|mac| vendor_repo.get_vendor(mac)) {
        details.push(("Vendor".to_string(), vendor.normal()));
    }

    print::as_tree_one_level(details);
}
