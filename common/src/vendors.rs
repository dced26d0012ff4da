use pnet::util::MacAddr;

/// Resolves the manufacturer behind a hardware address.
pub trait VendorRepository {
    fn get_vendor(&self, mac: MacAddr) -> Option<String>;
}
