use std::fmt;

/// Summary extracted from one run of the OS ping utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingResult {
    /// Share of echo requests without a reply, `0..=100`.
    pub packet_loss_percent: u8,
    /// Average round trip time in whole milliseconds.
    pub avg_rtt_ms: u32,
}

impl PingResult {
    pub fn new(packet_loss_percent: u8, avg_rtt_ms: u32) -> Self {
        Self {
            packet_loss_percent,
            avg_rtt_ms,
        }
    }
}

impl fmt::Display for PingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% loss, {}ms average",
            self.packet_loss_percent, self.avg_rtt_ms
        )
    }
}
