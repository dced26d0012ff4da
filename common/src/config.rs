pub struct Config {
    /// Output verbosity.
    ///
    /// `1` drops headers and decoration, `2` prints bare results only.
    pub quiet: u8,
}
