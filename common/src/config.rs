#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints banners and headers, `1` prints results only, `2` prints only the final line.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Runs every step against the loaded snapshot but never writes it back to disk.
    pub dry_run: bool,
}
