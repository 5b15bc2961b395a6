/// Autolink syntax constants shared by the three autolink scanners.
pub struct Autolink;

impl Autolink {
    /// Prefix that triggers a GFM bare-domain autolink.
    pub const WWW: &'static [u8; 4] = b"www.";
    /// Scheme prepended to bare-domain destinations.
    pub const HTTP: &'static str = "http://";
    /// Scheme prepended to email destinations.
    pub const MAILTO: &'static str = "mailto:";
    /// Shortest scheme accepted inside `<scheme:...>`.
    pub const MIN_SCHEME_LEN: usize = 3;
    /// Longest domain part accepted inside `<local@domain>`.
    pub const MAX_EMAIL_DOMAIN_LEN: usize = 64;
}
