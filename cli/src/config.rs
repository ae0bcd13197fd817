pub struct Config {
    /// Report only literals that end in an embedded IPv4 quad.
    pub ipv4_only: bool,
    /// Print one total per input instead of the matches themselves.
    pub count: bool,
}
