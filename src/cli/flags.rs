use ringpass::Settings;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub interactive: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub fallback: bool,
    pub check: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub rings: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// Default settings with the length, ring and class flags applied.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            length: self.length.unwrap_or(defaults.length),
            rings: self.rings.unwrap_or(defaults.rings),
            uppercase: !self.no_upper,
            lowercase: !self.no_lower,
            digits: !self.no_digits,
            symbols: !self.no_symbols,
        }
    }
}
