use std::fmt;

/// Which endpoint-specific projection an extraction is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionProfile {
    General,
    BankStatement,
    Invoice,
}

impl ExtractionProfile {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::General => "document.pdf",
            Self::BankStatement => "statement.pdf",
            Self::Invoice => "invoice.pdf",
        }
    }

    /// Only the general profile honours the caller's table and image switches.
    pub fn honours_options(&self) -> bool {
        matches!(self, Self::General)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::BankStatement => "bank_statement",
            Self::Invoice => "invoice",
        }
    }
}

impl fmt::Display for ExtractionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
