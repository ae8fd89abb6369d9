use std::fmt;

/// Brazilian individual taxpayer registry number (CPF).
///
/// Eleven digits, the last two are check digits.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub const LEN: usize = 11;

    pub const fn new_unchecked(cpf: String) -> Self {
        Self(cpf)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
