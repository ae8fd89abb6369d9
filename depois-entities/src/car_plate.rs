use std::fmt;

/// License plate of a driver's car, e.g. `ABC1234`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CarPlate(String);

impl CarPlate {
    pub const fn new_unchecked(plate: String) -> Self {
        Self(plate)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CarPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
