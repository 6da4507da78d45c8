use heapless::String as HeaplessString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Write;
use std::str::FromStr;

const PREFIX: &str = "CMP";

/// Human-readable ticket identifier of the form `CMP-YYYY-NNN`
///
/// `YYYY` is a four digit year and `NNN` a zero-padded sequence in `000..=999`.
/// The canonical form is upper case; [`ComplaintId::normalize`] accepts user
/// input with surrounding whitespace or lower case letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComplaintId(HeaplessString<16>);

impl ComplaintId {
    /// Number of identifiers available per calendar year
    pub const SLOTS_PER_YEAR: u16 = 1000;

    /// Build the identifier for `year` and `sequence`
    ///
    /// Returns `None` when the year does not fit four digits or the
    /// sequence is outside `0..=999`.
    pub fn new(year: i32, sequence: u16) -> Option<Self> {
        if !(0..=9999).contains(&year) || sequence >= Self::SLOTS_PER_YEAR {
            return None;
        }
        let mut value = HeaplessString::new();
        write!(value, "{PREFIX}-{year:04}-{sequence:03}").ok()?;
        Some(Self(value))
    }

    /// Trim and upper-case raw input, then parse it
    pub fn normalize(raw: &str) -> Option<Self> {
        raw.trim().to_uppercase().parse().ok()
    }

    pub fn year(&self) -> i32 {
        self.as_str()[4..8].parse().unwrap_or_default()
    }

    pub fn sequence(&self) -> u16 {
        self.as_str()[9..12].parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ComplaintId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(prefix), Some(year), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(());
        };
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if prefix != PREFIX || !all_digits(year, 4) || !all_digits(sequence, 3) {
            return Err(());
        }
        let year: i32 = year.parse().map_err(|_| ())?;
        let sequence: u16 = sequence.parse().map_err(|_| ())?;
        Self::new(year, sequence).ok_or(())
    }
}

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComplaintId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComplaintId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        value_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid ComplaintId: {value_str}")))
    }
}
