//! Human-readable location names.

/// How locations are named in reports.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Spreadsheet-style letters: `A`, `B`, ..., `Z`, `AA`, `AB`, ...
    #[default]
    Letters,
    /// Zero-based indices as stored in the tour.
    Indices,
}

impl LabelStyle {
    pub fn label(self, index: usize) -> String {
        match self {
            LabelStyle::Letters => location_label(index),
            LabelStyle::Indices => index.to_string(),
        }
    }
}

/// Bijective base-26 letter label for a zero-based location index.
///
/// ```
/// use tsp_anneal::tour::location_label;
///
/// assert_eq!(location_label(0), "A");
/// assert_eq!(location_label(25), "Z");
/// assert_eq!(location_label(26), "AA");
/// assert_eq!(location_label(701), "ZZ");
/// ```
pub fn location_label(index: usize) -> String {
    let mut reversed = String::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        reversed.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    reversed.chars().rev().collect()
}
