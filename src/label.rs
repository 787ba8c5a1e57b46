use serde::Serialize;
use std::fmt;

/// Ground-truth class of a signature image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    True,
    False,
}

impl Label {
    /// Both classes, in distribution order
    pub const ALL: [Label; 2] = [Label::True, Label::False];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
        }
    }

    /// Detect the class marker embedded in a raw filename.
    /// "true" wins when both markers are present.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.contains("true") {
            Some(Self::True)
        } else if lower.contains("false") {
            Some(Self::False)
        } else {
            None
        }
    }

    /// Name of the processed image with sequence number `index`
    pub fn file_name(&self, index: usize) -> String {
        format!("{}-{}.jpg", self.as_str(), index)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
