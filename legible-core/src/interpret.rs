//! Score interpretation
//!
//! A [`BandTable`] partitions the real line into half-open bands
//! `[lower, upper)`. Classifying a score picks the first band that contains
//! it, so every real number (infinities included) gets a band.

use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::metrics::Metric;

const NEG_INF: f64 = f64::NEG_INFINITY;
const INF: f64 = f64::INFINITY;

/// Labelled score interval `[lower, upper)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub label: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl Band {
    pub fn new(
        lower: f64,
        upper: f64,
        label: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            lower,
            upper,
            label: label.into(),
            description: description.into(),
        }
    }

    const fn fixed(lower: f64, upper: f64, label: &'static str, description: &'static str) -> Self {
        Self {
            lower,
            upper,
            label: Cow::Borrowed(label),
            description: Cow::Borrowed(description),
        }
    }

    /// Does the band contain `score`?
    ///
    /// An unbounded upper end also takes `+∞` itself.
    pub fn contains(&self, score: f64) -> bool {
        score >= self.lower && (score < self.upper || self.upper == INF)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.description)
    }
}

/// Ordered bands covering the whole real line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandTable {
    name: Cow<'static, str>,
    bands: Cow<'static, [Band]>,
}

impl BandTable {
    /// Build a custom table
    ///
    /// Bands must be in ascending order, start at `-∞`, end at `+∞`, share
    /// their inner bounds and each be non-empty.
    pub fn new(name: impl Into<Cow<'static, str>>, bands: Vec<Band>) -> Result<Self> {
        let table = Self {
            name: name.into(),
            bands: Cow::Owned(bands),
        };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidBandTable(format!("{}: {msg}", self.name)));

        let (Some(first), Some(last)) = (self.bands.first(), self.bands.last()) else {
            return invalid("table has no bands".to_string());
        };
        if first.lower != NEG_INF {
            return invalid(format!("first band '{}' must start at -inf", first.label));
        }
        if last.upper != INF {
            return invalid(format!("last band '{}' must end at +inf", last.label));
        }
        for band in self.bands.iter() {
            // also rejects NaN bounds
            if band.lower.partial_cmp(&band.upper) != Some(Ordering::Less) {
                return invalid(format!(
                    "band '{}' is empty: [{}, {})",
                    band.label, band.lower, band.upper
                ));
            }
        }
        for pair in self.bands.windows(2) {
            if pair[0].upper != pair[1].lower {
                return invalid(format!(
                    "bands '{}' and '{}' are not contiguous",
                    pair[0].label, pair[1].label
                ));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// First band containing `score`; NaN falls into the first band
    pub fn classify(&self, score: f64) -> &Band {
        let bands: &[Band] = &self.bands;
        bands
            .iter()
            .find(|band| band.contains(score))
            .unwrap_or(&bands[0])
    }
}

static FLESCH_KINCAID_GRADE: BandTable = BandTable {
    name: Cow::Borrowed("flesch-kincaid-grade"),
    bands: Cow::Borrowed(&[
        Band::fixed(
            NEG_INF,
            6.0,
            "Very easy",
            "Very easy to read; suitable for primary-school students.",
        ),
        Band::fixed(
            6.0,
            10.0,
            "Easy",
            "Easy to read; suitable for secondary-school students.",
        ),
        Band::fixed(
            10.0,
            14.0,
            "Moderate",
            "Moderately difficult; suitable for university students.",
        ),
        Band::fixed(
            14.0,
            INF,
            "Difficult",
            "Difficult to read; suited to university-level or professional readers.",
        ),
    ]),
};

static FLESCH_READING_EASE: BandTable = BandTable {
    name: Cow::Borrowed("flesch-reading-ease"),
    bands: Cow::Borrowed(&[
        Band::fixed(NEG_INF, 30.0, "Very difficult", "Best understood by university graduates."),
        Band::fixed(30.0, 50.0, "Difficult", "College level."),
        Band::fixed(50.0, 60.0, "Fairly difficult", "10th to 12th grade."),
        Band::fixed(60.0, 70.0, "Standard", "8th and 9th grade; plain English."),
        Band::fixed(70.0, 80.0, "Fairly easy", "7th grade."),
        Band::fixed(80.0, 90.0, "Easy", "6th grade; conversational English."),
        Band::fixed(90.0, INF, "Very easy", "5th grade; easily understood by an 11-year-old."),
    ]),
};

static DALE_CHALL: BandTable = BandTable {
    name: Cow::Borrowed("dale-chall"),
    bands: Cow::Borrowed(&[
        Band::fixed(NEG_INF, 5.0, "4th grade", "Average 4th-grade student or lower."),
        Band::fixed(5.0, 6.0, "5th-6th grade", "Average 5th or 6th-grade student."),
        Band::fixed(6.0, 7.0, "7th-8th grade", "Average 7th or 8th-grade student."),
        Band::fixed(7.0, 8.0, "9th-10th grade", "Average 9th or 10th-grade student."),
        Band::fixed(8.0, 9.0, "11th-12th grade", "Average 11th or 12th-grade student."),
        Band::fixed(9.0, 10.0, "College", "Average college student."),
        Band::fixed(10.0, INF, "College graduate", "Average college graduate."),
    ]),
};

/// Built-in score scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scale {
    FleschKincaidGrade,
    FleschReadingEase,
    DaleChall,
}

impl Scale {
    pub const ALL: [Scale; 3] = [
        Scale::FleschKincaidGrade,
        Scale::FleschReadingEase,
        Scale::DaleChall,
    ];

    /// Canonical kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            Scale::FleschKincaidGrade => "flesch-kincaid-grade",
            Scale::FleschReadingEase => "flesch-reading-ease",
            Scale::DaleChall => "dale-chall",
        }
    }

    /// Short alias accepted by [`FromStr`]
    pub fn alias(&self) -> &'static str {
        match self {
            Scale::FleschKincaidGrade => "fk",
            Scale::FleschReadingEase => "fre",
            Scale::DaleChall => "dc",
        }
    }

    /// Metric whose value this scale interprets
    pub fn metric(&self) -> Metric {
        match self {
            Scale::FleschKincaidGrade => Metric::FleschKincaidGrade,
            Scale::FleschReadingEase => Metric::FleschReadingEase,
            Scale::DaleChall => Metric::DaleChall,
        }
    }

    /// Band table of the scale
    pub fn table(&self) -> &'static BandTable {
        match self {
            Scale::FleschKincaidGrade => &FLESCH_KINCAID_GRADE,
            Scale::FleschReadingEase => &FLESCH_READING_EASE,
            Scale::DaleChall => &DALE_CHALL,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Scale::ALL
            .into_iter()
            .find(|scale| scale.name() == normalized || scale.alias() == normalized)
            .ok_or_else(|| Error::UnknownScale(s.to_string()))
    }
}

/// Band of `table` containing `score`
pub fn classify(score: f64, table: &BandTable) -> &Band {
    table.classify(score)
}

/// Band of a built-in scale containing `score`
pub fn classify_scale(score: f64, scale: Scale) -> &'static Band {
    scale.table().classify(score)
}
