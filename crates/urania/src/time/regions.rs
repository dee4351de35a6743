//! Historical UTC offsets and daylight-saving windows for known regions.
//!
//! This table is the only place political timezone knowledge lives. Rules
//! are coarse (whole months, one introduction year) and do not follow the
//! tz database.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Offset rule for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRule {
    pub key: &'static str,
    pub standard_offset: f64,
    pub dst_offset: f64,
    /// Calendar months (1-12) observed on daylight time
    pub dst_months: &'static [u32],
    /// First year daylight time was observed; `None` if never
    pub dst_introduced: Option<i32>,
    pub dst_rule: Option<&'static str>,
}

const AUSTRALIAN_SUMMER: &[u32] = &[10, 11, 12, 1, 2, 3];
const NORTHERN_SUMMER: &[u32] = &[3, 4, 5, 6, 7, 8, 9, 10];
const NO_DST: &[u32] = &[];

const fn australian(key: &'static str, standard: f64) -> RegionRule {
    RegionRule {
        key,
        standard_offset: standard,
        dst_offset: standard + 1.0,
        dst_months: AUSTRALIAN_SUMMER,
        dst_introduced: Some(1971),
        dst_rule: Some("October to March"),
    }
}

const fn american(key: &'static str, standard: f64) -> RegionRule {
    RegionRule {
        key,
        standard_offset: standard,
        dst_offset: standard + 1.0,
        dst_months: NORTHERN_SUMMER,
        dst_introduced: Some(1918),
        dst_rule: Some("March to November (modern)"),
    }
}

const fn european(key: &'static str, standard: f64) -> RegionRule {
    RegionRule {
        key,
        standard_offset: standard,
        dst_offset: standard + 1.0,
        dst_months: NORTHERN_SUMMER,
        dst_introduced: Some(1980),
        dst_rule: Some("March to October"),
    }
}

const fn fixed(key: &'static str, offset: f64) -> RegionRule {
    RegionRule {
        key,
        standard_offset: offset,
        dst_offset: offset,
        dst_months: NO_DST,
        dst_introduced: None,
        dst_rule: None,
    }
}

/// Canonical region table.
pub const REGIONS: &[RegionRule] = &[
    // Australia
    australian("adelaide", 9.5),
    australian("sydney", 10.0),
    australian("melbourne", 10.0),
    fixed("perth", 8.0),
    fixed("darwin", 9.5),
    // North America
    american("new_york", -5.0),
    american("los_angeles", -8.0),
    american("chicago", -6.0),
    american("denver", -7.0),
    // Europe
    european("london", 0.0),
    european("paris", 1.0),
    european("berlin", 1.0),
    fixed("moscow", 3.0),
    // Asia
    fixed("tokyo", 9.0),
    fixed("beijing", 8.0),
    fixed("mumbai", 5.5),
    fixed("dubai", 4.0),
];

impl RegionRule {
    /// Whether daylight time applies in `year`/`month`.
    pub fn dst_active(&self, year: i32, month: u32) -> bool {
        match self.dst_introduced {
            Some(introduced) if year >= introduced => self.dst_months.contains(&month),
            _ => false,
        }
    }

    /// UTC offset in hours for `year`/`month`.
    pub fn offset_for(&self, year: i32, month: u32) -> f64 {
        if self.dst_active(year, month) {
            self.dst_offset
        } else {
            self.standard_offset
        }
    }
}

pub fn find_region(key: &str) -> Option<&'static RegionRule> {
    REGIONS.iter().find(|r| r.key == key)
}

lazy_static! {
    /// City spellings found in place labels, in lookup order.
    static ref CITY_ALIASES: Vec<(&'static str, &'static str)> = vec![
        ("adelaide", "adelaide"),
        ("sydney", "sydney"),
        ("melbourne", "melbourne"),
        ("perth", "perth"),
        ("darwin", "darwin"),
        ("new york", "new_york"),
        ("los angeles", "los_angeles"),
        ("chicago", "chicago"),
        ("denver", "denver"),
        ("london", "london"),
        ("paris", "paris"),
        ("berlin", "berlin"),
        ("moscow", "moscow"),
        ("tokyo", "tokyo"),
        ("beijing", "beijing"),
        ("mumbai", "mumbai"),
        ("dubai", "dubai"),
    ];

    /// Unambiguous Australian state names.
    static ref STATE_NAMES: Vec<(Regex, &'static str)> = vec![
        (word_pattern("south australia"), "adelaide"),
        (word_pattern("new south wales"), "sydney"),
        (word_pattern("western australia"), "perth"),
    ];

    /// State names and abbreviations that only count next to "Australia"
    /// ("Victoria, BC" and "Seattle, WA" must not match).
    static ref STATE_ABBREVIATIONS: Vec<(Regex, &'static str)> = vec![
        (word_pattern("sa"), "adelaide"),
        (word_pattern("nsw"), "sydney"),
        (word_pattern("vic|victoria"), "melbourne"),
        (word_pattern("wa"), "perth"),
    ];

    static ref AUSTRALIA: Regex = word_pattern("australia|aus");
}

fn word_pattern(alternatives: &str) -> Regex {
    Regex::new(&format!(r"\b(?:{alternatives})\b")).expect("static region pattern")
}

/// Map a free-text place label to a region key.
pub fn normalize_place(label: &str) -> Option<&'static str> {
    let lower = label.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    if let Some((_, key)) = CITY_ALIASES.iter().find(|(alias, _)| lower.contains(*alias)) {
        return Some(*key);
    }

    if let Some((_, key)) = STATE_NAMES.iter().find(|(re, _)| re.is_match(&lower)) {
        return Some(*key);
    }

    if AUSTRALIA.is_match(&lower) {
        return STATE_ABBREVIATIONS
            .iter()
            .find(|(re, _)| re.is_match(&lower))
            .map(|(_, key)| *key);
    }

    None
}
