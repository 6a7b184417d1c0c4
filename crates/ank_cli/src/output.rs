//! Rendering of results as JSON or aligned text.

use std::fmt::Display;

use ank_base::{BirthDate, Graha, PersonalNumbersResult, PlanetaryStrength, vaar, vaar_lord};
use serde::Serialize;

use crate::config::{OutputFormat, PlanetNames};

/// Trace of one `ank reduce` call.
#[derive(Debug, Serialize)]
pub struct ReductionReport {
    pub input: u32,
    pub policy: &'static str,
    pub steps: Vec<u32>,
    pub result: u32,
}

#[derive(Debug, Serialize)]
pub struct NameReport<'a> {
    pub name: &'a str,
    pub name_sum: u32,
    pub name_number: u8,
}

pub fn graha_label(graha: Graha, names: PlanetNames) -> &'static str {
    match names {
        PlanetNames::English => graha.english_name(),
        PlanetNames::Sanskrit => graha.name(),
    }
}

pub fn render_numbers(
    date: &BirthDate,
    result: &PersonalNumbersResult,
    format: OutputFormat,
    names: PlanetNames,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Text => {
            let mut out = row("birth_date", date);
            for (field, value) in result.fields() {
                out.push_str(&row(field.name(), value));
            }
            let day = vaar(date);
            out.push_str(&row(
                "birth_weekday",
                format!(
                    "{} ({}, {})",
                    result.birth_weekday,
                    day.name(),
                    graha_label(vaar_lord(day), names)
                ),
            ));
            out.push_str("planetary_strength\n");
            out.push_str(&strength_rows(&result.planetary_strength, names));
            Ok(out)
        }
    }
}

pub fn render_strength(
    strength: &PlanetaryStrength,
    format: OutputFormat,
    names: PlanetNames,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(strength),
        OutputFormat::Text => {
            let mut out = strength_rows(strength, names);
            if let Some(g) = strength.dominant() {
                out.push_str(&row("dominant", graha_label(g, names)));
            }
            let missing: Vec<&str> = strength
                .missing()
                .into_iter()
                .map(|g| graha_label(g, names))
                .collect();
            if !missing.is_empty() {
                out.push_str(&row("missing", missing.join(", ")));
            }
            Ok(out)
        }
    }
}

pub fn render_reduction(
    report: &ReductionReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => {
            let chain: Vec<String> = report.steps.iter().map(u32::to_string).collect();
            Ok(format!("{} ({})\n", chain.join(" -> "), report.policy))
        }
    }
}

pub fn render_name(
    report: &NameReport<'_>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(row("name_sum", report.name_sum)
            + &row("name_number", report.name_number)),
    }
}

/// One `label value` line with the label padded to a fixed column.
fn row(label: &str, value: impl Display) -> String {
    format!("{label:<22}{value}\n")
}

fn strength_rows(strength: &PlanetaryStrength, names: PlanetNames) -> String {
    strength
        .iter()
        .map(|(graha, score)| format!("  {:<20}{}\n", graha_label(graha, names), score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use ank_base::{assemble, planetary_strength};

    fn date() -> BirthDate {
        BirthDate::parse("10.01.1982").unwrap()
    }

    #[test]
    fn numbers_json_is_result_object() {
        let d = date();
        let r = assemble(&d).unwrap();
        let s = render_numbers(&d, &r, OutputFormat::Json, PlanetNames::English).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["destiny_number"], 4);
        assert_eq!(v["planetary_strength"]["Sun"], 4);
    }

    #[test]
    fn numbers_text_lists_fields_and_vaar() {
        let d = date();
        let r = assemble(&d).unwrap();
        let s = render_numbers(&d, &r, OutputFormat::Text, PlanetNames::English).unwrap();
        assert!(s.contains("ruling_number"), "{s}");
        assert!(s.contains("7 (Ravivaar, Sun)"), "{s}");
        assert!(s.starts_with("birth_date            10.01.1982\n"), "{s}");
        assert!(s.contains("Sun"), "{s}");
    }

    #[test]
    fn sanskrit_labels_in_text() {
        let s = planetary_strength(&date()).unwrap();
        let out = render_strength(&s, OutputFormat::Text, PlanetNames::Sanskrit).unwrap();
        assert!(out.contains("Surya"), "{out}");
        assert!(out.contains("dominant"), "{out}");
        assert!(!out.contains("Sun "), "{out}");
    }

    #[test]
    fn json_keys_stay_english_regardless_of_labels() {
        let s = planetary_strength(&date()).unwrap();
        let out = render_strength(&s, OutputFormat::Json, PlanetNames::Sanskrit).unwrap();
        assert!(out.contains("\"Sun\""), "{out}");
    }

    #[test]
    fn name_text_rows() {
        let report = NameReport {
            name: "Ada",
            name_sum: 6,
            name_number: 6,
        };
        assert_eq!(
            render_name(&report, OutputFormat::Text).unwrap(),
            "name_sum              6\nname_number           6\n"
        );
    }

    #[test]
    fn reduction_text_chain() {
        let report = ReductionReport {
            input: 1993,
            policy: "always_reduce",
            steps: vec![1993, 22, 4],
            result: 4,
        };
        assert_eq!(
            render_reduction(&report, OutputFormat::Text).unwrap(),
            "1993 -> 22 -> 4 (always_reduce)\n"
        );
    }
}
