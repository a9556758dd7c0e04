//! The common course code and what its positions encode.
//!
//! A common code looks like `FEN-CO2121L1`:
//!
//! ```text
//! F      institution (C junior division, F senior division, G graduate)
//! EN     faculty
//! -
//! CO     department
//! 2      level
//! 121    reference number
//! L      class form
//! 1      language of instruction
//! ```

use super::taxonomy::{ClassForm, CourseLanguage, Faculty, Institution};

/// A course's common code, kept verbatim as the site prints it.
///
/// The decoding accessors return `None` on codes that are too short or use
/// letters this crate does not know; the raw string stays available either
/// way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommonCode(String);

impl CommonCode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn institution(&self) -> Option<Institution> {
        match self.byte(0)? {
            b'C' => Some(Institution::JuniorDivision),
            b'F' => Some(Institution::SeniorDivision),
            b'G' => Some(Institution::Graduate),
            _ => None,
        }
    }

    pub fn faculty(&self) -> Option<Faculty> {
        let code = self.slice(1, 3)?;
        let graduate = matches!(self.institution(), Some(Institution::Graduate));
        // Some two-letter codes exist on both sides; the institution letter
        // decides which table to try first.
        if graduate {
            graduate_faculty(code).or_else(|| undergraduate_faculty(code))
        } else {
            undergraduate_faculty(code).or_else(|| graduate_faculty(code))
        }
    }

    pub fn department(&self) -> Option<&str> {
        self.slice(4, 6)
    }

    pub fn level(&self) -> Option<u8> {
        self.digit(6)
    }

    pub fn reference_number(&self) -> Option<u16> {
        self.slice(7, 10)?.parse().ok()
    }

    pub fn class_form(&self) -> Option<ClassForm> {
        ClassForm::from_letter(self.byte(10)? as char)
    }

    pub fn language(&self) -> Option<CourseLanguage> {
        CourseLanguage::from_digit(self.digit(11)?)
    }

    fn byte(&self, index: usize) -> Option<u8> {
        self.0.as_bytes().get(index).copied()
    }

    fn digit(&self, index: usize) -> Option<u8> {
        let byte = self.byte(index)?;
        byte.is_ascii_digit().then(|| byte - b'0')
    }

    fn slice(&self, start: usize, end: usize) -> Option<&str> {
        let slice = self.0.get(start..end)?;
        slice.is_ascii().then_some(slice)
    }
}

impl std::fmt::Display for CommonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommonCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

fn undergraduate_faculty(code: &str) -> Option<Faculty> {
    match code {
        "LA" => Some(Faculty::Law),
        "ME" => Some(Faculty::Medicine),
        "EN" => Some(Faculty::Engineering),
        "LE" => Some(Faculty::Letters),
        "SC" => Some(Faculty::Science),
        "AG" => Some(Faculty::Agriculture),
        "EC" => Some(Faculty::Economics),
        "AS" => Some(Faculty::ArtsAndSciences),
        "ED" => Some(Faculty::Education),
        "PH" => Some(Faculty::PharmaceuticalSciences),
        _ => None,
    }
}

fn graduate_faculty(code: &str) -> Option<Faculty> {
    match code {
        "HS" => Some(Faculty::GradHumanitiesAndSociology),
        "LP" => Some(Faculty::GradLawAndPolitics),
        "AS" => Some(Faculty::GradArtsAndSciences),
        "SC" => Some(Faculty::GradScience),
        "EN" => Some(Faculty::GradEngineering),
        "AG" => Some(Faculty::GradAgriculturalAndLifeSciences),
        "ME" => Some(Faculty::GradMedicine),
        "PH" => Some(Faculty::GradPharmaceuticalSciences),
        "MA" => Some(Faculty::GradMathematicalSciences),
        "FS" => Some(Faculty::GradFrontierSciences),
        "IF" => Some(Faculty::GradInformationScienceAndTechnology),
        "II" => Some(Faculty::GradInterdisciplinaryInformationStudies),
        "PP" => Some(Faculty::GradPublicPolicy),
        _ => None,
    }
}
