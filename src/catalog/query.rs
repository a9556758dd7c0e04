//! Turning search filters into the requests the catalogue expects.

use std::collections::BTreeMap;

use url::Url;

use super::config::CatalogConfig;
use crate::course::{Faculty, Institution, Semester, Weekday};
use crate::error::{CatalogError, Result};

/// A fully-formed outgoing request: endpoint plus query parameters,
/// independent of any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub url: Url,
    pub params: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The endpoint with the query attached, for transports that want a
    /// single URL.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().extend_pairs(&self.params);
        url
    }
}

/// Search filters. Unset fields stay out of the outgoing query entirely —
/// the site treats an empty override differently from an absent one.
///
/// The list-valued fields AND together on the site, not OR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub keyword: Option<String>,
    pub institution: Institution,
    pub faculty: Option<Faculty>,
    /// Student grades (学年), 1-based.
    pub grades: Vec<u8>,
    pub semesters: Vec<Semester>,
    pub weekdays: Vec<Weekday>,
    /// Periods within the day, 1-based.
    pub periods: Vec<u8>,
    /// Language-of-instruction facet codes, e.g. "en".
    pub languages: Vec<String>,
    /// University-wide cross program codes.
    pub cross_programs: Vec<String>,
    pub practical_experience: Option<bool>,
    /// NDC subject classification codes.
    pub ndc_codes: Vec<String>,
}

impl SearchFilter {
    /// Keyword-only filter, the common case.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }
}

/// Build the search-page request for one result page (1-based).
pub fn build_search_request(
    config: &CatalogConfig,
    filter: &SearchFilter,
    page: usize,
) -> Result<RequestSpec> {
    let url = config.endpoint("result")?;

    let mut params = vec![
        ("type".to_string(), filter.institution.code().to_string()),
        ("page".to_string(), page.to_string()),
    ];
    if let Some(keyword) = filter.keyword.as_deref() {
        if !keyword.is_empty() {
            params.push(("q".to_string(), keyword.to_string()));
        }
    }
    if let Some(faculty) = filter.faculty {
        params.push(("faculty_id".to_string(), faculty.id().to_string()));
    }
    if let Some(facet) = facet_json(filter) {
        params.push(("facet".to_string(), facet));
    }

    Ok(RequestSpec { url, params })
}

/// Build the detail-page request for one course.
pub fn build_detail_request(
    config: &CatalogConfig,
    timetable_code: &str,
    year: u16,
) -> Result<RequestSpec> {
    let timetable_code = timetable_code.trim();
    if timetable_code.is_empty() {
        return Err(CatalogError::InvalidArgument(
            "course code must not be empty".to_string(),
        ));
    }

    let url = config.endpoint("detail")?;
    Ok(RequestSpec {
        url,
        params: vec![
            ("code".to_string(), timetable_code.to_string()),
            ("year".to_string(), year.to_string()),
        ],
    })
}

/// The `facet` parameter: a compact JSON object of string lists, present
/// only when at least one facet field is set.
fn facet_json(filter: &SearchFilter) -> Option<String> {
    let mut facet: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();

    if !filter.cross_programs.is_empty() {
        facet.insert("uwide_cross_program_codes", filter.cross_programs.clone());
    }
    if !filter.grades.is_empty() {
        facet.insert(
            "grades_codes",
            filter.grades.iter().map(|g| g.to_string()).collect(),
        );
    }
    if !filter.semesters.is_empty() {
        facet.insert(
            "semester_codes",
            filter.semesters.iter().map(|s| s.code().to_string()).collect(),
        );
    }
    if !filter.periods.is_empty() {
        // The site counts periods from zero here, unlike everywhere else.
        facet.insert(
            "period_codes",
            filter
                .periods
                .iter()
                .map(|p| p.saturating_sub(1).to_string())
                .collect(),
        );
    }
    if !filter.weekdays.is_empty() {
        facet.insert(
            "wday_codes",
            filter
                .weekdays
                .iter()
                .map(|w| (w.index() as u16 * 100 + 1000).to_string())
                .collect(),
        );
    }
    if !filter.languages.is_empty() {
        facet.insert("course_language_codes", filter.languages.clone());
    }
    if let Some(flag) = filter.practical_experience {
        facet.insert(
            "operational_experience_flag",
            vec![if flag { "True" } else { "False" }.to_string()],
        );
    }
    if !filter.ndc_codes.is_empty() {
        // subject_code is singular on the site's side.
        facet.insert("subject_code", filter.ndc_codes.clone());
    }

    if facet.is_empty() {
        None
    } else {
        // BTreeMap keys come out sorted, and serde_json emits no spaces —
        // a stable, compact value the endpoint accepts.
        serde_json::to_string(&facet).ok()
    }
}
