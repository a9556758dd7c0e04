//! Parsing the course detail page.
//!
//! Three kinds of elements carry the information: the header row (same cell
//! layout as a search card), six small table cells in two groups of three,
//! and the long-text cards (授業計画, 成績評価方法, …) keyed by their header.

use std::collections::HashMap;

use scraper::{ElementRef, Html};

use super::parse_search::{sel, split_lecturers, text_of};
use crate::course::{slot, CommonCode, CourseDetail, Faculty, Semester};
use crate::error::{CatalogError, Result};
use crate::text::{clean_inline, squash, trim_block};

/// Parse one course detail page.
///
/// Fails with `NotFound` when the site renders its no-such-course notice,
/// and with `MalformedResponse` when the detail header row is missing
/// without one. Absent long-text cards parse as `None`.
pub fn parse_detail_page(html: &str) -> Result<CourseDetail> {
    let doc = Html::parse_document(html);

    if doc
        .select(&sel(".catalog-page-detail-not-found"))
        .next()
        .is_some()
    {
        return Err(CatalogError::NotFound);
    }

    // The first catalog-row carries column labels, the second the values.
    let cells = doc
        .select(&sel(".catalog-row"))
        .nth(1)
        .ok_or_else(|| CatalogError::MalformedResponse("detail header row missing".to_string()))?;

    let code_cell = cells
        .select(&sel(".code-cell"))
        .next()
        .ok_or_else(|| CatalogError::MalformedResponse("detail code cell missing".to_string()))?;
    let mut codes = code_cell.children().filter_map(ElementRef::wrap);
    let timetable_code = codes.next().map(|el| squash(&text_of(el))).unwrap_or_default();
    if timetable_code.is_empty() {
        return Err(CatalogError::MalformedResponse(
            "detail code cell carries no code".to_string(),
        ));
    }
    let common_code = CommonCode::new(
        codes.next().map(|el| squash(&text_of(el))).unwrap_or_default(),
    );

    let cell_text = |name: &str| {
        cells
            .select(&sel(&format!(".{name}-cell")))
            .next()
            .map(text_of)
            .unwrap_or_default()
    };

    let semesters: Vec<Semester> = cells
        .select(&sel(".catalog-semester-icon"))
        .filter_map(|el| Semester::from_code(&squash(&text_of(el))))
        .collect();

    // Six summary values in two groups of three cells.
    let detail_cell = |index: usize| -> Option<String> {
        let selector = sel(&format!(".td{}-cell", index / 3 + 1));
        doc.select(&selector).nth(index % 3).map(|el| text_of(el))
    };
    let room = detail_cell(0).map(|t| clean_inline(&t)).unwrap_or_default();
    let credits = detail_cell(1).and_then(|t| squash(&t).parse().ok());
    let other_faculty_ok = detail_cell(2).map(|t| !t.contains("不可")).unwrap_or(false);
    let language = detail_cell(3).map(|t| clean_inline(&t)).unwrap_or_default();
    let practical_experience = detail_cell(4).map(|t| t.contains("YES")).unwrap_or(false);
    let faculty = detail_cell(5).and_then(|t| Faculty::from_site_name(&clean_inline(&t)));

    let cards = collect_cards(&doc);
    let card_text = |title: &str| cards.get(title).cloned();

    let aim = doc
        .select(&sel(".catalog-page-detail-lecture-aim"))
        .next()
        .map(|el| trim_block(&text_of(el)))
        .unwrap_or_default();

    Ok(CourseDetail {
        timetable_code,
        common_code,
        title: clean_inline(&cell_text("name")),
        lecturers: split_lecturers(&cell_text("lecturer")),
        semesters,
        slots: slot::parse_slots(&cell_text("period")),
        aim,
        room,
        credits,
        other_faculty_ok,
        language,
        practical_experience,
        faculty,
        schedule: card_text("授業計画"),
        teaching_methods: card_text("授業の方法"),
        evaluation: card_text("成績評価方法"),
        textbook: card_text("教科書"),
        reference_books: card_text("参考書"),
        course_notes: card_text("履修上の注意"),
    })
}

/// The long-text cards, keyed by header title. Cards without a header or
/// body are skipped rather than failing the whole page.
fn collect_cards(doc: &Html) -> HashMap<String, String> {
    let mut cards = HashMap::new();
    for card in doc.select(&sel(".catalog-page-detail-card")) {
        let Some(header) = card.select(&sel(".catalog-page-detail-card-header")).next() else {
            continue;
        };
        let Some(body) = card.select(&sel(".catalog-page-detail-card-body-pre")).next() else {
            continue;
        };
        cards.insert(squash(&text_of(header)), trim_block(&text_of(body)));
    }
    cards
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::course::{ClassForm, Slot, Weekday};

    const DETAIL: &str = include_str!("fixtures/detail.html");
    const DETAIL_SPARSE: &str = include_str!("fixtures/detail_sparse.html");
    const DETAIL_NOT_FOUND: &str = include_str!("fixtures/detail_not_found.html");

    #[test]
    fn parses_the_header_row() {
        let detail = parse_detail_page(DETAIL).unwrap();
        assert_eq!(detail.timetable_code, "30001");
        assert_eq!(detail.common_code.as_str(), "FEN-CO2121L1");
        assert_eq!(detail.common_code.class_form(), Some(ClassForm::Lecture));
        assert_eq!(detail.title, "システム工学基礎");
        assert_eq!(
            detail.lecturers,
            vec!["田中 太郎".to_string(), "佐藤 花子".to_string()]
        );
        assert_eq!(detail.semesters, vec![Semester::S1, Semester::S2]);
        assert_eq!(
            detail.slots,
            vec![
                Slot {
                    weekday: Weekday::Mon,
                    period: 3
                },
                Slot {
                    weekday: Weekday::Thu,
                    period: 3
                },
            ]
        );
    }

    #[test]
    fn parses_the_summary_cells() {
        let detail = parse_detail_page(DETAIL).unwrap();
        assert_eq!(detail.room, "工学部2号館221");
        assert_eq!(detail.credits, Some(2.0));
        assert!(detail.other_faculty_ok);
        assert_eq!(detail.language, "日本語");
        assert!(detail.practical_experience);
        assert_eq!(detail.faculty, Some(Faculty::Engineering));
    }

    #[test]
    fn parses_the_long_text_cards() {
        let detail = parse_detail_page(DETAIL).unwrap();
        assert_eq!(detail.aim, "システム設計の基礎を身につける。");
        assert!(detail.schedule.unwrap().starts_with("第1回"));
        assert_eq!(detail.evaluation.as_deref(), Some("期末試験とレポートによる。"));
        assert_eq!(detail.course_notes.as_deref(), Some("線形代数の履修を前提とする。"));
        assert!(detail.textbook.is_some());
        assert!(detail.reference_books.is_some());
        assert!(detail.teaching_methods.is_some());
    }

    #[test]
    fn missing_cards_default_to_none() {
        let detail = parse_detail_page(DETAIL_SPARSE).unwrap();
        assert_eq!(detail.schedule, None);
        assert_eq!(detail.textbook, None);
        assert_eq!(detail.reference_books, None);
        // The page itself still parses.
        assert_eq!(detail.timetable_code, "30002");
    }

    #[test]
    fn sparse_page_tolerates_missing_summary_cells() {
        let detail = parse_detail_page(DETAIL_SPARSE).unwrap();
        assert_eq!(detail.credits, None);
        assert_eq!(detail.faculty, None);
        assert!(!detail.other_faculty_ok);
        assert!(!detail.practical_experience);
    }

    #[test]
    fn not_found_notice_is_not_found() {
        assert!(matches!(
            parse_detail_page(DETAIL_NOT_FOUND),
            Err(CatalogError::NotFound)
        ));
    }

    #[test]
    fn body_without_a_detail_row_is_malformed() {
        let err = parse_detail_page("<html><body><p>oops</p></body></html>").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(
            parse_detail_page(DETAIL).unwrap(),
            parse_detail_page(DETAIL).unwrap()
        );
    }
}
