//! Parsing the search result page.
//!
//! Results live in a card container; above it the site prints a paging
//! header like `1〜10件 / 225件中`. Each card carries two table rows (label
//! row, value row) and an objective blurb underneath.

use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::course::{slot, CommonCode, CourseSummary, SearchPage, Semester};
use crate::error::{CatalogError, Result};
use crate::text::{clean_inline, squash, trim_block};

pub(crate) const PAGE_SIZE: usize = 10;

pub(crate) fn sel(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}

pub(crate) fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

/// Split a lecturer cell into individual names, preserving order.
pub(crate) fn split_lecturers(cell: &str) -> Vec<String> {
    cell.split(['、', '，', ','])
        .map(clean_inline)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Parse one search result page.
///
/// A page with a paging header but no result cards is an empty page. A body
/// with neither the header nor the card container is not a result page at
/// all and fails with `MalformedResponse`.
pub fn parse_search_page(html: &str) -> Result<SearchPage> {
    let doc = Html::parse_document(html);

    let header = doc
        .select(&sel(".catalog-total-search-result"))
        .next()
        .and_then(|el| parse_paging_header(&text_of(el)));
    let container = doc
        .select(&sel(".catalog-search-result-card-container"))
        .next();

    if header.is_none() && container.is_none() {
        return Err(CatalogError::MalformedResponse(
            "search result container missing".to_string(),
        ));
    }

    let items: Vec<CourseSummary> = match container {
        Some(container) => container
            .select(&sel(".catalog-search-result-card"))
            .filter_map(parse_card)
            .collect(),
        None => Vec::new(),
    };

    let page = match header {
        Some((first_index, last_index, total_count)) => SearchPage {
            current_page: if total_count == 0 {
                0
            } else {
                first_index / PAGE_SIZE + 1
            },
            total_pages: (total_count + PAGE_SIZE - 1) / PAGE_SIZE,
            first_index,
            last_index,
            total_count,
            items,
        },
        // Header gone but cards present: keep the items, leave the
        // counters at what the page itself shows.
        None => SearchPage {
            first_index: if items.is_empty() { 0 } else { 1 },
            last_index: items.len(),
            total_count: items.len(),
            current_page: if items.is_empty() { 0 } else { 1 },
            total_pages: if items.is_empty() { 0 } else { 1 },
            items,
        },
    };

    Ok(page)
}

/// `1〜10件 / 225件中` → (1, 10, 225). None when the text carries fewer
/// than three numbers.
fn parse_paging_header(text: &str) -> Option<(usize, usize, usize)> {
    let squashed = squash(text);
    let mut numbers = squashed
        .split(|c: char| !c.is_ascii_digit())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.parse::<usize>().ok());
    let first = numbers.next()??;
    let last = numbers.next()??;
    let total = numbers.next()??;
    Some((first, last, total))
}

fn parse_card(card: ElementRef) -> Option<CourseSummary> {
    // The first table row holds the column labels; the second the values.
    let cells = card
        .select(&sel(".catalog-search-result-table-row"))
        .nth(1)?;

    let code_cell = cells.select(&sel(".code-cell")).next()?;
    let mut codes = code_cell.children().filter_map(ElementRef::wrap);
    let timetable_code = squash(&text_of(codes.next()?));
    let common_code = CommonCode::new(squash(&text_of(codes.next()?)));
    if timetable_code.is_empty() {
        warn!("skipping search result card with an empty code cell");
        return None;
    }

    let cell_text = |name: &str| {
        cells
            .select(&sel(&format!(".{name}-cell")))
            .next()
            .map(|el| text_of(el))
            .unwrap_or_default()
    };

    let semesters: Vec<Semester> = cells
        .select(&sel(".semester-cell .catalog-semester-icon"))
        .filter_map(|el| Semester::from_code(&squash(&text_of(el))))
        .collect();

    let aim = card
        .select(&sel(".catalog-search-result-card-body-text"))
        .next()
        .map(|el| trim_block(&text_of(el)))
        .unwrap_or_default();

    Some(CourseSummary {
        timetable_code,
        common_code,
        title: clean_inline(&cell_text("name")),
        lecturers: split_lecturers(&cell_text("lecturer")),
        credits: squash(&cell_text("credits")).parse().ok(),
        semesters,
        slots: slot::parse_slots(&cell_text("period")),
        aim,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::course::{Slot, Weekday};

    const TWO_CARDS: &str = include_str!("fixtures/search_results.html");
    const EMPTY_RESULTS: &str = include_str!("fixtures/search_empty.html");

    #[test]
    fn parses_cards_in_document_order() {
        let page = parse_search_page(TWO_CARDS).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].timetable_code, "ABC101");
        assert_eq!(page.items[1].timetable_code, "ABC102");
    }

    #[test]
    fn first_card_has_the_expected_fields() {
        let page = parse_search_page(TWO_CARDS).unwrap();
        let course = &page.items[0];
        assert_eq!(course.title, "Intro X");
        assert_eq!(course.lecturers, vec!["A. Smith".to_string()]);
        assert_eq!(course.common_code.as_str(), "FEN-CO2121L1");
        assert_eq!(course.semesters, vec![Semester::S1, Semester::S2]);
        assert_eq!(
            course.slots,
            vec![Slot {
                weekday: Weekday::Mon,
                period: 3
            }]
        );
        assert_eq!(course.aim, "Foundations of systems thinking.");
    }

    #[test]
    fn blank_lecturer_cell_yields_no_lecturers() {
        let page = parse_search_page(TWO_CARDS).unwrap();
        assert_eq!(page.items[1].lecturers, Vec::<String>::new());
    }

    #[test]
    fn paging_header_is_parsed() {
        let page = parse_search_page(TWO_CARDS).unwrap();
        assert_eq!(page.first_index, 1);
        assert_eq!(page.last_index, 2);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn later_page_indices() {
        assert_eq!(parse_paging_header("11〜20件 / 225件中"), Some((11, 20, 225)));
        let squashed = "11〜20件/225件中";
        assert_eq!(parse_paging_header(squashed), Some((11, 20, 225)));
    }

    #[test]
    fn empty_container_is_an_empty_page_not_an_error() {
        let page = parse_search_page(EMPTY_RESULTS).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn body_without_either_container_is_malformed() {
        let err = parse_search_page("<html><body><p>maintenance</p></body></html>").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[test]
    fn parsing_is_idempotent() {
        let once = parse_search_page(TWO_CARDS).unwrap();
        let twice = parse_search_page(TWO_CARDS).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn card_without_a_value_row_is_skipped() {
        let html = r#"
            <div class="catalog-total-search-result">1〜2件 / 2件中</div>
            <div class="catalog-search-result-card-container">
              <div class="catalog-search-result-card">
                <div class="catalog-search-result-table-row">labels only</div>
              </div>
              <div class="catalog-search-result-card">
                <div class="catalog-search-result-table-row">labels</div>
                <div class="catalog-search-result-table-row">
                  <div class="code-cell"><span>30123</span><span>FSC-PH3802L1</span></div>
                  <div class="name-cell">電磁気学</div>
                </div>
              </div>
            </div>"#;
        let page = parse_search_page(html).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].timetable_code, "30123");
    }

    #[test]
    fn missing_optional_cells_default() {
        let page = parse_search_page(TWO_CARDS).unwrap();
        // Result cards carry no credits cell.
        assert_eq!(page.items[0].credits, None);
    }

    #[test]
    fn lecturer_lists_split_on_japanese_commas() {
        assert_eq!(
            split_lecturers("田中 太郎、佐藤 花子"),
            vec!["田中 太郎".to_string(), "佐藤 花子".to_string()]
        );
        assert_eq!(split_lecturers(" "), Vec::<String>::new());
    }
}
