//! Typed records for what the catalogue shows about a course.

pub mod code;
pub mod slot;
pub mod taxonomy;

pub use code::CommonCode;
pub use slot::{Semester, Slot, Weekday};
pub use taxonomy::{ClassForm, CourseLanguage, Faculty, Institution};

/// One card of a search result page.
///
/// Only what the result card shows; call
/// [`fetch_details`](crate::CourseCatalog::fetch_details) with
/// `timetable_code` for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub timetable_code: String,
    pub common_code: CommonCode,
    pub title: String,
    /// Lecturers in the order the card lists them. Empty when the card
    /// leaves the cell blank.
    pub lecturers: Vec<String>,
    /// The result card usually omits credits; the detail page has them.
    pub credits: Option<f32>,
    pub semesters: Vec<Semester>,
    pub slots: Vec<Slot>,
    /// The course objective blurb shown under the card.
    pub aim: String,
}

/// Full record from a course detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail {
    pub timetable_code: String,
    pub common_code: CommonCode,
    pub title: String,
    pub lecturers: Vec<String>,
    pub semesters: Vec<Semester>,
    pub slots: Vec<Slot>,
    pub aim: String,
    pub room: String,
    pub credits: Option<f32>,
    /// Whether students of other faculties may take the course.
    pub other_faculty_ok: bool,
    /// Language of instruction as printed on the page, e.g. "日本語".
    pub language: String,
    /// Taught by a lecturer with practical work experience.
    pub practical_experience: bool,
    pub faculty: Option<Faculty>,
    /// 授業計画 — the per-session syllabus plan.
    pub schedule: Option<String>,
    /// 授業の方法
    pub teaching_methods: Option<String>,
    /// 成績評価方法
    pub evaluation: Option<String>,
    /// 教科書
    pub textbook: Option<String>,
    /// 参考書
    pub reference_books: Option<String>,
    /// 履修上の注意 — prerequisites and other caveats.
    pub course_notes: Option<String>,
}

/// One page of search results plus the paging header the site prints above
/// them ("1〜10件 / 225件中"). The site pages by ten.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub items: Vec<CourseSummary>,
    /// 1-based index of the first item on this page, 0 when empty.
    pub first_index: usize,
    /// 1-based index of the last item on this page, 0 when empty.
    pub last_index: usize,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl SearchPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
