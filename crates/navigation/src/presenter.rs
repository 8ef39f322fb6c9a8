//! Read-only projection of a [`Session`] into visible panels.
//!
//! At most two panels are visible at once. The presenter never touches the
//! lookup client and never changes the session.

use shared::{Class, ClassId, Grade, Semester, SemesterId, Tier};

use crate::session::{Session, Stage};

pub const SELECT_SEMESTER: &str = "Select a semester...";
pub const NO_SEMESTERS: &str = "No semesters found for this student";
pub const SELECT_CLASS: &str = "Select a class...";
pub const NO_CLASSES: &str = "No classes found for this semester";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_REMARKS: &str = "No remarks.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    SearchOnly,
    SearchAndSemesters,
    SemestersAndClasses,
    ClassesAndGrades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Busy,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    pub status: Option<StatusLine>,
}

/// One selector entry. `value: None` marks a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: Option<T>,
    pub label: String,
}

impl<T> SelectOption<T> {
    fn sentinel(label: &str) -> Self {
        Self {
            value: None,
            label: label.to_string(),
        }
    }

    fn chosen(value: T, label: &str) -> Self {
        Self {
            value: Some(value),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPanel<T> {
    pub options: Vec<SelectOption<T>>,
    pub selected: Option<T>,
}

impl<T> SelectorPanel<T> {
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|option| option.label.as_str()).collect()
    }

    /// Labels of real entries, placeholders excluded.
    pub fn choice_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| option.value.is_some())
            .map(|option| option.label.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCell {
    pub text: String,
    pub tier: Tier,
}

impl GradeCell {
    fn from_value(value: Option<f64>) -> Self {
        Self {
            text: value.map_or_else(|| NOT_AVAILABLE.to_string(), format_grade),
            tier: Tier::classify(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradePanel {
    pub class_name: Option<String>,
    pub midterm: GradeCell,
    pub final_grade: GradeCell,
    pub remarks: String,
}

impl GradePanel {
    fn for_class(class: Option<&Class>) -> Self {
        let grade = class.and_then(Class::grade);
        Self {
            class_name: class.map(|class| class.name.clone()),
            midterm: GradeCell::from_value(grade.and_then(|g| g.midterm)),
            final_grade: GradeCell::from_value(grade.and_then(|g| g.final_grade)),
            remarks: remarks(grade),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub layout: PanelLayout,
    pub search: Option<SearchPanel>,
    pub semesters: Option<SelectorPanel<SemesterId>>,
    pub classes: Option<SelectorPanel<ClassId>>,
    pub grades: Option<GradePanel>,
}

impl PanelView {
    fn search_only(status: Option<StatusLine>) -> Self {
        Self {
            layout: PanelLayout::SearchOnly,
            search: Some(SearchPanel { status }),
            semesters: None,
            classes: None,
            grades: None,
        }
    }
}

pub fn present(session: &Session) -> PanelView {
    match &session.stage {
        Stage::Idle => PanelView::search_only(None),
        Stage::Rejected => PanelView::search_only(Some(StatusLine::new(
            "Please enter a student name.",
            Tone::Error,
        ))),
        Stage::Searching { .. } => {
            PanelView::search_only(Some(StatusLine::new("Searching...", Tone::Busy)))
        }
        Stage::NotFound { .. } => {
            PanelView::search_only(Some(StatusLine::new("Student not found", Tone::Error)))
        }
        Stage::Ambiguous { .. } => PanelView::search_only(Some(StatusLine::new(
            "Multiple students found. Please be more specific.",
            Tone::Error,
        ))),
        Stage::Failed { .. } => PanelView::search_only(Some(StatusLine::new(
            "Failed to connect to the API or an error occurred.",
            Tone::Error,
        ))),

        Stage::ShowingSemesters { student } => PanelView {
            layout: PanelLayout::SearchAndSemesters,
            search: Some(SearchPanel {
                status: Some(StatusLine::new(
                    format!("Found: {}", student.name),
                    Tone::Success,
                )),
            }),
            semesters: Some(semester_selector(&student.semesters, None)),
            classes: None,
            grades: None,
        },

        Stage::ShowingClasses {
            student,
            semester_id,
        } => {
            let semester = student.semester(semester_id);
            PanelView {
                layout: PanelLayout::SemestersAndClasses,
                search: None,
                semesters: Some(semester_selector(
                    &student.semesters,
                    Some(semester_id.clone()),
                )),
                classes: Some(class_selector(semester, None)),
                grades: None,
            }
        }

        Stage::ShowingGrades {
            student,
            semester_id,
            class_id,
        } => {
            let semester = student.semester(semester_id);
            let class = semester.and_then(|semester| semester.class(class_id));
            PanelView {
                layout: PanelLayout::ClassesAndGrades,
                search: None,
                semesters: None,
                classes: Some(class_selector(semester, Some(class_id.clone()))),
                grades: Some(GradePanel::for_class(class)),
            }
        }
    }
}

fn semester_selector(
    semesters: &[Semester],
    selected: Option<SemesterId>,
) -> SelectorPanel<SemesterId> {
    let options = if semesters.is_empty() {
        vec![SelectOption::sentinel(NO_SEMESTERS)]
    } else {
        std::iter::once(SelectOption::sentinel(SELECT_SEMESTER))
            .chain(
                semesters
                    .iter()
                    .map(|semester| SelectOption::chosen(semester.id.clone(), &semester.name)),
            )
            .collect()
    };
    SelectorPanel { options, selected }
}

fn class_selector(semester: Option<&Semester>, selected: Option<ClassId>) -> SelectorPanel<ClassId> {
    let classes = semester.map(|semester| semester.classes.as_slice()).unwrap_or_default();
    let options = if classes.is_empty() {
        vec![SelectOption::sentinel(NO_CLASSES)]
    } else {
        std::iter::once(SelectOption::sentinel(SELECT_CLASS))
            .chain(
                classes
                    .iter()
                    .map(|class| SelectOption::chosen(class.id.clone(), &class.name)),
            )
            .collect()
    };
    SelectorPanel { options, selected }
}

fn remarks(grade: Option<&Grade>) -> String {
    match grade {
        None => NOT_AVAILABLE.to_string(),
        Some(grade) => grade
            .description
            .clone()
            .unwrap_or_else(|| NO_REMARKS.to_string()),
    }
}

/// Whole numbers print without a fractional part.
fn format_grade(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
