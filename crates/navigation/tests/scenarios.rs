use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use client_core::{LookupOutcome, StudentLookup};
use navigation::{
    presenter::{PanelLayout, SELECT_CLASS},
    Controller, Event, Selection, StageKind,
};
use shared::{ClassId, SemesterId, Student, Tier};
use tokio::runtime::Handle;

/// Lookup that answers every search with the same decoded service payload.
struct FixedLookup {
    students: Vec<Student>,
    calls: AtomicUsize,
}

impl FixedLookup {
    fn from_json(payload: &str) -> Arc<Self> {
        Arc::new(Self {
            students: serde_json::from_str(payload).expect("fixture payload"),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl StudentLookup for FixedLookup {
    async fn search(&self, _name: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LookupOutcome::from_records(self.students.clone())
    }
}

const JANE_DOE: &str = r#"[{
    "id": 7,
    "student_name": "Jane Doe",
    "semesters": [{
        "id": 1,
        "name": "Fall 2024",
        "classes": [{
            "id": 10,
            "name": "CS101",
            "grades": [{"midterm_grade": 82, "final_grade": 88, "description": "Good work"}]
        }]
    }]
}]"#;

async fn searched(payload: &str, name: &str) -> Controller {
    let mut controller = Controller::new(FixedLookup::from_json(payload), Handle::current());
    controller.handle(Event::Submit { name: name.into() });
    controller.settle().await;
    controller
}

#[tokio::test]
async fn drill_down_from_search_to_grades() {
    let mut controller = searched(JANE_DOE, "Jane Doe").await;

    let view = controller.view();
    assert_eq!(view.layout, PanelLayout::SearchAndSemesters);
    assert_eq!(
        view.semesters.expect("semesters").choice_labels(),
        vec!["Fall 2024"]
    );

    let view = controller.handle(Event::SelectSemester(Selection::Chosen(SemesterId::from(1))));
    assert_eq!(view.layout, PanelLayout::SemestersAndClasses);
    let classes = view.classes.expect("classes");
    assert_eq!(classes.labels(), vec![SELECT_CLASS, "CS101"]);
    assert_eq!(classes.choice_labels(), vec!["CS101"]);

    let view = controller.handle(Event::SelectClass(Selection::from_value("10")));
    assert_eq!(view.layout, PanelLayout::ClassesAndGrades);
    let grades = view.grades.expect("grades");
    assert_eq!(grades.midterm.text, "82");
    assert_eq!(grades.midterm.tier, Tier::Good);
    assert_eq!(grades.final_grade.text, "88");
    assert_eq!(grades.final_grade.tier, Tier::VeryGood);
    assert_eq!(grades.remarks, "Good work");
}

#[tokio::test]
async fn no_match_keeps_search_and_back_is_a_no_op() {
    let mut controller = searched("[]", "Nobody").await;

    let view = controller.view();
    assert_eq!(view.layout, PanelLayout::SearchOnly);
    assert_eq!(
        view.search.and_then(|panel| panel.status).map(|s| s.text),
        Some("Student not found".to_string())
    );
    assert!(view.semesters.is_none());

    controller.handle(Event::Back);
    assert_eq!(controller.session().kind(), StageKind::Idle);
    assert_eq!(controller.view().layout, PanelLayout::SearchOnly);

    let before = controller.session().clone();
    controller.handle(Event::Back);
    assert_eq!(controller.session(), &before);
}

#[tokio::test]
async fn two_matches_are_ambiguous_and_nothing_is_cached() {
    let payload = r#"[
        {"id": 1, "student_name": "Jane Doe", "semesters": []},
        {"id": 2, "student_name": "Jane Doe", "semesters": []}
    ]"#;
    let controller = searched(payload, "Jane Doe").await;

    assert_eq!(controller.session().kind(), StageKind::Ambiguous);
    assert!(controller.session().selected_student().is_none());
    assert_eq!(
        controller
            .view()
            .search
            .and_then(|panel| panel.status)
            .map(|s| s.text),
        Some("Multiple students found. Please be more specific.".to_string())
    );
}

#[tokio::test]
async fn back_from_grades_restores_a_clean_search_stage() {
    let mut controller = searched(JANE_DOE, "Jane Doe").await;
    controller.handle(Event::SelectSemester(Selection::Chosen(SemesterId::from(1))));
    controller.handle(Event::SelectClass(Selection::Chosen(ClassId::from(10))));
    assert_eq!(controller.session().kind(), StageKind::ShowingGrades);

    let view = controller.handle(Event::Back);

    let session = controller.session();
    assert_eq!(session.kind(), StageKind::Idle);
    assert!(session.selected_student().is_none());
    assert!(session.selected_semester_id().is_none());
    assert!(session.selected_class_id().is_none());
    assert_eq!(view.layout, PanelLayout::SearchOnly);
    assert!(view.search.expect("search").status.is_none());
    assert!(view.semesters.is_none());
    assert!(view.classes.is_none());
    assert!(view.grades.is_none());
}

#[tokio::test]
async fn semester_placeholder_hides_classes_and_clears_class() {
    let mut controller = searched(JANE_DOE, "Jane Doe").await;
    controller.handle(Event::SelectSemester(Selection::Chosen(SemesterId::from(1))));
    controller.handle(Event::SelectClass(Selection::Chosen(ClassId::from(10))));
    controller.handle(Event::SelectClass(Selection::Sentinel));
    assert_eq!(controller.session().kind(), StageKind::ShowingClasses);

    let view = controller.handle(Event::SelectSemester(Selection::Sentinel));

    assert_eq!(controller.session().kind(), StageKind::ShowingSemesters);
    assert!(controller.session().selected_class_id().is_none());
    assert!(view.classes.is_none());
    assert!(view.semesters.is_some());
}

#[tokio::test]
async fn re_search_drops_previous_drill_down() {
    let mut controller = searched(JANE_DOE, "Jane Doe").await;
    controller.handle(Event::SelectSemester(Selection::Chosen(SemesterId::from(1))));
    controller.handle(Event::SelectSemester(Selection::Sentinel));

    let view = controller.handle(Event::Submit {
        name: "Jane Doe".into(),
    });

    assert_eq!(view.layout, PanelLayout::SearchOnly);
    assert!(view.semesters.is_none());
    controller.settle().await;
    assert_eq!(controller.session().kind(), StageKind::ShowingSemesters);
    assert!(controller.session().selected_semester_id().is_none());
}
