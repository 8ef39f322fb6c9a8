//! Drill-down transitions: semester and class selection.
//!
//! Choosing the placeholder entry of a selector demotes the stage by exactly
//! one level and never further.

use shared::{ClassId, SemesterId, Student};

use super::TransitionResult;
use crate::effect::{Effect, LogLevel};
use crate::event::Selection;
use crate::session::{Session, Stage};

pub fn select_semester(session: Session, selection: Selection<SemesterId>) -> TransitionResult {
    let Session { stage, last_issued } = session;
    let at = |stage| Session { stage, last_issued };

    match (stage, selection) {
        (stage @ Stage::ShowingSemesters { .. }, Selection::Sentinel) => {
            TransitionResult::no_change(at(stage))
        }

        (Stage::ShowingClasses { student, .. }, Selection::Sentinel) => {
            TransitionResult::no_change(at(Stage::ShowingSemesters { student }))
        }

        (
            Stage::ShowingSemesters { student } | Stage::ShowingClasses { student, .. },
            Selection::Chosen(semester_id),
        ) => {
            let effects = missing_semester(&student, &semester_id).into_iter().collect();
            TransitionResult::new(
                at(Stage::ShowingClasses {
                    student,
                    semester_id,
                }),
                effects,
            )
        }

        (stage, selection) => {
            let message = format!(
                "Ignoring semester selection {selection:?} in stage {}",
                stage.kind()
            );
            TransitionResult::ignored(at(stage), LogLevel::Warn, message)
        }
    }
}

pub fn select_class(session: Session, selection: Selection<ClassId>) -> TransitionResult {
    let Session { stage, last_issued } = session;
    let at = |stage| Session { stage, last_issued };

    match (stage, selection) {
        (stage @ Stage::ShowingClasses { .. }, Selection::Sentinel) => {
            TransitionResult::no_change(at(stage))
        }

        (
            Stage::ShowingGrades {
                student,
                semester_id,
                ..
            },
            Selection::Sentinel,
        ) => TransitionResult::no_change(at(Stage::ShowingClasses {
            student,
            semester_id,
        })),

        (
            Stage::ShowingClasses {
                student,
                semester_id,
            }
            | Stage::ShowingGrades {
                student,
                semester_id,
                ..
            },
            Selection::Chosen(class_id),
        ) => {
            let effects = missing_class(&student, &semester_id, &class_id)
                .into_iter()
                .collect();
            TransitionResult::new(
                at(Stage::ShowingGrades {
                    student,
                    semester_id,
                    class_id,
                }),
                effects,
            )
        }

        (stage, selection) => {
            let message = format!(
                "Ignoring class selection {selection:?} in stage {}",
                stage.kind()
            );
            TransitionResult::ignored(at(stage), LogLevel::Warn, message)
        }
    }
}

/// Report an id that the rendered options offered but the cached tree lacks.
fn missing_semester(student: &Student, semester_id: &SemesterId) -> Option<Effect> {
    if student.semester(semester_id).is_some() {
        return None;
    }
    Some(Effect::log(
        LogLevel::Error,
        format!(
            "Semester {semester_id} not found for student {}; showing no classes",
            student.id
        ),
    ))
}

fn missing_class(
    student: &Student,
    semester_id: &SemesterId,
    class_id: &ClassId,
) -> Option<Effect> {
    let found = student
        .semester(semester_id)
        .and_then(|semester| semester.class(class_id))
        .is_some();
    if found {
        return None;
    }
    Some(Effect::log(
        LogLevel::Error,
        format!(
            "Class {class_id} not found in semester {semester_id} for student {}; showing no grades",
            student.id
        ),
    ))
}
