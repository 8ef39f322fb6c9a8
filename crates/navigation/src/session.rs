//! Session state for one search/drill-down flow.
//!
//! Each stage carries exactly the data that is valid in it, so a semester id
//! cannot outlive its student and a class id cannot exist without a semester.

use std::fmt;

use shared::{ClassId, SearchName, SemesterId, Student};

/// Sequence number tagging each issued lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupSeq(pub u64);

impl LookupSeq {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for LookupSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Initial stage: only the search panel, no message.
    Idle,

    /// The submitted name was empty after trimming.
    Rejected,

    /// A lookup is outstanding. Only its resolution is accepted.
    Searching {
        name: SearchName,
        lookup: LookupSeq,
    },

    NotFound {
        name: SearchName,
    },

    Ambiguous {
        name: SearchName,
        count: usize,
    },

    /// The lookup failed in transport (network, status, body, timeout).
    Failed {
        name: SearchName,
        detail: String,
    },

    ShowingSemesters {
        student: Student,
    },

    ShowingClasses {
        student: Student,
        semester_id: SemesterId,
    },

    ShowingGrades {
        student: Student,
        semester_id: SemesterId,
        class_id: ClassId,
    },
}

/// Fieldless mirror of [`Stage`] for logging and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Idle,
    Rejected,
    Searching,
    NotFound,
    Ambiguous,
    Error,
    ShowingSemesters,
    ShowingClasses,
    ShowingGrades,
}

impl StageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Rejected => "rejected",
            Self::Searching => "searching",
            Self::NotFound => "not_found",
            Self::Ambiguous => "ambiguous",
            Self::Error => "error",
            Self::ShowingSemesters => "showing_semesters",
            Self::ShowingClasses => "showing_classes",
            Self::ShowingGrades => "showing_grades",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Self::Idle => StageKind::Idle,
            Self::Rejected => StageKind::Rejected,
            Self::Searching { .. } => StageKind::Searching,
            Self::NotFound { .. } => StageKind::NotFound,
            Self::Ambiguous { .. } => StageKind::Ambiguous,
            Self::Failed { .. } => StageKind::Error,
            Self::ShowingSemesters { .. } => StageKind::ShowingSemesters,
            Self::ShowingClasses { .. } => StageKind::ShowingClasses,
            Self::ShowingGrades { .. } => StageKind::ShowingGrades,
        }
    }

    /// True while the search panel is on screen, i.e. a submit is possible.
    pub fn accepts_search(&self) -> bool {
        !matches!(
            self,
            Self::ShowingClasses { .. } | Self::ShowingGrades { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub stage: Stage,
    /// Last lookup sequence handed out. Survives resets so that a lookup issued
    /// before a reset can never be mistaken for a later one.
    pub last_issued: LookupSeq,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            last_issued: LookupSeq::default(),
        }
    }

    pub fn with_stage(self, stage: Stage) -> Self {
        Self {
            stage,
            last_issued: self.last_issued,
        }
    }

    /// Back to [`Stage::Idle`], dropping the student and every selection.
    pub fn reset(self) -> Self {
        self.with_stage(Stage::Idle)
    }

    pub fn kind(&self) -> StageKind {
        self.stage.kind()
    }

    pub fn selected_student(&self) -> Option<&Student> {
        match &self.stage {
            Stage::ShowingSemesters { student }
            | Stage::ShowingClasses { student, .. }
            | Stage::ShowingGrades { student, .. } => Some(student),
            _ => None,
        }
    }

    pub fn selected_semester_id(&self) -> Option<&SemesterId> {
        match &self.stage {
            Stage::ShowingClasses { semester_id, .. } | Stage::ShowingGrades { semester_id, .. } => {
                Some(semester_id)
            }
            _ => None,
        }
    }

    pub fn selected_class_id(&self) -> Option<&ClassId> {
        match &self.stage {
            Stage::ShowingGrades { class_id, .. } => Some(class_id),
            _ => None,
        }
    }

    /// The lookup whose resolution the session is waiting for, if any.
    pub fn pending_lookup(&self) -> Option<LookupSeq> {
        match &self.stage {
            Stage::Searching { lookup, .. } => Some(*lookup),
            _ => None,
        }
    }
}
