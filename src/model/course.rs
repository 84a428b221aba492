use serde::Serialize;
use std::sync::OnceLock;

/// Par when a round's course cannot be resolved; the leaderboard also
/// assumes this per round regardless of the actual card (see scoring).
pub const FALLBACK_PAR: i64 = 4;
/// Stroke index used when a hole cannot be resolved: the easiest hole, so an
/// unknown hole only receives strokes from very high handicaps.
pub const FALLBACK_STROKE_INDEX: i64 = 18;

pub const HOLES_PER_ROUND: i64 = 18;

#[derive(Serialize, Clone, Copy, Debug)]
pub struct CourseHole {
    pub hole: i64,
    pub par: i64,
    pub yardage: i64,
    /// 1..=18, unique per course; lower means harder, handicap strokes land
    /// on the lowest indexes first.
    pub stroke_index: i64,
}

#[derive(Serialize, Clone, Debug)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub par: i64,
    pub description: &'static str,
    pub website: &'static str,
    pub holes: Vec<CourseHole>,
}

impl Course {
    #[must_use]
    pub fn hole(&self, hole: i64) -> Option<&CourseHole> {
        self.holes.iter().find(|h| h.hole == hole)
    }
}

const fn h(hole: i64, par: i64, yardage: i64, stroke_index: i64) -> CourseHole {
    CourseHole {
        hole,
        par,
        yardage,
        stroke_index,
    }
}

/// The three trip courses. Card data is fixed; nothing mutates it at runtime.
pub fn courses() -> &'static [Course] {
    static COURSES: OnceLock<Vec<Course>> = OnceLock::new();
    COURSES.get_or_init(|| {
        vec![
            Course {
                id: "nau",
                name: "NAU Morgado Course",
                par: 73,
                description:
                    "Traditional Portuguese golf course with rolling hills and strategic bunkers.",
                website: "https://www.naumorgado.com/",
                holes: vec![
                    h(1, 4, 342, 10),
                    h(2, 4, 373, 15),
                    h(3, 5, 535, 1),
                    h(4, 4, 385, 7),
                    h(5, 3, 156, 17),
                    h(6, 4, 412, 3),
                    h(7, 5, 492, 11),
                    h(8, 4, 380, 9),
                    h(9, 4, 335, 13),
                    h(10, 4, 365, 6),
                    h(11, 3, 175, 16),
                    h(12, 4, 302, 18),
                    h(13, 5, 510, 2),
                    h(14, 4, 390, 8),
                    h(15, 3, 145, 14),
                    h(16, 4, 375, 4),
                    h(17, 4, 410, 12),
                    h(18, 5, 525, 5),
                ],
            },
            Course {
                id: "amendoeira",
                name: "Amendoeira Golf Resort (Faldo Course)",
                par: 72,
                description: "Par-72 championship design by Sir Nick Faldo, requiring strategic play and careful positioning.",
                website: "https://www.amendoeiraresort.com/golf/",
                holes: vec![
                    h(1, 4, 415, 7),
                    h(2, 3, 174, 17),
                    h(3, 4, 342, 13),
                    h(4, 5, 486, 3),
                    h(5, 4, 375, 9),
                    h(6, 3, 165, 15),
                    h(7, 4, 385, 5),
                    h(8, 4, 396, 1),
                    h(9, 5, 512, 11),
                    h(10, 4, 368, 8),
                    h(11, 3, 152, 18),
                    h(12, 4, 355, 12),
                    h(13, 5, 495, 2),
                    h(14, 4, 385, 6),
                    h(15, 4, 365, 14),
                    h(16, 3, 135, 16),
                    h(17, 4, 410, 4),
                    h(18, 5, 528, 10),
                ],
            },
            Course {
                id: "quinta",
                name: "Quinta do Lago South Course",
                par: 71,
                description:
                    "Premium championship course with stunning lake views and signature holes.",
                website: "https://www.quintadolago.com/golf/",
                holes: vec![
                    h(1, 4, 390, 11),
                    h(2, 5, 500, 15),
                    h(3, 4, 385, 7),
                    h(4, 3, 175, 17),
                    h(5, 5, 505, 1),
                    h(6, 4, 410, 3),
                    h(7, 3, 165, 13),
                    h(8, 4, 395, 5),
                    h(9, 4, 380, 9),
                    h(10, 4, 365, 12),
                    h(11, 3, 185, 16),
                    h(12, 4, 375, 8),
                    h(13, 5, 485, 2),
                    h(14, 4, 390, 6),
                    h(15, 3, 200, 14),
                    h(16, 4, 372, 18),
                    h(17, 4, 385, 4),
                    h(18, 4, 405, 10),
                ],
            },
        ]
    })
}

#[must_use]
pub fn course_by_id(id: &str) -> Option<&'static Course> {
    courses().iter().find(|c| c.id == id)
}

/// Par for one hole of a course, degrading to [`FALLBACK_PAR`] when either
/// the course or the hole is unknown.
#[must_use]
pub fn hole_par(course_id: &str, hole: i64) -> i64 {
    course_by_id(course_id)
        .and_then(|c| c.hole(hole))
        .map_or(FALLBACK_PAR, |h| h.par)
}

/// Stroke index for one hole, degrading to [`FALLBACK_STROKE_INDEX`].
#[must_use]
pub fn hole_stroke_index(course_id: &str, hole: i64) -> i64 {
    course_by_id(course_id)
        .and_then(|c| c.hole(hole))
        .map_or(FALLBACK_STROKE_INDEX, |h| h.stroke_index)
}
