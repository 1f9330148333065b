use std::collections::HashSet;

use chrono::{DateTime, Duration, Local};
use curricheck_core::{CourseId, MemberId};
use rand::distr::{Distribution, Uniform};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct PlanParams {
    pub id: u64,
    pub n_course: usize,
    pub n_edge: usize,
    pub n_student: usize,
    pub n_enroll: usize,
}

/// A generated curriculum: prerequisite edges plus per-course enrollment,
/// with generation metadata. This is the on-disk JSON format the CLI's
/// `analyze` subcommand consumes.
#[derive(Deserialize, Serialize, Debug)]
pub struct Curriculum {
    params: PlanParams,
    info: String,
    start: DateTime<Local>,
    end: DateTime<Local>,
    edges: Vec<(CourseId, CourseId)>,
    enrollment: Vec<Vec<MemberId>>,
}

impl Curriculum {
    #[must_use]
    pub const fn new(
        params: PlanParams,
        info: String,
        start: DateTime<Local>,
        end: DateTime<Local>,
        edges: Vec<(CourseId, CourseId)>,
        enrollment: Vec<Vec<MemberId>>,
    ) -> Self {
        Self {
            params,
            info,
            start,
            end,
            edges,
            enrollment,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_edges(&self) -> &Vec<(CourseId, CourseId)> {
        &self.edges
    }

    #[must_use]
    pub const fn get_enrollment(&self) -> &Vec<Vec<MemberId>> {
        &self.enrollment
    }

    #[must_use]
    pub const fn get_params(&self) -> &PlanParams {
        &self.params
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Generate one random curriculum over `n_course` courses.
///
/// # Acyclicity invariant
///
/// Every generated edge points forward (`a < b`), so the prerequisite
/// relation is acyclic by construction. `n_edge` is the number of draws,
/// not of distinct edges: duplicates are legal and collapse in the relation
/// store, whose `add_prereq` is idempotent.
///
/// Enrollment assigns each course up to `n_enroll` distinct students drawn
/// uniformly from `0..n_student`; member lists are sorted so the JSON
/// output is stable for a given draw.
///
/// # Panics
///
/// Panics if `n_course < 2` or `n_student == 0` (cannot create a uniform
/// distribution over an empty range).
#[must_use]
pub fn generate_single_curriculum(
    n_course: usize,
    n_edge: usize,
    n_student: usize,
    n_enroll: usize,
) -> (Vec<(CourseId, CourseId)>, Vec<Vec<MemberId>>) {
    assert!(
        n_course >= 2,
        "need at least two courses to draw forward edges"
    );
    let mut random_generator = rand::rng();
    let source_range = Uniform::new(0, n_course - 1).unwrap();
    #[allow(clippy::cast_possible_truncation)]
    let student_range = Uniform::new(0, n_student as u64).unwrap();

    let edges = (0..n_edge)
        .map(|_| {
            let a = source_range.sample(&mut random_generator);
            let b = Uniform::new(a + 1, n_course)
                .unwrap()
                .sample(&mut random_generator);
            (a, b)
        })
        .collect();

    let enrollment = (0..n_course)
        .map(|_| {
            let mut members: HashSet<MemberId> = HashSet::new();
            while members.len() < n_enroll.min(n_student) {
                members.insert(student_range.sample(&mut random_generator));
            }
            let mut members: Vec<MemberId> = members.into_iter().collect();
            members.sort_unstable();
            members
        })
        .collect();

    (edges, enrollment)
}

#[must_use]
pub fn generate_mult_curricula(
    n_plan: u64,
    n_course: usize,
    n_edge: usize,
    n_student: usize,
    n_enroll: usize,
) -> Vec<Curriculum> {
    (0..n_plan)
        .into_par_iter()
        .map(|id| {
            let start_time = Local::now();
            let (edges, enrollment) =
                generate_single_curriculum(n_course, n_edge, n_student, n_enroll);
            let end_time = Local::now();
            Curriculum {
                params: PlanParams {
                    id,
                    n_course,
                    n_edge,
                    n_student,
                    n_enroll,
                },
                info: "generated".to_string(),
                start: start_time,
                end: end_time,
                edges,
                enrollment,
            }
        })
        .collect()
}
