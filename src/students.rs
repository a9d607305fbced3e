//! Pure analytics over student records
//!
//! Every function borrows its input and allocates a fresh result; callers
//! keep their slices untouched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A student record carried in request payloads, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: f64,
    pub grade: f64,
}

/// Keep students with a grade of at least 50, preserving input order
pub fn filter_passed_students(students: &[Student]) -> Vec<Student> {
    students
        .iter()
        .filter(|student| student.grade >= 50.0)
        .cloned()
        .collect()
}

/// Project the name of each student, same order and length as the input
pub fn student_names(students: &[Student]) -> Vec<String> {
    students.iter().map(|student| student.name.clone()).collect()
}

/// Return a new sequence ordered by ascending grade
///
/// The sort is stable: students with equal grades keep their input order.
pub fn sort_students_by_grade(students: &[Student]) -> Vec<Student> {
    let mut sorted = students.to_vec();
    sorted.sort_by(|a, b| a.grade.partial_cmp(&b.grade).unwrap_or(Ordering::Equal));
    sorted
}

/// Average age as sum(age) / count
///
/// An empty input yields NaN (0.0 / 0.0), which serializes to JSON `null`.
pub fn average_age(students: &[Student]) -> f64 {
    let total: f64 = students.iter().map(|student| student.age).sum();
    total / students.len() as f64
}
