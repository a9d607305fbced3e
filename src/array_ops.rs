//! Built-in sequence operations applied in a fixed order
//!
//! The report is computed against one shared mutable buffer. Several
//! operations are destructive (pop, push, reverse, shift, splice, unshift),
//! so every later field observes the side effects of the earlier ones. The
//! evaluation order is part of the response contract; do not reorder or
//! parallelize these steps.

use serde::Serialize;
use std::cmp::Ordering;

/// Results of the built-in operations, serialized in evaluation order
#[derive(Debug, Serialize)]
pub struct ArrayReport {
    #[serde(rename = "Length of the array")]
    pub length: usize,
    #[serde(rename = "Concatenated array")]
    pub concatenated: Vec<f64>,
    #[serde(rename = "Every element is greater than 0")]
    pub every_positive: bool,
    #[serde(rename = "Filtered array (even numbers)")]
    pub even_numbers: Vec<f64>,
    #[serde(
        rename = "First element greater than 2",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_greater_than_two: Option<f64>,
    #[serde(rename = "Index of the first element greater than 2")]
    pub index_of_first_greater_than_two: i64,
    #[serde(rename = "Includes value 2")]
    pub includes_two: bool,
    #[serde(rename = "Index of value 2")]
    pub index_of_two: i64,
    #[serde(rename = "Joined array elements with '-'")]
    pub joined: String,
    #[serde(rename = "Last index of value 2")]
    pub last_index_of_two: i64,
    #[serde(rename = "Mapped array (doubled each element)")]
    pub doubled: Vec<f64>,
    #[serde(rename = "Popped last element", skip_serializing_if = "Option::is_none")]
    pub popped: Option<f64>,
    #[serde(rename = "Pushed 4 into the array")]
    pub length_after_push: usize,
    #[serde(rename = "Reduced array (sum of all elements)")]
    pub sum: f64,
    #[serde(rename = "ReducedRight array (sum of all elements from right)")]
    pub sum_from_right: f64,
    #[serde(rename = "Reversed array")]
    pub reversed: Vec<f64>,
    #[serde(rename = "Shifted first element", skip_serializing_if = "Option::is_none")]
    pub shifted: Option<f64>,
    #[serde(rename = "Sliced array (from index 1 to 3)")]
    pub sliced: Vec<f64>,
    #[serde(rename = "Some elements are greater than 2")]
    pub some_greater_than_two: bool,
    #[serde(rename = "Sorted array")]
    pub sorted: Vec<f64>,
    #[serde(rename = "Spliced array (removed 2 elements from index 1)")]
    pub spliced: Vec<f64>,
    #[serde(rename = "Converted array to string")]
    pub stringified: String,
    #[serde(rename = "Unshifted 0 into the array")]
    pub length_after_unshift: usize,
    #[serde(rename = "sorted array in ascending order is")]
    pub sorted_ascending: Vec<f64>,
}

impl ArrayReport {
    /// Run the operations against a private copy of the caller's numbers
    pub fn compute(input: &[f64]) -> Self {
        let mut buffer = input.to_vec();

        let length = buffer.len();
        let concatenated: Vec<f64> = buffer
            .iter()
            .copied()
            .chain([4.0, 5.0, 6.0])
            .collect();
        let every_positive = buffer.iter().all(|v| *v > 0.0);
        let even_numbers: Vec<f64> = buffer.iter().copied().filter(|v| v % 2.0 == 0.0).collect();
        let first_greater_than_two = buffer.iter().copied().find(|v| *v > 2.0);
        let index_of_first_greater_than_two = index_or_minus_one(buffer.iter().position(|v| *v > 2.0));
        let includes_two = buffer.contains(&2.0);
        let index_of_two = index_or_minus_one(buffer.iter().position(|v| *v == 2.0));
        let joined = join_numbers(&buffer, "-");
        let last_index_of_two = index_or_minus_one(buffer.iter().rposition(|v| *v == 2.0));
        let doubled: Vec<f64> = buffer.iter().map(|v| v * 2.0).collect();

        // Destructive steps begin here; the buffer shrinks and grows in place.
        let popped = buffer.pop();
        buffer.push(4.0);
        let length_after_push = buffer.len();
        let sum: f64 = buffer.iter().sum();
        let sum_from_right: f64 = buffer.iter().rev().sum();
        buffer.reverse();
        let reversed = buffer.clone();
        let shifted = if buffer.is_empty() {
            None
        } else {
            Some(buffer.remove(0))
        };
        let sliced = slice_range(&buffer, 1, 3);
        let some_greater_than_two = buffer.iter().any(|v| *v > 2.0);
        let sorted = sorted_copy(&buffer);
        let spliced = splice(&mut buffer, 1, 2);
        let stringified = join_numbers(&buffer, ",");
        buffer.insert(0, 0.0);
        let length_after_unshift = buffer.len();
        let sorted_ascending = sorted_copy(&buffer);

        Self {
            length,
            concatenated,
            every_positive,
            even_numbers,
            first_greater_than_two,
            index_of_first_greater_than_two,
            includes_two,
            index_of_two,
            joined,
            last_index_of_two,
            doubled,
            popped,
            length_after_push,
            sum,
            sum_from_right,
            reversed,
            shifted,
            sliced,
            some_greater_than_two,
            sorted,
            spliced,
            stringified,
            length_after_unshift,
            sorted_ascending,
        }
    }
}

fn index_or_minus_one(position: Option<usize>) -> i64 {
    position.map(|i| i as i64).unwrap_or(-1)
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    copy
}

/// Non-mutating sub-sequence from `start` up to (not including) `end`,
/// clamped to the buffer bounds
fn slice_range(values: &[f64], start: usize, end: usize) -> Vec<f64> {
    let end = end.min(values.len());
    let start = start.min(end);
    values[start..end].to_vec()
}

/// Remove up to `delete_count` elements starting at `start`, returning them
fn splice(values: &mut Vec<f64>, start: usize, delete_count: usize) -> Vec<f64> {
    let start = start.min(values.len());
    let delete_count = delete_count.min(values.len() - start);
    values.drain(start..start + delete_count).collect()
}

/// Join numbers the way a dynamic runtime prints them: integral doubles
/// without a fractional part
fn join_numbers(values: &[f64], separator: &str) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(separator)
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < 9.0e18 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_one_two_three() {
        let report = ArrayReport::compute(&[1.0, 2.0, 3.0]);

        // Non-destructive fields see the original buffer.
        assert_eq!(report.length, 3);
        assert_eq!(report.concatenated, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(report.every_positive);
        assert_eq!(report.even_numbers, vec![2.0]);
        assert_eq!(report.first_greater_than_two, Some(3.0));
        assert_eq!(report.index_of_first_greater_than_two, 2);
        assert!(report.includes_two);
        assert_eq!(report.index_of_two, 1);
        assert_eq!(report.joined, "1-2-3");
        assert_eq!(report.last_index_of_two, 1);
        assert_eq!(report.doubled, vec![2.0, 4.0, 6.0]);

        // From here on each field observes the prior mutations.
        assert_eq!(report.popped, Some(3.0));
        assert_eq!(report.length_after_push, 3); // [1, 2, 4]
        assert_eq!(report.sum, 7.0);
        assert_eq!(report.sum_from_right, 7.0);
        assert_eq!(report.reversed, vec![4.0, 2.0, 1.0]);
        assert_eq!(report.shifted, Some(4.0)); // [2, 1]
        assert_eq!(report.sliced, vec![1.0]);
        assert!(!report.some_greater_than_two);
        assert_eq!(report.sorted, vec![1.0, 2.0]);
        assert_eq!(report.spliced, vec![1.0]); // buffer now [2]
        assert_eq!(report.stringified, "2");
        assert_eq!(report.length_after_unshift, 2); // [0, 2]
        assert_eq!(report.sorted_ascending, vec![0.0, 2.0]);
    }

    #[test]
    fn test_report_for_empty_input() {
        let report = ArrayReport::compute(&[]);

        assert_eq!(report.length, 0);
        assert_eq!(report.concatenated, vec![4.0, 5.0, 6.0]);
        assert!(report.every_positive); // vacuously true
        assert!(report.even_numbers.is_empty());
        assert_eq!(report.first_greater_than_two, None);
        assert_eq!(report.index_of_first_greater_than_two, -1);
        assert!(!report.includes_two);
        assert_eq!(report.index_of_two, -1);
        assert_eq!(report.joined, "");
        assert_eq!(report.last_index_of_two, -1);
        assert!(report.doubled.is_empty());

        assert_eq!(report.popped, None);
        assert_eq!(report.length_after_push, 1); // [4]
        assert_eq!(report.sum, 4.0);
        assert_eq!(report.sum_from_right, 4.0);
        assert_eq!(report.reversed, vec![4.0]);
        assert_eq!(report.shifted, Some(4.0)); // []
        assert!(report.sliced.is_empty());
        assert!(!report.some_greater_than_two);
        assert!(report.sorted.is_empty());
        assert!(report.spliced.is_empty());
        assert_eq!(report.stringified, "");
        assert_eq!(report.length_after_unshift, 1); // [0]
        assert_eq!(report.sorted_ascending, vec![0.0]);
    }

    #[test]
    fn test_join_formats_integral_doubles_without_fraction() {
        assert_eq!(join_numbers(&[1.0, 2.5, 3.0], "-"), "1-2.5-3");
        assert_eq!(join_numbers(&[-2.0], ","), "-2");
    }

    #[test]
    fn test_splice_clamps_to_buffer_bounds() {
        let mut values = vec![1.0];
        let removed = splice(&mut values, 1, 2);
        assert!(removed.is_empty());
        assert_eq!(values, vec![1.0]);

        let mut values = vec![1.0, 2.0];
        let removed = splice(&mut values, 1, 5);
        assert_eq!(removed, vec![2.0]);
        assert_eq!(values, vec![1.0]);
    }

    #[test]
    fn test_slice_range_clamps_to_buffer_bounds() {
        assert_eq!(slice_range(&[2.0, 1.0], 1, 3), vec![1.0]);
        assert!(slice_range(&[], 1, 3).is_empty());
    }

    #[test]
    fn test_report_serializes_with_contract_labels() {
        let report = ArrayReport::compute(&[1.0, 2.0, 3.0]);
        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["Length of the array"], 3);
        assert_eq!(object["Popped last element"], 3.0);
        assert_eq!(object["Converted array to string"], "2");
        assert_eq!(object["sorted array in ascending order is"][0], 0.0);
    }

    #[test]
    fn test_absent_results_are_dropped_from_json() {
        let report = ArrayReport::compute(&[-1.0]);
        // No element is greater than 2, so the find result is absent.
        assert_eq!(report.first_greater_than_two, None);

        let value = serde_json::to_value(&report).unwrap();
        assert!(value
            .as_object()
            .unwrap()
            .get("First element greater than 2")
            .is_none());
    }
}
