//! Analytics Aggregator — pure derived metrics over a roadmap's week list.
//!
//! No side effects, no I/O. Tolerates duplicate and non-contiguous week
//! numbers: every computation sorts-then-scans, never indexes by number.

use serde::Serialize;

use crate::models::roadmap::WeekEntry;

/// Derived progress metrics for one roadmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapMetrics {
    pub total_weeks: usize,
    pub completed_weeks: usize,
    pub completion_percentage: u32,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub task_completion_percentage: u32,
    /// Consecutive completed weeks from the lowest week number, × 7.
    pub streak_days: u32,
    /// None until the first week is complete (clients render a placeholder).
    pub estimated_remaining_days: Option<u32>,
}

pub fn compute_roadmap_metrics(content: &[WeekEntry]) -> RoadmapMetrics {
    let total_weeks = content.len();
    let completed_weeks = content.iter().filter(|w| w.completed).count();

    let total_tasks: usize = content.iter().map(|w| w.tasks.len()).sum();
    let completed_tasks: usize = content
        .iter()
        .filter(|w| w.completed)
        .map(|w| w.tasks.len())
        .sum();

    // Streak: prefix run of completed entries in week-number order,
    // stopping at the first incomplete one. A week counts as 7 days.
    let mut sorted: Vec<&WeekEntry> = content.iter().collect();
    sorted.sort_by_key(|w| w.week);
    let streak_weeks = sorted.iter().take_while(|w| w.completed).count();
    let streak_days = streak_weeks as u32 * 7;

    RoadmapMetrics {
        total_weeks,
        completed_weeks,
        completion_percentage: percentage(completed_weeks, total_weeks),
        total_tasks,
        completed_tasks,
        task_completion_percentage: percentage(completed_tasks, total_tasks),
        streak_days,
        estimated_remaining_days: estimate_remaining_days(
            total_weeks,
            completed_weeks,
            streak_days,
        ),
    }
}

/// The lowest-numbered incomplete week, if any — surfaced as "next tasks".
pub fn next_incomplete_week(content: &[WeekEntry]) -> Option<&WeekEntry> {
    content
        .iter()
        .filter(|w| !w.completed)
        .min_by_key(|w| w.week)
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Pace projection: days-per-week observed so far (streak days over
/// completed weeks), falling back to a flat 7 when there is no streak.
fn estimate_remaining_days(
    total_weeks: usize,
    completed_weeks: usize,
    streak_days: u32,
) -> Option<u32> {
    if completed_weeks == 0 {
        return None;
    }
    let remaining_weeks = total_weeks - completed_weeks;
    if remaining_weeks == 0 {
        return Some(0);
    }
    let days_per_week = if streak_days > 0 {
        streak_days as f64 / completed_weeks as f64
    } else {
        7.0
    };
    Some((remaining_weeks as f64 * days_per_week).ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(number: i32, tasks: &[&str], completed: bool) -> WeekEntry {
        WeekEntry {
            week: number,
            goal: format!("Week {number} goal"),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
            completed,
        }
    }

    #[test]
    fn test_empty_content_yields_zero_percentages() {
        let metrics = compute_roadmap_metrics(&[]);
        assert_eq!(metrics.total_weeks, 0);
        assert_eq!(metrics.completion_percentage, 0);
        assert_eq!(metrics.task_completion_percentage, 0);
        assert_eq!(metrics.streak_days, 0);
        assert_eq!(metrics.estimated_remaining_days, None);
    }

    #[test]
    fn test_three_week_fixture_matches_expected_metrics() {
        let content = vec![
            week(1, &["a", "b"], true),
            week(2, &["c"], true),
            week(3, &["d", "e"], false),
        ];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.total_weeks, 3);
        assert_eq!(metrics.completed_weeks, 2);
        assert_eq!(metrics.completion_percentage, 67);
        assert_eq!(metrics.total_tasks, 5);
        assert_eq!(metrics.completed_tasks, 3);
        assert_eq!(metrics.task_completion_percentage, 60);
        assert_eq!(metrics.streak_days, 14);
        // 1 remaining week at the observed pace of 14/2 = 7 days per week
        assert_eq!(metrics.estimated_remaining_days, Some(7));
    }

    #[test]
    fn test_streak_stops_at_first_incomplete_week() {
        let content = vec![
            week(1, &["a"], true),
            week(2, &["b"], false),
            week(3, &["c"], true),
        ];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.streak_days, 7);
    }

    #[test]
    fn test_streak_sorts_before_scanning() {
        // Entries arrive out of order; the streak still starts at week 1
        let content = vec![
            week(3, &["c"], false),
            week(1, &["a"], true),
            week(2, &["b"], true),
        ];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.streak_days, 14);
    }

    #[test]
    fn test_duplicate_and_gapped_week_numbers_do_not_fault() {
        let content = vec![
            week(1, &["a"], true),
            week(1, &["b"], true),
            week(5, &["c"], false),
        ];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.total_weeks, 3);
        assert_eq!(metrics.completed_weeks, 2);
        assert_eq!(metrics.streak_days, 14);
    }

    #[test]
    fn test_fully_complete_roadmap_has_zero_days_remaining() {
        let content = vec![week(1, &["a"], true), week(2, &["b"], true)];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.completion_percentage, 100);
        assert_eq!(metrics.estimated_remaining_days, Some(0));
    }

    #[test]
    fn test_no_completed_weeks_leaves_estimate_undefined() {
        let content = vec![week(1, &["a"], false), week(2, &["b"], false)];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.estimated_remaining_days, None);
    }

    #[test]
    fn test_estimate_falls_back_to_seven_days_without_a_streak() {
        // Week 2 complete but week 1 is not: progress exists, streak is 0
        let content = vec![
            week(1, &["a"], false),
            week(2, &["b"], true),
            week(3, &["c"], false),
        ];
        let metrics = compute_roadmap_metrics(&content);
        assert_eq!(metrics.streak_days, 0);
        assert_eq!(metrics.completed_weeks, 1);
        // 2 remaining weeks at the 7-day fallback pace
        assert_eq!(metrics.estimated_remaining_days, Some(14));
    }

    #[test]
    fn test_next_incomplete_week_is_lowest_numbered() {
        let content = vec![
            week(4, &["d"], false),
            week(2, &["b"], false),
            week(1, &["a"], true),
        ];
        assert_eq!(next_incomplete_week(&content).map(|w| w.week), Some(2));
    }

    #[test]
    fn test_next_incomplete_week_none_when_all_done() {
        let content = vec![week(1, &["a"], true)];
        assert!(next_incomplete_week(&content).is_none());
    }
}
