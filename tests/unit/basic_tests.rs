/// Store behavior tests driven by a fixed clock
use chrono::NaiveDate;
use habit_tracker::*;
use tempfile::TempDir;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    /// Open the store in `dir` as it would look on day `d`
    fn open_on(dir: &TempDir, d: u32) -> HabitStore<JsonFileStorage, FixedClock> {
        let storage = JsonFileStorage::new(dir.path().join("habits.json"));
        HabitStore::with_parts(storage, FixedClock(date(d))).expect("Failed to open store")
    }

    #[test]
    fn test_added_habit_lists_with_zero_streak_and_never_done() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);

        store.add("Read 10 pages").unwrap();

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Read 10 pages");
        assert_eq!(list[0].streak, 0);
        assert_eq!(list[0].last_done, None);
    }

    #[test]
    fn test_duplicate_add_fails_without_mutation() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);
        store.add("Walk").unwrap();
        store.done("Walk").unwrap();

        let err = store.add("Walk").unwrap_err();
        assert!(matches!(err, TrackerError::DuplicateHabit { ref name } if name == "Walk"));
        assert_eq!(err.exit_code(), 3);

        let reopened = open_on(&dir, 1);
        assert_eq!(reopened.habits().len(), 1);
        assert_eq!(reopened.habits()[0].streak, 1);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);

        let err = store.add("   ").unwrap_err();
        assert!(matches!(err, TrackerError::Domain(DomainError::InvalidHabitName(_))));
        assert!(store.habits().is_empty());
        assert!(!dir.path().join("habits.json").exists());
    }

    #[test]
    fn test_done_on_missing_habit_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);

        let err = store.done("Meditate").unwrap_err();
        assert!(matches!(err, TrackerError::HabitNotFound { ref name } if name == "Meditate"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_second_done_same_day_changes_nothing() {
        let dir = TempDir::new().unwrap();
        open_on(&dir, 5).add("Walk").unwrap();

        let first = open_on(&dir, 5).done("Walk").unwrap();
        let second = open_on(&dir, 5).done("Walk").unwrap();

        assert_eq!(first.outcome, StreakOutcome::Started);
        assert_eq!(second.outcome, StreakOutcome::AlreadyDone);
        assert_eq!(second.habit.streak, 1);
        assert_eq!(second.habit.total_completions, 1);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let dir = TempDir::new().unwrap();
        open_on(&dir, 5).add("Walk").unwrap();

        assert_eq!(open_on(&dir, 5).done("Walk").unwrap().habit.streak, 1);
        let report = open_on(&dir, 6).done("Walk").unwrap();

        assert_eq!(report.outcome, StreakOutcome::Extended { streak: 2 });
        assert_eq!(report.habit.total_completions, 2);
        assert_eq!(report.habit.last_done, Some(date(6)));
    }

    #[test]
    fn test_gap_resets_streak() {
        let dir = TempDir::new().unwrap();
        open_on(&dir, 5).add("Walk").unwrap();
        open_on(&dir, 5).done("Walk").unwrap();
        open_on(&dir, 6).done("Walk").unwrap();

        let report = open_on(&dir, 9).done("Walk").unwrap();

        assert_eq!(report.outcome, StreakOutcome::Reset { previous_streak: 2 });
        assert_eq!(report.habit.streak, 1);
        assert_eq!(report.habit.total_completions, 3);
    }

    #[test]
    fn test_remove_then_done_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);
        store.add("Walk").unwrap();
        store.add("Read").unwrap();

        let removed = store.remove("Walk").unwrap();
        assert_eq!(removed.name, "Walk");

        let names: Vec<_> = store.list().into_iter().map(|h| h.name).collect();
        assert_eq!(names, ["Read"]);
        assert!(matches!(store.done("Walk"), Err(TrackerError::HabitNotFound { .. })));
        assert!(matches!(store.remove("Walk"), Err(TrackerError::HabitNotFound { .. })));

        assert_eq!(open_on(&dir, 1).habits().len(), 1);
    }

    #[test]
    fn test_stats_reports_highest_streak() {
        let dir = TempDir::new().unwrap();
        open_on(&dir, 1).add("A").unwrap();
        open_on(&dir, 1).add("B").unwrap();

        for d in 1..=5 {
            let mut store = open_on(&dir, d);
            store.done("B").unwrap();
            if d >= 3 {
                store.done("A").unwrap();
            }
        }

        let stats = open_on(&dir, 5).stats();
        assert_eq!(stats.total_habits, 2);
        assert_eq!(stats.total_completions, 8);
        assert_eq!(stats.done_today, 2);
        assert_eq!(
            stats.top_streak,
            Some(TopStreak { name: "B".to_string(), streak: 5 })
        );
    }

    #[test]
    fn test_stats_tie_goes_to_first_added() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);
        store.add("First").unwrap();
        store.add("Second").unwrap();
        store.done("Second").unwrap();
        store.done("First").unwrap();

        let stats = store.stats();
        assert_eq!(stats.top_streak.unwrap().name, "First");
    }

    #[test]
    fn test_list_marks_habits_done_today() {
        let dir = TempDir::new().unwrap();
        let mut store = open_on(&dir, 1);
        store.add("Walk").unwrap();
        store.add("Read").unwrap();
        store.done("Walk").unwrap();

        let list = store.list();
        assert!(list[0].done_today);
        assert!(!list[1].done_today);

        let next_day = open_on(&dir, 2).list();
        assert!(!next_day[0].done_today);
        assert_eq!(next_day[0].last_done, Some(date(1)));
    }
}
