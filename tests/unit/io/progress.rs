//! Tests for progress tracking and multi-file batch processing

#[cfg(test)]
mod tests {
    use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use crate::io::progress::{ProgressManager, Stage};
    use std::path::Path;

    // Tests a single file walks through every stage
    // Verified by not resetting the stage count on completion
    #[test]
    fn test_single_file_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        assert!(!pm.is_batch_mode());
        assert_eq!(pm.bar_count(), 1);

        pm.start_file(0, Path::new("single.png"));
        assert_eq!(pm.stages_done(0), Some(0));

        pm.advance(0, Stage::Load);
        pm.advance(0, Stage::Scan);
        assert_eq!(pm.stages_done(0), Some(1));
        pm.advance(0, Stage::Export);
        assert_eq!(pm.stages_done(0), Some(2));

        pm.complete_file(0);
        assert_eq!(pm.stages_done(0), Some(Stage::COUNT));
        pm.finish();
    }

    // Tests small batches get one bar per file and no batch bar
    // Verified by creating the batch bar at the limit
    #[test]
    fn test_individual_bars_up_to_limit() {
        let mut pm = ProgressManager::default();
        pm.initialize(MAX_INDIVIDUAL_PROGRESS_BARS);

        assert!(!pm.is_batch_mode());
        assert_eq!(pm.bar_count(), MAX_INDIVIDUAL_PROGRESS_BARS);
        pm.finish();
    }

    // Tests large batches cap the bars and add a batch bar
    #[test]
    fn test_batch_mode_over_limit() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS * 2 + 1;
        pm.initialize(file_count);

        assert!(pm.is_batch_mode());
        assert_eq!(pm.bar_count(), MAX_INDIVIDUAL_PROGRESS_BARS);

        for i in 0..file_count {
            pm.start_file(i, Path::new(&format!("file{i}.png")));
            pm.advance(i, Stage::Scan);
            pm.complete_file(i);
        }
        assert!((0..file_count).all(|i| pm.stages_done(i) == Some(Stage::COUNT)));
        pm.finish();
    }

    // Tests unknown indices are ignored
    #[test]
    fn test_unstarted_files() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.advance(3, Stage::Export);
        pm.complete_file(3);

        assert_eq!(pm.stages_done(3), None);
        pm.start_file(2, Path::new("late.png"));
        assert_eq!(pm.stages_done(0), None);
        assert_eq!(pm.stages_done(2), Some(0));
        pm.finish();
    }
}
