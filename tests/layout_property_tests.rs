use pipeline_chart::core::{
    Dimensions, PipelineLayout, StageKind, compute_silhouettes, compute_stage_placements,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn placements_are_strictly_increasing(
        stage_count in 1usize..40,
        stage_width in 10.0f64..500.0,
        arrow_ratio in 0.0f64..0.95,
        padding in 0.0f64..50.0
    ) {
        let arrow_strength = stage_width * arrow_ratio;
        let placements = compute_stage_placements(stage_count, stage_width, arrow_strength, padding);

        prop_assert_eq!(placements.len(), stage_count);
        for pair in placements.windows(2) {
            prop_assert!(pair[0].x_offset < pair[1].x_offset);
        }
    }

    #[test]
    fn first_is_start_and_last_is_end_only_when_more_than_one(
        stage_count in 1usize..40,
        stage_width in 10.0f64..500.0
    ) {
        let placements = compute_stage_placements(stage_count, stage_width, 5.0, 3.0);

        prop_assert_eq!(placements[0].kind, StageKind::Start);
        let last = placements[stage_count - 1].kind;
        if stage_count > 1 {
            prop_assert_eq!(last, StageKind::End);
        } else {
            prop_assert_eq!(last, StageKind::Start);
        }
        for placement in &placements[1..stage_count.saturating_sub(1).max(1)] {
            prop_assert_eq!(placement.kind, StageKind::Middle);
        }
    }

    #[test]
    fn neighbouring_stages_nest_by_arrow_and_separate_by_padding(
        stage_count in 2usize..20,
        stage_width in 10.0f64..500.0,
        arrow_ratio in 0.0f64..0.95,
        padding in 0.0f64..50.0
    ) {
        let arrow_strength = stage_width * arrow_ratio;
        let placements = compute_stage_placements(stage_count, stage_width, arrow_strength, padding);
        let expected_step = stage_width - arrow_strength + padding;

        for pair in placements.windows(2) {
            let step = pair[1].x_offset - pair[0].x_offset;
            prop_assert!((step - expected_step).abs() <= 1e-9 * stage_count as f64 * stage_width);
        }
    }

    #[test]
    fn silhouettes_stay_inside_stage_box(
        width in 10.0f64..1_000.0,
        height in 1.0f64..200.0,
        arrow_ratio in 0.0f64..1.0
    ) {
        let set = compute_silhouettes(width, height, width * arrow_ratio);
        for silhouette in set.iter() {
            prop_assert_eq!(silhouette.vertices().len(), 6);
            for point in silhouette.vertices() {
                prop_assert!((0.0..=width).contains(&point.x));
                prop_assert!((0.0..=height).contains(&point.y));
            }
        }
    }

    #[test]
    fn layout_stage_width_divides_total_width(
        stage_count in 1usize..30,
        width in 100.0f64..5_000.0
    ) {
        let layout = PipelineLayout::compute(Dimensions::new(width, 75.0), 0.0, 0.0, stage_count);
        prop_assert!((layout.stage_width * stage_count as f64 - width).abs() <= 1e-6);
        prop_assert!((layout.drawn_width() - width).abs() <= 1e-6);
    }
}
