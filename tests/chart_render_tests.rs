use approx::assert_relative_eq;
use pipeline_chart::api::{PipelineChart, PipelineChartConfig};
use pipeline_chart::core::{Stage, StageKind};
use pipeline_chart::render::{Color, NullRenderer};
use serde_json::json;

fn null_chart(config: PipelineChartConfig) -> PipelineChart<NullRenderer> {
    PipelineChart::new(NullRenderer::default(), "pipeline", config)
}

#[test]
fn empty_pipeline_renders_nothing_without_error() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart.render().expect("empty render");

    assert_eq!(chart.renderer().last_stage_group_count, 0);
    assert_eq!(chart.renderer().render_count, 1);
    let frame = chart.build_frame();
    assert!(frame.is_empty());
    assert!(frame.silhouettes.is_none());
}

#[test]
fn add_stage_chains_and_keeps_order() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart
        .add_stage(Stage::new(1.0, 2.0))
        .add_stage(Stage::new(3.0, 4.0))
        .add_stage(Stage::new(5.0, 6.0));

    let values: Vec<f64> = chart.stages().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![1.0, 3.0, 5.0]);
}

#[test]
fn non_conforming_input_is_rejected_without_mutation() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart.add_stage(Stage::new(1.0, 2.0));

    assert!(chart.try_add_stage(&json!(42)).is_none());
    assert!(chart.try_add_stage(&json!({ "value": 1 })).is_none());
    assert!(chart.try_add_stage(&json!({ "value": 1, "goal": "x" })).is_none());
    assert_eq!(chart.stage_count(), 1);

    let accepted = chart
        .try_add_stage(&json!({ "value": 2, "goal": 4, "color": "#123456" }))
        .map(|chart| chart.stage_count());
    assert_eq!(accepted, Some(2));
}

#[test]
fn css_color_input_is_accepted_and_empty_color_falls_back_to_fill() {
    let config = PipelineChartConfig::default();
    let mut chart = null_chart(config);

    assert!(
        chart
            .try_add_stage(&json!({ "value": 1, "goal": 2, "color": "teal" }))
            .is_some()
    );
    assert!(
        chart
            .try_add_stage(&json!({ "value": 1, "goal": 2, "color": "rgb(0,128,128)" }))
            .is_some()
    );
    assert!(
        chart
            .try_add_stage(&json!({ "value": 1, "goal": 2, "color": "" }))
            .is_some()
    );
    assert_eq!(chart.stage_count(), 3);

    let frame = chart.build_frame();
    let teal = Color::from_css("teal").expect("named color");
    assert_eq!(frame.stages[0].fill.fill_color, teal);
    assert_eq!(frame.stages[1].fill.fill_color, teal);
    assert_eq!(frame.stages[2].fill.fill_color, config.stage_fill_color);
}

#[test]
fn fill_width_is_proportional_and_unclamped() {
    let config = PipelineChartConfig::default().with_size(400.0, 75.0);
    let mut chart = null_chart(config);
    chart
        .add_stage(Stage::new(3.0, 6.0))
        .add_stage(Stage::new(8.0, 4.0));

    let frame = chart.build_frame();
    assert_relative_eq!(frame.stages[0].background.width, 200.0);
    assert_relative_eq!(frame.stages[0].fill.width, 100.0);
    assert_relative_eq!(frame.stages[1].fill.width, 400.0);
}

#[test]
fn outline_color_follows_completion() {
    let config = PipelineChartConfig::default();
    let mut chart = null_chart(config);
    chart
        .add_stage(Stage::new(10.0, 10.0))
        .add_stage(Stage::new(9.0, 10.0));

    let frame = chart.build_frame();
    assert_eq!(
        frame.stages[0].outline.stroke_color,
        config.stage_complete_outline
    );
    assert_eq!(
        frame.stages[1].outline.stroke_color,
        config.stage_incomplete_outline
    );
}

#[test]
fn stage_color_overrides_default_fill() {
    let config = PipelineChartConfig::default();
    let mut chart = null_chart(config);
    let teal = Color::from_hex("#008080").expect("hex");
    chart
        .add_stage(Stage::new(1.0, 2.0).with_color(teal))
        .add_stage(Stage::new(1.0, 2.0));

    let frame = chart.build_frame();
    assert_eq!(frame.stages[0].fill.fill_color, teal);
    assert_eq!(frame.stages[1].fill.fill_color, config.stage_fill_color);
}

#[test]
fn label_is_centered_value_over_goal() {
    let config = PipelineChartConfig::default().with_size(1000.0, 80.0);
    let mut chart = null_chart(config);
    chart.add_stage(Stage::new(5.0, 10.0)).add_stage(Stage::new(1.0, 3.0));

    let frame = chart.build_frame();
    let label = &frame.stages[0].label;
    assert_eq!(label.text, "5/10");
    assert_relative_eq!(label.x, 250.0);
    assert_relative_eq!(label.y, 40.0);
}

#[test]
fn stage_groups_carry_kind_and_offset() {
    let mut chart = null_chart(PipelineChartConfig::default());
    for _ in 0..4 {
        chart.add_stage(Stage::new(1.0, 1.0));
    }

    let frame = chart.build_frame();
    let kinds: Vec<StageKind> = frame.stages.iter().map(|g| g.clip_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StageKind::Start,
            StageKind::Middle,
            StageKind::Middle,
            StageKind::End
        ]
    );
    let offsets: Vec<f64> = frame.stages.iter().map(|g| g.placement.x_offset).collect();
    assert_eq!(offsets, vec![0.0, 240.0, 480.0, 720.0]);
    let numbers: Vec<usize> = frame.stages.iter().map(|g| g.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn single_stage_uses_start_outline() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart.add_stage(Stage::new(1.0, 2.0));

    let frame = chart.build_frame();
    assert_eq!(frame.stages.len(), 1);
    assert_eq!(frame.stages[0].clip_kind(), StageKind::Start);
    assert_relative_eq!(frame.stages[0].background.width, 1000.0);
}

#[test]
fn mutated_stage_is_picked_up_on_next_render() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart.add_stage(Stage::new(1.0, 10.0)).add_stage(Stage::new(2.0, 10.0));
    let before = chart.build_frame();

    if let Some(stage) = chart.stage_mut(0) {
        stage.value = 10.0;
    }
    let after = chart.build_frame();

    assert_eq!(before.stages[0].label.text, "1/10");
    assert_eq!(after.stages[0].label.text, "10/10");
    assert_eq!(
        after.stages[0].outline.stroke_color,
        chart.config().stage_complete_outline
    );
}

#[test]
fn zero_goal_is_passed_through_and_still_renders() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart.add_stage(Stage::new(1.0, 0.0));

    chart.render().expect("degenerate geometry is not an error");
    let frame = chart.build_frame();
    assert!(!frame.stages[0].fill.width.is_finite());
}

#[test]
fn build_frame_is_deterministic() {
    let mut chart = null_chart(PipelineChartConfig::default());
    chart.add_stage(Stage::new(3.0, 5.0)).add_stage(Stage::new(7.0, 5.0));

    assert_eq!(chart.build_frame(), chart.build_frame());
}

#[test]
fn stage_width_uses_hint_until_stages_exist() {
    let config = PipelineChartConfig::default().with_stage_count(4);
    let mut chart = null_chart(config);
    assert_eq!(chart.stage_width(), Some(250.0));

    chart.add_stage(Stage::new(1.0, 1.0)).add_stage(Stage::new(1.0, 1.0));
    assert_eq!(chart.stage_width(), Some(500.0));

    let bare = null_chart(PipelineChartConfig::default());
    assert_eq!(bare.stage_width(), None);
}

#[test]
fn invalid_style_is_reported_by_renderer() {
    let config = PipelineChartConfig::default().with_label_style(Color::rgb(0.0, 0.0, 0.0), 0.0);
    let mut chart = null_chart(config);
    chart.add_stage(Stage::new(1.0, 2.0));

    assert!(chart.render().is_err());
}
