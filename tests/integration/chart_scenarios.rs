use anyhow::Result;
use laddergram::chart::FRAME_RADIUS;
use laddergram::surface::{LinePattern, SurfaceOp};
use laddergram::{ChartComposer, ChartConfig, RecordingSurface, ScoreSet, MAX_LEVELS};

fn compose(scores: &[f64]) -> Result<RecordingSurface> {
    let config = ChartConfig::default();
    let set = ScoreSet::new(scores.to_vec(), config.scores)?;
    let composer = ChartComposer::new(config);
    let mut surface = RecordingSurface::new();
    composer.compose(&set, &mut surface)?;
    Ok(surface)
}

#[test]
fn grid_has_five_dashed_rings_and_one_solid_frame() -> Result<()> {
    let surface = compose(&[3.0, 2.0, 4.0, 1.0, 5.0])?;

    let rings: Vec<_> = surface
        .polylines()
        .filter(|(points, style)| points.len() == 6 && style.pattern == LinePattern::Dashed)
        .collect();
    assert_eq!(rings.len(), MAX_LEVELS);
    for (tier, (points, _)) in rings.iter().enumerate() {
        for point in *points {
            assert_eq!(point.radius, (tier + 1) as f64);
        }
        assert_eq!(points.first(), points.last());
    }

    let frames: Vec<_> = surface
        .polylines()
        .filter(|(points, style)| {
            style.pattern == LinePattern::Solid
                && points.len() == 6
                && points.iter().all(|p| p.radius == FRAME_RADIUS)
        })
        .collect();
    assert_eq!(frames.len(), 1, "exactly one frame ring");
    Ok(())
}

#[test]
fn one_spoke_per_axis_from_center_to_frame() -> Result<()> {
    let surface = compose(&[3.0, 2.0, 4.0, 1.0, 5.0])?;
    let spokes: Vec<_> = surface
        .polylines()
        .filter(|(points, _)| points.len() == 2)
        .collect();
    assert_eq!(spokes.len(), 5);
    for (points, _) in spokes {
        assert_eq!(points[0].radius, 0.0);
        assert_eq!(points[1].radius, FRAME_RADIUS);
        assert_eq!(points[0].angle, points[1].angle);
    }
    Ok(())
}

#[test]
fn profile_polygon_closes_with_exact_score_radii() -> Result<()> {
    let surface = compose(&[3.0, 2.0, 4.0, 1.0, 5.0])?;
    let polygons: Vec<_> = surface.polygons().collect();
    assert_eq!(polygons.len(), 1);
    let (points, fill) = polygons[0];
    let radii: Vec<f64> = points.iter().map(|p| p.radius).collect();
    assert_eq!(radii, vec![3.0, 2.0, 4.0, 1.0, 5.0, 3.0]);
    assert!(fill.opacity > 0.0 && fill.opacity < 1.0, "fill is translucent");

    // The outline traces the same six points.
    let outlines: Vec<_> = surface
        .polylines()
        .filter(|(outline, style)| {
            outline.len() == 6 && style.color == fill.color && *outline == points
        })
        .collect();
    assert_eq!(outlines.len(), 1);
    Ok(())
}

#[test]
fn every_level_label_sits_exactly_on_its_ring() -> Result<()> {
    let surface = compose(&[3.0, 2.0, 4.0, 1.0, 5.0])?;

    let ring_radii: Vec<f64> = (1..=MAX_LEVELS).map(|t| t as f64).collect();
    let level_labels: Vec<_> = surface
        .texts()
        .filter(|(at, _, _)| at.radius <= MAX_LEVELS as f64)
        .collect();
    assert_eq!(level_labels.len(), 25, "5 dimensions x 5 levels");
    for (at, text, _) in &level_labels {
        assert!(
            ring_radii.contains(&at.radius),
            "label '{text}' at radius {} does not coincide with a grid ring",
            at.radius
        );
    }

    let axis_labels: Vec<_> = surface
        .texts()
        .filter(|(at, _, _)| at.radius > MAX_LEVELS as f64)
        .collect();
    assert_eq!(axis_labels.len(), 5);
    let axis_names: Vec<&str> = axis_labels.iter().map(|(_, text, _)| *text).collect();
    assert_eq!(
        axis_names,
        ["Technology", "System", "People", "Process", "Influence"]
    );

    // Level labels render smaller than the dimension names.
    let level_style = level_labels[0].2;
    let axis_style = axis_labels[0].2;
    assert_ne!(level_style.size, axis_style.size);
    Ok(())
}

#[test]
fn layers_draw_in_order_rings_frame_spokes_labels_profile() -> Result<()> {
    let surface = compose(&[3.0, 2.0, 4.0, 1.0, 5.0])?;

    let mut rings = Vec::new();
    let mut frame = None;
    let mut spokes = Vec::new();
    let mut texts = Vec::new();
    let mut fill = None;
    let mut outline = None;
    for (i, op) in surface.ops().iter().enumerate() {
        match op {
            SurfaceOp::Polyline { points, style } => {
                if points.len() == 2 {
                    spokes.push(i);
                } else if style.pattern == LinePattern::Dashed {
                    rings.push(i);
                } else if points.iter().all(|p| p.radius == FRAME_RADIUS) {
                    frame = Some(i);
                } else {
                    outline = Some(i);
                }
            }
            SurfaceOp::Polygon { .. } => fill = Some(i),
            SurfaceOp::Text { .. } => texts.push(i),
            SurfaceOp::Projection(_) => {}
        }
    }

    // Within the grid: tier rings, then the frame, then the spokes.
    let frame = frame.expect("frame ring recorded");
    assert_eq!(rings.len(), MAX_LEVELS);
    assert!(rings.iter().all(|&i| i < frame), "tier rings precede the frame");
    assert!(spokes.iter().all(|&i| i > frame), "spokes follow the frame");

    // Labels overlay the whole grid, and the profile overlays everything so
    // the score polygon is never hidden under later strokes.
    let last_spoke = *spokes.iter().max().expect("spokes recorded");
    assert!(texts.iter().all(|&i| i > last_spoke), "labels overlay the grid");
    let last_text = *texts.iter().max().expect("labels recorded");
    let fill = fill.expect("profile fill recorded");
    assert!(fill > last_text, "profile fill overlays grid and labels");
    assert_eq!(outline, Some(fill + 1), "outline traces directly over the fill");
    Ok(())
}

#[test]
fn projection_is_configured_before_any_drawing() -> Result<()> {
    let surface = compose(&[1.0, 1.0, 1.0, 1.0, 1.0])?;
    let ops = surface.ops();
    assert!(matches!(ops[0], SurfaceOp::Projection(projection)
        if projection.radial_limit == FRAME_RADIUS && projection.clockwise));
    assert!(!ops[1..]
        .iter()
        .any(|op| matches!(op, SurfaceOp::Projection(_))));
    Ok(())
}

#[test]
fn identical_inputs_produce_identical_geometry() -> Result<()> {
    let first = compose(&[2.5, 3.0, 1.0, 4.5, 5.0])?;
    let second = compose(&[2.5, 3.0, 1.0, 4.5, 5.0])?;
    assert_eq!(first.ops(), second.ops());
    Ok(())
}

#[test]
fn composer_exposes_the_configuration_it_was_built_with() {
    let mut config = ChartConfig::default();
    config.chart_size_px = 512;
    config.output_dir = "charts".into();
    let composer = ChartComposer::new(config);
    assert_eq!(composer.config().chart_size_px, 512);
    assert_eq!(composer.config().output_dir.to_str(), Some("charts"));
}

#[test]
fn fractional_scores_flow_through_unrounded() -> Result<()> {
    let surface = compose(&[1.5, 2.25, 3.75, 4.0, 4.99])?;
    let (points, _) = surface.polygons().next().expect("profile polygon");
    let radii: Vec<f64> = points.iter().map(|p| p.radius).collect();
    assert_eq!(radii, vec![1.5, 2.25, 3.75, 4.0, 4.99, 1.5]);
    Ok(())
}
