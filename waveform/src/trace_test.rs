use super::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 150.0;

#[test]
fn silence_byte_maps_to_midline() {
    assert!((sample_y(128, HEIGHT) - HEIGHT / 2.0).abs() < f64::EPSILON);
}

#[test]
fn extreme_bytes_map_to_top_and_bottom() {
    assert!((sample_y(0, HEIGHT) - 0.0).abs() < f64::EPSILON);
    // 255 / 128 slightly overshoots 2.0, same as the canvas draw it mirrors.
    let bottom = sample_y(255, HEIGHT);
    assert!(bottom > HEIGHT * 0.99 && bottom < HEIGHT * 1.01);
}

#[test]
fn x_step_divides_width_evenly() {
    assert!((x_step(WIDTH, 1024) - WIDTH / 1024.0).abs() < f64::EPSILON);
    assert!((x_step(WIDTH, 0) - WIDTH).abs() < f64::EPSILON);
}

#[test]
fn midline_spans_full_width_at_half_height() {
    let [a, b] = midline(WIDTH, HEIGHT);
    assert_eq!(a, Point::new(0.0, 75.0));
    assert_eq!(b, Point::new(600.0, 75.0));
}

#[test]
fn empty_frame_degenerates_to_midline() {
    let points = sample_points(&[], WIDTH, HEIGHT);
    assert_eq!(points, midline(WIDTH, HEIGHT).to_vec());
}

#[test]
fn single_sample_frame_is_a_horizontal_segment() {
    let points = sample_points(&[128], WIDTH, HEIGHT);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], Point::new(0.0, 75.0));
    assert_eq!(points[1], Point::new(600.0, 75.0));
}

#[test]
fn frame_starts_at_left_edge_and_ends_pinned_to_midline() {
    let samples = [64u8, 128, 192, 255];
    let points = sample_points(&samples, WIDTH, HEIGHT);

    assert_eq!(points.len(), samples.len() + 1);
    assert!((points[0].x - 0.0).abs() < f64::EPSILON);
    assert_eq!(*points.last().unwrap(), Point::new(WIDTH, HEIGHT / 2.0));
}

#[test]
fn frame_x_advances_by_one_step_per_sample() {
    let samples = [128u8; 8];
    let step = x_step(WIDTH, samples.len());
    let points = sample_points(&samples, WIDTH, HEIGHT);

    for (i, point) in points.iter().take(samples.len()).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let expected = step * i as f64;
        assert!((point.x - expected).abs() < 1e-9, "sample {i} at x={}", point.x);
    }
}

#[test]
fn silent_frame_is_flat() {
    let samples = [128u8; 32];
    let points = sample_points(&samples, WIDTH, HEIGHT);
    assert!(points.iter().all(|p| (p.y - HEIGHT / 2.0).abs() < f64::EPSILON));
}
