use mapview_core::{Angle, OrientedRect, PixelRect, Point, Rect, Screen, ScreenError};

const EPS: f64 = 1e-6;

fn within(rect: &Rect, p: &Point) -> bool {
    p.x >= rect.min.x - EPS
        && p.x <= rect.max.x + EPS
        && p.y >= rect.min.y - EPS
        && p.y <= rect.max.y + EPS
}

fn pixel_corners(screen: &Screen, global: &OrientedRect) -> Vec<Point> {
    global.corners().iter().map(|c| screen.gtop(c)).collect()
}

#[test]
fn fit_contains_wide_rect_and_touches_horizontally() {
    let mut screen = Screen::new();
    let global = OrientedRect::new(
        Point::new(100.0, 200.0),
        Angle::from_degrees(30.0),
        Rect::new(-50.0, -20.0, 50.0, 20.0),
    );

    screen.set_from_rect(&global).unwrap();

    // horizontal scale 100 / 640 beats vertical 40 / 480
    assert!((screen.scale() - 100.0 / 640.0).abs() < 1e-12);
    assert_eq!(screen.angle(), global.angle());
    assert_eq!(screen.org(), global.global_center());

    let pixel = *screen.pixel_rect();
    let corners = pixel_corners(&screen, &global);
    for c in &corners {
        assert!(within(&pixel, c), "corner {:?} outside {:?}", c, pixel);
    }

    let min_x = corners.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
    assert!((min_x - pixel.min.x).abs() < EPS);
    assert!((max_x - pixel.max.x).abs() < EPS);
}

#[test]
fn fit_contains_tall_rect_and_touches_vertically() {
    let mut screen = Screen::new();
    let global = OrientedRect::new(
        Point::new(-5.0, 3.0),
        Angle::new(4.0),
        Rect::new(-1.0, -6.0, 1.0, 6.0),
    );

    screen.set_from_rect(&global).unwrap();

    assert!((screen.scale() - 12.0 / 480.0).abs() < 1e-12);

    let pixel = *screen.pixel_rect();
    let corners = pixel_corners(&screen, &global);
    for c in &corners {
        assert!(within(&pixel, c), "corner {:?} outside {:?}", c, pixel);
    }

    let min_y = corners.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
    assert!((min_y - pixel.min.y).abs() < EPS);
    assert!((max_y - pixel.max.y).abs() < EPS);
}

#[test]
fn fit_to_other_pixel_rect_uses_its_size_only() {
    let mut screen = Screen::new();
    let global = OrientedRect::from_rect(&Rect::new(0.0, 0.0, 1000.0, 1000.0));

    screen
        .set_from_rects(&global, &Rect::new(0.0, 0.0, 250.0, 500.0))
        .unwrap();

    assert!((screen.scale() - 4.0).abs() < 1e-12);
    assert_eq!(*screen.pixel_rect(), Rect::new(0.0, 0.0, 640.0, 480.0));
    assert_eq!(screen.org(), Point::new(500.0, 500.0));
}

#[test]
fn refit_after_resize_keeps_content_visible() {
    let global = OrientedRect::new(
        Point::new(37.6, 55.7),
        Angle::ZERO,
        Rect::new(-0.5, -0.25, 0.5, 0.25),
    );
    let mut screen = Screen::from_rects(PixelRect::new(0, 0, 1024, 768), &global).unwrap();

    screen.on_size_xywh(0, 0, 300, 900).unwrap();
    screen.set_from_rect(&global).unwrap();

    let pixel = *screen.pixel_rect();
    for c in pixel_corners(&screen, &global) {
        assert!(within(&pixel, &c));
    }
}

#[test]
fn from_rects_sizes_and_fits() {
    let global = OrientedRect::new(
        Point::new(10.0, 10.0),
        Angle::from_degrees(45.0),
        Rect::new(-8.0, -6.0, 8.0, 6.0),
    );

    let screen = Screen::from_rects(PixelRect::new(0, 0, 160, 120), &global).unwrap();

    assert_eq!(screen.width(), 160);
    assert_eq!(screen.height(), 120);
    assert!((screen.scale() - 0.1).abs() < 1e-12);
    assert!(screen
        .gtop(&Point::new(10.0, 10.0))
        .equal_dx_dy(&Point::new(80.0, 60.0), 1e-9));
}

#[test]
fn fit_rejects_degenerate_rects() {
    let mut screen = Screen::new();
    let before = screen.clone();

    let flat = OrientedRect::new(Point::ZERO, Angle::ZERO, Rect::new(0.0, 0.0, 0.0, 0.0));
    assert!(matches!(
        screen.set_from_rect(&flat),
        Err(ScreenError::DegenerateInput(_))
    ));

    let good = OrientedRect::from_rect(&Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(matches!(
        screen.set_from_rects(&good, &Rect::new(0.0, 0.0, 0.0, 100.0)),
        Err(ScreenError::DegenerateInput(_))
    ));

    assert_eq!(screen, before);
}

#[test]
fn from_rects_rejects_empty_viewport() {
    let global = OrientedRect::from_rect(&Rect::new(0.0, 0.0, 1.0, 1.0));
    assert!(Screen::from_rects(PixelRect::new(0, 0, 0, 480), &global).is_err());
}
