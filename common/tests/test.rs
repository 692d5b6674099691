use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Aabb::new(0.0, 0.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.area(), 24.0);
    assert_eq!(rect.center(), Vec2::new(2.0, 3.0));
}

#[test]
fn test_square_and_from_center() {
    let sq = Aabb::square(Vec2::new(5.0, 5.0), 2.0);
    assert_eq!(sq, Aabb::new(3.0, 3.0, 7.0, 7.0));
    let rect = Aabb::from_center(Vec2::new(2.0, 3.0), 4.0, 6.0);
    assert_eq!(rect, Aabb::new(0.0, 0.0, 4.0, 6.0));
}

#[test]
fn test_contains_point_borders() {
    let rect = Aabb::new(0.0, 0.0, 4.0, 6.0);
    assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
    assert!(rect.contains_point(Vec2::new(4.0, 6.0)));
    assert!(!rect.contains_point(Vec2::new(4.1, 3.0)));
    assert!(!rect.contains_point(Vec2::new(2.0, -0.1)));
}

#[test]
fn test_intersects_touching() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Aabb::new(10.0, 10.0, 20.0, 20.0)));
    assert!(a.intersects(&Aabb::new(2.0, 2.0, 3.0, 3.0)));
    assert!(!a.intersects(&Aabb::new(10.5, 0.0, 20.0, 10.0)));
    assert!(!a.intersects(&Aabb::new(-5.0, -5.0, -1.0, -1.0)));
}

#[test]
fn test_fits() {
    let container = Aabb::new(0.0, 0.0, 10.0, 10.0);
    assert!(container.fits(&container));
    assert!(Aabb::new(1.0, 1.0, 2.0, 2.0).fits(&container));
    assert!(!Aabb::new(-1.0, 1.0, 2.0, 2.0).fits(&container));
    assert!(!Aabb::new(5.0, 5.0, 10.5, 6.0).fits(&container));
    assert!(!container.fits(&Aabb::new(1.0, 1.0, 2.0, 2.0)));
}

#[test]
fn test_quadrants_cover_parent() {
    let rect = Aabb::new(0.0, 0.0, 100.0, 100.0);
    let q = rect.quadrants();
    assert_eq!(q[0], Aabb::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(q[1], Aabb::new(50.0, 0.0, 100.0, 50.0));
    assert_eq!(q[2], Aabb::new(50.0, 50.0, 100.0, 100.0));
    assert_eq!(q[3], Aabb::new(0.0, 50.0, 50.0, 100.0));
    let total: f32 = q.iter().map(|r| r.area()).sum();
    assert_eq!(total, rect.area());
    for quadrant in q.iter() {
        assert!(quadrant.fits(&rect));
    }
}

#[test]
fn test_union() {
    let a = Aabb::new(0.0, 0.0, 4.0, 6.0);
    let b = Aabb::new(2.0, -1.0, 8.0, 3.0);
    assert_eq!(a.union(&b), Aabb::new(0.0, -1.0, 8.0, 6.0));
}

#[test]
fn test_normalized_and_finite() {
    assert!(Aabb::new(0.0, 0.0, 1.0, 1.0).is_normalized());
    assert!(!Aabb::new(1.0, 0.0, 0.0, 1.0).is_normalized());
    assert!(!Aabb::new(0.0, 0.0, f32::INFINITY, 1.0).is_finite());
    assert!(!Aabb::new(f32::NAN, 0.0, 1.0, 1.0).is_finite());
}

#[test]
fn test_vec_ops() {
    let v = Vec2::new(2.0, 4.0);
    assert_eq!(v.recip(), Vec2::new(0.5, 0.25));
    assert_eq!(v.mul(Vec2::splat(0.5)), Vec2::new(1.0, 2.0));
    assert_eq!(Vec2::new(-0.5, 1.7).floor(), Vec2::new(-1.0, 1.0));
}

#[test]
fn test_random_point_inside() {
    let rect = Aabb::new(2.0, 3.0, 8.0, 11.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let p = rect.random_point_inside(&mut rng);
        assert!(rect.contains_point(p));
    }
}

#[test]
fn test_random_square_inside() {
    let rect = Aabb::new(0.0, 0.0, 100.0, 100.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);

    for _ in 0..100 {
        let sq = rect.random_square_inside(5.0, &mut rng);
        assert!(sq.fits(&rect));
    }
}

#[test]
fn test_random_square_inside_small_rectangle() {
    let rect = Aabb::new(0.0, 0.0, 2.0, 2.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let sq = rect.random_square_inside(4.0, &mut rng);
    // Falls back to the min corner when the square cannot fit.
    assert_eq!(sq.center(), Vec2::new(4.0, 4.0));
}
