use rand::Rng;
use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn mul(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scaled(self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Componentwise `1 / v`.
    pub fn recip(self) -> Vec2 {
        Vec2::new(1.0 / self.x, 1.0 / self.y)
    }

    pub fn floor(self) -> Vec2 {
        Vec2::new(self.x.floor(), self.y.floor())
    }

    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(f32::min(self.x, other.x), f32::min(self.y, other.y))
    }

    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(f32::max(self.x, other.x), f32::max(self.y, other.y))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis aligned rectangle described by its minimal and maximal corner.
///
/// Every predicate treats the borders as part of the rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square with half size `half` centered at `center`.
    pub fn square(center: Vec2, half: f32) -> Self {
        Self::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        )
    }

    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::new(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y)
    }

    /// Whether `self` lies fully inside `container`.
    pub fn fits(&self, container: &Aabb) -> bool {
        self.min.x >= container.min.x
            && self.max.x <= container.max.x
            && self.min.y >= container.min.y
            && self.max.y <= container.max.y
    }

    /// One of the four quarters meeting at the center, see [`Aabb::quadrants`].
    pub fn quadrant(&self, i: usize) -> Aabb {
        let c = self.center();
        match i & 3 {
            0 => Aabb::from_min_max(self.min, c),
            1 => Aabb::new(c.x, self.min.y, self.max.x, c.y),
            2 => Aabb::from_min_max(c, self.max),
            _ => Aabb::new(self.min.x, c.y, c.x, self.max.y),
        }
    }

    /// Quarters in the order min corner, max-x side, max corner, max-y side.
    pub fn quadrants(&self) -> [Aabb; 4] {
        [
            self.quadrant(0),
            self.quadrant(1),
            self.quadrant(2),
            self.quadrant(3),
        ]
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::from_min_max(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn moved(&self, delta: Vec2) -> Aabb {
        Aabb::from_min_max(self.min.add(delta), self.max.add(delta))
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn is_normalized(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            safe_rand_f32(rng, self.min.x, self.max.x),
            safe_rand_f32(rng, self.min.y, self.max.y),
        )
    }

    /// Random square of half size `half` that fits inside `self`. Clamped to the
    /// min corner when `self` is too small to hold it.
    pub fn random_square_inside<R: Rng>(&self, half: f32, rng: &mut R) -> Aabb {
        let center = Vec2::new(
            safe_rand_f32(rng, self.min.x + half, self.max.x - half),
            safe_rand_f32(rng, self.min.y + half, self.max.y - half),
        );
        Aabb::square(center, half)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {}, {} {}]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

fn safe_rand_f32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
