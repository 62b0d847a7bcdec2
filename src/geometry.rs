/// Positions and circle-overlap collision.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// True iff the two circles touch or overlap.  Tangency counts.
pub fn is_colliding(a: Position, a_radius: f64, b: Position, b_radius: f64) -> bool {
    a.distance(b) <= a_radius + b_radius
}

// ── Capability traits ─────────────────────────────────────────────────────────

/// Anything with a place in the world.
pub trait Positioned {
    fn position(&self) -> Position;
    fn position_mut(&mut self) -> &mut Position;
}

/// A positioned object with a circular collision footprint.
pub trait Collider: Positioned {
    fn radius(&self) -> f64;

    fn collides_with<O: Collider + ?Sized>(&self, other: &O) -> bool {
        is_colliding(self.position(), self.radius(), other.position(), other.radius())
    }
}

/// Implements `Positioned` for structs carrying a `position: Position` field.
#[macro_export]
macro_rules! impl_positioned {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::geometry::Positioned for $ty {
                fn position(&self) -> $crate::geometry::Position {
                    self.position
                }

                fn position_mut(&mut self) -> &mut $crate::geometry::Position {
                    &mut self.position
                }
            }
        )+
    };
}

/// Implements `Collider` for structs carrying a `radius: f64` field.
#[macro_export]
macro_rules! impl_collider {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::geometry::Collider for $ty {
                fn radius(&self) -> f64 {
                    self.radius
                }
            }
        )+
    };
}
