use raylib::prelude::{Rectangle, Vector2};

use crate::math::{vec2, vec2_scale, vec2_sub};

// Convex four-corner polygon. Built axis-aligned and only ever rotated and
// translated afterwards, so the corner order never changes.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    corners: [Vector2; 4],
}

impl Quad {
    // Corners ordered top-left, top-right, bottom-right, bottom-left.
    pub fn axis_aligned(top_left: Vector2, width: f32, height: f32) -> Self {
        Self {
            corners: [
                top_left,
                vec2(top_left.x + width, top_left.y),
                vec2(top_left.x + width, top_left.y + height),
                vec2(top_left.x, top_left.y + height),
            ],
        }
    }

    pub fn from_rect(rect: Rectangle) -> Self {
        Self::axis_aligned(vec2(rect.x, rect.y), rect.width, rect.height)
    }

    pub fn corners(&self) -> &[Vector2; 4] {
        &self.corners
    }

    pub fn translate(&mut self, delta: Vector2) {
        for corner in &mut self.corners {
            corner.x += delta.x;
            corner.y += delta.y;
        }
    }

    pub fn rotate_about(&mut self, pivot: Vector2, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        for corner in &mut self.corners {
            let dx = corner.x - pivot.x;
            let dy = corner.y - pivot.y;
            corner.x = pivot.x + dx * cos - dy * sin;
            corner.y = pivot.y + dx * sin + dy * cos;
        }
    }

    pub fn center(&self) -> Vector2 {
        let sum = self
            .corners
            .iter()
            .fold(vec2(0.0, 0.0), |acc, c| vec2(acc.x + c.x, acc.y + c.y));
        vec2_scale(sum, 0.25)
    }

    // Midpoint of the edge that was the right side at construction. For a
    // tank head this is the muzzle, wherever the quad has rotated to.
    pub fn mid_right(&self) -> Vector2 {
        vec2_scale(
            vec2(
                self.corners[1].x + self.corners[2].x,
                self.corners[1].y + self.corners[2].y,
            ),
            0.5,
        )
    }
}

// Separating-axis test over the edge normals of both quads. Boundary contact
// (zero-area overlap) does not count as an intersection.
pub fn quads_intersect(a: &Quad, b: &Quad) -> bool {
    !has_separating_axis(a, b) && !has_separating_axis(b, a)
}

pub fn quad_intersects_rect(quad: &Quad, rect: Rectangle) -> bool {
    quads_intersect(quad, &Quad::from_rect(rect))
}

fn has_separating_axis(edges_of: &Quad, other: &Quad) -> bool {
    for i in 0..4 {
        let edge = vec2_sub(edges_of.corners[(i + 1) % 4], edges_of.corners[i]);
        let axis = vec2(-edge.y, edge.x);
        let (min_a, max_a) = project(edges_of, axis);
        let (min_b, max_b) = project(other, axis);
        if max_a <= min_b || max_b <= min_a {
            return true;
        }
    }
    false
}

fn project(quad: &Quad, axis: Vector2) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for corner in &quad.corners {
        let dot = corner.x * axis.x + corner.y * axis.y;
        min = min.min(dot);
        max = max.max(dot);
    }
    (min, max)
}

// Point-in-convex-polygon via consistent cross-product sign. Boundary points
// count as contained.
pub fn quad_contains_point(quad: &Quad, point: Vector2) -> bool {
    let mut sign = 0.0f32;
    for i in 0..4 {
        let a = quad.corners[i];
        let b = quad.corners[(i + 1) % 4];
        let cross = (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
        if cross != 0.0 {
            if sign != 0.0 && cross.signum() != sign {
                return false;
            }
            sign = cross.signum();
        }
    }
    true
}
