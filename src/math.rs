use raylib::prelude::{Rectangle, Vector2};

pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

pub fn vec2_add(a: Vector2, b: Vector2) -> Vector2 {
    vec2(a.x + b.x, a.y + b.y)
}

pub fn vec2_sub(a: Vector2, b: Vector2) -> Vector2 {
    vec2(a.x - b.x, a.y - b.y)
}

pub fn vec2_scale(v: Vector2, s: f32) -> Vector2 {
    vec2(v.x * s, v.y * s)
}

pub fn vec2_length(v: Vector2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

pub fn vec2_distance(a: Vector2, b: Vector2) -> f32 {
    vec2_length(vec2_sub(a, b))
}

// Projects a signed magnitude onto the x/y axes for a given heading angle.
pub fn decompose_vector(magnitude: f32, angle: f32) -> Vector2 {
    vec2(magnitude * angle.cos(), magnitude * angle.sin())
}

// Distance from a point to the closest point of a rectangle, zero if inside.
pub fn point_rect_distance(point: Vector2, rect: Rectangle) -> f32 {
    let nearest = vec2(
        point.x.clamp(rect.x, rect.x + rect.width),
        point.y.clamp(rect.y, rect.y + rect.height),
    );
    vec2_distance(point, nearest)
}
