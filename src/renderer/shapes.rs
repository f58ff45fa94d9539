//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle outline of the given stroke width
///
/// The stroke is centered on the rectangle edge.
pub fn rect_outline(min: Vec2, size: Vec2, stroke: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = stroke / 2.0;
    let outer_min = min - Vec2::splat(half);
    let outer_size = size + Vec2::splat(stroke);

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom bars span the full outer width
    vertices.extend(rect(outer_min, Vec2::new(outer_size.x, stroke), color));
    vertices.extend(rect(
        Vec2::new(outer_min.x, min.y + size.y - half),
        Vec2::new(outer_size.x, stroke),
        color,
    ));
    // Side bars fill the gap between them
    let side_h = size.y - stroke;
    if side_h > 0.0 {
        vertices.extend(rect(
            Vec2::new(outer_min.x, min.y + half),
            Vec2::new(stroke, side_h),
            color,
        ));
        vertices.extend(rect(
            Vec2::new(min.x + size.x - half, min.y + half),
            Vec2::new(stroke, side_h),
            color,
        ));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert_eq!(v[5].position, [4.0, 6.0]);
    }

    #[test]
    fn test_outline_has_four_bars() {
        let v = rect_outline(Vec2::ZERO, Vec2::new(60.0, 12.0), 2.0, [1.0; 4]);
        assert_eq!(v.len(), 24);
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(10.0, 10.0);
        let v = circle(center, 5.0, [1.0; 4], 12);
        assert_eq!(v.len(), 36);
        let edge = Vec2::from(v[1].position);
        assert!(((edge - center).length() - 5.0).abs() < 1e-4);
    }
}
