//! # Primitive Shape Generation
//!
//! Box, cone, plane and sphere generators. All shapes are Y-up, centered on
//! the origin, with outward normals, UVs and counter-clockwise winding.
//!
//! Every generator validates its arguments: dimensions must be positive and
//! finite and segment counts must reach the shape's minimum. Nothing is
//! clamped silently.

use super::GeometryData;
use crate::error::GeometryError;
use std::f32::consts::PI;

fn positive(shape: &'static str, field: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { shape, field, value })
    }
}

fn segments(
    shape: &'static str,
    field: &'static str,
    value: u32,
    min: u32,
) -> Result<u32, GeometryError> {
    if value >= min {
        Ok(value)
    } else {
        Err(GeometryError::TooFewSegments {
            shape,
            field,
            min,
            value,
        })
    }
}

fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scaled(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// Appends one subdivided box face. `u` and `v` span the face and
/// `u x v` points along `normal`.
fn push_face(
    data: &mut GeometryData,
    center: [f32; 3],
    u: [f32; 3],
    v: [f32; 3],
    normal: [f32; 3],
    u_segments: u32,
    v_segments: u32,
) {
    let base = data.vertices.len() as u32;

    for iy in 0..=v_segments {
        let t = iy as f32 / v_segments as f32;
        for ix in 0..=u_segments {
            let s = ix as f32 / u_segments as f32;
            let position = add(center, add(scaled(u, s - 0.5), scaled(v, t - 0.5)));
            data.vertices.push(position);
            data.normals.push(normal);
            data.tex_coords.push([s, t]);
        }
    }

    let row = u_segments + 1;
    for iy in 0..v_segments {
        for ix in 0..u_segments {
            let a = base + iy * row + ix;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            data.indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }
}

/// Generate a box centered at the origin
///
/// # Arguments
/// * `width`, `height`, `depth` - Extents along X, Y and Z
/// * `width_segments`, `height_segments`, `depth_segments` - Subdivisions per axis
pub fn generate_box(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> Result<GeometryData, GeometryError> {
    let w = positive("box", "width", width)?;
    let h = positive("box", "height", height)?;
    let d = positive("box", "depth", depth)?;
    let ws = segments("box", "width segments", width_segments, 1)?;
    let hs = segments("box", "height segments", height_segments, 1)?;
    let ds = segments("box", "depth segments", depth_segments, 1)?;

    let (hx, hy, hz) = (w * 0.5, h * 0.5, d * 0.5);
    let mut data = GeometryData::new();

    // +X, -X
    push_face(&mut data, [hx, 0.0, 0.0], [0.0, 0.0, -d], [0.0, h, 0.0], [1.0, 0.0, 0.0], ds, hs);
    push_face(&mut data, [-hx, 0.0, 0.0], [0.0, 0.0, d], [0.0, h, 0.0], [-1.0, 0.0, 0.0], ds, hs);
    // +Y, -Y
    push_face(&mut data, [0.0, hy, 0.0], [w, 0.0, 0.0], [0.0, 0.0, -d], [0.0, 1.0, 0.0], ws, ds);
    push_face(&mut data, [0.0, -hy, 0.0], [w, 0.0, 0.0], [0.0, 0.0, d], [0.0, -1.0, 0.0], ws, ds);
    // +Z, -Z
    push_face(&mut data, [0.0, 0.0, hz], [w, 0.0, 0.0], [0.0, h, 0.0], [0.0, 0.0, 1.0], ws, hs);
    push_face(&mut data, [0.0, 0.0, -hz], [-w, 0.0, 0.0], [0.0, h, 0.0], [0.0, 0.0, -1.0], ws, hs);

    Ok(data)
}

/// Generate a cone with its apex up
///
/// The base sits at `-height / 2`, the apex at `+height / 2`. Ring vertices
/// are placed at `(r sin t, y, r cos t)`, so the first one faces +Z; a
/// four-sided cone therefore needs a quarter-pi turn about Y to line up with
/// an axis-aligned box.
pub fn generate_cone(radius: f32, height: f32, radial_segments: u32) -> Result<GeometryData, GeometryError> {
    let r = positive("cone", "radius", radius)?;
    let h = positive("cone", "height", height)?;
    let segs = segments("cone", "radial segments", radial_segments, 3)?;

    let half = h * 0.5;
    let slope = r / h;
    let mut data = GeometryData::new();

    // Side: apex row then base row
    for (row, (y, ring_radius)) in [(half, 0.0), (-half, r)].into_iter().enumerate() {
        for i in 0..=segs {
            let u = i as f32 / segs as f32;
            let theta = u * 2.0 * PI;
            let (sin_t, cos_t) = theta.sin_cos();

            data.vertices.push([ring_radius * sin_t, y, ring_radius * cos_t]);
            let n = [sin_t, slope, cos_t];
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            data.normals.push([n[0] / len, n[1] / len, n[2] / len]);
            data.tex_coords.push([u, 1.0 - row as f32]);
        }
    }
    let row = segs + 1;
    for i in 0..segs {
        let b = row + i;
        let c = row + i + 1;
        let d = i + 1;
        data.indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap
    let center = data.vertices.len() as u32;
    data.vertices.push([0.0, -half, 0.0]);
    data.normals.push([0.0, -1.0, 0.0]);
    data.tex_coords.push([0.5, 0.5]);

    let ring = data.vertices.len() as u32;
    for i in 0..=segs {
        let theta = i as f32 / segs as f32 * 2.0 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        data.vertices.push([r * sin_t, -half, r * cos_t]);
        data.normals.push([0.0, -1.0, 0.0]);
        data.tex_coords.push([0.5 + 0.5 * sin_t, 0.5 + 0.5 * cos_t]);
    }
    for i in 0..segs {
        data.indices.extend_from_slice(&[center, ring + i + 1, ring + i]);
    }

    Ok(data)
}

/// Generate a plane in the XY plane facing +Z
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
pub fn generate_plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> Result<GeometryData, GeometryError> {
    let width = positive("plane", "width", width)?;
    let height = positive("plane", "height", height)?;
    let w_segs = segments("plane", "width segments", width_segments, 1)?;
    let h_segs = segments("plane", "height segments", height_segments, 1)?;

    let mut data = GeometryData::new();

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (v - 0.5) * height;

        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            data.tex_coords.push([u, v]);
        }
    }

    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            data.indices.extend_from_slice(&[i, i + 1, next_row]);
            data.indices.extend_from_slice(&[i + 1, next_row + 1, next_row]);
        }
    }

    Ok(data)
}

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Longitude lines, at least 3
/// * `height_segments` - Latitude lines, at least 2
pub fn generate_sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> Result<GeometryData, GeometryError> {
    let radius = positive("sphere", "radius", radius)?;
    let long_segs = segments("sphere", "width segments", width_segments, 3)?;
    let lat_segs = segments("sphere", "height segments", height_segments, 2)?;

    let mut data = GeometryData::new();

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let n = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices.push(scaled(n, radius));
            data.normals.push(n);
            data.tex_coords.push([long as f32 / long_segs as f32, lat as f32 / lat_segs as f32]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, first + 1, second]);
            data.indices.extend_from_slice(&[first + 1, second + 1, second]);
        }
    }

    Ok(data)
}
