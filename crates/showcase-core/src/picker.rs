//! Screen-space ray picking against the pickable objects.
//!
//! Everything here is a pure function of the camera, the viewport and the
//! object transforms.

use crate::camera::Camera;
use crate::pickable::{ObjectId, ObjectKind, PickShape, PickableObject};
use glam::{Vec2, Vec3, Vec4};

const PARALLEL_EPS: f32 = 1e-8;

/// Canvas size in backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect(&self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }

    /// Pixel position to normalized device coordinates, Y up.
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if !self.is_valid() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Vec2::new(
            (2.0 * x / self.width) - 1.0,
            1.0 - (2.0 * y / self.height),
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    /// World-space ray from the camera eye through a pixel.
    pub fn from_screen(camera: &Camera, viewport: Viewport, x: f32, y: f32) -> Option<Ray> {
        let ndc = viewport.to_ndc(x, y)?;
        Ray::from_ndc(camera, ndc)
    }

    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Option<Ray> {
        let inv = camera.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if p_far.w.abs() < PARALLEL_EPS {
            return None;
        }
        let far: Vec3 = p_far.truncate() / p_far.w;
        let origin = camera.eye();
        let dir = (far - origin).normalize_or_zero();
        (dir != Vec3::ZERO && dir.is_finite()).then_some(Ray { origin, dir })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: ObjectId,
    /// World-space distance from the ray origin.
    pub distance: f32,
    /// Hit position in the object's local (unscaled) space.
    pub local_point: Vec3,
}

impl Hit {
    /// Texture coordinates on a plane panel, v up from the bottom edge.
    pub fn plane_uv(&self, kind: ObjectKind) -> Option<Vec2> {
        match (kind, kind.shape()) {
            (ObjectKind::Plane, PickShape::Box { half_extents, center }) => {
                let p = self.local_point - center;
                Some(Vec2::new(
                    p.x / (2.0 * half_extents.x) + 0.5,
                    p.y / (2.0 * half_extents.y) + 0.5,
                ))
            }
            _ => None,
        }
    }
}

/// Nearest object under the pointer, if any.
pub fn pick(
    x: f32,
    y: f32,
    viewport: Viewport,
    camera: &Camera,
    candidates: &[PickableObject],
) -> Option<Hit> {
    if candidates.is_empty() {
        return None;
    }
    let ray = Ray::from_screen(camera, viewport, x, y)?;
    pick_ray(&ray, candidates)
}

pub fn pick_ray(ray: &Ray, candidates: &[PickableObject]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for obj in candidates {
        if let Some(hit) = intersect_object(ray, obj) {
            match best {
                Some(b) if hit.distance >= b.distance => {}
                _ => best = Some(hit),
            }
        }
    }
    best
}

pub fn intersect_object(ray: &Ray, obj: &PickableObject) -> Option<Hit> {
    if obj.dismissed {
        return None;
    }
    let model = obj.world_matrix();
    if model.determinant().abs() < PARALLEL_EPS {
        return None;
    }
    let inv = model.inverse();
    // direction is left unnormalized so `t` stays the world-space distance
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.dir);
    let t = match obj.kind.shape() {
        PickShape::Box {
            half_extents,
            center,
        } => ray_box(o, d, center - half_extents, center + half_extents),
        PickShape::Sphere { radius } => ray_sphere(o, d, Vec3::ZERO, radius),
        PickShape::Cylinder {
            radius,
            half_height,
        } => ray_cylinder(o, d, radius, half_height),
    }?;
    Some(Hit {
        id: obj.id,
        distance: t,
        local_point: o + d * t,
    })
}

/// Smallest `t >= 0` where `origin + t*dir` meets the sphere. `dir` need not
/// be unit length. Origins inside the sphere hit the far side.
#[inline]
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let a = dir.dot(dir);
    if a < PARALLEL_EPS {
        return None;
    }
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    nearest_non_negative((-b - sq) / a, (-b + sq) / a)
}

/// Slab test against an axis-aligned box.
#[inline]
pub fn ray_box(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
        if d.abs() < PARALLEL_EPS {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let t1 = (lo - o) / d;
        let t2 = (hi - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }
    nearest_non_negative(t_near, t_far)
}

/// Capped cylinder around the local Y axis, centred on the origin.
#[inline]
pub fn ray_cylinder(origin: Vec3, dir: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    let a = dir.x * dir.x + dir.z * dir.z;
    if a > PARALLEL_EPS {
        let b = origin.x * dir.x + origin.z * dir.z;
        let c = origin.x * origin.x + origin.z * origin.z - radius * radius;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            for t in [(-b - sq) / a, (-b + sq) / a] {
                let y = origin.y + dir.y * t;
                if y.abs() <= half_height {
                    consider(t);
                }
            }
        }
    }
    if dir.y.abs() > PARALLEL_EPS {
        for cap in [-half_height, half_height] {
            let t = (cap - origin.y) / dir.y;
            let px = origin.x + dir.x * t;
            let pz = origin.z + dir.z * t;
            if px * px + pz * pz <= radius * radius {
                consider(t);
            }
        }
    }
    best
}

#[inline]
fn nearest_non_negative(t0: f32, t1: f32) -> Option<f32> {
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}
