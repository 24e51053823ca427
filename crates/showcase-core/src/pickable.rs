//! Interactive objects and the registry that owns them.
//!
//! Objects are created once from [`ObjectSpec`]s and live for the whole
//! session. Other components refer to them through [`ObjectId`] handles.

use crate::constants::SPIN_RATE_RAD_PER_SEC;
use crate::error::SceneError;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Cube,
    Sphere,
    Cylinder,
    Building,
    Plane,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Cube,
        ObjectKind::Sphere,
        ObjectKind::Cylinder,
        ObjectKind::Building,
        ObjectKind::Plane,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Cube => "cube",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Cylinder => "cylinder",
            ObjectKind::Building => "building",
            ObjectKind::Plane => "plane",
        }
    }

    /// Hit-test volume in object-local space, before the transform's scale.
    pub fn shape(self) -> PickShape {
        match self {
            ObjectKind::Cube => PickShape::Box {
                half_extents: Vec3::new(2.0, 1.0, 1.0),
                center: Vec3::ZERO,
            },
            ObjectKind::Sphere => PickShape::Sphere { radius: 2.0 },
            ObjectKind::Cylinder => PickShape::Cylinder {
                radius: 1.5,
                half_height: 1.5,
            },
            // body 4x6x4 plus a 0.5 roof, base resting on the origin
            ObjectKind::Building => PickShape::Box {
                half_extents: Vec3::new(2.25, 3.25, 2.25),
                center: Vec3::new(0.0, 3.25, 0.0),
            },
            ObjectKind::Plane => PickShape::Box {
                half_extents: Vec3::new(1.0, 0.5, 0.005),
                center: Vec3::ZERO,
            },
        }
    }

    pub fn default_color(self) -> [f32; 3] {
        match self {
            ObjectKind::Cube | ObjectKind::Sphere | ObjectKind::Cylinder => [1.0, 1.0, 1.0],
            ObjectKind::Building => [0.8, 0.8, 0.8],
            ObjectKind::Plane => [0.07, 0.09, 0.12],
        }
    }
}

impl FromStr for ObjectKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ObjectKind::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| SceneError::UnknownKind(s.trim().to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    Box { half_extents: Vec3, center: Vec3 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, half_height: f32 },
}

/// Stable handle into a [`PickableRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied yaw (Y) first, then X, then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(scale),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickableObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub transform: Transform,
    pub base_scale: f32,
    pub target_scale: f32,
    pub url: Option<String>,
    pub message: Option<String>,
    /// Radians per second about Y.
    pub spin_rate: f32,
    /// Look-toward-cursor bias in radians (x: about X, y: about Y), added on
    /// top of the spin.
    pub tilt: Vec2,
    pub color: [f32; 3],
    pub flash: Option<[f32; 3]>,
    /// Closed in-scene panel: shrinking away and no longer pickable.
    pub dismissed: bool,
}

impl PickableObject {
    #[inline]
    pub fn scale(&self) -> f32 {
        self.transform.scale.x
    }

    #[inline]
    pub fn set_scale(&mut self, s: f32) {
        self.transform.scale = Vec3::splat(s);
    }

    pub fn display_color(&self) -> [f32; 3] {
        self.flash.unwrap_or(self.color)
    }

    /// World matrix as drawn, including the hover tilt. Picking uses the same
    /// matrix so hits match what is on screen.
    pub fn world_matrix(&self) -> Mat4 {
        let mut t = self.transform;
        t.rotation.x += self.tilt.x;
        t.rotation.y += self.tilt.y;
        t.matrix()
    }
}

/// Description of one object, as authored in the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSpec {
    pub kind: ObjectKind,
    pub position: Vec3,
    pub base_scale: f32,
    pub url: Option<String>,
    pub message: Option<String>,
    pub spin_rate: f32,
}

impl ObjectSpec {
    pub fn new(kind: ObjectKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            base_scale: 1.0,
            url: None,
            message: None,
            // panels face the viewer and hold still
            spin_rate: match kind {
                ObjectKind::Plane => 0.0,
                _ => SPIN_RATE_RAD_PER_SEC,
            },
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = non_empty(message.into());
        self
    }

    /// Non-finite or non-positive scales are ignored.
    pub fn with_scale(mut self, base_scale: f32) -> Self {
        if base_scale.is_finite() && base_scale > 0.0 {
            self.base_scale = base_scale;
        } else {
            log::warn!("[scene] ignoring scale {} for {}", base_scale, self.kind.name());
        }
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    /// Build a spec from the string attributes of a page element.
    pub fn from_attributes(
        kind: &str,
        position: Option<&str>,
        scale: Option<&str>,
        url: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self, SceneError> {
        let kind = kind.parse::<ObjectKind>()?;
        let position = position.map(parse_vec3).transpose()?.unwrap_or(Vec3::ZERO);
        let mut spec = ObjectSpec::new(kind, position);
        if let Some(s) = scale {
            spec.base_scale = parse_scale(s)?;
        }
        spec.url = url.and_then(|u| non_empty(u.to_string()));
        spec.message = message.and_then(|m| non_empty(m.to_string()));
        Ok(spec)
    }
}

fn non_empty(s: String) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Parse `"x y z"` (spaces and/or commas) into a vector.
pub fn parse_vec3(s: &str) -> Result<Vec3, SceneError> {
    let parts: Vec<f32> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| SceneError::BadVector(s.to_string()))?;
    match parts.as_slice() {
        [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(SceneError::BadVector(s.to_string())),
    }
}

fn parse_scale(s: &str) -> Result<f32, SceneError> {
    match s.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(SceneError::BadScale(s.to_string())),
    }
}

/// Fixed set of interactive objects for a session.
#[derive(Clone, Debug, Default)]
pub struct PickableRegistry {
    objects: Vec<PickableObject>,
}

impl PickableRegistry {
    pub fn new(specs: impl IntoIterator<Item = ObjectSpec>) -> Self {
        let objects = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| PickableObject {
                id: ObjectId(i),
                kind: spec.kind,
                transform: Transform::at(spec.position, spec.base_scale),
                base_scale: spec.base_scale,
                target_scale: spec.base_scale,
                url: spec.url,
                message: spec.message,
                spin_rate: spec.spin_rate,
                tilt: Vec2::ZERO,
                color: spec.kind.default_color(),
                flash: None,
                dismissed: false,
            })
            .collect();
        Self { objects }
    }

    /// Cube, sphere, cylinder and building in a row, without payloads.
    pub fn default_layout() -> Self {
        Self::new([
            ObjectSpec::new(ObjectKind::Cube, Vec3::new(-9.0, 2.0, 0.0)),
            ObjectSpec::new(ObjectKind::Sphere, Vec3::new(-3.0, 2.0, 0.0)),
            ObjectSpec::new(ObjectKind::Cylinder, Vec3::new(3.0, 1.5, 0.0)),
            ObjectSpec::new(ObjectKind::Building, Vec3::new(9.0, 0.0, -2.0)),
        ])
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&PickableObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PickableObject> {
        self.objects.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickableObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PickableObject> {
        self.objects.iter_mut()
    }

    pub fn as_slice(&self) -> &[PickableObject] {
        &self.objects
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter().map(|o| o.id)
    }

    pub fn first_of_kind(&self, kind: ObjectKind) -> Option<ObjectId> {
        self.objects.iter().find(|o| o.kind == kind).map(|o| o.id)
    }

    /// Put every object back to its freshly-created animation state.
    pub fn reset_animation(&mut self) {
        for o in &mut self.objects {
            o.set_scale(o.base_scale);
            o.target_scale = o.base_scale;
            o.transform.rotation = Vec3::ZERO;
            o.tilt = Vec2::ZERO;
            o.flash = None;
            o.dismissed = false;
        }
    }
}
