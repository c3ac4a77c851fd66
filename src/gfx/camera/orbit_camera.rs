use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use crate::gfx::math::Transform;
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Y-up camera orbiting a target point
///
/// `eye` is the source of truth for position; `distance`, `pitch` and `yaw`
/// are kept in sync with it. When `rotation` is set the view uses that fixed
/// XYZ Euler orientation instead of looking at the target.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    rotation: Option<Vector3<f32>>,
    pub uniform: CameraUniform,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * self.view_matrix()
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(),
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 100.0,
            rotation: None,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    /// Moves the eye, re-deriving the orbit angles around the current target
    pub fn set_eye(&mut self, eye: Vector3<f32>) {
        self.eye = eye;
        self.sync_angles();
    }

    /// Re-aims the orbit at `target`; the eye stays where it is
    pub fn set_target(&mut self, target: Vector3<f32>) {
        self.target = target;
        self.sync_angles();
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
        self.update();
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.rotation = None;
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.rotation = None;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Fixed XYZ Euler orientation, if one overrides look-at
    pub fn rotation(&self) -> Option<Vector3<f32>> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Option<Vector3<f32>>) {
        self.rotation = rotation;
    }

    /// Unit vector the camera is looking along
    pub fn forward(&self) -> Vector3<f32> {
        match self.rotation {
            Some(rotation) => {
                let r = Transform::default().with_rotation(rotation).rotation_matrix();
                (r * -Vector4::unit_z()).truncate()
            }
            None => (self.target - self.eye).normalize(),
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        match self.rotation {
            // Inverse of T(eye) * R
            Some(rotation) => {
                let r = Transform::default().with_rotation(rotation).rotation_matrix();
                r.transpose() * Matrix4::from_translation(-self.eye)
            }
            None => Matrix4::look_at_rh(
                Point3::from_vec(self.eye),
                Point3::from_vec(self.target),
                self.up,
            ),
        }
    }

    /// Updates the eye after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    fn sync_angles(&mut self) {
        let offset = self.eye - self.target;
        self.distance = offset.magnitude();
        if self.distance > f32::EPSILON {
            self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
            self.yaw = offset.x.atan2(offset.z);
        }
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: Some(50.0),
            min_pitch: -std::f32::consts::PI / 2.0 + f32::EPSILON,
            max_pitch: std::f32::consts::PI / 2.0 - f32::EPSILON,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}
