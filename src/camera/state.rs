use glam::{Mat4, Quat, Vec3};

use crate::options::ProjectionOptions;
use crate::util::angles::{Angles, RotationAxes};

/// Final camera transform and field of view emitted once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera world position.
    pub position: Vec3,
    /// Camera world orientation (Z-up, X-forward frame).
    pub rotation: Quat,
    /// Field of view in degrees.
    pub fov: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov: 80.0,
        }
    }
}

impl CameraState {
    /// Viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation.forward()
    }

    /// Orientation as pitch/yaw/roll degrees.
    #[must_use]
    pub fn angles(&self) -> Angles {
        Angles::from_quat(self.rotation).normal()
    }

    /// Right-handed view matrix looking along [`Self::forward`].
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.rotation.up())
    }

    /// Perspective projection, treating `fov` as the vertical angle.
    #[must_use]
    pub fn projection_matrix(
        &self,
        aspect: f32,
        projection: &ProjectionOptions,
    ) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fov.to_radians(),
            aspect,
            projection.znear,
            projection.zfar,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [1.0, 0.0, 0.0],
            fovy: 80.0,
        }
    }

    /// Update uniform fields from the camera's current state.
    pub fn update(
        &mut self,
        state: &CameraState,
        aspect: f32,
        projection: &ProjectionOptions,
    ) {
        let view_proj =
            state.projection_matrix(aspect, projection) * state.view_matrix();
        self.view_proj = view_proj.to_cols_array_2d();
        self.position = state.position.to_array();
        self.aspect = aspect;
        self.forward = state.forward().to_array();
        self.fovy = state.fov;
    }
}
