//! Frame-driven owner of the composed house and the camera framing it
//!
//! The [`Stage`] forwards parameter edits to the [`SceneComposer`], keeps the
//! orbit pivot in step with the centered-pivot flag, and advances viewpoint
//! transitions once per frame through [`Stage::tick`].

use cgmath::Vector3;
use rand::Rng;

use crate::composer::{Edit, HouseConfig, ParamValue, Parameter, SceneComposer};
use crate::error::{DisplayError, Result};
use crate::gfx::camera::{CameraTransition, Easing, OrbitCamera, Viewpoint};

/// Where the camera starts, looking at the origin
pub const INITIAL_EYE: Vector3<f32> = Vector3::new(2.0, 5.0, 3.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Windowed => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Windowed,
        }
    }
}

/// Windowing layer able to switch between windowed and fullscreen
pub trait DisplayBackend {
    fn set_display_mode(&mut self, mode: DisplayMode) -> std::result::Result<(), DisplayError>;
}

/// Counts over everything the composer built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneStatistics {
    pub objects: usize,
    pub materials: usize,
    pub vertices: usize,
    pub triangles: usize,
}

pub struct Stage {
    composer: SceneComposer,
    camera: OrbitCamera,
    transition: Option<CameraTransition>,
    easing: Easing,
    display_mode: DisplayMode,
}

impl Stage {
    pub fn new<R: Rng>(config: HouseConfig, aspect: f32, rng: &mut R) -> Result<Self> {
        let centered = config.camera.centered_pivot;
        let composer = SceneComposer::build(config, rng)?;

        let mut camera = OrbitCamera::new(1.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), aspect);
        camera.set_eye(INITIAL_EYE);

        let mut stage = Self {
            composer,
            camera,
            transition: None,
            easing: Easing::default(),
            display_mode: DisplayMode::default(),
        };
        if centered {
            stage.apply_pivot();
        }
        Ok(stage)
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        self.transition.as_ref()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Curve used by transitions started from now on
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Forwards an edit to the composer and applies its camera-side effects
    pub fn update_parameter(&mut self, parameter: Parameter, value: ParamValue) -> Result<Edit> {
        let edit = self.composer.update_parameter(parameter, value)?;
        if parameter == Parameter::CameraCenteredPivot {
            self.apply_pivot();
        }
        Ok(edit)
    }

    /// Applies an edit addressed by dotted path, e.g. `camera.centered_pivot`
    pub fn update_path(&mut self, path: &str, value: ParamValue) -> Result<Edit> {
        let parameter: Parameter = path.parse()?;
        self.update_parameter(parameter, value)
    }

    /// Orbits around the house center when enabled, the origin otherwise
    ///
    /// The center is sampled once, at toggle time.
    pub fn set_centered_pivot(&mut self, enabled: bool) -> Result<()> {
        self.update_parameter(Parameter::CameraCenteredPivot, ParamValue::Flag(enabled))?;
        Ok(())
    }

    fn apply_pivot(&mut self) {
        let target = if self.composer.config().camera.centered_pivot {
            self.composer.compute_center()
        } else {
            Vector3::new(0.0, 0.0, 0.0)
        };
        log::debug!("orbit pivot -> {:?}", target);
        self.camera.set_target(target);
    }

    /// Starts an eased move to `viewpoint`, replacing any move in flight
    ///
    /// The new move starts wherever the camera is now.
    pub fn go_to(&mut self, viewpoint: Viewpoint) {
        let settings = &self.composer.config().camera;
        let target = viewpoint.eye(self.camera.target, settings.distance);
        let transition =
            CameraTransition::new(self.camera.eye, viewpoint, target, settings.transition_duration)
                .with_easing(self.easing);

        if let Some(previous) = self.transition.replace(transition) {
            log::debug!(
                "{} transition interrupted at {:.0}%",
                previous.viewpoint,
                previous.progress() * 100.0
            );
        }
        self.camera.set_rotation(None);

        // Zero-length moves land on the spot
        if self.transition.as_ref().is_some_and(CameraTransition::is_finished) {
            self.tick(0.0);
        }
    }

    /// Advances the camera transition by `dt` seconds
    ///
    /// Returns `true` while a transition is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        let eye = transition.advance(dt);
        self.camera.set_eye(eye);
        if !transition.is_finished() {
            return true;
        }

        let viewpoint = transition.viewpoint;
        self.transition = None;
        if let Some(rotation) = viewpoint.settle_rotation() {
            self.camera.set_rotation(Some(rotation));
        }
        log::debug!("arrived at {} view", viewpoint);
        false
    }

    pub fn rescatter_markers<R: Rng>(&mut self, rng: &mut R) -> Result<usize> {
        self.composer.rescatter_markers(rng)
    }

    /// Flips between windowed and fullscreen
    ///
    /// A backend failure is logged and the mode stays as it was.
    pub fn toggle_display_mode(&mut self, backend: &mut dyn DisplayBackend) -> DisplayMode {
        let next = self.display_mode.toggled();
        match backend.set_display_mode(next) {
            Ok(()) => self.display_mode = next,
            Err(err) => log::warn!("could not switch to {:?}: {}", next, err),
        }
        self.display_mode
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
    }

    pub fn statistics(&self) -> SceneStatistics {
        let store = self.composer.geometry();
        let mut stats = SceneStatistics {
            materials: self.composer.materials().len(),
            ..Default::default()
        };
        for object in self.composer.objects() {
            stats.objects += 1;
            if let Some(data) = store.get(object.geometry) {
                stats.vertices += data.vertex_count();
                stats.triangles += data.triangle_count();
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    fn stage() -> Stage {
        Stage::new(HouseConfig::default(), 1.0, &mut StdRng::seed_from_u64(3)).unwrap()
    }

    fn approx(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    fn run_to_end(stage: &mut Stage) {
        for _ in 0..200 {
            if !stage.tick(1.0 / 60.0) {
                return;
            }
        }
        panic!("transition never finished");
    }

    struct FailingBackend;

    impl DisplayBackend for FailingBackend {
        fn set_display_mode(&mut self, _mode: DisplayMode) -> std::result::Result<(), DisplayError> {
            Err(DisplayError::Rejected("not allowed".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingBackend(Vec<DisplayMode>);

    impl DisplayBackend for RecordingBackend {
        fn set_display_mode(&mut self, mode: DisplayMode) -> std::result::Result<(), DisplayError> {
            self.0.push(mode);
            Ok(())
        }
    }

    #[test]
    fn test_camera_starts_at_initial_eye() {
        let stage = stage();
        assert!(approx(stage.camera().eye, INITIAL_EYE));
        assert!(approx(stage.camera().target, Vector3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_pivot_toggle_follows_center_at_toggle_time() {
        let mut stage = stage();
        stage.set_centered_pivot(true).unwrap();
        let center = stage.composer().compute_center();
        assert!(approx(stage.camera().target, center));
        assert!(center.y > 0.0);

        // Growing the walls does not drag the pivot along
        stage
            .update_parameter(Parameter::WallsHeight, ParamValue::Float(4.0))
            .unwrap();
        assert!(approx(stage.camera().target, center));

        stage.set_centered_pivot(false).unwrap();
        assert!(approx(stage.camera().target, Vector3::new(0.0, 0.0, 0.0)));

        stage.set_centered_pivot(true).unwrap();
        assert!(approx(stage.camera().target, stage.composer().compute_center()));
    }

    #[test]
    fn test_pivot_by_path() {
        let mut stage = stage();
        stage
            .update_path("camera.centered_pivot", ParamValue::Flag(true))
            .unwrap();
        assert!(approx(stage.camera().target, stage.composer().compute_center()));
        assert!(stage.update_path("camera.zoom", ParamValue::Float(1.0)).is_err());
    }

    #[test]
    fn test_transition_ends_on_viewpoint() {
        let mut stage = stage();
        stage.go_to(Viewpoint::Front);
        assert!(stage.transition().is_some());
        run_to_end(&mut stage);
        assert!(approx(stage.camera().eye, Vector3::new(0.0, 0.0, 6.5)));
        assert!(stage.transition().is_none());
    }

    #[test]
    fn test_top_snaps_rotation_front_does_not() {
        let mut stage = stage();
        stage.go_to(Viewpoint::Top);
        stage.tick(0.5);
        assert!(stage.camera().rotation().is_none());
        run_to_end(&mut stage);
        assert_eq!(stage.camera().rotation(), Some(Vector3::new(-FRAC_PI_2, 0.0, 0.0)));

        stage.go_to(Viewpoint::Front);
        assert!(stage.camera().rotation().is_none());
        run_to_end(&mut stage);
        assert!(stage.camera().rotation().is_none());
    }

    #[test]
    fn test_retarget_starts_from_current_position() {
        let mut stage = stage();
        stage.go_to(Viewpoint::Left);
        stage.tick(0.3);
        let midway = stage.camera().eye;

        stage.go_to(Viewpoint::Right);
        let transition = stage.transition().unwrap();
        assert_eq!(transition.viewpoint, Viewpoint::Right);
        assert!(approx(transition.start, midway));
        assert_eq!(transition.elapsed, 0.0);

        run_to_end(&mut stage);
        assert!(approx(stage.camera().eye, Vector3::new(6.5, 0.0, 0.0)));
    }

    #[test]
    fn test_viewpoints_orbit_the_pivot() {
        let mut stage = stage();
        stage.set_centered_pivot(true).unwrap();
        let center = stage.composer().compute_center();
        stage.go_to(Viewpoint::Back);
        run_to_end(&mut stage);
        assert!(approx(stage.camera().eye, center + Vector3::new(0.0, 0.0, -6.5)));
    }

    #[test]
    fn test_zero_duration_lands_immediately() {
        let mut stage = stage();
        stage
            .update_parameter(Parameter::CameraTransitionDuration, ParamValue::Float(0.0))
            .unwrap();
        stage.go_to(Viewpoint::Top);
        assert!(stage.transition().is_none());
        assert!(approx(stage.camera().eye, Vector3::new(0.0, 6.5, 0.0)));
        assert!(stage.camera().rotation().is_some());
    }

    #[test]
    fn test_display_failure_keeps_mode() {
        let mut stage = stage();
        assert_eq!(stage.toggle_display_mode(&mut FailingBackend), DisplayMode::Windowed);
        assert_eq!(stage.display_mode(), DisplayMode::Windowed);
    }

    #[test]
    fn test_display_toggle_round_trip() {
        let mut stage = stage();
        let mut backend = RecordingBackend::default();
        stage.toggle_display_mode(&mut backend);
        stage.toggle_display_mode(&mut backend);
        assert_eq!(backend.0, vec![DisplayMode::Fullscreen, DisplayMode::Windowed]);
        assert_eq!(stage.display_mode(), DisplayMode::Windowed);
    }

    #[test]
    fn test_statistics_cover_every_object() {
        let stage = stage();
        let stats = stage.statistics();
        // 7 group members, the floor, 30 graves
        assert_eq!(stats.objects, 38);
        assert_eq!(stats.materials, 6);
        assert!(stats.triangles > 0);
        assert!(stats.vertices > stats.objects);
    }
}
