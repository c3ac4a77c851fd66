//! # Walkthrough
//!
//! Builds the haunted house headlessly, edits a few parameters, flies the
//! camera through every viewpoint and logs what happens along the way.
//!
//! Run with `RUST_LOG=debug` to see each edit and geometry release.

use hollow::composer::{ParamValue, Parameter};
use hollow::gfx::camera::{Easing, Viewpoint};
use hollow::gfx::resources::Color;
use hollow::stage::{DisplayBackend, DisplayMode};
use hollow::{HouseConfig, Stage};

/// Stand-in for a window that never grants fullscreen
struct HeadlessDisplay;

impl DisplayBackend for HeadlessDisplay {
    fn set_display_mode(
        &mut self,
        mode: DisplayMode,
    ) -> Result<(), hollow::error::DisplayError> {
        Err(hollow::error::DisplayError::Rejected(format!(
            "{:?} needs a window",
            mode
        )))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut rng = rand::rng();
    let mut stage = Stage::new(HouseConfig::default(), 16.0 / 9.0, &mut rng)?;

    let bounds = stage.composer().bounding_volume();
    log::info!("initial bounds {:?} .. {:?}", bounds.min, bounds.max);

    stage.update_parameter(Parameter::RoofRadius, ParamValue::Float(3.2))?;
    stage.update_parameter(Parameter::RoofSides, ParamValue::Count(6))?;
    stage.update_parameter(Parameter::WallsHeight, ParamValue::Float(2.6))?;
    stage.update_parameter(Parameter::DoorColor, ParamValue::Color(Color::from_hex("#5a3e36")?))?;
    stage.update_path("graves.count", ParamValue::Count(45))?;
    stage.rescatter_markers(&mut rng)?;

    let bounds = stage.composer().bounding_volume();
    log::info!("edited bounds {:?} .. {:?}", bounds.min, bounds.max);

    if let Err(err) = stage.update_parameter(Parameter::RoofRadius, ParamValue::Float(-1.0)) {
        log::info!("rejected as expected: {}", err);
    }

    stage.set_centered_pivot(true)?;
    stage.set_easing(Easing::BACK_OUT);
    for viewpoint in Viewpoint::ALL {
        stage.go_to(viewpoint);
        let mut frames = 0;
        while stage.tick(1.0 / 60.0) {
            frames += 1;
        }
        log::info!(
            "{} view reached after {} frames, eye {:?}",
            viewpoint,
            frames,
            stage.camera().eye
        );
    }

    stage.toggle_display_mode(&mut HeadlessDisplay);

    let stats = stage.statistics();
    log::info!(
        "{} objects, {} materials, {} vertices, {} triangles",
        stats.objects,
        stats.materials,
        stats.vertices,
        stats.triangles
    );
    Ok(())
}
