//! Dear ImGui rendering of the house control panel

use rand::Rng;

use super::controls::{Control, ControlKind, ControlPanel};
use crate::composer::ParamValue;
use crate::gfx::camera::Viewpoint;
use crate::gfx::resources::Color;
use crate::stage::Stage;

/// Renders `panel` and forwards every edited value to `stage`
///
/// Rejected edits are logged and the previous value stays on screen.
pub fn house_control_panel<R: Rng>(
    ui: &imgui::Ui,
    panel: &ControlPanel,
    stage: &mut Stage,
    rng: &mut R,
) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }
    let panel_height = (display_size[1] * 0.85).max(400.0);

    ui.window("Haunted House")
        .size([340.0, panel_height], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            for folder in panel.folders() {
                if ui.collapsing_header(&folder.title, imgui::TreeNodeFlags::empty()) {
                    for control in &folder.controls {
                        render_control(ui, control, stage);
                    }
                }
            }

            ui.separator();
            render_camera_buttons(ui, stage);

            ui.separator();
            if ui.button("Rescatter graves") {
                match stage.rescatter_markers(rng) {
                    Ok(count) => log::info!("rescattered {} graves", count),
                    Err(err) => log::warn!("rescatter failed: {}", err),
                }
            }

            let stats = stage.statistics();
            ui.text(format!(
                "{} objects, {} materials, {} triangles",
                stats.objects, stats.materials, stats.triangles
            ));
        });
}

fn render_control(ui: &imgui::Ui, control: &Control, stage: &mut Stage) {
    let current = stage.composer().config().value(control.parameter);
    let label = format!("{}##{}", control.label, control.parameter.path());

    let edited = match (control.kind, current) {
        (ControlKind::Slider { min, max, .. }, ParamValue::Float(mut v)) => {
            ui.slider(&label, min, max, &mut v).then_some(ParamValue::Float(v))
        }
        (ControlKind::Stepper { min, max }, ParamValue::Count(mut v)) => {
            ui.slider(&label, min, max, &mut v).then_some(ParamValue::Count(v))
        }
        (ControlKind::Color, ParamValue::Color(color)) => {
            let mut rgb = color.to_array();
            ui.color_edit3(&label, &mut rgb)
                .then(|| ParamValue::Color(Color::from(rgb)))
        }
        (ControlKind::Checkbox, ParamValue::Flag(mut v)) => {
            ui.checkbox(&label, &mut v).then_some(ParamValue::Flag(v))
        }
        (kind, value) => {
            log::warn!("{:?} cannot edit {} ({:?})", kind, control.parameter, value);
            None
        }
    };

    if let Some(value) = edited {
        if let Err(err) = stage.update_parameter(control.parameter, control.coerce(value)) {
            log::warn!("{} rejected: {}", control.parameter, err);
        }
    }
}

fn render_camera_buttons(ui: &imgui::Ui, stage: &mut Stage) {
    ui.text("Viewpoints");
    for (i, viewpoint) in Viewpoint::ALL.into_iter().enumerate() {
        if i > 0 {
            ui.same_line();
        }
        if ui.button(viewpoint.label()) {
            stage.go_to(viewpoint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::HouseConfig;
    use crate::ui::controls::house_panel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Only one ImGui context may exist per process, so the whole frame runs
    // in a single test.
    #[test]
    fn test_panel_renders_without_input() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut stage = Stage::new(HouseConfig::default(), 1.0, &mut rng).unwrap();
        let before = stage.composer().config().clone();

        let mut context = imgui::Context::create();
        context.set_ini_filename(None);
        context.io_mut().display_size = [1280.0, 720.0];
        context.fonts().build_rgba32_texture();

        let panel = house_panel();
        let ui = context.new_frame();
        house_control_panel(ui, &panel, &mut stage, &mut rng);
        context.render();

        assert_eq!(stage.composer().config(), &before);
    }
}
