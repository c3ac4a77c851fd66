//! # Scene Composer
//!
//! Builds the haunted house from a [`HouseConfig`]: walls, roof, door and
//! four bushes grouped into one rigid [`Group`], a floor, and a ring of
//! randomly scattered graves. The composer keeps an axis-aligned bounding
//! volume over the group and applies typed parameter edits.
//!
//! ## Usage
//!
//! ```rust
//! use hollow::composer::{HouseConfig, ParamValue, Parameter, SceneComposer};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut composer = SceneComposer::build(HouseConfig::default(), &mut rng)?;
//! assert_eq!(composer.group().len(), 7);
//!
//! composer.update_parameter(Parameter::RoofRadius, ParamValue::Float(3.0))?;
//! assert!(composer.bounding_volume().max.x > 3.0);
//! # Ok::<(), hollow::error::ComposeError>(())
//! ```
//!
//! ## Edits
//!
//! Every edit is staged on a copy of the configuration, new geometry is built
//! from the copy, and only then is anything committed. A failed edit leaves
//! the composer untouched. A shape edit releases the geometry it replaces in
//! the same call.

pub mod config;
pub mod layout;
pub mod parameter;
pub mod scatter;

pub use config::HouseConfig;
pub use parameter::{EditKind, ParamValue, Parameter, ValueKind};

use cgmath::Vector3;
use rand::Rng;

use crate::error::{ComposeError, Result};
use crate::gfx::geometry::{GeometryData, GeometryId, GeometryStore, Shape};
use crate::gfx::math::Aabb;
use crate::gfx::resources::{AmbientLight, Material, MaterialId, MaterialManager};
use crate::gfx::scene::{Group, PlacedObject};
use layout::{BUSH_LAYOUT, DOOR, FLOOR, ROOF, WALLS};

const HOUSE: &str = "house";
const BUSH_MATERIAL: &str = "bush";

/// One geometry swap performed by a shape edit
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryReplacement {
    pub target: String,
    pub released: GeometryId,
    pub created: GeometryId,
}

/// What an edit did to the scene
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Transforms of the named objects were rewritten in place
    Transform(Vec<String>),
    /// A shared material changed
    Material(MaterialId),
    Light,
    /// Geometry was rebuilt; dependent placements were re-derived
    ReplaceGeometry(Vec<GeometryReplacement>),
    /// Grave layout stored, takes effect on the next scatter
    MarkersPending,
    Camera,
}

pub struct SceneComposer {
    config: HouseConfig,
    store: GeometryStore,
    materials: MaterialManager,
    group: Group,
    floor: PlacedObject,
    markers: Vec<PlacedObject>,
    ambient: AmbientLight,
    bounds: Aabb,
}

impl SceneComposer {
    /// Builds every object described by `config`
    ///
    /// Dimensions are not range-checked here; the first shape that rejects
    /// its dimensions aborts the build with its error.
    pub fn build<R: Rng>(config: HouseConfig, rng: &mut R) -> Result<Self> {
        let mut store = GeometryStore::new();

        let mut place = |name: &str, shape: Shape, material: &str, transform| -> Result<_> {
            let id = store.insert(shape.build()?);
            Ok(PlacedObject::new(name, shape, id, material, transform))
        };

        let mut members = vec![
            place(WALLS, layout::walls_shape(&config), WALLS, layout::walls_transform(&config))?,
            place(ROOF, layout::roof_shape(&config), ROOF, layout::roof_transform(&config))?,
            place(DOOR, layout::door_shape(&config), DOOR, layout::door_transform(&config))?,
        ];
        for (i, slot) in BUSH_LAYOUT.iter().enumerate() {
            members.push(place(
                layout::bush_name(i),
                layout::bush_shape(&config),
                BUSH_MATERIAL,
                layout::bush_transform(&config, slot),
            )?);
        }
        let floor = place(
            FLOOR,
            layout::floor_shape(&config),
            FLOOR,
            layout::floor_transform(&config),
        )?;

        let markers = scatter::scatter_graves(&config, &mut store, rng)?;
        let group = Group::new(HOUSE, members);
        let bounds = group.world_bounds(&store);

        let mut materials = MaterialManager::new();
        materials.add_material(Material::new(WALLS, config.walls.color));
        materials.add_material(Material::new(ROOF, config.roof.color));
        materials.add_material(Material::new(DOOR, config.door.color));
        materials.add_material(Material::new(FLOOR, config.floor.color).double_sided());
        materials.add_material(Material::new(BUSH_MATERIAL, config.bushes.color));
        materials.add_material(Material::new(scatter::GRAVE_MATERIAL, config.graves.color));

        let ambient = AmbientLight::new(config.ambient.color, config.ambient.intensity);

        log::info!(
            "composed `{}`: {} members, {} graves, bounds {:?}..{:?}",
            HOUSE,
            group.len(),
            markers.len(),
            bounds.min,
            bounds.max
        );

        Ok(Self {
            config,
            store,
            materials,
            group,
            floor,
            markers,
            ambient,
            bounds,
        })
    }

    pub fn config(&self) -> &HouseConfig {
        &self.config
    }

    /// The house group, for attaching to a scene graph
    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn floor(&self) -> &PlacedObject {
        &self.floor
    }

    /// Graves, kept outside the house group
    pub fn markers(&self) -> &[PlacedObject] {
        &self.markers
    }

    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient
    }

    pub fn materials(&self) -> &MaterialManager {
        &self.materials
    }

    pub fn geometry(&self) -> &GeometryStore {
        &self.store
    }

    /// Bounding volume as of the last recomputation
    pub fn bounding_volume(&self) -> Aabb {
        self.bounds
    }

    /// Centroid of the current bounding volume
    pub fn compute_center(&self) -> Vector3<f32> {
        self.bounds.center()
    }

    /// Recomputes the bounding volume from the group's current transforms
    pub fn recompute_bounds(&mut self) -> Aabb {
        self.bounds = self.group.world_bounds(&self.store);
        self.bounds
    }

    /// Every object the composer built: group members, floor, then graves
    pub fn objects(&self) -> impl Iterator<Item = &PlacedObject> {
        self.group
            .members()
            .iter()
            .chain(std::iter::once(&self.floor))
            .chain(self.markers.iter())
    }

    /// Looks an object up by name
    pub fn object(&self, name: &str) -> Result<&PlacedObject> {
        self.objects()
            .find(|o| o.name == name)
            .ok_or_else(|| ComposeError::UnknownTarget(name.to_string()))
    }

    /// Applies an edit addressed by dotted path, e.g. `roof.radius`
    pub fn update_path(&mut self, path: &str, value: ParamValue) -> Result<Edit> {
        let parameter: Parameter = path.parse()?;
        self.update_parameter(parameter, value)
    }

    /// Applies one parameter edit
    ///
    /// Edits that move or reshape a group member recompute the bounding
    /// volume before returning (see [`Parameter::affects_bounds`]).
    pub fn update_parameter(&mut self, parameter: Parameter, value: ParamValue) -> Result<Edit> {
        let mut next = self.config.clone();
        next.set(parameter, value)?;

        let edit = match parameter.edit_kind() {
            EditKind::Shape => Edit::ReplaceGeometry(self.replace_shapes(parameter, &next)?),
            EditKind::Placement => Edit::Transform(placement_targets(parameter)),
            EditKind::Material => {
                let id = material_for(parameter);
                let material = self
                    .materials
                    .get_material_mut(id)
                    .ok_or_else(|| ComposeError::UnknownTarget(id.to_string()))?;
                material.color = value.as_color(parameter)?;
                Edit::Material(id.to_string())
            }
            EditKind::Light => {
                self.ambient = AmbientLight::new(next.ambient.color, next.ambient.intensity);
                Edit::Light
            }
            EditKind::Markers => Edit::MarkersPending,
            EditKind::Camera => Edit::Camera,
        };

        self.config = next;
        self.apply_layout();
        if parameter.affects_bounds() {
            self.recompute_bounds();
        }

        log::debug!("{} = {:?} -> {:?}", parameter, value, edit);
        Ok(edit)
    }

    /// Rebuilds the graves from the current configuration
    ///
    /// Old grave geometry is released only once the new graves exist.
    pub fn rescatter_markers<R: Rng>(&mut self, rng: &mut R) -> Result<usize> {
        let graves = scatter::scatter_graves(&self.config, &mut self.store, rng)?;
        for old in std::mem::replace(&mut self.markers, graves) {
            self.store.release(old.geometry);
        }
        log::debug!("scattered {} graves", self.markers.len());
        Ok(self.markers.len())
    }

    /// Builds the new geometry for a shape edit, then swaps it in
    fn replace_shapes(
        &mut self,
        parameter: Parameter,
        next: &HouseConfig,
    ) -> Result<Vec<GeometryReplacement>> {
        use Parameter::*;

        let (targets, shape): (Vec<&str>, Shape) = match parameter {
            RoofRadius | RoofHeight | RoofSides => (vec![ROOF], layout::roof_shape(next)),
            WallsWidth | WallsHeight | WallsDepth => (vec![WALLS], layout::walls_shape(next)),
            DoorWidth | DoorHeight => (vec![DOOR], layout::door_shape(next)),
            FloorWidth | FloorDepth => (vec![FLOOR], layout::floor_shape(next)),
            BushBaseSize => (
                (0..BUSH_LAYOUT.len()).map(layout::bush_name).collect(),
                layout::bush_shape(next),
            ),
            _ => return Err(ComposeError::UnknownTarget(parameter.path().to_string())),
        };

        let data = shape.build()?;
        for target in &targets {
            if *target != FLOOR && self.group.member(target).is_none() {
                return Err(ComposeError::UnknownTarget(target.to_string()));
            }
        }

        let mut replacements = Vec::with_capacity(targets.len());
        for target in targets {
            let object = if target == FLOOR {
                Some(&mut self.floor)
            } else {
                self.group.member_mut(target)
            };
            let object = object.ok_or_else(|| ComposeError::UnknownTarget(target.to_string()))?;
            replacements.push(swap_geometry(&mut self.store, object, shape, data.clone()));
        }

        Ok(replacements)
    }

    /// Re-derives every placement from the configuration
    fn apply_layout(&mut self) {
        let config = &self.config;
        for member in self.group.members_mut() {
            member.transform = match member.name.as_str() {
                WALLS => layout::walls_transform(config),
                ROOF => layout::roof_transform(config),
                DOOR => layout::door_transform(config),
                name => match (0..BUSH_LAYOUT.len()).find(|&i| layout::bush_name(i) == name) {
                    Some(i) => layout::bush_transform(config, &BUSH_LAYOUT[i]),
                    None => member.transform,
                },
            };
        }
        self.floor.transform = layout::floor_transform(config);
    }
}

fn swap_geometry(
    store: &mut GeometryStore,
    object: &mut PlacedObject,
    shape: Shape,
    data: GeometryData,
) -> GeometryReplacement {
    let created = store.insert(data);
    let released = std::mem::replace(&mut object.geometry, created);
    object.shape = shape;
    store.release(released);
    GeometryReplacement {
        target: object.name.clone(),
        released,
        created,
    }
}

fn placement_targets(parameter: Parameter) -> Vec<String> {
    let bushes = |scale: layout::BushScale| {
        BUSH_LAYOUT
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.scale == scale)
            .map(|(i, _)| layout::bush_name(i).to_string())
            .collect()
    };
    match parameter {
        Parameter::RoofRotation => vec![ROOF.to_string()],
        Parameter::DoorOffset => vec![DOOR.to_string()],
        Parameter::BushLargeScale => bushes(layout::BushScale::Large),
        Parameter::BushSmallScale => bushes(layout::BushScale::Small),
        _ => Vec::new(),
    }
}

fn material_for(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::RoofColor => ROOF,
        Parameter::WallsColor => WALLS,
        Parameter::DoorColor => DOOR,
        Parameter::FloorColor => FLOOR,
        Parameter::BushColor => BUSH_MATERIAL,
        _ => scatter::GRAVE_MATERIAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Transform as _};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn compose(config: HouseConfig) -> SceneComposer {
        SceneComposer::build(config, &mut StdRng::seed_from_u64(42)).unwrap()
    }

    /// World-space extent of one member, derived straight from its vertices
    fn member_extent(composer: &SceneComposer, member: &PlacedObject) -> Vec<Vector3<f32>> {
        let world = composer.group().world_matrix() * member.transform.matrix();
        composer
            .geometry()
            .get(member.geometry)
            .unwrap()
            .vertices
            .iter()
            .map(|v| {
                let p = world.transform_point(Point3::new(v[0], v[1], v[2]));
                Vector3::new(p.x, p.y, p.z)
            })
            .collect()
    }

    fn assert_bounds_enclose_group(composer: &SceneComposer) {
        let bounds = composer.bounding_volume();
        for member in composer.group().members() {
            for p in member_extent(composer, member) {
                assert!(
                    bounds.contains_point(p, 1e-4),
                    "{} vertex {:?} outside {:?}",
                    member.name,
                    p,
                    bounds
                );
            }
        }
    }

    #[test]
    fn test_group_holds_structure_and_bushes() {
        let composer = compose(HouseConfig::default());
        let names: Vec<&str> = composer.group().members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["walls", "roof", "door", "bush-0", "bush-1", "bush-2", "bush-3"]
        );
        assert_eq!(composer.markers().len(), 30);
        assert!(composer.group().member("floor").is_none());
    }

    #[test]
    fn test_zero_graves() {
        let mut config = HouseConfig::default();
        config.graves.count = 0;
        let composer = compose(config);
        assert!(composer.markers().is_empty());
        assert_eq!(composer.group().len(), 7);
    }

    #[test]
    fn test_roof_and_door_placement() {
        let composer = compose(HouseConfig::default());
        let roof = composer.object("roof").unwrap();
        assert!((roof.transform.position.y - 2.35).abs() < 1e-6);

        let door = composer.object("door").unwrap();
        assert!((door.transform.position.z - 1.26).abs() < 1e-6);
        assert!((door.transform.position.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_initial_bounds_enclose_group() {
        let composer = compose(HouseConfig::default());
        assert_bounds_enclose_group(&composer);
        // Half-sunk large bushes to roof apex
        assert!((composer.bounding_volume().min.y + 0.25).abs() < 1e-5);
        assert!((composer.bounding_volume().max.y - 2.7).abs() < 1e-5);
    }

    #[test]
    fn test_build_is_repeatable() {
        let config = HouseConfig::default();
        let a = SceneComposer::build(config.clone(), &mut StdRng::seed_from_u64(1)).unwrap();
        let b = SceneComposer::build(config, &mut StdRng::seed_from_u64(2)).unwrap();

        let transforms = |c: &SceneComposer| {
            c.group().members().iter().map(|m| m.transform).collect::<Vec<_>>()
        };
        assert_eq!(transforms(&a), transforms(&b));
        assert_eq!(a.bounding_volume(), b.bounding_volume());
    }

    #[test]
    fn test_negative_roof_radius_fails_build() {
        let mut config = HouseConfig::default();
        config.roof.radius = -1.0;
        let err = SceneComposer::build(config, &mut StdRng::seed_from_u64(0))
            .err()
            .unwrap();
        assert!(matches!(err, ComposeError::Geometry(_)));
    }

    #[test]
    fn test_roof_radius_edit_replaces_and_rebounds() {
        let mut composer = compose(HouseConfig::default());
        let live = composer.geometry().live_count();
        let old = composer.object("roof").unwrap().geometry;

        let edit = composer
            .update_parameter(Parameter::RoofRadius, ParamValue::Float(4.0))
            .unwrap();

        let Edit::ReplaceGeometry(replaced) = edit else {
            panic!("expected a geometry replacement, got {:?}", edit);
        };
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].released, old);
        assert!(!composer.geometry().contains(old));
        assert_eq!(composer.geometry().live_count(), live);
        assert_bounds_enclose_group(&composer);
        // Corners of the roof's local box, turned an eighth about Y
        assert!((composer.bounding_volume().max.x - 4.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn test_roof_sides_edit_keeps_material() {
        let mut composer = compose(HouseConfig::default());
        composer
            .update_parameter(Parameter::RoofSides, ParamValue::Count(8))
            .unwrap();
        let roof = composer.object("roof").unwrap();
        assert_eq!(roof.material, "roof");
        assert!(matches!(roof.shape, Shape::Cone { radial_segments: 8, .. }));
        assert_bounds_enclose_group(&composer);
    }

    #[test]
    fn test_walls_height_edit_moves_roof() {
        let mut composer = compose(HouseConfig::default());
        composer
            .update_parameter(Parameter::WallsHeight, ParamValue::Float(3.0))
            .unwrap();
        let roof = composer.object("roof").unwrap();
        assert!((roof.transform.position.y - 3.35).abs() < 1e-6);
        assert!((composer.bounding_volume().max.y - 3.7).abs() < 1e-5);
        assert_bounds_enclose_group(&composer);
    }

    #[test]
    fn test_bush_base_size_replaces_all_bushes() {
        let mut composer = compose(HouseConfig::default());
        let live = composer.geometry().live_count();
        let edit = composer
            .update_parameter(Parameter::BushBaseSize, ParamValue::Float(1.5))
            .unwrap();
        match edit {
            Edit::ReplaceGeometry(replaced) => assert_eq!(replaced.len(), 4),
            other => panic!("unexpected edit {:?}", other),
        }
        assert_eq!(composer.geometry().live_count(), live);
        assert_bounds_enclose_group(&composer);
    }

    #[test]
    fn test_floor_edit_does_not_touch_bounds() {
        let mut composer = compose(HouseConfig::default());
        let before = composer.bounding_volume();
        composer
            .update_parameter(Parameter::FloorWidth, ParamValue::Float(20.0))
            .unwrap();
        assert_eq!(composer.bounding_volume(), before);
        assert!(matches!(composer.floor().shape, Shape::Plane { width, .. } if width == 20.0));
    }

    #[test]
    fn test_failed_edit_changes_nothing() {
        let mut composer = compose(HouseConfig::default());
        let before_config = composer.config().clone();
        let before_roof = composer.object("roof").unwrap().clone();
        let live = composer.geometry().live_count();

        let err = composer
            .update_parameter(Parameter::RoofRadius, ParamValue::Float(-2.0))
            .unwrap_err();
        assert!(matches!(err, ComposeError::Geometry(_)));
        assert_eq!(composer.config(), &before_config);
        assert_eq!(composer.object("roof").unwrap(), &before_roof);
        assert_eq!(composer.geometry().live_count(), live);
    }

    #[test]
    fn test_rotation_edit_is_in_place() {
        let mut composer = compose(HouseConfig::default());
        let geometry = composer.object("roof").unwrap().geometry;
        let edit = composer
            .update_parameter(Parameter::RoofRotation, ParamValue::Float(0.0))
            .unwrap();
        assert_eq!(edit, Edit::Transform(vec!["roof".to_string()]));
        assert_eq!(composer.object("roof").unwrap().geometry, geometry);
        // Unrotated four-sided roof reaches its full radius on X
        assert!((composer.bounding_volume().max.x - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_door_offset_moves_door() {
        let mut composer = compose(HouseConfig::default());
        composer.update_path("door.offset", ParamValue::Float(0.2)).unwrap();
        let door = composer.object("door").unwrap();
        assert!((door.transform.position.z - 1.45).abs() < 1e-6);
    }

    #[test]
    fn test_color_edit_updates_shared_material() {
        let mut composer = compose(HouseConfig::default());
        let red = crate::gfx::resources::Color::rgb(1.0, 0.0, 0.0);
        let edit = composer
            .update_parameter(Parameter::BushColor, ParamValue::Color(red))
            .unwrap();
        assert_eq!(edit, Edit::Material("bush".to_string()));
        assert_eq!(composer.materials().get_material("bush").unwrap().color, red);
    }

    #[test]
    fn test_ambient_edit() {
        let mut composer = compose(HouseConfig::default());
        composer
            .update_parameter(Parameter::AmbientIntensity, ParamValue::Float(2.0))
            .unwrap();
        assert_eq!(composer.ambient_light().intensity, 2.0);
    }

    #[test]
    fn test_unknown_targets() {
        let mut composer = compose(HouseConfig::default());
        assert!(matches!(
            composer.update_path("chimney.height", ParamValue::Float(1.0)),
            Err(ComposeError::UnknownTarget(_))
        ));
        assert!(matches!(
            composer.object("chimney"),
            Err(ComposeError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_wrong_value_kind() {
        let mut composer = compose(HouseConfig::default());
        assert!(matches!(
            composer.update_parameter(Parameter::RoofColor, ParamValue::Float(1.0)),
            Err(ComposeError::ValueMismatch { .. })
        ));
    }

    #[test]
    fn test_grave_edits_wait_for_rescatter() {
        let mut composer = compose(HouseConfig::default());
        let edit = composer
            .update_parameter(Parameter::GraveCount, ParamValue::Count(5))
            .unwrap();
        assert_eq!(edit, Edit::MarkersPending);
        assert_eq!(composer.markers().len(), 30);

        let live = composer.geometry().live_count();
        let scattered = composer
            .rescatter_markers(&mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(scattered, 5);
        assert_eq!(composer.markers().len(), 5);
        assert_eq!(composer.geometry().live_count(), live - 25);
    }

    #[test]
    fn test_stale_bounds_until_recompute() {
        let mut composer = compose(HouseConfig::default());
        let before = composer.bounding_volume();
        composer.group.transform.position.x = 5.0;
        assert_eq!(composer.bounding_volume(), before);

        let after = composer.recompute_bounds();
        assert!((after.min.x - (before.min.x + 5.0)).abs() < 1e-4);
        assert_bounds_enclose_group(&composer);
    }
}
