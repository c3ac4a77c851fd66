//! Material system
//!
//! Materials are stored centrally in [`MaterialManager`] and objects
//! reference them by [`MaterialId`], so one color edit reaches every object
//! sharing the material.

use std::collections::HashMap;

use super::color::Color;

/// Material ID for referencing materials
pub type MaterialId = String;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub double_sided: u32,
    _padding: f32,
}

/// Standard (metallic/roughness) material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub color: Color,
    pub metallic: f32,
    pub roughness: f32,
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            color: Color::rgb(0.8, 0.8, 0.8),
            metallic: 0.0,
            roughness: 1.0,
            double_sided: false,
        }
    }
}

impl Material {
    pub fn new(name: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            color,
            ..Default::default()
        }
    }

    /// Builder pattern: Set metallic factor
    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set roughness factor
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Render both faces
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            base_color: self.color.to_rgba(1.0),
            metallic: self.metallic,
            roughness: self.roughness,
            double_sided: self.double_sided as u32,
            _padding: 0.0,
        }
    }
}

/// Manages all materials of a composition
#[derive(Debug, Clone)]
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material: Material,
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    /// Adds or replaces a material under its own name
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Material for rendering with fallback to the default material
    pub fn get_material_for_object(&self, material_id: &str) -> &Material {
        self.get_material(material_id)
            .unwrap_or(&self.default_material)
    }

    /// Lists all material IDs, sorted
    pub fn list_materials(&self) -> Vec<&MaterialId> {
        let mut ids: Vec<_> = self.materials.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_material_falls_back_to_default() {
        let manager = MaterialManager::new();
        assert_eq!(manager.get_material_for_object("roof").name, "default");
    }

    #[test]
    fn test_add_replaces_by_name() {
        let mut manager = MaterialManager::new();
        manager.add_material(Material::new("roof", Color::WHITE));
        manager.add_material(Material::new("roof", Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get_material("roof").unwrap().color.g, 0.0);
    }

    #[test]
    fn test_uniform_carries_flags() {
        let material = Material::new("floor", Color::WHITE)
            .with_roughness(2.0)
            .double_sided();
        let uniform = material.uniform();
        assert_eq!(uniform.roughness, 1.0);
        assert_eq!(uniform.double_sided, 1);
        assert_eq!(uniform.base_color, [1.0, 1.0, 1.0, 1.0]);
    }
}
