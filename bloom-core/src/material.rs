/// Face coloring
use std::fmt::Debug;

use rand::Rng;

use crate::color::Color;
use crate::scene::Scene;
use crate::transform::{distance_measure, Vec2, Vec3};

/// Distance over which a light of factor 1 removes one unit of impact
pub const LIGHT_FALLOFF: f32 = 700.0;

/// Impact of a face lit by nothing at all
pub const BASE_IMPACT: f32 = 2.0;

/// Turns a face's normal proxy, the world position of its first vertex and
/// the scene being drawn into a fill color. Output is never clamped.
pub trait Material: Debug + Send + Sync {
    fn get_color(&self, normal: &Vec2, position: &Vec3, scene: &Scene) -> Color;
}

/// A fresh random color for every face on every frame.
///
/// Rendering with this material is not deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugMaterial;

impl Material for DebugMaterial {
    fn get_color(&self, _normal: &Vec2, _position: &Vec3, _scene: &Scene) -> Color {
        let mut rng = rand::thread_rng();
        Color::new(
            rng.gen_range(0.0..255.0),
            rng.gen_range(0.0..255.0),
            rng.gen_range(0.0..255.0),
        )
    }
}

/// One fixed color
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatMaterial {
    pub color: Color,
}

impl FlatMaterial {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Material for FlatMaterial {
    fn get_color(&self, _normal: &Vec2, _position: &Vec3, _scene: &Scene) -> Color {
        self.color
    }
}

/// Color scaled by the mean of the normal proxy's components
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalMaterial {
    pub color: Color,
}

impl NormalMaterial {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Material for NormalMaterial {
    fn get_color(&self, normal: &Vec2, _position: &Vec3, _scene: &Scene) -> Color {
        self.color.scale((normal.x + normal.y) / 2.0)
    }
}

/// Color scaled by distance to the scene's lights.
///
/// Each light subtracts `distance / LIGHT_FALLOFF * factor` from a base
/// impact of 2, so faces get darker the further they are from the lights
/// and may go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LitMaterial {
    pub color: Color,
}

impl LitMaterial {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn light_impact(position: &Vec3, scene: &Scene) -> f32 {
        let falloff: f32 = scene
            .lights()
            .map(|light| distance_measure(position, &light.position) / LIGHT_FALLOFF * light.factor)
            .sum();
        BASE_IMPACT - falloff
    }
}

impl Material for LitMaterial {
    fn get_color(&self, _normal: &Vec2, position: &Vec3, scene: &Scene) -> Color {
        self.color.scale(Self::light_impact(position, scene))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Light;

    fn probe(material: &dyn Material, scene: &Scene) -> Color {
        material.get_color(&Vec2::new(0.25, 0.75), &Vec3::new(0.0, 0.0, 0.0), scene)
    }

    #[test]
    fn test_flat_ignores_inputs() {
        let m = FlatMaterial::new(Color::new(1.0, 2.0, 3.0));
        let mut scene = Scene::new();
        assert_eq!(probe(&m, &scene), Color::new(1.0, 2.0, 3.0));
        scene.add(Light::default()).unwrap();
        assert_eq!(
            m.get_color(&Vec2::new(9.0, 9.0), &Vec3::new(5.0, 5.0, 5.0), &scene),
            Color::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_normal_scales_by_mean() {
        let m = NormalMaterial::new(Color::new(100.0, 200.0, 50.0));
        assert_eq!(probe(&m, &Scene::new()), Color::new(50.0, 100.0, 25.0));
    }

    #[test]
    fn test_lit_without_lights_doubles() {
        let m = LitMaterial::new(Color::new(100.0, 50.0, 10.0));
        assert_eq!(LitMaterial::light_impact(&Vec3::zeros(), &Scene::new()), 2.0);
        assert_eq!(probe(&m, &Scene::new()), Color::new(200.0, 100.0, 20.0));
    }

    #[test]
    fn test_lit_accumulates_lights() {
        let mut scene = Scene::new();
        scene
            .add(Light::new(1.0).with_position(Vec3::new(700.0, 0.0, 0.0)))
            .unwrap();
        scene
            .add(Light::new(0.5).with_position(Vec3::new(0.0, -1400.0, 0.0)))
            .unwrap();
        // 2 - (1 * 1) - (2 * 0.5)
        assert_eq!(LitMaterial::light_impact(&Vec3::zeros(), &scene), 0.0);
    }

    #[test]
    fn test_lit_is_unclamped() {
        let mut scene = Scene::new();
        scene
            .add(Light::new(1.0).with_position(Vec3::new(0.0, 0.0, 2100.0)))
            .unwrap();
        let c = probe(&LitMaterial::new(Color::WHITE), &scene);
        assert_eq!(c, Color::new(-255.0, -255.0, -255.0));
    }

    #[test]
    fn test_debug_stays_in_range() {
        let scene = Scene::new();
        for _ in 0..32 {
            let c = probe(&DebugMaterial, &scene);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..255.0).contains(&ch));
            }
        }
    }
}
