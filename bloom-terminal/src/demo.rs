/// Built-in scenes for the viewer
use std::sync::Arc;

use bloom_core::{
    Color, DebugMaterial, FlatMaterial, Geometry, Light, Line, LitMaterial, Material, Mesh,
    NormalMaterial, Scene, SceneError, Vec3,
};

use crate::config::{DemoKind, MaterialKind, ViewerSection};

pub fn material(kind: MaterialKind, color: Color) -> Arc<dyn Material> {
    match kind {
        MaterialKind::Flat => Arc::new(FlatMaterial::new(color)),
        MaterialKind::Normal => Arc::new(NormalMaterial::new(color)),
        MaterialKind::Lit => Arc::new(LitMaterial::new(color)),
        MaterialKind::Debug => Arc::new(DebugMaterial),
    }
}

pub fn geometry(kind: DemoKind) -> Geometry {
    match kind {
        DemoKind::Cube | DemoKind::Lines => Geometry::cube(150.0, 150.0, 150.0),
        DemoKind::Sphere => Geometry::sphere(250.0, 24, 12),
        DemoKind::Plane => Geometry::plane(100.0, 100.0),
        DemoKind::Circle => Geometry::circle(250.0, 24),
        DemoKind::Surface => Geometry::surface(300.0, 300.0, 12, 12),
    }
}

/// Build the viewer scene: one mesh (the loaded model if any, otherwise the
/// configured demo shape), a light, and for the `lines` demo a set of axes.
pub fn build_scene(viewer: &ViewerSection, model: Option<Geometry>) -> Result<Scene, SceneError> {
    let color = Color::from(viewer.color);
    let geometry = model.unwrap_or_else(|| geometry(viewer.demo));

    let mut scene = Scene::new();
    scene.add(Mesh::with_shared_material(geometry, material(viewer.material, color)))?;
    scene.add(Light::new(1.0).with_position(Vec3::new(-200.0, -300.0, -300.0)))?;

    if viewer.demo == DemoKind::Lines {
        let axes = [
            (Vec3::new(200.0, 0.0, 0.0), Color::new(255.0, 60.0, 60.0)),
            (Vec3::new(0.0, 200.0, 0.0), Color::new(60.0, 255.0, 60.0)),
            (Vec3::new(0.0, 0.0, 200.0), Color::new(60.0, 60.0, 255.0)),
        ];
        for (end, color) in axes {
            scene.add(Line::new(Vec3::zeros(), end, color))?;
        }
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::Entity;
    use clap::ValueEnum;

    #[test]
    fn test_default_scene() {
        let scene = build_scene(&ViewerSection::default(), None).unwrap();
        let kinds: Vec<_> = scene.iter().map(Entity::kind).collect();
        assert_eq!(kinds, vec!["mesh", "light"]);
    }

    #[test]
    fn test_lines_scene_has_axes() {
        let viewer = ViewerSection {
            demo: DemoKind::Lines,
            ..ViewerSection::default()
        };
        let scene = build_scene(&viewer, None).unwrap();
        assert_eq!(scene.iter().filter(|e| matches!(e, Entity::Line(_))).count(), 3);
    }

    #[test]
    fn test_model_replaces_demo_shape() {
        let model = Geometry::plane(1.0, 1.0);
        let scene = build_scene(&ViewerSection::default(), Some(model.clone())).unwrap();
        let mesh = scene.children()[0].as_mesh().unwrap();
        assert_eq!(mesh.geometry, model);
    }

    #[test]
    fn test_every_demo_has_faces() {
        for kind in DemoKind::value_variants() {
            assert!(!geometry(*kind).tris.is_empty(), "{kind:?}");
        }
    }
}
