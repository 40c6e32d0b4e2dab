//! Material catalog
//!
//! Material shaders are not referenced by a fixed variable name in the bundle.
//! Instead `ShaderLib` maps `<stem>_vert` and `<stem>_frag` to generated
//! identifiers (`vertex$5`, `fragment$5`, ...), so each material carries the stem
//! used to discover them.

catalog! {
    /// Inclusion flags for every known three.js material
    pub struct MaterialCatalog as "material" {
        background => "background",
        background_cube => "backgroundCube",
        cube => "cube",
        depth => "depth",
        distance => "distance",
        equirect => "equirect",
        line_dashed => "lineDashed",
        basic => "basic",
        lambert => "lambert",
        matcap => "matcap",
        normal => "normal",
        phong => "phong",
        physical => "physical",
        toon => "toon",
        points => "points",
        shadow => "shadow",
        sprite => "sprite",
    }
}

/// Maps material names to the `ShaderLib` stem of their shaders
pub const MATERIAL_STEMS: &[(&str, &str)] = &[
    // Scene.background == Texture
    ("background", "background"),
    // Scene.background == CubeTexture
    ("backgroundCube", "backgroundCube"),
    ("cube", "cube"),
    // MeshDepthMaterial
    ("depth", "depth"),
    // MeshDistanceMaterial
    ("distance", "distanceRGBA"),
    ("equirect", "equirect"),
    // LineDashedMaterial
    ("lineDashed", "linedashed"),
    // LineBasicMaterial, MeshBasicMaterial
    ("basic", "meshbasic"),
    ("lambert", "meshlambert"),
    ("matcap", "meshmatcap"),
    ("normal", "meshnormal"),
    ("phong", "meshphong"),
    // MeshStandardMaterial, MeshPhysicalMaterial
    ("physical", "meshphysical"),
    ("toon", "meshtoon"),
    ("points", "points"),
    ("shadow", "shadow"),
    ("sprite", "sprite"),
];

impl MaterialCatalog {
    /// Returns the `ShaderLib` stem for a material name
    pub fn stem(name: &str) -> Option<&'static str> {
        MATERIAL_STEMS.iter().find(|(material, _)| *material == name).map(|(_, stem)| *stem)
    }

    /// Iterates over `(stem, included)` pairs in declaration order
    pub fn stems(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.iter().filter_map(|(name, included)| Self::stem(name).map(|stem| (stem, included)))
    }
}
