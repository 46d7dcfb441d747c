use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use serde::Deserialize;

use super::{obj, CsgOp, Scene, ShapeId};
use crate::{
    camera::Camera,
    error::{Error, Result},
    hikari_info, hikari_warn,
    lights::{Light, PointLight},
    materials::Material,
    math::{
        transforms::{
            chain, rotation_x, rotation_y, rotation_z, scale, shearing, translation,
            view_transform,
        },
        Normal, Point3, Spectrum, Transform, Vec3,
    },
    patterns::{CheckerPattern, LinearGradient, Pattern, RingPattern, Stripes},
    shapes::{Cone, Cube, Cylinder, Plane, SmoothTriangle, Sphere, Triangle},
    world::World,
};

/// Root of a YAML scene file
#[derive(Clone, Debug, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    #[serde(default)]
    pub background: Option<[f64; 3]>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    /// Patterns that materials can refer to by name.
    #[serde(default)]
    pub patterns: HashMap<String, PatternDescription>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CameraDescription {
    pub width: usize,
    pub height: usize,
    /// In radians.
    pub field_of_view: f64,
    pub from: [f64; 3],
    pub to: [f64; 3],
    #[serde(default = "default_up")]
    pub up: [f64; 3],
}

fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

fn default_intensity() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Clone, Debug, Deserialize)]
pub struct LightDescription {
    pub position: [f64; 3],
    #[serde(default = "default_intensity")]
    pub intensity: [f64; 3],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Stripes,
    Gradient,
    Rings,
    Checkers,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PatternDescription {
    #[serde(rename = "type")]
    pub kind: PatternType,
    pub colours: Vec<[f64; 3]>,
    #[serde(default, deserialize_with = "transform_ops")]
    pub transform: Vec<TransformOp>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PatternRef {
    Named(String),
    Inline(PatternDescription),
}

/// Material overrides, unset fields are inherited from the enclosing object
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MaterialDescription {
    pub colour: Option<[f64; 3]>,
    pub pattern: Option<PatternRef>,
    pub ambient: Option<f64>,
    pub diffuse: Option<f64>,
    pub specular: Option<f64>,
    pub shininess: Option<f64>,
    pub reflective: Option<f64>,
    pub transparency: Option<f64>,
    pub refractive_index: Option<f64>,
    pub casts_shadow: Option<bool>,
    /// Start from [`Material::glass`] instead of the inherited material.
    #[serde(default)]
    pub glass: bool,
}

/// A single step in an object's transform, applied in listed order
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    Translate([f64; 3]),
    Scale([f64; 3]),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    /// xy, xz, yx, yz, zx, zy
    Shear([f64; 6]),
}

/// Reads `- translate: [x, y, z]` style entries, plain serde_yaml wants `!translate` tags.
fn transform_ops<'de, D>(deserializer: D) -> std::result::Result<Vec<TransformOp>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_yaml::with::singleton_map_recursive::deserialize(deserializer)
}

#[derive(Clone, Debug, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "transform_ops")]
    pub transform: Vec<TransformOp>,
    #[serde(default)]
    pub material: Option<MaterialDescription>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere,
    Plane,
    Cube,
    Cylinder {
        #[serde(default)]
        bounds: Option<BoundsDescription>,
    },
    Cone {
        #[serde(default)]
        bounds: Option<BoundsDescription>,
    },
    Triangle {
        points: [[f64; 3]; 3],
    },
    SmoothTriangle {
        points: [[f64; 3]; 3],
        normals: [[f64; 3]; 3],
    },
    Group {
        #[serde(default)]
        children: Vec<ObjectDescription>,
    },
    Csg {
        op: CsgOp,
        left: Box<ObjectDescription>,
        right: Box<ObjectDescription>,
    },
    /// Wavefront OBJ, relative paths are resolved against the scene file.
    Obj {
        path: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct BoundsDescription {
    pub minimum: f64,
    pub maximum: f64,
    #[serde(default)]
    pub closed: bool,
}

fn spectrum(c: [f64; 3]) -> Spectrum<f64> {
    Spectrum::new(c[0], c[1], c[2])
}

fn point(p: [f64; 3]) -> Point3<f64> {
    Point3::new(p[0], p[1], p[2])
}

fn vector(v: [f64; 3]) -> Vec3<f64> {
    Vec3::new(v[0], v[1], v[2])
}

fn normal(n: [f64; 3]) -> Normal<f64> {
    Normal::new(n[0], n[1], n[2])
}

/// Composes `ops` so that the result applies them in listed order.
pub fn build_transform(ops: &[TransformOp]) -> Result<Transform<f64>> {
    let transforms = ops
        .iter()
        .map(|op| match *op {
            TransformOp::Translate(v) => Ok(translation(vector(v))),
            TransformOp::Scale([x, y, z]) => {
                if x == 0.0 || y == 0.0 || z == 0.0 {
                    Err(Error::InvalidArgument(format!(
                        "scale should be non-zero, got {:?}",
                        [x, y, z]
                    )))
                } else {
                    Ok(scale(x, y, z))
                }
            }
            TransformOp::RotateX(theta) => Ok(rotation_x(theta)),
            TransformOp::RotateY(theta) => Ok(rotation_y(theta)),
            TransformOp::RotateZ(theta) => Ok(rotation_z(theta)),
            TransformOp::Shear([xy, xz, yx, yz, zx, zy]) => shearing(xy, xz, yx, yz, zx, zy),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(chain(&transforms))
}

fn build_pattern(desc: &PatternDescription) -> Result<Arc<dyn Pattern>> {
    let colours: Vec<Spectrum<f64>> = desc.colours.iter().copied().map(spectrum).collect();
    let transform = build_transform(&desc.transform)?;

    Ok(match desc.kind {
        PatternType::Stripes => Arc::new(Stripes::new(colours)?.with_transform(transform)),
        PatternType::Gradient => Arc::new(LinearGradient::new(colours)?.with_transform(transform)),
        PatternType::Rings => Arc::new(RingPattern::new(colours)?.with_transform(transform)),
        PatternType::Checkers => Arc::new(CheckerPattern::new(colours)?.with_transform(transform)),
    })
}

struct Builder<'a> {
    scene: Scene,
    patterns: HashMap<String, Arc<dyn Pattern>>,
    base_dir: &'a Path,
}

impl<'a> Builder<'a> {
    fn material(&self, inherited: &Material, desc: &MaterialDescription) -> Result<Material> {
        let mut m = if desc.glass {
            Material::glass()
        } else {
            inherited.clone()
        };

        macro_rules! set {
            ($field:ident) => {
                if let Some(v) = desc.$field {
                    m.$field = v;
                }
            };
        }
        set!(ambient);
        set!(diffuse);
        set!(specular);
        set!(shininess);
        set!(reflective);
        set!(transparency);
        set!(refractive_index);
        set!(casts_shadow);

        if let Some(c) = desc.colour {
            m.colour = spectrum(c);
        }
        match &desc.pattern {
            Some(PatternRef::Named(name)) => match self.patterns.get(name) {
                Some(p) => m.pattern = Some(p.clone()),
                None => {
                    return Err(Error::InvalidArgument(format!("unknown pattern '{}'", name)))
                }
            },
            Some(PatternRef::Inline(p)) => m.pattern = Some(build_pattern(p)?),
            None => (),
        }

        m.validate()?;
        Ok(m)
    }

    fn object(&mut self, desc: &ObjectDescription, inherited: &Material) -> Result<ShapeId> {
        let material = match &desc.material {
            Some(m) => self.material(inherited, m)?,
            None => inherited.clone(),
        };

        let id = match &desc.shape {
            ShapeDescription::Sphere => self.scene.add(Sphere::new()),
            ShapeDescription::Plane => self.scene.add(Plane::new()),
            ShapeDescription::Cube => self.scene.add(Cube::new()),
            ShapeDescription::Cylinder { bounds } => match bounds {
                Some(b) => self
                    .scene
                    .add(Cylinder::truncated(b.minimum, b.maximum, b.closed)?),
                None => self.scene.add(Cylinder::new()),
            },
            ShapeDescription::Cone { bounds } => match bounds {
                Some(b) => self
                    .scene
                    .add(Cone::truncated(b.minimum, b.maximum, b.closed)?),
                None => self.scene.add(Cone::new()),
            },
            ShapeDescription::Triangle { points } => self.scene.add(Triangle::new(
                point(points[0]),
                point(points[1]),
                point(points[2]),
            )),
            ShapeDescription::SmoothTriangle { points, normals } => {
                self.scene.add(SmoothTriangle::new(
                    point(points[0]),
                    point(points[1]),
                    point(points[2]),
                    normal(normals[0]),
                    normal(normals[1]),
                    normal(normals[2]),
                ))
            }
            ShapeDescription::Group { children } => {
                let group = match &desc.name {
                    Some(name) => self.scene.add_named_group(name),
                    None => self.scene.add_group(),
                };
                for child in children {
                    let child = self.object(child, &material)?;
                    self.scene.add_child(group, child)?;
                }
                group
            }
            ShapeDescription::Csg { op, left, right } => {
                let left = self.object(left, &material)?;
                let right = self.object(right, &material)?;
                self.scene.add_csg(*op, left, right)?
            }
            ShapeDescription::Obj { path } => {
                let model = obj::load(&self.base_dir.join(path))?;
                if model.ignored > 0 {
                    hikari_warn!(
                        "OBJ: Ignored {} unsupported lines in '{}'",
                        model.ignored,
                        path.to_string_lossy()
                    );
                }
                model.to_group(&mut self.scene, &material)?
            }
        };

        self.scene
            .set_transform(id, build_transform(&desc.transform)?)?;
        // Children already carry their own materials
        *self.scene.material_mut(id)? = material;

        Ok(id)
    }
}

impl SceneDescription {
    /// Parses a scene description from YAML.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Builds the described world and camera, resolving relative paths against `base_dir`.
    pub fn build(&self, base_dir: &Path) -> Result<(World, Camera)> {
        let mut builder = Builder {
            scene: Scene::new(),
            patterns: HashMap::new(),
            base_dir,
        };
        for (name, desc) in &self.patterns {
            builder.patterns.insert(name.clone(), build_pattern(desc)?);
        }

        let default_material = Material::default();
        for desc in &self.objects {
            let id = builder.object(desc, &default_material)?;
            builder.scene.add_object(id)?;
        }

        let lights = self
            .lights
            .iter()
            .map(|l| {
                Arc::new(PointLight::new(point(l.position), spectrum(l.intensity))) as Arc<dyn Light>
            })
            .collect();

        let mut world = World::new(builder.scene, lights);
        if let Some(bg) = self.background {
            world.background = spectrum(bg);
        }

        let c = &self.camera;
        let camera = Camera::new(c.width, c.height, c.field_of_view)?
            .with_transform(view_transform(point(c.from), point(c.to), vector(c.up))?);

        Ok((world, camera))
    }
}

/// Loads the YAML scene in `path`.
pub fn load(path: &Path) -> Result<(World, Camera)> {
    let load_start = Instant::now();

    let text = std::fs::read_to_string(path)?;
    let desc = SceneDescription::from_yaml(&text)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let ret = desc.build(base_dir)?;

    hikari_info!(
        "Scene: Loading '{}' took {:.2}s in total",
        path.to_string_lossy(),
        load_start.elapsed().as_secs_f32()
    );

    Ok(ret)
}
