use std::{path::Path, str::SplitWhitespace, time::Instant};

use itertools::Itertools;

use super::{Scene, ShapeId};
use crate::{
    error::{Error, Result},
    hikari_debug, hikari_info,
    materials::Material,
    math::{Normal, Point3},
    shapes::{SmoothTriangle, Triangle},
};

/// Triangle of a parsed model as indices into [`ObjModel::vertices`] and [`ObjModel::normals`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjTriangle {
    Flat([usize; 3]),
    Smooth {
        vertices: [usize; 3],
        normals: [usize; 3],
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjGroup {
    /// `None` for the faces before the first `g` statement.
    pub name: Option<String>,
    pub triangles: Vec<ObjTriangle>,
}

/// Geometry parsed from a Wavefront OBJ
#[derive(Clone, Debug, PartialEq)]
pub struct ObjModel {
    pub vertices: Vec<Point3<f64>>,
    pub normals: Vec<Normal<f64>>,
    /// The default group comes first.
    pub groups: Vec<ObjGroup>,
    /// Number of lines that were skipped as unsupported.
    pub ignored: usize,
}

impl ObjModel {
    pub fn default_group(&self) -> &ObjGroup {
        &self.groups[0]
    }

    pub fn group(&self, name: &str) -> Option<&ObjGroup> {
        self.groups
            .iter()
            .find(|g| g.name.as_deref() == Some(name))
    }

    /// Builds the model under a new detached group in `scene` using `material` for all faces.
    ///
    /// Every non-empty OBJ group becomes a child group of the returned one.
    pub fn to_group(&self, scene: &mut Scene, material: &Material) -> Result<ShapeId> {
        let root = scene.add_group();
        for group in self.groups.iter().filter(|g| !g.triangles.is_empty()) {
            let child = match &group.name {
                Some(name) => scene.add_named_group(name),
                None => scene.add_group(),
            };

            for &tri in &group.triangles {
                let id = match tri {
                    ObjTriangle::Flat([a, b, c]) => scene.add(Triangle::new(
                        self.vertices[a],
                        self.vertices[b],
                        self.vertices[c],
                    )),
                    ObjTriangle::Smooth { vertices, normals } => scene.add(SmoothTriangle::new(
                        self.vertices[vertices[0]],
                        self.vertices[vertices[1]],
                        self.vertices[vertices[2]],
                        self.normals[normals[0]],
                        self.normals[normals[1]],
                        self.normals[normals[2]],
                    )),
                };
                scene.add_child(child, id)?;
            }

            scene.add_child(root, child)?;
        }

        scene.set_material(root, material.clone())?;
        Ok(root)
    }
}

/// Parses OBJ source from `text`.
pub fn parse(text: &str) -> Result<ObjModel> {
    parse_named(text, "<obj>")
}

/// Loads and parses the OBJ in `path`.
pub fn load(path: &Path) -> Result<ObjModel> {
    let load_start = Instant::now();

    let text = std::fs::read_to_string(path)?;
    let model = parse_named(&text, &path.to_string_lossy())?;

    hikari_info!(
        "OBJ: Parsed {} vertices and {} groups in {:.2}s",
        model.vertices.len(),
        model.groups.len(),
        load_start.elapsed().as_secs_f32()
    );

    Ok(model)
}

struct Parser<'a> {
    name: &'a str,
    line: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, message: String) -> Error {
        Error::Parse {
            path: self.name.to_string(),
            line: self.line,
            message,
        }
    }

    fn parse_f64(&self, token: Option<&str>) -> Result<f64> {
        let token = token.ok_or_else(|| self.error("Expected a number".into()))?;
        token
            .parse()
            .map_err(|_| self.error(format!("Invalid number '{}'", token)))
    }

    fn parse_xyz(&self, tokens: &mut SplitWhitespace) -> Result<(f64, f64, f64)> {
        Ok((
            self.parse_f64(tokens.next())?,
            self.parse_f64(tokens.next())?,
            self.parse_f64(tokens.next())?,
        ))
    }

    /// Resolves a one-based or negative relative index into a list of `len` elements.
    fn parse_index(&self, token: &str, len: usize) -> Result<usize> {
        let i: i64 = token
            .parse()
            .map_err(|_| self.error(format!("Invalid index '{}'", token)))?;

        let resolved = if i > 0 { i - 1 } else { len as i64 + i };
        if i == 0 || resolved < 0 || resolved >= len as i64 {
            return Err(self.error(format!("Index {} is out of range for {} elements", i, len)));
        }
        Ok(resolved as usize)
    }

    /// Parses a `v`, `v/vt`, `v//vn` or `v/vt/vn` face reference.
    fn parse_ref(
        &self,
        token: &str,
        vertex_count: usize,
        normal_count: usize,
    ) -> Result<(usize, Option<usize>)> {
        let mut parts = token.split('/');
        let v = self.parse_index(parts.next().unwrap_or(""), vertex_count)?;
        let _vt = parts.next();
        let n = match parts.next() {
            Some(n) if !n.is_empty() => Some(self.parse_index(n, normal_count)?),
            _ => None,
        };
        Ok((v, n))
    }
}

fn parse_named(text: &str, name: &str) -> Result<ObjModel> {
    let mut model = ObjModel {
        vertices: Vec::new(),
        normals: Vec::new(),
        groups: vec![ObjGroup::default()],
        ignored: 0,
    };
    let mut current_group = 0;

    let mut parser = Parser { name, line: 0 };
    for (i, line) in text.lines().enumerate() {
        parser.line = i + 1;

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let (x, y, z) = parser.parse_xyz(&mut tokens)?;
                model.vertices.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let (x, y, z) = parser.parse_xyz(&mut tokens)?;
                model.normals.push(Normal::new(x, y, z));
            }
            Some("f") => {
                let refs = tokens
                    .map(|t| parser.parse_ref(t, model.vertices.len(), model.normals.len()))
                    .collect::<Result<Vec<_>>>()?;
                if refs.len() < 3 {
                    return Err(parser.error(format!(
                        "Face needs at least 3 vertices, got {}",
                        refs.len()
                    )));
                }

                let smooth = refs.iter().all(|(_, n)| n.is_some());
                let (v0, n0) = refs[0];
                let triangles = &mut model.groups[current_group].triangles;
                for (&(v1, n1), &(v2, n2)) in refs[1..].iter().tuple_windows() {
                    let tri = match (smooth, n0, n1, n2) {
                        (true, Some(n0), Some(n1), Some(n2)) => ObjTriangle::Smooth {
                            vertices: [v0, v1, v2],
                            normals: [n0, n1, n2],
                        },
                        _ => ObjTriangle::Flat([v0, v1, v2]),
                    };
                    triangles.push(tri);
                }
            }
            Some("g") => {
                current_group = match tokens.next() {
                    // Unnamed groups fall back to the default one
                    None => 0,
                    Some(group_name) => match model
                        .groups
                        .iter()
                        .position(|g| g.name.as_deref() == Some(group_name))
                    {
                        Some(g) => g,
                        None => {
                            model.groups.push(ObjGroup {
                                name: Some(group_name.to_string()),
                                triangles: Vec::new(),
                            });
                            model.groups.len() - 1
                        }
                    },
                };
            }
            None => (),
            Some(_) => {
                hikari_debug!("OBJ: Ignoring line {} '{}'", parser.line, line);
                model.ignored += 1;
            }
        }
    }

    Ok(model)
}
