mod csg;
pub mod demo;
pub mod description;
pub mod obj;

pub use csg::CsgOp;

use crate::{
    error::{Error, Result},
    intersection::{sort_intersections, Intersection},
    materials::Material,
    math::{Normal, Point2, Point3, Ray, Transform},
    shapes::Shape,
};

/// Handle to a node in a [`Scene`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u32);

impl ShapeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
pub enum NodeKind {
    Primitive(Box<dyn Shape>),
    /// Owns its children
    Group(Vec<ShapeId>),
    /// Owns both operands
    Csg {
        op: CsgOp,
        left: ShapeId,
        right: ShapeId,
    },
}

/// A shape or a container of shapes with its own object space
#[derive(Debug)]
pub struct Node {
    name: Option<String>,
    transform: Transform<f64>,
    material: Material,
    parent: Option<ShapeId>,
    kind: NodeKind,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            transform: Transform::default(),
            material: Material::default(),
            parent: None,
            kind,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Object-to-parent transform
    pub fn transform(&self) -> &Transform<f64> {
        &self.transform
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The group or CSG node this node is attached to.
    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}

/// Arena of shape trees
///
/// Groups and CSG nodes own their children. Children link back to their parent by id so that
/// points and normals can be moved between world and object space through any number of
/// nested transforms. Only nodes added with [`Scene::add_object`] are visible to rays.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    objects: Vec<ShapeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> ShapeId {
        let id = ShapeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Adds a detached primitive.
    pub fn add<S>(&mut self, shape: S) -> ShapeId
    where
        S: Shape + 'static,
    {
        self.add_boxed(Box::new(shape))
    }

    /// Adds a detached primitive.
    pub fn add_boxed(&mut self, shape: Box<dyn Shape>) -> ShapeId {
        self.push(Node::new(NodeKind::Primitive(shape)))
    }

    /// Adds a detached empty group.
    pub fn add_group(&mut self) -> ShapeId {
        self.push(Node::new(NodeKind::Group(Vec::new())))
    }

    /// Adds a detached empty group called `name`.
    pub fn add_named_group(&mut self, name: &str) -> ShapeId {
        let id = self.add_group();
        self.nodes[id.index()].name = Some(name.to_string());
        id
    }

    /// Adds a detached CSG node that takes ownership of `left` and `right`.
    ///
    /// Both operands have to be detached and should be closed solids: the inside/outside
    /// tracking assumes every operand reports entries and exits in pairs.
    pub fn add_csg(&mut self, op: CsgOp, left: ShapeId, right: ShapeId) -> Result<ShapeId> {
        self.check_detached(left)?;
        self.check_detached(right)?;
        if left == right {
            return Err(Error::AlreadyAttached(right));
        }

        let id = self.push(Node::new(NodeKind::Csg { op, left, right }));
        self.nodes[left.index()].parent = Some(id);
        self.nodes[right.index()].parent = Some(id);
        Ok(id)
    }

    /// Moves `child` under `group`.
    pub fn add_child(&mut self, group: ShapeId, child: ShapeId) -> Result<()> {
        self.children_mut(group)?;
        self.check_detached(child)?;
        if self.is_ancestor_or_self(child, group) {
            return Err(Error::Cycle {
                parent: group,
                child,
            });
        }

        self.children_mut(group)?.push(child);
        self.nodes[child.index()].parent = Some(group);
        Ok(())
    }

    /// Detaches `child` from `group`.
    pub fn remove_child(&mut self, group: ShapeId, child: ShapeId) -> Result<()> {
        self.node(child)?;
        let children = self.children_mut(group)?;
        match children.iter().position(|&c| c == child) {
            Some(i) => {
                children.remove(i);
                self.nodes[child.index()].parent = None;
                Ok(())
            }
            None => Err(Error::InvalidArgument(format!(
                "{:?} is not a child of {:?}",
                child, group
            ))),
        }
    }

    /// Makes a detached node a top-level object.
    pub fn add_object(&mut self, id: ShapeId) -> Result<()> {
        self.check_detached(id)?;
        self.objects.push(id);
        Ok(())
    }

    /// Returns the top-level objects.
    pub fn objects(&self) -> &[ShapeId] {
        &self.objects
    }

    pub fn node(&self, id: ShapeId) -> Result<&Node> {
        self.nodes.get(id.index()).ok_or(Error::UnknownShape(id))
    }

    fn node_mut(&mut self, id: ShapeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.index()).ok_or(Error::UnknownShape(id))
    }

    pub fn transform(&self, id: ShapeId) -> Result<&Transform<f64>> {
        Ok(&self.node(id)?.transform)
    }

    pub fn set_transform(&mut self, id: ShapeId, transform: Transform<f64>) -> Result<()> {
        self.node_mut(id)?.transform = transform;
        Ok(())
    }

    pub fn material(&self, id: ShapeId) -> Result<&Material> {
        Ok(&self.node(id)?.material)
    }

    /// Returns the material of a single node, containers don't propagate edits.
    pub fn material_mut(&mut self, id: ShapeId) -> Result<&mut Material> {
        Ok(&mut self.node_mut(id)?.material)
    }

    /// Sets the material of `id` and everything below it.
    pub fn set_material(&mut self, id: ShapeId, material: Material) -> Result<()> {
        for child in self.children(id)? {
            self.set_material(child, material.clone())?;
        }
        self.node_mut(id)?.material = material;
        Ok(())
    }

    pub fn parent(&self, id: ShapeId) -> Result<Option<ShapeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Returns the children of a group or the operands of a CSG node.
    pub fn children(&self, id: ShapeId) -> Result<Vec<ShapeId>> {
        Ok(match &self.node(id)?.kind {
            NodeKind::Primitive(_) => Vec::new(),
            NodeKind::Group(children) => children.clone(),
            NodeKind::Csg { left, right, .. } => vec![*left, *right],
        })
    }

    fn children_mut(&mut self, group: ShapeId) -> Result<&mut Vec<ShapeId>> {
        match &mut self.node_mut(group)?.kind {
            NodeKind::Group(children) => Ok(children),
            _ => Err(Error::WrongShapeKind(group, "group")),
        }
    }

    fn check_detached(&self, id: ShapeId) -> Result<()> {
        if self.node(id)?.parent.is_some() || self.objects.contains(&id) {
            Err(Error::AlreadyAttached(id))
        } else {
            Ok(())
        }
    }

    fn is_ancestor_or_self(&self, ancestor: ShapeId, id: ShapeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.nodes[c.index()].parent;
        }
        false
    }

    /// Checks if `shape` is `container` or anywhere below it.
    pub fn includes(&self, container: ShapeId, shape: ShapeId) -> bool {
        if container == shape {
            return true;
        }
        match self.nodes.get(container.index()).map(|n| &n.kind) {
            Some(NodeKind::Group(children)) => children.iter().any(|&c| self.includes(c, shape)),
            Some(NodeKind::Csg { left, right, .. }) => {
                self.includes(*left, shape) || self.includes(*right, shape)
            }
            _ => false,
        }
    }

    /// Maps a world space point into the object space of `id`, outermost transform first.
    ///
    /// Panics if `id` doesn't belong to this scene, use [`Scene::node`] to check foreign ids.
    pub fn world_to_object(&self, id: ShapeId, p: Point3<f64>) -> Point3<f64> {
        let node = &self.nodes[id.index()];
        let p = match node.parent {
            Some(parent) => self.world_to_object(parent, p),
            None => p,
        };
        node.transform.m_inv() * p
    }

    /// Maps an object space normal of `id` into world space, innermost transform first.
    ///
    /// Panics if `id` doesn't belong to this scene.
    pub fn normal_to_world(&self, id: ShapeId, n: Normal<f64>) -> Normal<f64> {
        let node = &self.nodes[id.index()];
        let n = (&node.transform * n).normalized();
        match node.parent {
            Some(parent) => self.normal_to_world(parent, n),
            None => n,
        }
    }

    /// Returns the world space normal of the primitive `id` at the world space point `p`.
    pub fn normal_at(
        &self,
        id: ShapeId,
        p: Point3<f64>,
        uv: Option<Point2<f64>>,
        eps: f64,
    ) -> Result<Normal<f64>> {
        match &self.node(id)?.kind {
            NodeKind::Primitive(shape) => {
                let local_p = self.world_to_object(id, p);
                let local_n = shape.normal(local_p, uv, eps);
                Ok(self.normal_to_world(id, local_n))
            }
            _ => Err(Error::WrongShapeKind(id, "primitive")),
        }
    }

    /// Appends the hits of `ray`, given in the parent space of `id`, on `id` to `xs`.
    ///
    /// Only the hits of CSG nodes come out sorted. Ids from other scenes have no hits.
    pub fn intersect(&self, id: ShapeId, ray: &Ray<f64>, eps: f64, xs: &mut Vec<Intersection>) {
        let node = match self.nodes.get(id.index()) {
            Some(node) => node,
            None => return,
        };
        let local_ray = node.transform.m_inv() * ray;

        match &node.kind {
            NodeKind::Primitive(shape) => {
                xs.extend(shape.intersect(&local_ray, eps).into_iter().map(|hit| {
                    Intersection {
                        t: hit.t,
                        shape: id,
                        uv: hit.uv,
                    }
                }));
            }
            NodeKind::Group(children) => {
                for &child in children {
                    self.intersect(child, &local_ray, eps, xs);
                }
            }
            NodeKind::Csg { op, left, right } => {
                let mut child_xs = Vec::new();
                self.intersect(*left, &local_ray, eps, &mut child_xs);
                self.intersect(*right, &local_ray, eps, &mut child_xs);
                sort_intersections(&mut child_xs);
                xs.extend(self.filter_csg(*op, *left, &child_xs));
            }
        }
    }

    /// Keeps the intersections in `xs` that lie on the surface of the CSG node `csg`.
    ///
    /// `xs` has to be sorted.
    pub fn filter_intersections(
        &self,
        csg: ShapeId,
        xs: &[Intersection],
    ) -> Result<Vec<Intersection>> {
        match self.node(csg)?.kind {
            NodeKind::Csg { op, left, .. } => Ok(self.filter_csg(op, left, xs)),
            _ => Err(Error::WrongShapeKind(csg, "CSG")),
        }
    }
}
