use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use super::{Scene, ShapeId};
use crate::intersection::Intersection;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CsgOp {
    Union,
    Intersection,
    Difference,
}

impl CsgOp {
    /// Checks if a hit is on the combined surface.
    ///
    /// `left_hit` tells which operand was hit, `in_left` and `in_right` whether the hit lies
    /// inside the left and right operand respectively.
    pub fn allows(self, left_hit: bool, in_left: bool, in_right: bool) -> bool {
        match self {
            CsgOp::Union => (left_hit && !in_right) || (!left_hit && !in_left),
            CsgOp::Intersection => (left_hit && in_right) || (!left_hit && in_left),
            CsgOp::Difference => (left_hit && !in_right) || (!left_hit && in_left),
        }
    }
}

impl Scene {
    pub(super) fn filter_csg(
        &self,
        op: CsgOp,
        left: ShapeId,
        xs: &[Intersection],
    ) -> Vec<Intersection> {
        let mut in_left = false;
        let mut in_right = false;

        let mut ret = Vec::new();
        for x in xs {
            let left_hit = self.includes(left, x.shape);
            if op.allows(left_hit, in_left, in_right) {
                ret.push(*x);
            }

            if left_hit {
                in_left = !in_left;
            } else {
                in_right = !in_right;
            }
        }
        ret
    }
}
