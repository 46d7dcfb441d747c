use crate::interaction::SurfaceInteraction;

/// Schlick's approximation of the Fresnel reflectance at `si`.
///
/// Returns `1` under total internal reflection.
pub fn schlick(si: &SurfaceInteraction) -> f64 {
    let mut cos = si.wo.dot_n(si.n);

    if si.n1 > si.n2 {
        let n_ratio = si.n1 / si.n2;
        let sin2_t = n_ratio * n_ratio * (1.0 - cos * cos);
        if sin2_t > 1.0 {
            return 1.0;
        }
        cos = (1.0 - sin2_t).sqrt();
    }

    let r0 = ((si.n1 - si.n2) / (si.n1 + si.n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos).powi(5)
}
