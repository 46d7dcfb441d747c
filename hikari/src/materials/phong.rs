use super::Material;
use crate::{
    lights::LightSample,
    math::{Normal, Spectrum, Vec3},
};

/// Evaluates the Phong model for one light.
///
/// `surface_colour` is the material's colour at the shaded point, `eye` and `n` are normalized.
/// Shadowed points only get the ambient term.
pub fn lighting(
    material: &Material,
    surface_colour: Spectrum<f64>,
    light: &LightSample,
    eye: Vec3<f64>,
    n: Normal<f64>,
    in_shadow: bool,
) -> Spectrum<f64> {
    let effective_colour = surface_colour * light.li;
    let ambient = effective_colour * material.ambient;
    if in_shadow {
        return ambient;
    }

    let l_dot_n = light.l.dot_n(n);
    if l_dot_n < 0.0 {
        // Light is behind the surface
        return ambient;
    }

    let diffuse = effective_colour * (material.diffuse * l_dot_n);

    let r = (-light.l).reflected(n);
    let r_dot_e = r.dot(eye);
    let specular = if r_dot_e <= 0.0 {
        Spectrum::zeros()
    } else {
        light.li * (material.specular * r_dot_e.powf(material.shininess))
    };

    ambient + diffuse + specular
}
