use crate::color::Color;
use crate::constants::black;
use crate::material::Material;
use crate::ray::Ray;
use crate::shape::shape::Shape;
use crate::tuple::Tuple;

// A point light: has no size and exists at single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> PointLight {
        PointLight {
            position,
            intensity,
        }
    }
}

// Given scene parameters, determine the lighting at a given point assuming
// the Phong model of lighting: the result color is the sum of colors produced
// by modeling ambient, diffuse and specular lighting.
pub fn phong_lighting(
    object: &dyn Shape,
    material: &Material,
    light: PointLight,
    point: Tuple,
    eye_vector: Tuple,
    surface_normal: Tuple,
    in_shadow: bool,
) -> Color {
    // mix the surface color with the light's color
    let material_color = match &material.pattern {
        Some(p) => p.color_at_object(point, object),
        None => material.color,
    };
    let effective_color = material_color * light.intensity;

    let ambient = effective_color * material.ambient;

    if in_shadow {
        return ambient;
    }

    let direction_point_to_light = (light.position - point).norm();
    let light_normal_cosine = direction_point_to_light.dot(surface_normal);

    let diffuse: Color;
    let specular: Color;
    // negative cosine indicates the light is behind the surface
    if light_normal_cosine < 0.0 {
        diffuse = black(); // black
        specular = black(); // black
    } else {
        diffuse = effective_color * material.diffuse * light_normal_cosine;
        let surface_reflection = Ray::reflect(-direction_point_to_light, surface_normal);
        let reflection_eye_cosine = surface_reflection.dot(eye_vector);
        // negative cosine indicates the light reflecting away from the eye
        if reflection_eye_cosine <= 0.0 {
            specular = black();
        } else {
            // Assumes microfacet normals are approximately Gaussian
            // https://en.wikipedia.org/wiki/Specular_highlight#Phong_distribution
            let factor = reflection_eye_cosine.powf(material.shininess);
            specular = light.intensity * material.specular * factor;
        }
    }

    // Add the three contributions together to get the final shading
    ambient + diffuse + specular
}
