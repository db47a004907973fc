use crate::color::Color;
use crate::constants::white;
use crate::constants::REFRACTION_VACUUM;
use crate::intersection::Intersection;
use crate::light::phong_lighting;
use crate::light::PointLight;
use crate::material::Material;
use crate::matrix::identity_4x4;
use crate::ray::Ray;
use crate::shape::shape::Shape;
use crate::shape::sphere::Sphere;
use crate::transformations::scaling;
use crate::tuple::Tuple;
use linked_hash_set::LinkedHashSet;
use std::cmp::Ordering::Equal;
use std::f32;

// TODO: book said no light by default, but that seems weird. We always have a light, otherwise we can't see anything! Plus using Option complicates/makes dangerous everything.
pub struct World {
	pub objects: Vec<Box<dyn Shape>>,
	pub light: Option<PointLight>,
}

impl World {
	pub fn new() -> World {
		World {
			objects: vec![],
			light: Option::None,
		}
	}
}

impl Default for World {
	fn default() -> Self {
		let mut m = Material::default();
		m.color = color!(0.8, 1.0, 0.6);
		m.diffuse = 0.7;
		m.specular = 0.2;
		let s1 = Sphere::build(identity_4x4(), m);
		let s2 = Sphere::build(scaling(0.5, 0.5, 0.5), Material::default());
		World {
			objects: vec![Box::new(s1), Box::new(s2)],
			light: Some(PointLight::new(point!(-10.0, 10.0, -10.0), white())),
		}
	}
}

impl World {
	pub fn intersect(&self, r: Ray) -> Vec<Intersection> {
		let mut intersections: Vec<Intersection> = (&self.objects)
			.iter()
			.map(|o| o.intersect(r))
			.flatten()
			.collect();
		intersections.sort_by(|i1, i2| i1.distance.partial_cmp(&i2.distance).unwrap_or(Equal));
		intersections
	}

	pub fn shade_hit(&self, comps: PrecomputedValues, remaining_recursive_steps: i16) -> Color {
		let surface_color = phong_lighting(
			comps.object,
			comps.object.material(),
			self.light.unwrap(),
			comps.over_point,
			comps.eye_vector,
			comps.surface_normal,
			self.is_shadowed(comps.over_point),
		);
		let reflected_color = self.reflected_color(&comps, remaining_recursive_steps);
		let refracted_color = self.refracted_color(&comps, remaining_recursive_steps);
		let material = comps.object.material();
		if material.reflective > 0.0 && material.transparency > 0.0 {
			let reflectance = schlick_reflectance(&comps);
			return surface_color
				+ reflected_color * reflectance
				+ refracted_color * (1.0 - reflectance);
		} else {
			return surface_color + reflected_color + refracted_color;
		}
	}

	pub fn color_at(&self, r: Ray, remaining_recursive_steps: i16) -> Color {
		let intersections = self.intersect(r);
		if intersections.is_empty() {
			color!(0, 0, 0)
		} else {
			match Intersection::hit(&intersections) {
				Some(hit) => {
					let comps = precompute_values(r, hit, &intersections);
					self.shade_hit(comps, remaining_recursive_steps)
				}
				None => color!(0, 0, 0),
			}
		}
	}

	pub fn is_shadowed(&self, point: Tuple) -> bool {
		// create a ray from a point to the light
		// if there's an intersection between the light and the point, then the point is in shadow
		let light_to_point_vector = self.light.unwrap().position - point;
		let distance = light_to_point_vector.magnitude();
		let direction = light_to_point_vector.norm();

		let r = Ray::new(point, direction);
		let intersections = self.intersect(r);

		let hit = Intersection::hit(&intersections);
		match hit {
			Some(i) => i.object.casts_shadow() && i.distance < distance,
			None => false,
		}
	}

	pub fn reflected_color(
		&self,
		comps: &PrecomputedValues,
		remaining_recursive_steps: i16,
	) -> Color {
		if comps.object.material().reflective == 0.0 || remaining_recursive_steps < 1 {
			color!(0, 0, 0)
		} else {
			let reflected_ray = Ray::new(comps.over_point, comps.reflection_vector);
			let c = self.color_at(reflected_ray, remaining_recursive_steps - 1);
			c * comps.object.material().reflective
		}
	}

	pub fn refracted_color(
		&self,
		comps: &PrecomputedValues,
		remaining_recursive_steps: i16,
	) -> Color {
		if comps.object.material().transparency == 0.0 || remaining_recursive_steps == 0 {
			// println!(
			// 	"transparency: {}, remaining: {}",
			// 	comps.object.material().transparency,
			// 	remaining_recursive_steps
			// );
			return color!(0, 0, 0);
		}
		let refracted = comps.refracted_angle_values();
		if refracted.sin2 > 1.0 {
			// println!("Total internal refraction!");
			return color!(0, 0, 0);
		} else {
			// use trig formula to get cosine(refracted)
			let cos_refracted = (1.0 - refracted.sin2).sqrt();
			let direction_refracted = comps.surface_normal
				* (refracted.n_ratio * refracted.cos_incoming - cos_refracted)
				- (comps.eye_vector * refracted.n_ratio);
			let ray_refracted = Ray::new(comps.under_point, direction_refracted);
			self.color_at(ray_refracted, remaining_recursive_steps - 1)
				* comps.object.material().transparency
		}
	}
}

pub struct PrecomputedValues<'a> {
	distance: f32,
	object: &'a dyn Shape,
	point: Tuple,
	eye_vector: Tuple,
	reflection_vector: Tuple,
	surface_normal: Tuple,
	inside: bool,
	// a point a tiny distance above the surface to avoid self-shadowing/salt-and-pepper noise, caused
	// by finite precision in floating point calculations
	over_point: Tuple,

	// used for calculating rays crossing material boundaries
	pub n1: f32,
	pub n2: f32,
	under_point: Tuple,
}
pub struct RefractedAngleValues {
	n_ratio: f32,
	cos_incoming: f32,
	// sine^2
	sin2: f32,
	is_total_internal_reflection: bool,
}

impl PrecomputedValues<'_> {
	// calculate sin^2 of the refracted ray's angle
	// Snell's law states that sin(incoming) / sin(refracted) = refraction index of
	// material 2 / refraction index of material 1.
	// Implementing as a method instead of a field because it is not always needed.
	fn refracted_angle_values(&self) -> RefractedAngleValues {
		let n_ratio = self.n1 / self.n2;
		let cos_incoming = self.eye_vector.dot(self.surface_normal);
		// sin^2(refracted angle) via trig identity
		let sin2 = n_ratio.powi(2) * (1.0 - cos_incoming.powi(2));
		RefractedAngleValues {
			n_ratio,
			cos_incoming,
			sin2,
			is_total_internal_reflection: sin2 > 1.0,
		}
	}
}

const SELF_INTERSECTION_AVOIDANCE_EPSILON: f32 = f32::EPSILON * 10000.0;

pub fn precompute_values<'a>(
	r: Ray,
	hit: &Intersection<'a>,
	intersections: &Vec<Intersection<'a>>,
) -> PrecomputedValues<'a> {
	let point = r.position(hit.distance);
	let mut surface_normal = hit.object.normal_at(&point);
	let eye_vector = -r.direction;
	let reflection_vector = Ray::reflect(r.direction, surface_normal);

	let inside;
	if surface_normal.dot(eye_vector) < 0.0 {
		// surface and eye are pointed in opposite directions, so the hit must be inside
		inside = true;
		surface_normal = -surface_normal;
	} else {
		inside = false;
	}

	let over_point = point + surface_normal * SELF_INTERSECTION_AVOIDANCE_EPSILON;
	let under_point = point - surface_normal * SELF_INTERSECTION_AVOIDANCE_EPSILON;

	// computing n1 and n2
	let mut n1 = f32::NAN;
	let mut n2 = f32::NAN;

	// objects containing the current hit, ordered outermost to innermost
	let mut containing_objects: LinkedHashSet<&'a dyn Shape> = LinkedHashSet::new();

	// classic formulation uses vacuum; could use REFRACTION_AIR instead, though the difference is small
	let default_refraction_index = REFRACTION_VACUUM;
	for i in intersections {
		if i == hit {
			n1 = match containing_objects.back() {
				Some(o) => o.material().refractive_index,
				None => default_refraction_index,
			};
		}
		// if the object is in containing_objects, then we are exiting it;
		// otherwise, we are entering it. Update accordingly.
		if !containing_objects.remove(&i.object) {
			containing_objects.insert(i.object);
		}

		if i == hit {
			n2 = match containing_objects.back() {
				Some(o) => o.material().refractive_index,
				None => default_refraction_index,
			};
			break;
		}
	}
	debug_assert!(!n1.is_nan());
	debug_assert!(!n2.is_nan());

	PrecomputedValues {
		// copy the intersection's properties, for convenience
		distance: hit.distance,
		object: hit.object,
		// precompute some useful values
		point,
		eye_vector,
		reflection_vector,
		surface_normal,
		inside,
		over_point,
		under_point,

		n1,
		n2,
	}
}

fn schlick_reflectance(comps: &PrecomputedValues) -> f32 {
	// TODO: this work may have already been done for refraction computations
	// first check if there is total internal reflectance
	// this value is replace if n1 > n2
	let mut cosine = comps.eye_vector.dot(comps.surface_normal);
	// total internal reflection can only occur if n1 > n2
	if comps.n1 > comps.n2 {
		let n = comps.n1 / comps.n2;
		let sin2_refracted = n.powi(2) * (1.0 - cosine.powi(2));
		if sin2_refracted > 1.0 {
			return 1.0;
		}
		// cosine via trig identity
		let cosine_refracted = (1.0 - sin2_refracted).sqrt();
		cosine = cosine_refracted;
	}
	let r0 = ((comps.n1 - comps.n2) / (comps.n1 + comps.n2)).powi(2);
	return r0 + (1.0 - r0) * (1.0 - cosine).powi(5);
}
