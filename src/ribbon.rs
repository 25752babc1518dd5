//! Constant-width offset geometry around a sampled centerline.

use num_traits::Float;

use super::*;

/// Two offset rails displaced from a centerline polyline along its normals,
/// suitable for stroke/skeleton rendering either as two line strips or,
/// via [`Ribbon::triangulate`], as a filled triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon<T> {
    left: Vec<Point2<T>>,
    right: Vec<Point2<T>>,
    degenerate_tangents: usize,
}

impl<T> Ribbon<T>
where
    T: Float,
{
    /// Build the rails at perpendicular distance `offset` from `samples`.
    ///
    /// Tangents are central differences, so the first and last samples carry
    /// no rail vertices: rail index `i` belongs to `samples[i + 1]`. A
    /// near-zero difference (duplicate neighbors) reuses the last valid
    /// tangent instead of normalizing a zero vector; leading samples without
    /// any valid tangent yet are dropped. Both recoveries are counted in
    /// [`Ribbon::degenerate_tangents`].
    pub fn build(samples: &[Point2<T>], offset: T) -> Ribbon<T> {
        let rail_len = samples.len().saturating_sub(2);
        let mut left = Vec::with_capacity(rail_len);
        let mut right = Vec::with_capacity(rail_len);
        let mut degenerate_tangents = 0;
        let mut last_tangent: Option<Point2<T>> = None;

        for i in 1..samples.len().saturating_sub(1) {
            let tangent = match (samples[i + 1] - samples[i - 1]).normalize() {
                Some(tangent) => {
                    last_tangent = Some(tangent);
                    tangent
                }
                None => {
                    degenerate_tangents += 1;
                    log::trace!("zero-length tangent basis at sample {}, reusing previous", i);
                    match last_tangent {
                        Some(tangent) => tangent,
                        None => continue,
                    }
                }
            };

            let normal = tangent.perp();
            left.push(samples[i] + normal * offset);
            right.push(samples[i] - normal * offset);
        }

        Ribbon {
            left,
            right,
            degenerate_tangents,
        }
    }

    pub fn left(&self) -> &[Point2<T>] {
        &self.left
    }

    pub fn right(&self) -> &[Point2<T>] {
        &self.right
    }

    /// Number of vertex pairs on the rails.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// How many samples had no usable central-difference tangent.
    pub fn degenerate_tangents(&self) -> usize {
        self.degenerate_tangents
    }

    /// Split the quad strip between the rails into a triangle list with
    /// uniform winding, so a filled stroke renders without flipped faces.
    pub fn triangulate(&self) -> Vec<[Point2<T>; 3]> {
        if self.left.is_empty() {
            return Vec::new();
        }
        let mut triangles = Vec::with_capacity(2 * (self.left.len() - 1));
        for i in 0..self.left.len() - 1 {
            triangles.push([self.left[i], self.right[i], self.left[i + 1]]);
            triangles.push([self.left[i + 1], self.right[i], self.right[i + 1]]);
        }
        triangles
    }
}
