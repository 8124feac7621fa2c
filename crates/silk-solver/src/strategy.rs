//! Force accumulation strategies.
//!
//! Both strategies apply the same per-spring forces; they differ only in
//! which side drives the loop. Spring-local walks the spring list and
//! scatters into both endpoints. Point-local walks the points and gathers
//! from each point's adjacency list. Because adjacency lists are built in
//! spring order, both sum contributions in the same order.

use serde::{Deserialize, Serialize};
use silk_math::Vec3;

use crate::point_mass::PointMass;
use crate::spring::{DampingModel, EndpointRole, Spring};

/// Which side of the network drives force accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceAccumulation {
    /// Iterate springs; add each spring's force to both endpoints.
    #[default]
    SpringLocal,
    /// Iterate points; sum the forces of every attached spring.
    PointLocal,
}

impl ForceAccumulation {
    /// Adds every spring's (already updated) force into its endpoints'
    /// internal force accumulators.
    pub fn apply(self, points: &mut [PointMass], springs: &[Spring], model: DampingModel) {
        match self {
            ForceAccumulation::SpringLocal => {
                for spring in springs {
                    let a = spring.endpoint_a().index();
                    let b = spring.endpoint_b().index();
                    let force_a = spring.force_on(EndpointRole::A, points[a].velocity(), model);
                    let force_b = spring.force_on(EndpointRole::B, points[b].velocity(), model);
                    points[a].accumulate_internal_force(force_a);
                    points[b].accumulate_internal_force(force_b);
                }
            }
            ForceAccumulation::PointLocal => {
                for point in points.iter_mut() {
                    let velocity = point.velocity();
                    let total = point.springs().iter().fold(Vec3::ZERO, |acc, link| {
                        acc + springs[link.spring.index()].force_on(link.role, velocity, model)
                    });
                    point.accumulate_internal_force(total);
                }
            }
        }
    }
}
