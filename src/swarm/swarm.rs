use crate::{
    core::{utils::SampleFloat, Bounds, Point},
    traits::CostFunction,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::VecDeque};

/// Methods to choose the initial positions of the particles in a swarm.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum PositionInitializer {
    /// Each position is drawn uniformly from the feasible box, one independent draw per
    /// dimension.
    #[default]
    Random,
    /// Positions are taken verbatim from the given list, one per particle in order, falling
    /// back to uniform random sampling once the list is exhausted. Seed positions are trusted
    /// as-is and are not checked against the bounds; entries beyond the swarm size are
    /// ignored. A seeded particle consumes no random draws for its position.
    Seeded(Vec<DVector<Float>>),
}

impl PositionInitializer {
    fn queue(&self) -> VecDeque<DVector<Float>> {
        match self {
            Self::Random => VecDeque::new(),
            Self::Seeded(positions) => positions.iter().cloned().collect(),
        }
    }
}

/// The sign policy applied to the randomly drawn initial velocity of a particle.
///
/// Initial velocity magnitudes are drawn per dimension, uniformly in `[0, width_i]` where
/// `width_i` is the feasible interval width of dimension `i`. The policy decides how those
/// magnitudes are signed.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum VelocitySign {
    /// One sign is drawn per particle and applied uniformly across all of its velocity
    /// dimensions, so every initial velocity points into a single orthant.
    #[default]
    Shared,
    /// An independent sign is drawn for every velocity dimension (canonical PSO).
    PerDimension,
}

impl VelocitySign {
    /// Draws an initial velocity for one particle: per-dimension magnitudes in `[0, width_i]`,
    /// signed according to the policy.
    pub fn init_velocity(&self, bounds: &Bounds, rng: &mut Rng) -> DVector<Float> {
        let width = bounds.width();
        let mut velocity = DVector::from_iterator(
            bounds.dimension(),
            width.iter().map(|&w_i| rng.range(0.0, w_i)),
        );
        match self {
            Self::Shared => velocity *= rng.sign(),
            Self::PerDimension => {
                for v_i in velocity.iter_mut() {
                    *v_i *= rng.sign();
                }
            }
        }
        velocity
    }
}

/// A particle with a position, velocity, and best known position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Particle {
    /// The current position of the particle and its fitness.
    pub position: Point,
    /// The current per-dimension displacement applied each iteration.
    pub velocity: DVector<Float>,
    /// The best position this particle has ever visited (by minimum fitness). Holds its own
    /// copy of the position; it never aliases [`Particle::position`].
    pub best: Point,
}

impl Particle {
    /// Creates a new particle at the given position with the given velocity, evaluating the
    /// cost function there. The starting position doubles as the particle's initial best.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn new<U, E>(
        position: DVector<Float>,
        velocity: DVector<Float>,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E> {
        let mut position = Point::new(position);
        position.evaluate(func, user_data)?;
        Ok(Self {
            best: position.clone(),
            position,
            velocity,
        })
    }
    /// Moves the particle by its velocity, clamps the new position into the bounds, and
    /// re-evaluates the cost function there.
    ///
    /// Clamping projects each out-of-range coordinate onto the nearest boundary value; the
    /// velocity is not reflected or damped on a boundary hit.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn update_position<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
        bounds: &Bounds,
    ) -> Result<(), E> {
        let mut x = &self.position.x + &self.velocity;
        bounds.clamp(&mut x);
        self.position.set_position(x);
        self.position.evaluate(func, user_data)
    }
    /// Compares two particles by their best fitness.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.best.total_cmp(&other.best)
    }
}

/// A swarm of particles together with the best point any of them has visited.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Swarm {
    /// The particles in the swarm.
    pub particles: Vec<Particle>,
    /// The best position and fitness seen across all particles and all iterations.
    pub best: Point,
}

impl Swarm {
    /// Populates the swarm with `n_particles` particles, in index order, using the given
    /// position initializer and velocity sign policy, then records the global best.
    ///
    /// The global best is seeded from particle 0 and replaced by any strictly lower personal
    /// best found while scanning the remaining particles in order.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    ///
    /// # Panics
    ///
    /// This method panics if `n_particles` is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize<U, E>(
        &mut self,
        rng: &mut Rng,
        bounds: &Bounds,
        n_particles: usize,
        position_initializer: &PositionInitializer,
        velocity_sign: VelocitySign,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        assert!(n_particles >= 1, "swarm must contain at least one particle");
        let mut seeds = position_initializer.queue();
        self.particles = (0..n_particles)
            .map(|_| {
                let position = seeds
                    .pop_front()
                    .unwrap_or_else(|| bounds.random_position(rng));
                let velocity = velocity_sign.init_velocity(bounds, rng);
                Particle::new(position, velocity, func, user_data)
            })
            .collect::<Result<Vec<Particle>, E>>()?;
        self.best = self.particles[0].best.clone();
        self.track_bests();
        Ok(())
    }
    /// The sequential best-tracking pass: updates each particle's personal best (position and
    /// fitness together) from its current point, then the global best from the personal bests,
    /// in fixed particle-index order.
    ///
    /// All comparisons are strict, so on an exact tie the earlier particle keeps the record.
    /// Every adoption clones the winning point.
    pub fn track_bests(&mut self) {
        for particle in &mut self.particles {
            if particle.position.total_cmp(&particle.best) == Ordering::Less {
                particle.best = particle.position.clone();
            }
            if particle.best.total_cmp(&self.best) == Ordering::Less {
                self.best = particle.best.clone();
            }
        }
    }
    /// Checks that every particle's position lies inside the given bounds.
    pub fn is_in_bounds(&self, bounds: &Bounds) -> bool {
        self.particles
            .iter()
            .all(|particle| bounds.contains(&particle.position.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::Sphere;
    use nalgebra::dvector;

    fn bounds() -> Bounds {
        Bounds::new(vec![-2.0, 0.0, 1.0], vec![2.0, 4.0, 9.0]).unwrap()
    }

    #[test]
    fn test_shared_sign_applies_one_sign_to_all_dimensions() {
        let bounds = bounds();
        let mut rng = Rng::with_seed(0);
        for _ in 0..50 {
            let v = VelocitySign::Shared.init_velocity(&bounds, &mut rng);
            assert!(v.iter().all(|&v_i| v_i >= 0.0) || v.iter().all(|&v_i| v_i <= 0.0));
        }
    }

    #[test]
    fn test_velocity_magnitudes_bounded_by_widths() {
        let bounds = bounds();
        let width = bounds.width();
        let mut rng = Rng::with_seed(1);
        for sign in [VelocitySign::Shared, VelocitySign::PerDimension] {
            for _ in 0..50 {
                let v = sign.init_velocity(&bounds, &mut rng);
                for (v_i, w_i) in v.iter().zip(width.iter()) {
                    assert!(v_i.abs() <= *w_i);
                }
            }
        }
    }

    #[test]
    fn test_seeded_positions_are_used_verbatim_then_fall_back() {
        let bounds = bounds();
        let mut rng = Rng::with_seed(0);
        let seeds = vec![dvector![0.5, 0.5, 2.0], dvector![-1.0, 3.0, 8.0]];
        let mut swarm = Swarm::default();
        swarm
            .initialize(
                &mut rng,
                &bounds,
                4,
                &PositionInitializer::Seeded(seeds.clone()),
                VelocitySign::Shared,
                &Sphere { n: 3 },
                &mut (),
            )
            .unwrap();
        assert_eq!(swarm.particles[0].position.x, seeds[0]);
        assert_eq!(swarm.particles[1].position.x, seeds[1]);
        // remaining particles come from the random fallback
        assert!(bounds.contains(&swarm.particles[2].position.x));
        assert!(bounds.contains(&swarm.particles[3].position.x));
    }

    #[test]
    fn test_initialize_sets_personal_and_global_bests() {
        let bounds = bounds();
        let mut rng = Rng::with_seed(3);
        let mut swarm = Swarm::default();
        swarm
            .initialize(
                &mut rng,
                &bounds,
                20,
                &PositionInitializer::Random,
                VelocitySign::Shared,
                &Sphere { n: 3 },
                &mut (),
            )
            .unwrap();
        let lowest = swarm
            .particles
            .iter()
            .map(|p| p.position.fx)
            .fold(Float::INFINITY, Float::min);
        assert_eq!(swarm.best.fx, lowest);
        for particle in &swarm.particles {
            assert_eq!(particle.best.fx, particle.position.fx);
            assert_eq!(particle.best.x, particle.position.x);
        }
    }

    #[test]
    fn test_track_bests_clones_instead_of_aliasing() {
        let mut swarm = Swarm::default();
        swarm.particles = vec![Particle {
            position: Point {
                x: dvector![1.0],
                fx: 1.0,
            },
            velocity: dvector![0.0],
            best: Point {
                x: dvector![2.0],
                fx: 4.0,
            },
        }];
        swarm.best = Point {
            x: dvector![2.0],
            fx: 4.0,
        };
        swarm.track_bests();
        assert_eq!(swarm.best.x, dvector![1.0]);
        // moving the particle afterwards must not drag the best records with it
        swarm.particles[0].position.x[0] = 7.0;
        assert_eq!(swarm.particles[0].best.x, dvector![1.0]);
        assert_eq!(swarm.best.x, dvector![1.0]);
    }

    #[test]
    fn test_ties_keep_the_earlier_record() {
        let mut swarm = Swarm::default();
        let tied = |x: Float| Particle {
            position: Point {
                x: dvector![x],
                fx: 1.0,
            },
            velocity: dvector![0.0],
            best: Point {
                x: dvector![x],
                fx: 1.0,
            },
        };
        swarm.particles = vec![tied(1.0), tied(2.0)];
        swarm.best = swarm.particles[0].best.clone();
        swarm.track_bests();
        assert_eq!(swarm.best.x, dvector![1.0]);
    }

    #[test]
    fn test_update_position_clamps_into_bounds() {
        let bounds = Bounds::new(vec![-1.0], vec![1.0]).unwrap();
        let mut particle = Particle::new(dvector![0.9], dvector![5.0], &Sphere { n: 1 }, &mut ())
            .unwrap();
        particle
            .update_position(&Sphere { n: 1 }, &mut (), &bounds)
            .unwrap();
        assert_eq!(particle.position.x, dvector![1.0]);
        assert_eq!(particle.position.fx, 1.0);
        // the velocity is untouched by the boundary hit
        assert_eq!(particle.velocity, dvector![5.0]);
    }
}
