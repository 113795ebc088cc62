use cgmath::prelude::*;
use rand::prelude::*;
use rayon::prelude::*;

/// Viewports narrower than this get the sparse particle set.
pub const NARROW_VIEWPORT: f32 = 768.0;
pub const SPARSE_PARTICLE_COUNT: usize = 40;
pub const DENSE_PARTICLE_COUNT: usize = 80;

pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const POINTER_DISTANCE: f32 = 200.0;
pub const REPULSION_DISTANCE: f32 = 100.0;
pub const REPULSION_IMPULSE: f32 = 0.02;

pub const CONNECTION_WIDTH: f32 = 0.5;
pub const POINTER_LINK_WIDTH: f32 = 0.8;

const MAX_INITIAL_SPEED: f32 = 0.25;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 3.0;

/// Where the pointer is assumed to be before the first move event.
pub const POINTER_SENTINEL: cgmath::Vector2<f32> = cgmath::Vector2 {
    x: -1000.0,
    y: -1000.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: cgmath::Vector2<f32>,
    pub velocity: cgmath::Vector2<f32>,
    pub radius: f32,
}

/// A line segment to paint, with its opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: cgmath::Vector2<f32>,
    pub to: cgmath::Vector2<f32>,
    pub alpha: f32,
    pub width: f32,
}

pub struct ParticleField {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
    pub pointer: cgmath::Vector2<f32>,
}

/// Opacity of a line between two points `distance` apart, or `None` when the
/// points are too far apart to be connected.
pub fn link_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

pub fn particle_count(width: f32) -> usize {
    if width < NARROW_VIEWPORT {
        SPARSE_PARTICLE_COUNT
    } else {
        DENSE_PARTICLE_COUNT
    }
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, &mut thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        let particles = (0..particle_count(width))
            .map(|_| Particle {
                position: cgmath::vec2(
                    sample(rng, 0.0, width),
                    sample(rng, 0.0, height),
                ),
                velocity: cgmath::vec2(
                    rng.gen_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
                    rng.gen_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
                ),
                radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
            })
            .collect();

        Self {
            width,
            height,
            particles,
            pointer: POINTER_SENTINEL,
        }
    }

    pub fn set_pointer(&mut self, pointer: cgmath::Vector2<f32>) {
        self.pointer = pointer;
    }

    /// Bounds change only; particles outside the new bounds drift back in on
    /// their own.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advances every particle by one display frame.
    pub fn step(&mut self) {
        let (width, height, pointer) = (self.width, self.height, self.pointer);
        for particle in self.particles.iter_mut() {
            particle.position += particle.velocity;
            repel(particle, pointer);
            apply_boundary_conditions(particle, width, height);
        }
    }

    /// Lines between every pair of particles closer than
    /// [`CONNECTION_DISTANCE`].
    pub fn links(&self) -> Vec<Link> {
        let particles: &[Particle] = &self.particles;
        (0..particles.len())
            .into_par_iter()
            .flat_map_iter(move |i| {
                let a = particles[i].position;
                particles[i + 1..].iter().filter_map(move |other| {
                    let b = other.position;
                    link_alpha(a.distance(b), CONNECTION_DISTANCE).map(|alpha| Link {
                        from: a,
                        to: b,
                        alpha,
                        width: CONNECTION_WIDTH,
                    })
                })
            })
            .collect()
    }

    /// Lines from every particle closer than [`POINTER_DISTANCE`] to the
    /// pointer.
    pub fn pointer_links(&self) -> Vec<Link> {
        self.particles
            .iter()
            .filter_map(|particle| {
                link_alpha(particle.position.distance(self.pointer), POINTER_DISTANCE).map(
                    |alpha| Link {
                        from: particle.position,
                        to: self.pointer,
                        alpha,
                        width: POINTER_LINK_WIDTH,
                    },
                )
            })
            .collect()
    }
}

/// Pushes a particle directly away from the pointer when it is close.
fn repel(particle: &mut Particle, pointer: cgmath::Vector2<f32>) {
    let away = particle.position - pointer;
    if away.magnitude() < REPULSION_DISTANCE {
        let angle = away.y.atan2(away.x);
        particle.velocity += cgmath::vec2(angle.cos(), angle.sin()) * REPULSION_IMPULSE;
    }
}

fn apply_boundary_conditions(particle: &mut Particle, width: f32, height: f32) {
    // Only flip a component that still points outward, so a particle that
    // is already heading back in is never turned around again.
    macro_rules! handle_boundary {
        ($coord:expr, $vel:expr, $max:expr) => {
            if ($coord < 0.0 && $vel < 0.0) || ($coord > $max && $vel > 0.0) {
                $vel = -$vel;
            }
        };
    }

    handle_boundary!(particle.position.x, particle.velocity.x, width);
    handle_boundary!(particle.position.y, particle.velocity.y, height);
}

fn sample<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;

    fn field(width: f32, height: f32, seed: u64) -> ParticleField {
        ParticleField::with_rng(width, height, &mut StdRng::seed_from_u64(seed))
    }

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            position: cgmath::vec2(x, y),
            velocity: cgmath::vec2(0.0, 0.0),
            radius: 1.0,
        }
    }

    #[test]
    fn count_depends_on_width() {
        assert_eq!(field(767.0, 600.0, 1).particles.len(), 40);
        assert_eq!(field(768.0, 600.0, 1).particles.len(), 80);
        assert_eq!(field(1920.0, 1080.0, 1).particles.len(), 80);
    }

    #[test]
    fn seeded_inside_bounds() {
        let field = field(1024.0, 768.0, 7);
        for p in &field.particles {
            assert!((0.0..1024.0).contains(&p.position.x));
            assert!((0.0..768.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= MAX_INITIAL_SPEED);
            assert!(p.velocity.y.abs() <= MAX_INITIAL_SPEED);
            assert!((MIN_RADIUS..MAX_RADIUS).contains(&p.radius));
        }
        assert_eq!(field.pointer, POINTER_SENTINEL);
    }

    #[test]
    fn stays_within_one_frame_of_bounds() {
        for &(w, h) in &[(300.0, 200.0), (1280.0, 720.0), (50.0, 50.0)] {
            let mut field = field(w, h, 42);
            for _ in 0..5_000 {
                field.step();
                let epsilon = field
                    .particles
                    .iter()
                    .map(|p| p.velocity.x.abs().max(p.velocity.y.abs()))
                    .fold(0.0f32, f32::max);
                for p in &field.particles {
                    assert!(p.position.x >= -epsilon && p.position.x <= w + epsilon);
                    assert!(p.position.y >= -epsilon && p.position.y <= h + epsilon);
                }
            }
        }
    }

    #[test]
    fn stays_in_bounds_with_lingering_pointer() {
        let mut field = field(400.0, 300.0, 3);
        field.set_pointer(cgmath::vec2(395.0, 150.0));
        let mut max_speed = field
            .particles
            .iter()
            .map(|p| p.velocity.x.abs().max(p.velocity.y.abs()))
            .fold(0.0f32, f32::max);
        for _ in 0..2_000 {
            field.step();
            for p in &field.particles {
                max_speed = max_speed.max(p.velocity.x.abs()).max(p.velocity.y.abs());
            }
            for p in &field.particles {
                assert!(p.position.x >= -max_speed && p.position.x <= 400.0 + max_speed);
                assert!(p.position.y >= -max_speed && p.position.y <= 300.0 + max_speed);
            }
        }
    }

    #[test]
    fn reflects_at_the_edge() {
        let mut field = field(100.0, 100.0, 0);
        field.particles = vec![Particle {
            position: cgmath::vec2(99.9, 50.0),
            velocity: cgmath::vec2(0.2, 0.0),
            radius: 1.0,
        }];
        field.step();
        assert!(field.particles[0].position.x > 100.0);
        assert!(field.particles[0].velocity.x < 0.0);
        field.step();
        assert!(field.particles[0].position.x < 100.0);
    }

    #[test]
    fn reflects_outward_only_and_repels_away() {
        let mut outside = Particle {
            position: cgmath::vec2(-5.0, 120.0),
            velocity: cgmath::vec2(0.1, 0.1),
            radius: 1.0,
        };
        apply_boundary_conditions(&mut outside, 100.0, 100.0);
        assert_eq!(outside.velocity, cgmath::vec2(0.1, -0.1));

        let mut near = particle_at(40.0, 30.0);
        repel(&mut near, cgmath::vec2(40.0, 0.0));
        assert_relative_eq!(near.velocity.x, 0.0);
        assert_relative_eq!(near.velocity.y, REPULSION_IMPULSE);
    }

    #[test]
    fn resize_keeps_particles() {
        let mut field = field(1000.0, 800.0, 9);
        let before = field.particles.clone();
        field.resize(500.0, 400.0);
        assert_eq!(field.particles, before);
        assert_eq!((field.width, field.height), (500.0, 400.0));
    }

    #[test]
    fn link_opacity_decays_linearly() {
        let mut field = field(1000.0, 1000.0, 0);
        field.particles = vec![particle_at(100.0, 100.0), particle_at(175.0, 100.0)];
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_relative_eq!(links[0].alpha, 0.5);
        assert_relative_eq!(links[0].width, CONNECTION_WIDTH);

        let mut last = 1.0;
        for d in [0.0, 10.0, 50.0, 100.0, 149.0] {
            let alpha = link_alpha(d, CONNECTION_DISTANCE).unwrap();
            assert_relative_eq!(alpha, 1.0 - d / CONNECTION_DISTANCE);
            assert!(alpha <= last);
            last = alpha;
        }
        assert_eq!(link_alpha(150.0, CONNECTION_DISTANCE), None);
        assert_eq!(link_alpha(300.0, CONNECTION_DISTANCE), None);
    }

    #[test]
    fn no_link_at_threshold() {
        let mut field = field(1000.0, 1000.0, 0);
        field.particles = vec![particle_at(0.0, 0.0), particle_at(150.0, 0.0)];
        assert!(field.links().is_empty());
    }

    #[test]
    fn links_cover_every_close_pair_once() {
        let field = field(400.0, 400.0, 11);
        let links = field.links();
        let mut expected = 0;
        for (i, a) in field.particles.iter().enumerate() {
            for b in &field.particles[i + 1..] {
                if a.position.distance(b.position) < CONNECTION_DISTANCE {
                    expected += 1;
                }
            }
        }
        assert_eq!(links.len(), expected);
        assert!(links.iter().all(|l| (0.0..=1.0).contains(&l.alpha)));
    }

    #[test]
    fn pointer_links_and_repulsion() {
        let mut field = field(1000.0, 1000.0, 0);
        field.particles = vec![
            particle_at(550.0, 500.0),
            particle_at(650.0, 500.0),
            particle_at(900.0, 900.0),
        ];
        field.set_pointer(cgmath::vec2(500.0, 500.0));

        let links = field.pointer_links();
        assert_eq!(links.len(), 2);
        assert_relative_eq!(links[0].alpha, 0.75);
        assert_relative_eq!(links[1].alpha, 0.25);
        assert_eq!(links[0].to, field.pointer);

        field.step();
        // Only the particle inside the repulsion radius is pushed, directly away.
        assert_relative_eq!(field.particles[0].velocity.x, REPULSION_IMPULSE);
        assert_relative_eq!(field.particles[0].velocity.y, 0.0);
        assert_eq!(field.particles[1].velocity, cgmath::vec2(0.0, 0.0));
        assert_eq!(field.particles[2].velocity, cgmath::vec2(0.0, 0.0));
    }

    #[test]
    fn sentinel_pointer_draws_nothing() {
        let field = field(1280.0, 720.0, 5);
        assert!(field.pointer_links().is_empty());
    }
}
