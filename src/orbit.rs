//! Geometry for the home screen: the rotating navigation ring, the avatar's
//! cursor-following pupils and the floating particle field.

use crate::language::Strings;
use crate::routes::Route;

pub const ORBIT_PERIOD_SECS: u32 = 38;
/// The stage is 360px on small screens and 440px from `md` up; the ring is
/// sized for the smaller one.
const ORBIT_STAGE_PX: f64 = 360.0;
const ORBIT_NODE_INSET_PX: f64 = 36.0;
pub const ORBIT_RADIUS_PX: f64 = ORBIT_STAGE_PX / 2.0 - ORBIT_NODE_INSET_PX;
pub const PUPIL_TRAVEL_PX: f64 = 5.0;
pub const PUPIL_CENTERED: &str = "translate(-50%, -50%)";
pub const PARTICLE_COUNT: usize = 18;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavItem {
    pub route: Route,
    pub angle_deg: f64,
    pub gradient: &'static str,
}

impl NavItem {
    pub fn label(&self, strings: &Strings) -> &'static str {
        match self.route {
            Route::Projects => strings.nav_projects,
            Route::About => strings.nav_about,
            Route::Contact => strings.nav_contact,
            Route::Resume => strings.nav_resume,
            Route::Home | Route::NotFound => strings.back,
        }
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        route: Route::Projects,
        angle_deg: -10.0,
        gradient: "radial-gradient(circle at 30% 30%, #60a5fa, #1e3a8a)",
    },
    NavItem {
        route: Route::About,
        angle_deg: 80.0,
        gradient: "radial-gradient(circle at 30% 30%, #34d399, #064e3b)",
    },
    NavItem {
        route: Route::Contact,
        angle_deg: 170.0,
        gradient: "radial-gradient(circle at 30% 30%, #fbbf24, #78350f)",
    },
    NavItem {
        route: Route::Resume,
        angle_deg: 260.0,
        gradient: "radial-gradient(circle at 30% 30%, #f472b6, #831843)",
    },
];

/// Places a node on the ring at `angle_deg` and counter-rotates it so the
/// node itself stays upright.
pub fn orbit_transform(angle_deg: f64) -> String {
    format!(
        "translate(-50%, -50%) rotate({angle_deg}deg) translateX({ORBIT_RADIUS_PX}px) rotate({}deg)",
        -angle_deg
    )
}

/// Offset of a pupil from its eye centre, pointing at the cursor with a fixed
/// travel distance.
pub fn pupil_offset(eye_center: (f64, f64), pointer: (f64, f64), max: f64) -> (f64, f64) {
    let dx = pointer.0 - eye_center.0;
    let dy = pointer.1 - eye_center.1;
    let angle = dy.atan2(dx);
    (angle.cos() * max, angle.sin() * max)
}

pub fn pupil_transform(offset: (f64, f64)) -> String {
    format!(
        "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px))",
        offset.0, offset.1
    )
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub target_y: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    /// Custom properties read by the `.particle` animation.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; --from-y: {:.2}vh; --to-y: {:.2}vh; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x, self.y, self.target_y, self.delay, self.duration
        )
    }
}

/// `rng` yields values in `[0, 1)`.
pub fn generate_particles(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            x: rng() * 100.0,
            y: rng() * 100.0,
            target_y: rng() * 100.0,
            delay: i as f64 * 0.3,
            duration: 6.0 + rng() * 4.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_radius_fits_smaller_stage() {
        assert_eq!(ORBIT_RADIUS_PX, 144.0);
    }

    #[test]
    fn nav_ring_covers_every_page() {
        let routes: Vec<Route> = NAV_ITEMS.iter().map(|item| item.route).collect();
        assert_eq!(routes, vec![Route::Projects, Route::About, Route::Contact, Route::Resume]);
    }

    #[test]
    fn orbit_transform_counter_rotates() {
        assert_eq!(
            orbit_transform(80.0),
            "translate(-50%, -50%) rotate(80deg) translateX(144px) rotate(-80deg)"
        );
    }

    #[test]
    fn pupils_point_toward_cursor_with_fixed_travel() {
        let (x, y) = pupil_offset((10.0, 10.0), (110.0, 10.0), PUPIL_TRAVEL_PX);
        assert!((x - 5.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        let (x, y) = pupil_offset((0.0, 0.0), (-3.0, -4.0), PUPIL_TRAVEL_PX);
        assert!((x + 3.0).abs() < 1e-9);
        assert!((y + 4.0).abs() < 1e-9);
        assert!(((x * x + y * y).sqrt() - PUPIL_TRAVEL_PX).abs() < 1e-9);
    }

    #[test]
    fn pupil_transform_offsets_from_center() {
        assert_eq!(
            pupil_transform((5.0, -2.5)),
            "translate(calc(-50% + 5.00px), calc(-50% + -2.50px))"
        );
    }

    #[test]
    fn particles_use_bounded_random_values() {
        let mut seed = 0.0;
        let particles = generate_particles(PARTICLE_COUNT, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for (i, particle) in particles.iter().enumerate() {
            assert!((0.0..100.0).contains(&particle.x));
            assert!((0.0..100.0).contains(&particle.y));
            assert!((0.0..100.0).contains(&particle.target_y));
            assert!((6.0..10.0).contains(&particle.duration));
            assert!((particle.delay - i as f64 * 0.3).abs() < 1e-9);
        }
    }
}
