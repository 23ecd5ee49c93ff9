use super::*;
use nalgebra::{Vector2, Vector3};
use rand::{rngs::StdRng, RngCore, SeedableRng};

const EPS: f32 = 1e-4;

/// Wraps `StdRng` and counts 32/64-bit draws.
struct CountingRng {
    inner: StdRng,
    calls: usize,
}

impl CountingRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            calls: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.calls += 1;
        self.inner.next_u32()
    }
    fn next_u64(&mut self) -> u64 {
        self.calls += 1;
        self.inner.next_u64()
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.calls += 1;
        self.inner.fill_bytes(dest)
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.calls += 1;
        self.inner.try_fill_bytes(dest)
    }
}

#[test]
fn annulus_bounds_hold() {
    let mut rng = StdRng::seed_from_u64(1);
    let o = Vector2::new(5.0, -3.0);
    for (r_min, r_max) in [(0.0, 1.0), (0.5, 0.6), (2.0, 10.0), (0.999, 1.0)] {
        for _ in 0..10_000 {
            let p = sample_annulus(o, r_min, r_max, &mut rng).unwrap();
            let d = (p - o).norm();
            assert!(d >= r_min - EPS && d <= r_max + EPS, "d={d} r=[{r_min},{r_max}]");
        }
    }
}

#[test]
fn annulus_is_uniform_by_area() {
    let (r_min, r_max) = (1.0f32, 3.0f32);
    let rings = 8;
    let n = 40_000;
    // Equal-area ring boundaries.
    let edges: Vec<f32> = (0..=rings)
        .map(|i| {
            let t = i as f32 / rings as f32;
            (r_min * r_min + t * (r_max * r_max - r_min * r_min)).sqrt()
        })
        .collect();
    let mut by_area = vec![0usize; rings];
    let mut by_width = vec![0usize; rings];
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..n {
        let d = sample_annulus(Vector2::zeros(), r_min, r_max, &mut rng)
            .unwrap()
            .norm();
        let k = edges[1..].iter().position(|&e| d <= e).unwrap_or(rings - 1);
        by_area[k] += 1;
        let w = (((d - r_min) / (r_max - r_min)) * rings as f32).floor() as usize;
        by_width[w.min(rings - 1)] += 1;
    }
    let expected = n as f64 / rings as f64;
    for &c in &by_area {
        assert!(((c as f64) - expected).abs() < 0.06 * expected, "rings={by_area:?}");
    }
    // Equal-width bins must not be flat: outermost is ~ (r_max/r_min) times denser in count.
    assert!(by_width[rings - 1] as f64 > 2.0 * by_width[0] as f64, "bins={by_width:?}");
}

#[test]
fn annulus_with_huge_radius_keeps_area_density() {
    // r_max² overflows f32; distances are measured in f64.
    let r_max = 2.0e19f32;
    let n = 1000;
    let mut rng = StdRng::seed_from_u64(21);
    let mut inner_half = 0usize;
    let mut on_rim = 0usize;
    for _ in 0..n {
        let p = sample_annulus(Vector2::zeros(), 0.0, r_max, &mut rng).unwrap();
        let d = (p.x as f64).hypot(p.y as f64) / r_max as f64;
        assert!(d <= 1.0 + 1e-6, "d={d}");
        if d < 0.5f64.sqrt() {
            inner_half += 1;
        }
        if d > 0.9999 {
            on_rim += 1;
        }
    }
    let share = inner_half as f64 / n as f64;
    assert!((share - 0.5).abs() < 0.07, "share={share}");
    assert!(on_rim < 10, "on_rim={on_rim}");
}

#[test]
fn disk_case_has_no_central_pileup() {
    let n = 20_000;
    let mut rng = StdRng::seed_from_u64(3);
    let near_center = (0..n)
        .filter(|_| {
            let p = sample_annulus(Vector2::zeros(), 0.0, 1.0, &mut rng).unwrap();
            p.norm() < 0.1
        })
        .count();
    // Expected share is 0.1² = 1%.
    let share = near_center as f64 / n as f64;
    assert!(share < 0.02, "share={share}");
}

#[test]
fn cylinder_bounds_hold() {
    let mut rng = StdRng::seed_from_u64(4);
    let o = Vector3::new(1.0, 2.0, 3.0);
    let (r_min, r_max, h) = (0.5f32, 1.5f32, 3.0f32);
    for _ in 0..10_000 {
        let p = sample_annular_cylinder(o, r_min, r_max, h, &mut rng).unwrap();
        let d = p - o;
        let planar = (d.x * d.x + d.z * d.z).sqrt();
        assert!(planar >= r_min - EPS && planar <= r_max + EPS);
        assert!(d.y.abs() <= 0.5 * h + EPS);
    }
}

#[test]
fn cylinder_is_uniform_by_area_in_cross_section() {
    let (r_min, r_max, h) = (0.5f32, 2.0f32, 4.0f32);
    let rings = 8;
    let n = 40_000;
    let mut counts = vec![0usize; rings];
    let mut rng = StdRng::seed_from_u64(22);
    let (lo2, hi2) = (r_min * r_min, r_max * r_max);
    for _ in 0..n {
        let p = sample_annular_cylinder(Vector3::zeros(), r_min, r_max, h, &mut rng).unwrap();
        let d2 = p.x * p.x + p.z * p.z;
        let t = (d2 - lo2) / (hi2 - lo2);
        let k = ((t * rings as f32).floor().max(0.0) as usize).min(rings - 1);
        counts[k] += 1;
    }
    let expected = n as f64 / rings as f64;
    for &c in &counts {
        assert!(((c as f64) - expected).abs() < 0.06 * expected, "rings={counts:?}");
    }
}

#[test]
fn torus_bounds_hold() {
    let mut rng = StdRng::seed_from_u64(5);
    let o = Vector3::new(-4.0, 0.5, 2.0);
    let (major, minor) = (2.0f32, 0.75f32);
    for _ in 0..10_000 {
        let p = sample_torus(o, major, minor, &mut rng).unwrap();
        let d = p - o;
        let planar = (d.x * d.x + d.z * d.z).sqrt();
        assert!(planar >= major - minor - EPS && planar <= major + minor + EPS);
        assert!(d.y.abs() <= minor + EPS);
    }
}

#[test]
fn draw_counts_are_fixed() {
    let mut rng = CountingRng::new(6);
    sample_annulus(Vector2::zeros(), 0.0, 1.0, &mut rng).unwrap();
    assert_eq!(rng.calls, 2);
    rng.calls = 0;
    sample_annular_cylinder(Vector3::zeros(), 0.0, 1.0, 1.0, &mut rng).unwrap();
    assert_eq!(rng.calls, 3);
    rng.calls = 0;
    sample_torus(Vector3::zeros(), 2.0, 1.0, &mut rng).unwrap();
    assert_eq!(rng.calls, 3);
}

#[test]
fn invalid_parameters_consume_no_draws() {
    let mut rng = CountingRng::new(7);
    let bad_annulus = [(1.0, 1.0), (2.0, 1.0), (-1.0, 1.0), (0.0, -1.0)];
    for (r_min, r_max) in bad_annulus {
        assert!(matches!(
            sample_annulus(Vector2::zeros(), r_min, r_max, &mut rng),
            Err(SampleError::InvalidParameter { .. })
        ));
        assert!(matches!(
            sample_annular_cylinder(Vector3::zeros(), r_min, r_max, 1.0, &mut rng),
            Err(SampleError::InvalidParameter { .. })
        ));
    }
    assert!(sample_annular_cylinder(Vector3::zeros(), 0.0, 1.0, 0.0, &mut rng).is_err());
    assert!(sample_torus(Vector3::zeros(), 1.0, 1.0, &mut rng).is_err());
    assert!(sample_torus(Vector3::zeros(), 1.0, -0.1, &mut rng).is_err());
    assert!(sample_annulus(Vector2::new(f32::NAN, 0.0), 0.0, 1.0, &mut rng).is_err());
    assert_eq!(rng.calls, 0);
}

#[test]
fn seeded_sources_reproduce() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        assert_eq!(
            sample_annulus(Vector2::new(1.0, 1.0), 0.2, 0.9, &mut a).unwrap(),
            sample_annulus(Vector2::new(1.0, 1.0), 0.2, 0.9, &mut b).unwrap()
        );
        assert_eq!(
            sample_annular_cylinder(Vector3::zeros(), 0.2, 0.9, 2.0, &mut a).unwrap(),
            sample_annular_cylinder(Vector3::zeros(), 0.2, 0.9, 2.0, &mut b).unwrap()
        );
        assert_eq!(
            sample_torus(Vector3::zeros(), 3.0, 1.0, &mut a).unwrap(),
            sample_torus(Vector3::zeros(), 3.0, 1.0, &mut b).unwrap()
        );
    }
}

#[test]
fn replay_token_regenerates_single_row() {
    let params = TorusParams::new(Vector3::zeros(), 3.0, 1.0).unwrap();
    let rows: Vec<Vector3<f32>> = (0..20)
        .map(|i| {
            let mut rng = ReplayToken::new(2024, i).rng();
            rand::distributions::Distribution::sample(&params, &mut rng)
        })
        .collect();
    let mut rng = ReplayToken::new(2024, 13).rng();
    let again = rand::distributions::Distribution::sample(&params, &mut rng);
    assert_eq!(rows[13], again);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn annulus_in_bounds(
            seed in any::<u64>(),
            r_min in 0.0f32..50.0,
            width in 0.01f32..50.0,
            ox in -100.0f32..100.0,
            oy in -100.0f32..100.0,
        ) {
            let r_max = r_min + width;
            let o = Vector2::new(ox, oy);
            let mut rng = StdRng::seed_from_u64(seed);
            let p = sample_annulus(o, r_min, r_max, &mut rng).unwrap();
            let d = (p - o).norm();
            let tol = 1e-4 * (1.0 + r_max + o.norm());
            prop_assert!(d >= r_min - tol && d <= r_max + tol);
        }

        #[test]
        fn cylinder_in_bounds(
            seed in any::<u64>(),
            r_min in 0.0f32..10.0,
            width in 0.01f32..10.0,
            height in 0.01f32..10.0,
        ) {
            let r_max = r_min + width;
            let mut rng = StdRng::seed_from_u64(seed);
            let p = sample_annular_cylinder(Vector3::zeros(), r_min, r_max, height, &mut rng)
                .unwrap();
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            let tol = 1e-4 * (1.0 + r_max);
            prop_assert!(planar >= r_min - tol && planar <= r_max + tol);
            prop_assert!(p.y.abs() <= 0.5 * height + 1e-5);
        }

        #[test]
        fn torus_in_bounds(
            seed in any::<u64>(),
            major in 0.1f32..20.0,
            frac in 0.0f32..0.99,
            exact in any::<bool>(),
        ) {
            let minor = major * frac;
            let mode = if exact { TorusMode::Exact } else { TorusMode::Approximate };
            let mut rng = StdRng::seed_from_u64(seed);
            let p = sample_torus_with_mode(Vector3::zeros(), major, minor, mode, &mut rng).unwrap();
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            let tol = 1e-4 * (1.0 + major);
            prop_assert!(planar >= major - minor - tol && planar <= major + minor + tol);
        }

        #[test]
        fn inverted_radii_always_rejected(r_max in 0.0f32..10.0, gap in 0.0f32..10.0) {
            let mut rng = CountingRng::new(0);
            let r = sample_annulus(Vector2::zeros(), r_max + gap, r_max, &mut rng);
            prop_assert!(matches!(r, Err(SampleError::InvalidParameter { .. })), "expected InvalidParameter, got {:?}", r);
            prop_assert_eq!(rng.calls, 0);
        }
    }
}
